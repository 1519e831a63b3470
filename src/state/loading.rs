//! Blocking "loading" overlay state.

#[cfg(test)]
#[path = "loading_test.rs"]
mod loading_test;

/// Message shown over the editor while a long operation runs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadingState {
    pub message: Option<String>,
}

impl LoadingState {
    /// Show the overlay with `message`, replacing any current message.
    pub fn show(&mut self, message: &str) {
        self.message = Some(message.to_owned());
    }

    pub fn hide(&mut self) {
        self.message = None;
    }

    pub fn is_visible(&self) -> bool {
        self.message.is_some()
    }
}
