//! Signal-backed implementations of the overlay and modal controls.

use leptos::prelude::*;

use super::LoadingOverlay;
use super::actions::BrowserModal;
use crate::state::loading::LoadingState;
use crate::state::projects::ProjectsState;

/// Drives the `LoadingOverlay` component through its context signal.
#[derive(Clone, Copy)]
pub struct SignalOverlay(pub RwSignal<LoadingState>);

impl LoadingOverlay for SignalOverlay {
    fn show(&self, message: &str) {
        self.0.update(|s| s.show(message));
    }

    fn hide(&self) {
        self.0.update(LoadingState::hide);
    }
}

/// Hides the project browser through its context signal.
#[derive(Clone, Copy)]
pub struct SignalBrowser(pub RwSignal<ProjectsState>);

impl BrowserModal for SignalBrowser {
    fn hide(&self) {
        self.0.update(ProjectsState::hide);
    }
}
