//! User actions of the project browser.
//!
//! DESIGN
//! ======
//! Each action is a fixed sequence: tick telemetry, hide the browser, then
//! delegate. The two long-running sequences (example load, script install)
//! are split into a synchronous `choose_*` step the click handler runs
//! immediately and an async step it spawns. The async steps hold a
//! [`LoadingGuard`] so the overlay is hidden on every exit path.

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

use std::sync::Arc;

use super::{EditorController, ExampleLoader, LoadingOverlay, Telemetry, WorkspaceInstaller};
use crate::net::types::{CONFIG_NAME, CloudScript, CodeCard, ProjectHeader};

pub const EVENT_HEADER: &str = "projects.header";
pub const EVENT_GALLERY: &str = "projects.gallery";
pub const EVENT_EXAMPLE: &str = "projects.example";
pub const EVENT_IMPORT: &str = "projects.import";
pub const EVENT_NEW: &str = "projects.new";
pub const EVENT_SAVE: &str = "projects.save";
pub const EVENT_RENAME: &str = "projects.rename";

const EXAMPLE_LOADING: &str = "Loading...";
const INSTALL_LOADING: &str = "loading project...";

/// Hides the project browser modal.
pub trait BrowserModal: Send + Sync {
    fn hide(&self);
}

/// Shows the loading overlay for as long as the guard lives.
#[must_use = "the overlay hides as soon as the guard is dropped"]
pub struct LoadingGuard {
    overlay: Arc<dyn LoadingOverlay>,
}

impl LoadingGuard {
    pub fn show(overlay: Arc<dyn LoadingOverlay>, message: &str) -> Self {
        overlay.show(message);
        Self { overlay }
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.overlay.hide();
    }
}

/// Collaborators the browser's actions delegate to.
#[derive(Clone)]
pub struct ProjectActions {
    pub editor: Arc<dyn EditorController>,
    pub telemetry: Arc<dyn Telemetry>,
    pub installer: Arc<dyn WorkspaceInstaller>,
    pub examples: Arc<dyn ExampleLoader>,
    pub overlay: Arc<dyn LoadingOverlay>,
    pub browser: Arc<dyn BrowserModal>,
}

impl ProjectActions {
    /// Open a local project card.
    pub fn open_header(&self, header: &ProjectHeader) {
        self.telemetry.tick_event(EVENT_HEADER, &[]);
        self.browser.hide();
        self.editor.load_project(header);
    }

    /// Start a new project from a Make template card.
    pub fn choose_make(&self, card: &CodeCard) {
        self.telemetry.tick_event(EVENT_GALLERY, &[("name", card.name.as_str())]);
        self.browser.hide();
        self.editor.new_empty_project(&card.name.to_lowercase(), &card.url);
    }

    /// First step of opening a Code example card; follow with
    /// [`Self::open_example`].
    pub fn choose_code(&self, card: &CodeCard) {
        self.telemetry.tick_event(EVENT_EXAMPLE, &[("name", card.name.as_str())]);
        self.browser.hide();
    }

    /// Load the example behind `card` and open it as a new project. An
    /// example without code opens nothing.
    pub async fn open_example(&self, card: &CodeCard) {
        let loaded = {
            let _loading = LoadingGuard::show(Arc::clone(&self.overlay), EXAMPLE_LOADING);
            self.examples.load_example(&card.name.to_lowercase(), &card.url).await
        };
        match loaded {
            Ok(Some(options)) => self.editor.new_project(Some(options)),
            Ok(None) => leptos::logging::warn!("example {} has no code", card.name),
            Err(e) => leptos::logging::warn!("failed to load example {}: {e}", card.name),
        }
    }

    /// First step of opening a cloud script card; follow with
    /// [`Self::install_script`].
    pub fn choose_script(&self) {
        self.browser.hide();
    }

    /// Install `script` into the workspace and open it.
    pub async fn install_script(&self, script: &CloudScript) {
        let _loading = LoadingGuard::show(Arc::clone(&self.overlay), INSTALL_LOADING);
        match self.installer.install_by_id(&script.id).await {
            Ok(header) => self.editor.load_project(&header),
            Err(e) => leptos::logging::warn!("failed to install script {}: {e}", script.id),
        }
    }

    pub fn import_file(&self) {
        self.telemetry.tick_event(EVENT_IMPORT, &[]);
        self.browser.hide();
        self.editor.import_file_dialog();
    }

    pub fn new_project(&self) {
        self.telemetry.tick_event(EVENT_NEW, &[]);
        self.browser.hide();
        self.editor.new_project(None);
    }

    pub fn save_project(&self) {
        self.telemetry.tick_event(EVENT_SAVE, &[]);
        self.browser.hide();
        self.editor.save_and_compile();
    }

    /// Renaming edits the project config file.
    pub fn rename_project(&self) {
        self.telemetry.tick_event(EVENT_RENAME, &[]);
        self.browser.hide();
        self.editor.set_active_file(CONFIG_NAME);
    }
}
