//! Collaborators the project browser delegates to.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser never talks to the network or the workspace directly. It
//! sequences calls on these traits through [`actions::ProjectActions`].
//! `App` wires the concrete implementations below; tests substitute
//! recording fakes.
//!
//! Async methods run on the single browser thread, so futures are `?Send`.
//! Implementations are still `Send + Sync` so they can live in context.

pub mod actions;
pub mod editor;
pub mod gallery;
pub mod overlay;
pub mod resolver;
pub mod telemetry;
pub mod workspace;

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::error::{ApiError, WorkspaceError};
use crate::net::types::{CloudScript, ProjectHeader, ProjectOptions};

/// Editor operations owned by the surrounding application.
pub trait EditorController: Send + Sync {
    /// Open a saved project.
    fn load_project(&self, header: &ProjectHeader);
    /// Create and open a blank project, optionally from a gallery template.
    fn new_empty_project(&self, name: &str, template_url: &str);
    /// Create and open a project; `None` means a blank untitled project.
    fn new_project(&self, options: Option<ProjectOptions>);
    /// Ask the user for a file to import.
    fn import_file_dialog(&self);
    fn save_and_compile(&self);
    fn set_active_file(&self, name: &str);
}

/// Fire-and-forget usage events.
pub trait Telemetry: Send + Sync {
    fn tick_event(&self, name: &str, props: &[(&str, &str)]);
}

/// Blocking overlay shown during long operations.
pub trait LoadingOverlay: Send + Sync {
    fn show(&self, message: &str);
    fn hide(&self);
}

/// Installs cloud scripts into the local workspace.
#[async_trait(?Send)]
pub trait WorkspaceInstaller: Send + Sync {
    async fn install_by_id(&self, script_id: &str) -> Result<ProjectHeader, WorkspaceError>;
}

/// Loads gallery examples as project contents.
#[async_trait(?Send)]
pub trait ExampleLoader: Send + Sync {
    /// `Ok(None)` when the example document has no code.
    async fn load_example(&self, name: &str, url: &str) -> Result<Option<ProjectOptions>, ApiError>;
}

/// Read access to published cloud scripts.
#[async_trait(?Send)]
pub trait ScriptSource: Send + Sync {
    async fn script(&self, script_id: &str) -> Result<CloudScript, ApiError>;
    async fn script_files(&self, script_id: &str) -> Result<BTreeMap<String, String>, ApiError>;
}

/// Read access to markdown documents (galleries and examples).
#[async_trait(?Send)]
pub trait MarkdownSource: Send + Sync {
    async fn markdown(&self, path: &str) -> Result<String, ApiError>;
}
