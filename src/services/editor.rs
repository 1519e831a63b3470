//! Editor controller backed by the local workspace.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every operation that changes the workspace index invalidates the
//! `header:*` cache entry so the project browser picks up the change on its
//! next render. File import is two-step: `import_file_dialog` asks the shell
//! for a file picker, and the shell hands the chosen file back through
//! [`SignalEditor::import_source`].

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use std::sync::Arc;

use leptos::prelude::*;

use super::EditorController;
use super::workspace::LocalWorkspace;
use crate::data::DataHandle;
use crate::data::keys::HEADERS_PREFIX;
use crate::error::WorkspaceError;
use crate::net::types::{MAIN_FILE, ProjectHeader, ProjectOptions};
use crate::state::editor::EditorState;

/// Project options for a single imported source file: the file becomes
/// `main.ts` and its stem names the project.
pub fn import_options(file_name: &str, content: String) -> ProjectOptions {
    let stem = match file_name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => file_name,
    };
    let mut options = ProjectOptions::named(stem);
    options.files.insert(MAIN_FILE.to_owned(), content);
    options
}

/// Editor controller writing into the `EditorState` context signal.
#[derive(Clone)]
pub struct SignalEditor {
    pub state: RwSignal<EditorState>,
    pub workspace: Arc<LocalWorkspace>,
    pub data: DataHandle,
}

impl SignalEditor {
    fn open(&self, id: &str) -> Result<(), WorkspaceError> {
        let header = self.workspace.touch(id)?;
        let files = self.workspace.files(id)?;
        self.state.update(|s| s.open(header, files));
        self.data.invalidate(HEADERS_PREFIX);
        Ok(())
    }

    /// Create and open a project from a file the user picked.
    pub fn import_source(&self, file_name: &str, content: String) {
        self.create_and_open(import_options(file_name, content));
    }

    fn create_and_open(&self, options: ProjectOptions) {
        let created = self.workspace.create_project(options).and_then(|h| self.open(&h.id));
        if let Err(e) = created {
            leptos::logging::warn!("failed to create project: {e}");
        }
    }
}

impl EditorController for SignalEditor {
    fn load_project(&self, header: &ProjectHeader) {
        if let Err(e) = self.open(&header.id) {
            leptos::logging::warn!("failed to open project {}: {e}", header.name);
        }
    }

    fn new_empty_project(&self, name: &str, template_url: &str) {
        let template_url = (!template_url.is_empty()).then(|| template_url.to_owned());
        self.create_and_open(ProjectOptions { template_url, ..ProjectOptions::named(name) });
    }

    fn new_project(&self, options: Option<ProjectOptions>) {
        self.create_and_open(options.unwrap_or_else(ProjectOptions::untitled));
    }

    fn import_file_dialog(&self) {
        self.state.update(|s| {
            s.request_import();
            s.status = Some("Choose a file to import".to_owned());
        });
    }

    fn save_and_compile(&self) {
        let Some((id, files)) = self.state.with_untracked(|s| s.header.as_ref().map(|h| (h.id.clone(), s.files.clone())))
        else {
            leptos::logging::warn!("save requested with no open project");
            return;
        };
        match self.workspace.save_files(&id, files) {
            Ok(header) => {
                self.state.update(|s| {
                    s.header = Some(header);
                    s.record_save();
                });
                self.data.invalidate(HEADERS_PREFIX);
            }
            Err(e) => leptos::logging::warn!("failed to save project: {e}"),
        }
    }

    fn set_active_file(&self, name: &str) {
        let mut switched = false;
        self.state.update(|s| switched = s.set_active_file(name));
        if !switched {
            leptos::logging::warn!("no file named {name} in the open project");
        }
    }
}
