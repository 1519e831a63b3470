//! Open-project state for the editor shell.
//!
//! DESIGN
//! ======
//! Opening the file picker needs a DOM element, so the controller records the
//! request in `import_requested_seq` and `EditorShell` clicks its hidden file
//! input once per increment.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use std::collections::BTreeMap;

use crate::net::types::{MAIN_FILE, ProjectHeader};

/// Project currently open in the editor.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EditorState {
    pub header: Option<ProjectHeader>,
    pub files: BTreeMap<String, String>,
    pub active_file: Option<String>,
    pub import_requested_seq: u64,
    /// One-line status shown in the shell footer.
    pub status: Option<String>,
}

impl EditorState {
    /// Replace the open project. `main.ts` becomes active when present,
    /// otherwise the first file by name.
    pub fn open(&mut self, header: ProjectHeader, files: BTreeMap<String, String>) {
        self.active_file = if files.contains_key(MAIN_FILE) {
            Some(MAIN_FILE.to_owned())
        } else {
            files.keys().next().cloned()
        };
        self.status = Some(format!("Opened {}", header.name));
        self.header = Some(header);
        self.files = files;
    }

    /// Switch the active file. Unknown names are ignored and return `false`.
    pub fn set_active_file(&mut self, name: &str) -> bool {
        if !self.files.contains_key(name) {
            return false;
        }
        self.active_file = Some(name.to_owned());
        true
    }

    pub fn request_import(&mut self) {
        self.import_requested_seq = self.import_requested_seq.wrapping_add(1);
    }

    pub fn record_save(&mut self) {
        self.status = Some("Saved".to_owned());
    }

    /// Display name of the open project.
    pub fn project_name(&self) -> &str {
        self.header.as_ref().map_or("No project", |h| h.name.as_str())
    }

    pub fn active_content(&self) -> Option<&str> {
        let name = self.active_file.as_deref()?;
        self.files.get(name).map(String::as_str)
    }
}
