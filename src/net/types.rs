//! Shared DTOs for workspace headers, cloud scripts, and gallery cards.
//!
//! DESIGN
//! ======
//! Cloud and gallery payloads use the backend's camelCase field names so the
//! data cache can hold raw JSON and decode it lazily. Workspace headers are
//! only persisted locally and keep Rust field names.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Project configuration file every project carries.
pub const CONFIG_NAME: &str = "pxt.json";
/// Main source file created for new projects.
pub const MAIN_FILE: &str = "main.ts";

/// Name used when a project is created without one.
const UNTITLED_NAME: &str = "Untitled";

/// Summary of a locally saved project.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectHeader {
    /// Workspace-local identifier (UUID string).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Last time the project was opened, in seconds since the Unix epoch.
    #[serde(default)]
    pub recent_use: i64,
    /// Last time the project files were written, in seconds since the Unix epoch.
    #[serde(default)]
    pub modification_time: i64,
    /// Thumbnail URL, if any.
    #[serde(default)]
    pub icon: Option<String>,
    /// Cloud id the project was published as or installed from.
    #[serde(default)]
    pub pub_id: Option<String>,
    /// Whether the local copy still matches `pub_id`.
    #[serde(default)]
    pub pub_current: bool,
    /// Gallery template the project was created from.
    #[serde(default)]
    pub template_url: Option<String>,
}

impl ProjectHeader {
    /// Link shown on the project card: the published path when the local copy
    /// is current, otherwise empty.
    pub fn card_url(&self) -> String {
        match (&self.pub_id, self.pub_current) {
            (Some(id), true) => format!("/{id}"),
            _ => String::new(),
        }
    }
}

/// Cloud script metadata returned by a `cloud-search:<id>` lookup.
///
/// A lookup that found nothing is stored in the same shape with
/// `statusCode = 404`, so every field except the status defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudScript {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Publication time in seconds since the Unix epoch.
    #[serde(default)]
    pub time: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

impl CloudScript {
    /// Placeholder stored when the backend has no script for `id`.
    pub fn not_found(id: &str) -> Self {
        Self { id: id.to_owned(), status_code: Some(404), ..Self::default() }
    }

    pub fn is_not_found(&self) -> bool {
        self.status_code == Some(404)
    }

    /// Short path the script is published under.
    pub fn share_path(&self) -> String {
        format!("/{}", self.id)
    }
}

/// One tile in a gallery.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeCard {
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Named group of cards parsed from a gallery document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Gallery {
    pub name: String,
    pub cards: Vec<CodeCard>,
}

/// Everything needed to create a project.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectOptions {
    pub name: String,
    #[serde(default)]
    pub template_url: Option<String>,
    /// File name -> content. `pxt.json` is generated when missing.
    #[serde(default)]
    pub files: BTreeMap<String, String>,
    /// Package name -> version spec.
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,
}

impl ProjectOptions {
    /// Options for a blank project.
    pub fn untitled() -> Self {
        Self::named(UNTITLED_NAME)
    }

    /// Options for a blank project called `name`.
    pub fn named(name: &str) -> Self {
        let name = name.trim();
        let name = if name.is_empty() { UNTITLED_NAME } else { name };
        Self { name: name.to_owned(), ..Self::default() }
    }

    /// Full file set for the project, with `main.ts` and a generated
    /// `pxt.json` added when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the project config cannot be serialized.
    pub fn into_files(self) -> Result<BTreeMap<String, String>, serde_json::Error> {
        let mut files = self.files;
        files.entry(MAIN_FILE.to_owned()).or_default();
        if !files.contains_key(CONFIG_NAME) {
            let mut names: Vec<String> = files.keys().cloned().collect();
            names.push(CONFIG_NAME.to_owned());
            names.sort();
            let config = ProjectConfig {
                name: self.name,
                files: names,
                dependencies: self.dependencies,
                template_url: self.template_url,
            };
            files.insert(CONFIG_NAME.to_owned(), serde_json::to_string_pretty(&config)?);
        }
        Ok(files)
    }
}

/// Contents of `pxt.json`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    pub name: String,
    #[serde(default)]
    pub files: Vec<String>,
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_url: Option<String>,
}
