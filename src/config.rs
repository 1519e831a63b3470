//! Target configuration: gallery ids, share domains, and capabilities.
//!
//! The default target ships embedded in the bundle (`target.json`). The
//! config is provided through context as an `RwSignal<TargetConfig>` and read
//! on every render, so swapping it at runtime reconfigures the tabs.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::util::script_id::ScriptIdParser;

const EMBEDDED_TARGET: &str = include_str!("../target.json");

/// Theme-level switches for the project browser.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppTheme {
    /// Gallery document listing "Make" templates.
    #[serde(default)]
    pub project_gallery: Option<String>,
    /// Gallery document listing "Code" examples.
    #[serde(default)]
    pub example_gallery: Option<String>,
    /// Domains whose links resolve to shared scripts.
    #[serde(default)]
    pub share_domains: Vec<String>,
}

impl AppTheme {
    /// Configured project gallery id; blank ids count as unset.
    pub fn project_gallery(&self) -> Option<&str> {
        non_blank(self.project_gallery.as_deref())
    }

    /// Configured example gallery id; blank ids count as unset.
    pub fn example_gallery(&self) -> Option<&str> {
        non_blank(self.example_gallery.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Editor target description.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetConfig {
    pub id: String,
    pub name: String,
    /// Whether the target compiles programs (enables file import).
    #[serde(default)]
    pub compile: bool,
    #[serde(default)]
    pub app_theme: AppTheme,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            id: "editor".to_owned(),
            name: "Editor".to_owned(),
            compile: false,
            app_theme: AppTheme::default(),
        }
    }
}

impl TargetConfig {
    /// Parse and validate a target description.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed JSON or share domains that do not form
    /// a valid pattern.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.script_id_parser()?;
        Ok(config)
    }

    /// The target bundled with the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded `target.json` is invalid.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_json(EMBEDDED_TARGET)
    }

    /// The bundled target, or a bare default when it fails to parse.
    pub fn load() -> Self {
        match Self::embedded() {
            Ok(config) => config,
            Err(e) => {
                leptos::logging::warn!("falling back to default target: {e}");
                Self::default()
            }
        }
    }

    /// Parser for script ids shared on this target's domains.
    ///
    /// # Errors
    ///
    /// Returns an error if the share domains produce an invalid pattern.
    pub fn script_id_parser(&self) -> Result<ScriptIdParser, ConfigError> {
        Ok(ScriptIdParser::new(&self.app_theme.share_domains)?)
    }
}
