//! Recognizes shared-project links and bare script ids typed into search.
//!
//! A script id is either ten letters with an optional leading underscore or
//! four dash-separated groups of five digits. Links may carry an optional
//! `http(s)://` scheme and one of the target's share domains.

#[cfg(test)]
#[path = "script_id_test.rs"]
mod script_id_test;

use regex::Regex;

/// Share domains recognized for every target.
const BUILTIN_SHARE_DOMAINS: &[&str] = &["pxt.io", "codethemicrobit.com"];

/// Parser for script ids, built from the target's share domains.
#[derive(Clone, Debug)]
pub struct ScriptIdParser {
    domains: Vec<String>,
    pattern: Option<Regex>,
}

impl ScriptIdParser {
    /// Build a parser accepting links on the built-in domains plus
    /// `share_domains`. With no configured share domains the target has no
    /// sharing, and the parser rejects everything.
    ///
    /// # Errors
    ///
    /// Returns an error if the assembled pattern fails to compile.
    pub fn new(share_domains: &[String]) -> Result<Self, regex::Error> {
        if share_domains.is_empty() {
            return Ok(Self::disabled());
        }

        let mut domains: Vec<String> = BUILTIN_SHARE_DOMAINS
            .iter()
            .map(|d| (*d).to_owned())
            .chain(share_domains.iter().map(|d| normalize_domain(d)))
            .filter(|d| !d.is_empty())
            .collect();
        domains.sort();
        domains.dedup();

        let alternatives = domains
            .iter()
            .map(|d| regex::escape(d))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&format!(
            r"(?i)^(?:(?:https?://)?(?:{alternatives})/)?(_?[a-z]{{10}}|[0-9]{{5}}-[0-9]{{5}}-[0-9]{{5}}-[0-9]{{5}})$"
        ))?;
        Ok(Self { domains, pattern: Some(pattern) })
    }

    /// Parser for targets without sharing.
    pub fn disabled() -> Self {
        Self { domains: Vec::new(), pattern: None }
    }

    /// Extract the lower-cased script id from `text`, if it is one.
    pub fn parse(&self, text: &str) -> Option<String> {
        let pattern = self.pattern.as_ref()?;
        let captures = pattern.captures(text.trim())?;
        captures.get(1).map(|m| m.as_str().to_ascii_lowercase())
    }
}

impl Default for ScriptIdParser {
    fn default() -> Self {
        Self::disabled()
    }
}

// Two parsers accept the same inputs iff they were built from the same
// domain list.
impl PartialEq for ScriptIdParser {
    fn eq(&self, other: &Self) -> bool {
        self.domains == other.domains && self.pattern.is_some() == other.pattern.is_some()
    }
}

fn normalize_domain(raw: &str) -> String {
    let trimmed = raw.trim();
    let without_scheme = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .unwrap_or(trimmed);
    without_scheme.trim_end_matches('/').to_ascii_lowercase()
}
