//! Project browser state and list derivation.
//!
//! DESIGN
//! ======
//! `ProjectsState` holds only what the user controls (visibility, tab,
//! committed search). Lists are recomputed from the data facade on every
//! render by [`ListCaches::derive`]; the caches keep the last good gallery
//! and script results so an in-flight refresh never blanks the grid.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use crate::config::AppTheme;
use crate::data::DataSource;
use crate::data::keys::{HEADERS_KEY, cloud_search_key, gallery_key};
use crate::net::types::{CloudScript, CodeCard, Gallery, ProjectHeader};
use crate::util::script_id::ScriptIdParser;

/// Tabs of the project browser.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ProjectsTab {
    /// Local projects plus cloud scripts found by search.
    #[default]
    MyStuff,
    /// Templates from the project gallery.
    Make,
    /// Examples from the example gallery.
    Code,
}

impl ProjectsTab {
    pub fn label(self) -> &'static str {
        match self {
            Self::MyStuff => "My Stuff",
            Self::Make => "Make",
            Self::Code => "Code",
        }
    }

    /// Tabs offered for `theme`: My Stuff always, the galleries only when
    /// configured.
    pub fn available(theme: &AppTheme) -> Vec<Self> {
        let mut tabs = vec![Self::MyStuff];
        if theme.project_gallery().is_some() {
            tabs.push(Self::Make);
        }
        if theme.example_gallery().is_some() {
            tabs.push(Self::Code);
        }
        tabs
    }
}

/// User-controlled browser state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectsState {
    /// Committed search text; `None` when no search is active.
    pub search_for: Option<String>,
    pub visible: bool,
    pub tab: ProjectsTab,
}

impl ProjectsState {
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Open the browser on My Stuff, keeping the current search.
    pub fn show_open_project(&mut self) {
        self.visible = true;
        self.tab = ProjectsTab::MyStuff;
    }

    pub fn select_tab(&mut self, tab: ProjectsTab) {
        self.tab = tab;
    }

    /// Commit `text` as the search; blank text clears it.
    pub fn set_search(&mut self, text: &str) {
        self.search_for = if text.is_empty() { None } else { Some(text.to_owned()) };
    }

    /// Active search term, if any.
    pub fn search_term(&self) -> Option<&str> {
        self.search_for.as_deref().filter(|s| !s.is_empty())
    }

    /// Whether moving to `next` changes anything the modal renders.
    pub fn should_update(&self, next: &Self) -> bool {
        self.visible != next.visible || self.tab != next.tab || self.search_for != next.search_for
    }

    /// Local headers for My Stuff, filtered by the search term.
    pub fn fetch_local_data(&self, data: &impl DataSource) -> Vec<ProjectHeader> {
        if self.tab != ProjectsTab::MyStuff {
            return Vec::new();
        }
        let headers: Vec<ProjectHeader> = data.get(HEADERS_KEY).unwrap_or_default();
        match self.search_term() {
            Some(term) => {
                let needle = term.to_lowercase();
                headers
                    .into_iter()
                    .filter(|h| h.name.to_lowercase().contains(&needle))
                    .collect()
            }
            None => headers,
        }
    }
}

/// Lists rendered by one pass of the browser.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BrowserLists {
    pub headers: Vec<ProjectHeader>,
    pub scripts: Vec<CloudScript>,
    pub makes: Vec<CodeCard>,
    pub codes: Vec<CodeCard>,
}

impl BrowserLists {
    /// Whether a My Stuff search found nothing, locally or in the cloud.
    pub fn is_empty(&self, state: &ProjectsState) -> bool {
        state.tab == ProjectsTab::MyStuff
            && state.search_term().is_some()
            && self.headers.is_empty()
            && self.scripts.is_empty()
    }
}

/// Last-known-good results owned by one browser instance.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListCaches {
    /// Every cloud script resolved so far. Appended to on each pass that
    /// sees a found script, duplicates included.
    pub prev_url_data: Vec<CloudScript>,
    pub prev_makes: Vec<CodeCard>,
    pub prev_codes: Vec<CodeCard>,
}

impl ListCaches {
    /// Cloud scripts matching the search, accumulated across passes.
    pub fn fetch_url_data(
        &mut self,
        state: &ProjectsState,
        parser: &ScriptIdParser,
        data: &impl DataSource,
    ) -> Vec<CloudScript> {
        let script_id = state.search_term().and_then(|term| parser.parse(term));
        if let Some(script_id) = script_id {
            if let Some(script) = data.get::<CloudScript>(&cloud_search_key(&script_id)) {
                if !script.is_not_found() {
                    self.prev_url_data.push(script);
                }
            }
        }
        self.prev_url_data.clone()
    }

    /// Template cards, only while the Make tab is active.
    pub fn fetch_makes(&mut self, state: &ProjectsState, theme: &AppTheme, data: &impl DataSource) -> Vec<CodeCard> {
        if state.tab != ProjectsTab::Make {
            return Vec::new();
        }
        if let Some(cards) = theme.project_gallery().and_then(|id| gallery_cards(id, data)) {
            self.prev_makes = cards;
        }
        self.prev_makes.clone()
    }

    /// Example cards, only while the Code tab is active.
    pub fn fetch_codes(&mut self, state: &ProjectsState, theme: &AppTheme, data: &impl DataSource) -> Vec<CodeCard> {
        if state.tab != ProjectsTab::Code {
            return Vec::new();
        }
        if let Some(cards) = theme.example_gallery().and_then(|id| gallery_cards(id, data)) {
            self.prev_codes = cards;
        }
        self.prev_codes.clone()
    }

    /// Compute everything one render needs.
    pub fn derive(
        &mut self,
        state: &ProjectsState,
        theme: &AppTheme,
        parser: &ScriptIdParser,
        data: &impl DataSource,
    ) -> BrowserLists {
        BrowserLists {
            headers: state.fetch_local_data(data),
            scripts: self.fetch_url_data(state, parser, data),
            makes: self.fetch_makes(state, theme, data),
            codes: self.fetch_codes(state, theme, data),
        }
    }
}

fn gallery_cards(gallery_id: &str, data: &impl DataSource) -> Option<Vec<CodeCard>> {
    let galleries: Vec<Gallery> = data.get(&gallery_key(gallery_id))?;
    Some(galleries.into_iter().flat_map(|g| g.cards).collect())
}
