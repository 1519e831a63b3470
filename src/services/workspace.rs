//! Local project workspace backed by `localStorage`.
//!
//! DESIGN
//! ======
//! The header index and each project's files live in memory and are written
//! through to storage after every mutation. Storage is only read once, at
//! construction, so native builds and tests run against memory alone.

#[cfg(test)]
#[path = "workspace_test.rs"]
mod workspace_test;

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;

use super::{ScriptSource, WorkspaceInstaller};
use crate::error::{ApiError, WorkspaceError};
use crate::net::types::{ProjectHeader, ProjectOptions};
use crate::util::time_since::now_secs;
use crate::util::ui_persistence::{load_json, save_json};

const INDEX_KEY: &str = "workspace:headers";

fn files_key(id: &str) -> String {
    format!("workspace:files:{id}")
}

type Clock = Box<dyn Fn() -> i64 + Send + Sync>;

/// Projects saved in this browser.
pub struct LocalWorkspace {
    index: Mutex<Vec<ProjectHeader>>,
    files: Mutex<HashMap<String, BTreeMap<String, String>>>,
    scripts: Arc<dyn ScriptSource>,
    clock: Clock,
}

impl LocalWorkspace {
    /// Workspace restored from storage, timestamped with the wall clock.
    pub fn new(scripts: Arc<dyn ScriptSource>) -> Self {
        let workspace = Self::with_clock(scripts, Box::new(now_secs));
        let stored: Vec<ProjectHeader> = load_json(INDEX_KEY).unwrap_or_default();
        workspace.lock_index().extend(stored);
        workspace
    }

    /// Empty workspace using `clock` for timestamps.
    pub fn with_clock(scripts: Arc<dyn ScriptSource>, clock: Clock) -> Self {
        Self {
            index: Mutex::new(Vec::new()),
            files: Mutex::new(HashMap::new()),
            scripts,
            clock,
        }
    }

    fn lock_index(&self) -> std::sync::MutexGuard<'_, Vec<ProjectHeader>> {
        self.index.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_files(&self) -> std::sync::MutexGuard<'_, HashMap<String, BTreeMap<String, String>>> {
        self.files.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// All headers, most recently used first.
    pub fn headers(&self) -> Vec<ProjectHeader> {
        let mut headers = self.lock_index().clone();
        headers.sort_by(|a, b| b.recent_use.cmp(&a.recent_use));
        headers
    }

    /// # Errors
    ///
    /// Returns [`WorkspaceError::UnknownProject`] if `id` is not in the index.
    pub fn header(&self, id: &str) -> Result<ProjectHeader, WorkspaceError> {
        self.lock_index()
            .iter()
            .find(|h| h.id == id)
            .cloned()
            .ok_or_else(|| WorkspaceError::UnknownProject(id.to_owned()))
    }

    /// Files of project `id`.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceError::UnknownProject`] if `id` is not in the index.
    pub fn files(&self, id: &str) -> Result<BTreeMap<String, String>, WorkspaceError> {
        self.header(id)?;
        let mut files = self.lock_files();
        if let Some(cached) = files.get(id) {
            return Ok(cached.clone());
        }
        let stored: BTreeMap<String, String> = load_json(&files_key(id)).unwrap_or_default();
        files.insert(id.to_owned(), stored.clone());
        Ok(stored)
    }

    /// Create a project from `options` and return its header.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceError::Encode`] if the project config cannot be
    /// generated.
    pub fn create_project(&self, options: ProjectOptions) -> Result<ProjectHeader, WorkspaceError> {
        let now = (self.clock)();
        let header = ProjectHeader {
            id: uuid::Uuid::new_v4().to_string(),
            name: options.name.clone(),
            recent_use: now,
            modification_time: now,
            icon: None,
            pub_id: None,
            pub_current: false,
            template_url: options.template_url.clone(),
        };
        let files = options.into_files().map_err(|e| WorkspaceError::Encode(e.to_string()))?;
        self.store_files(&header.id, files);
        self.lock_index().push(header.clone());
        self.persist_index();
        Ok(header)
    }

    /// Mark project `id` as just opened.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceError::UnknownProject`] if `id` is not in the index.
    pub fn touch(&self, id: &str) -> Result<ProjectHeader, WorkspaceError> {
        let now = (self.clock)();
        self.update_header(id, |h| h.recent_use = now)
    }

    /// Replace the files of project `id`. The local copy no longer matches
    /// its published version afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceError::UnknownProject`] if `id` is not in the index.
    pub fn save_files(&self, id: &str, files: BTreeMap<String, String>) -> Result<ProjectHeader, WorkspaceError> {
        let now = (self.clock)();
        let header = self.update_header(id, |h| {
            h.modification_time = now;
            h.pub_current = false;
        })?;
        self.store_files(id, files);
        Ok(header)
    }

    fn update_header(&self, id: &str, apply: impl FnOnce(&mut ProjectHeader)) -> Result<ProjectHeader, WorkspaceError> {
        let updated = {
            let mut index = self.lock_index();
            let header = index
                .iter_mut()
                .find(|h| h.id == id)
                .ok_or_else(|| WorkspaceError::UnknownProject(id.to_owned()))?;
            apply(header);
            header.clone()
        };
        self.persist_index();
        Ok(updated)
    }

    fn store_files(&self, id: &str, files: BTreeMap<String, String>) {
        save_json(&files_key(id), &files);
        self.lock_files().insert(id.to_owned(), files);
    }

    fn persist_index(&self) {
        let index = self.lock_index().clone();
        save_json(INDEX_KEY, &index);
    }
}

#[async_trait(?Send)]
impl WorkspaceInstaller for LocalWorkspace {
    /// Copy cloud script `script_id` into a new local project.
    async fn install_by_id(&self, script_id: &str) -> Result<ProjectHeader, WorkspaceError> {
        let script = self.scripts.script(script_id).await.map_err(|e| not_found(script_id, e))?;
        if script.is_not_found() {
            return Err(WorkspaceError::ScriptNotFound(script_id.to_owned()));
        }
        let files = self.scripts.script_files(script_id).await.map_err(|e| not_found(script_id, e))?;
        let options = ProjectOptions { files, ..ProjectOptions::named(&script.name) };
        let header = self.create_project(options)?;
        self.update_header(&header.id, |h| {
            h.pub_id = Some(script_id.to_owned());
            h.pub_current = true;
        })
    }
}

fn not_found(script_id: &str, err: ApiError) -> WorkspaceError {
    match err {
        ApiError::Status { status: 404, .. } => WorkspaceError::ScriptNotFound(script_id.to_owned()),
        other => WorkspaceError::Api(other),
    }
}
