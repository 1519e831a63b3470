//! Fills data cache keys from the workspace, the cloud, and galleries.

#[cfg(test)]
#[path = "resolver_test.rs"]
mod resolver_test;

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use super::ScriptSource;
use super::gallery::GalleryService;
use super::workspace::LocalWorkspace;
use crate::data::DataResolver;
use crate::data::keys::DataKey;
use crate::error::ApiError;
use crate::net::types::CloudScript;

/// Resolver wired into the app's [`crate::data::DataHandle`].
pub struct AppResolver {
    pub workspace: Arc<LocalWorkspace>,
    pub scripts: Arc<dyn ScriptSource>,
    pub galleries: GalleryService,
}

fn to_value<T: serde::Serialize>(value: &T) -> Result<Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl DataResolver for AppResolver {
    async fn resolve(&self, key: &DataKey) -> Result<Value, ApiError> {
        match key {
            DataKey::Headers => to_value(&self.workspace.headers()),
            DataKey::CloudSearch(id) => match self.scripts.script(id).await {
                Ok(script) => to_value(&script),
                // Cached so the lookup is not repeated every render.
                Err(ApiError::Status { status: 404, .. }) => to_value(&CloudScript::not_found(id)),
                Err(e) => Err(e),
            },
            DataKey::Gallery(id) => to_value(&self.galleries.galleries(id).await?),
        }
    }
}
