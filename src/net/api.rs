//! REST API client for cloud scripts and markdown documents.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Native and SSR builds: every call returns [`ApiError::Unavailable`], since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-success statuses, and schema mismatches map to
//! distinct [`ApiError`] variants so callers can treat a 404 as "not found"
//! and anything else as a logged failure.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::collections::BTreeMap;

use async_trait::async_trait;

use super::types::CloudScript;
use crate::error::ApiError;
use crate::services::{MarkdownSource, ScriptSource};

#[cfg(any(test, feature = "hydrate"))]
fn script_endpoint(script_id: &str) -> String {
    format!("/api/scripts/{}", urlencoding::encode(script_id))
}

#[cfg(any(test, feature = "hydrate"))]
fn script_text_endpoint(script_id: &str) -> String {
    format!("{}/text", script_endpoint(script_id))
}

#[cfg(any(test, feature = "hydrate"))]
fn markdown_endpoint(path: &str) -> String {
    format!("/api/md/{}", path.trim_start_matches('/'))
}

/// HTTP client for the editor backend, same origin as the page.
#[derive(Clone, Copy, Debug, Default)]
pub struct CloudApi;

#[cfg(feature = "hydrate")]
async fn get(url: &str) -> Result<gloo_net::http::Response, ApiError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status { status: resp.status(), url: url.to_owned() });
    }
    Ok(resp)
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    get(url).await?.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl ScriptSource for CloudApi {
    /// Fetch script metadata from `/api/scripts/{id}`.
    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    async fn script(&self, script_id: &str) -> Result<CloudScript, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            get_json(&script_endpoint(script_id)).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    /// Fetch the script's files (name -> content) from `/api/scripts/{id}/text`.
    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    async fn script_files(&self, script_id: &str) -> Result<BTreeMap<String, String>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            get_json(&script_text_endpoint(script_id)).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }
}

#[async_trait(?Send)]
impl MarkdownSource for CloudApi {
    /// Fetch a markdown document from `/api/md/{path}`.
    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    async fn markdown(&self, path: &str) -> Result<String, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = markdown_endpoint(path);
            get(&url).await?.text().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }
}
