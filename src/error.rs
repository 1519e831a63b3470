//! Error types shared across the client.
//!
//! ERROR HANDLING
//! ==============
//! Network, configuration, and workspace failures are typed so callers can
//! log and degrade instead of panicking during hydration. None of these are
//! surfaced to the user directly; the project browser treats them as
//! "no content".

/// Failure talking to the editor backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, aborted).
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-success status.
    #[error("request to {url} failed: {status}")]
    Status { status: u16, url: String },
    /// The response body did not match the expected schema.
    #[error("failed to decode response: {0}")]
    Decode(String),
    /// Browser-only call made from a native or server build.
    #[error("not available outside the browser")]
    Unavailable,
}

/// Invalid target configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid target config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid share domain pattern: {0}")]
    SharePattern(#[from] regex::Error),
}

/// Failure reading or mutating the local project workspace.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorkspaceError {
    #[error("project not found: {0}")]
    UnknownProject(String),
    #[error("script not found: {0}")]
    ScriptNotFound(String),
    #[error("failed to encode project files: {0}")]
    Encode(String),
    #[error(transparent)]
    Api(#[from] ApiError),
}
