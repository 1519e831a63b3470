//! Networking modules for the editor backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs HTTP calls for cloud scripts and markdown documents, and
//! `types` defines the shared payload schema.

pub mod api;
pub mod types;
