//! Client state containers provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each container is wrapped in an `RwSignal` by `App`. Methods here are plain
//! mutations so they can be unit tested without a reactive runtime.

pub mod editor;
pub mod loading;
pub mod projects;
