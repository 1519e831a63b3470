//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the editor shell and the project browser while
//! reading/writing shared state from Leptos context providers.

pub mod code_card;
pub mod editor_shell;
pub mod loading_modal;
pub mod project_browser;
