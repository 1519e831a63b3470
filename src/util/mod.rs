//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate parsing and browser/environment concerns from
//! component logic so they can be tested natively.

pub mod markdown;
pub mod script_id;
pub mod time_since;
pub mod ui_persistence;
