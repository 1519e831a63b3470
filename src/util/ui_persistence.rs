//! Browser localStorage helpers for the project workspace.
//!
//! SYSTEM CONTEXT
//! ==============
//! The local workspace persists its header index and project files as JSON
//! under namespaced keys. Reads and writes are hydrate-only; native and SSR
//! builds see an empty store and discard writes.

/// Prefix applied to every key written by this crate.
#[cfg(feature = "hydrate")]
const KEY_PREFIX: &str = "projects_ui:";

#[cfg(feature = "hydrate")]
fn namespaced(key: &str) -> String {
    format!("{KEY_PREFIX}{key}")
}

/// Load a JSON value stored under `key`.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn load_json<T: serde::de::DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(&namespaced(key)).ok().flatten()?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                leptos::logging::warn!("discarding unreadable storage entry {key}: {e}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Save `value` as JSON under `key`.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn save_json<T: serde::Serialize>(key: &str, value: &T) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                leptos::logging::warn!("failed to serialize storage entry {key}: {e}");
                return;
            }
        };
        if let Err(e) = storage.set_item(&namespaced(key), &raw) {
            leptos::logging::warn!("failed to write storage entry {key}: {e:?}");
        }
    }
}
