//! Stale-while-revalidate store behind the data facade.
//!
//! DESIGN
//! ======
//! Entries keep their last value while a refresh is in flight, so readers
//! never flicker to empty. A failed refresh keeps the old value and is not
//! retried until the key is invalidated, which keeps a render loop from
//! hammering a broken endpoint.

#[cfg(test)]
#[path = "cache_test.rs"]
mod cache_test;

use std::collections::HashMap;

use serde_json::Value;

/// Refresh lifecycle of one entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryState {
    Fresh,
    Stale,
    Pending,
    Failed,
}

#[derive(Clone, Debug)]
struct CacheEntry {
    value: Option<Value>,
    state: EntryState,
}

/// Key -> JSON cache with per-entry refresh state.
#[derive(Clone, Debug, Default)]
pub struct DataCache {
    entries: HashMap<String, CacheEntry>,
}

impl DataCache {
    /// Last value stored for `key`, fresh or not.
    pub fn peek(&self, key: &str) -> Option<&Value> {
        self.entries.get(key).and_then(|e| e.value.as_ref())
    }

    pub fn state(&self, key: &str) -> Option<EntryState> {
        self.entries.get(key).map(|e| e.state)
    }

    /// Whether a read of `key` should trigger a background fetch.
    pub fn needs_refresh(&self, key: &str) -> bool {
        match self.state(key) {
            None | Some(EntryState::Stale) => true,
            Some(EntryState::Fresh | EntryState::Pending | EntryState::Failed) => false,
        }
    }

    /// Mark `key` as being fetched. Returns `false` when no fetch is needed,
    /// so concurrent readers start at most one request.
    pub fn begin_refresh(&mut self, key: &str) -> bool {
        if !self.needs_refresh(key) {
            return false;
        }
        self.entries
            .entry(key.to_owned())
            .and_modify(|e| e.state = EntryState::Pending)
            .or_insert(CacheEntry { value: None, state: EntryState::Pending });
        true
    }

    /// Store a fresh value.
    pub fn put(&mut self, key: &str, value: Value) {
        self.entries.insert(key.to_owned(), CacheEntry { value: Some(value), state: EntryState::Fresh });
    }

    /// Record a failed fetch, keeping any previous value.
    pub fn fail(&mut self, key: &str) {
        self.entries
            .entry(key.to_owned())
            .and_modify(|e| e.state = EntryState::Failed)
            .or_insert(CacheEntry { value: None, state: EntryState::Failed });
    }

    /// Mark every settled entry whose key starts with `prefix` as stale.
    /// In-flight entries are left alone; their result is still current.
    /// Returns how many entries were invalidated.
    pub fn invalidate(&mut self, prefix: &str) -> usize {
        let mut count = 0;
        for (key, entry) in &mut self.entries {
            if key.starts_with(prefix) && entry.state != EntryState::Pending {
                entry.state = EntryState::Stale;
                count += 1;
            }
        }
        count
    }
}
