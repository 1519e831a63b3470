//! Data-binding facade: string keys mapped to possibly-stale cached values.
//!
//! SYSTEM CONTEXT
//! ==============
//! Views read through [`DataSource`] during render. The Leptos-bound
//! [`DataHandle`] returns whatever is cached and, when the entry is missing
//! or stale, starts a background fetch through a [`DataResolver`]. The fetch
//! writes into a signal, so every reader re-renders when data arrives.

pub mod cache;
pub mod keys;


use std::sync::Arc;

use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;
use cache::DataCache;
use keys::DataKey;

/// Read side of the facade.
pub trait DataSource {
    /// Cached JSON for `key`, if any.
    fn get_value(&self, key: &str) -> Option<Value>;

    /// Cached value for `key` decoded as `T`. Values of the wrong shape are
    /// logged and treated as absent.
    fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T>
    where
        Self: Sized,
    {
        let value = self.get_value(key)?;
        match serde_json::from_value(value) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                leptos::logging::warn!("cached value for {key} has unexpected shape: {e}");
                None
            }
        }
    }
}

/// Plain caches answer reads without scheduling anything.
impl DataSource for DataCache {
    fn get_value(&self, key: &str) -> Option<Value> {
        self.peek(key).cloned()
    }
}

/// Produces the value for a parsed key.
#[async_trait::async_trait(?Send)]
pub trait DataResolver: Send + Sync {
    async fn resolve(&self, key: &DataKey) -> Result<Value, ApiError>;
}

/// Reactive cache shared through context.
#[derive(Clone)]
pub struct DataHandle {
    cache: RwSignal<DataCache>,
    resolver: Arc<dyn DataResolver>,
}

impl DataHandle {
    pub fn new(resolver: Arc<dyn DataResolver>) -> Self {
        Self::with_cache(RwSignal::new(DataCache::default()), resolver)
    }

    /// Handle over an existing cache signal.
    pub fn with_cache(cache: RwSignal<DataCache>, resolver: Arc<dyn DataResolver>) -> Self {
        Self { cache, resolver }
    }

    /// Mark entries under `prefix` stale; readers refetch on next render.
    pub fn invalidate(&self, prefix: &str) {
        self.cache.update(|c| {
            c.invalidate(prefix);
        });
    }

    /// Fetch `key` now and store the outcome.
    pub async fn refresh(&self, key: &str) {
        let Some(parsed) = DataKey::parse(key) else {
            leptos::logging::warn!("no resolver for data key {key}");
            self.cache.update(|c| c.fail(key));
            return;
        };
        match self.resolver.resolve(&parsed).await {
            Ok(value) => self.cache.update(|c| c.put(key, value)),
            Err(e) => {
                leptos::logging::warn!("failed to load {key}: {e}");
                self.cache.update(|c| c.fail(key));
            }
        }
    }

    fn schedule(&self, key: &str) {
        let mut started = false;
        self.cache.update_untracked(|c| started = c.begin_refresh(key));
        if !started {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let handle = self.clone();
            let key = key.to_owned();
            leptos::task::spawn_local(async move { handle.refresh(&key).await });
        }
    }
}

impl DataSource for DataHandle {
    fn get_value(&self, key: &str) -> Option<Value> {
        let (value, stale) = self.cache.with(|c| (c.peek(key).cloned(), c.needs_refresh(key)));
        if stale {
            self.schedule(key);
        }
        value
    }
}
