//! Cache key construction and parsing.
//!
//! Keys are `<namespace>:<argument>` strings. Gallery ids are percent-encoded
//! so ids containing `:` or `/` stay a single argument.

#[cfg(test)]
#[path = "keys_test.rs"]
mod keys_test;

/// Key for the full list of local project headers.
pub const HEADERS_KEY: &str = "header:*";
/// Prefix shared by every header key, used for invalidation.
pub const HEADERS_PREFIX: &str = "header:";

const CLOUD_SEARCH_PREFIX: &str = "cloud-search:";
const GALLERY_PREFIX: &str = "gallery:";

/// Key for a single cloud script lookup.
pub fn cloud_search_key(script_id: &str) -> String {
    format!("{CLOUD_SEARCH_PREFIX}{script_id}")
}

/// Key for the galleries parsed from gallery document `gallery_id`.
pub fn gallery_key(gallery_id: &str) -> String {
    format!("{GALLERY_PREFIX}{}", urlencoding::encode(gallery_id))
}

/// A parsed cache key, naming what must be fetched to fill it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataKey {
    Headers,
    CloudSearch(String),
    Gallery(String),
}

impl DataKey {
    /// Parse a key built by the functions above. Unknown namespaces and
    /// undecodable gallery ids yield `None`.
    pub fn parse(key: &str) -> Option<Self> {
        if key == HEADERS_KEY {
            return Some(Self::Headers);
        }
        if let Some(id) = key.strip_prefix(CLOUD_SEARCH_PREFIX) {
            return (!id.is_empty()).then(|| Self::CloudSearch(id.to_owned()));
        }
        if let Some(encoded) = key.strip_prefix(GALLERY_PREFIX) {
            let decoded = urlencoding::decode(encoded).map_err(|e| {
                leptos::logging::warn!("undecodable gallery key {key}: {e}");
            });
            return match decoded {
                Ok(id) if !id.is_empty() => Some(Self::Gallery(id.into_owned())),
                _ => None,
            };
        }
        None
    }
}
