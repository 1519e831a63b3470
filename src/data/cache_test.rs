use super::*;

use serde_json::json;

// =============================================================
// Lookup and refresh scheduling
// =============================================================

#[test]
fn missing_key_needs_refresh() {
    let cache = DataCache::default();
    assert!(cache.peek("header:*").is_none());
    assert!(cache.needs_refresh("header:*"));
}

#[test]
fn begin_refresh_starts_one_fetch() {
    let mut cache = DataCache::default();
    assert!(cache.begin_refresh("header:*"));
    assert!(!cache.begin_refresh("header:*"));
    assert_eq!(cache.state("header:*"), Some(EntryState::Pending));
}

#[test]
fn put_stores_fresh_value() {
    let mut cache = DataCache::default();
    cache.begin_refresh("header:*");
    cache.put("header:*", json!([1, 2]));
    assert_eq!(cache.peek("header:*"), Some(&json!([1, 2])));
    assert_eq!(cache.state("header:*"), Some(EntryState::Fresh));
    assert!(!cache.needs_refresh("header:*"));
}

// =============================================================
// Stale-while-revalidate
// =============================================================

#[test]
fn invalidated_entry_keeps_value_while_refreshing() {
    let mut cache = DataCache::default();
    cache.put("header:*", json!(["old"]));
    assert_eq!(cache.invalidate("header:"), 1);
    assert!(cache.needs_refresh("header:*"));
    assert!(cache.begin_refresh("header:*"));
    assert_eq!(cache.peek("header:*"), Some(&json!(["old"])));
}

#[test]
fn invalidate_matches_prefix_only() {
    let mut cache = DataCache::default();
    cache.put("header:*", json!([]));
    cache.put("gallery:projects", json!([]));
    assert_eq!(cache.invalidate("header:"), 1);
    assert_eq!(cache.state("gallery:projects"), Some(EntryState::Fresh));
}

#[test]
fn invalidate_skips_pending_entries() {
    let mut cache = DataCache::default();
    cache.begin_refresh("header:*");
    assert_eq!(cache.invalidate("header:"), 0);
    assert_eq!(cache.state("header:*"), Some(EntryState::Pending));
}

// =============================================================
// Failures
// =============================================================

#[test]
fn failed_fetch_keeps_value_and_stops_retrying() {
    let mut cache = DataCache::default();
    cache.put("gallery:projects", json!(["cards"]));
    cache.invalidate("gallery:");
    cache.begin_refresh("gallery:projects");
    cache.fail("gallery:projects");
    assert_eq!(cache.peek("gallery:projects"), Some(&json!(["cards"])));
    assert!(!cache.needs_refresh("gallery:projects"));
}

#[test]
fn invalidate_retries_failed_entries() {
    let mut cache = DataCache::default();
    cache.fail("cloud-search:abcdefghij");
    assert!(cache.peek("cloud-search:abcdefghij").is_none());
    assert_eq!(cache.invalidate("cloud-search:"), 1);
    assert!(cache.needs_refresh("cloud-search:abcdefghij"));
}
