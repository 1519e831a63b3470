//! Relative time labels for project cards.

#[cfg(test)]
#[path = "time_since_test.rs"]
mod time_since_test;

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// Current time in seconds since the Unix epoch.
pub fn now_secs() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let secs = (js_sys::Date::now() / 1000.0) as i64;
        secs
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
    }
}

/// Describe `then` relative to `now` (both in epoch seconds).
///
/// Anything older than a month falls back to a calendar date.
pub fn time_since(then: i64, now: i64) -> String {
    let diff = now.saturating_sub(then);
    if diff < MINUTE {
        return "now".to_owned();
    }
    if diff < 2 * MINUTE {
        return "1 minute ago".to_owned();
    }
    if diff < HOUR {
        return format!("{} minutes ago", diff / MINUTE);
    }
    if diff < 2 * HOUR {
        return "1 hour ago".to_owned();
    }
    if diff < DAY {
        return format!("{} hours ago", diff / HOUR);
    }
    if diff < 2 * DAY {
        return "1 day ago".to_owned();
    }
    if diff < 30 * DAY {
        return format!("{} days ago", diff / DAY);
    }
    chrono::DateTime::from_timestamp(then, 0)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}
