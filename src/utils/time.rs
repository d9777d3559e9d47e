// src/utils/time.rs

//! Clock helpers for cache-buster timestamps and record metadata.

use chrono::Utc;

/// Current time as milliseconds since the Unix epoch.
pub fn epoch_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Capture the current instant once, as (ISO-8601 UTC string, epoch millis).
///
/// Both values come from the same clock read so a record's `time` and
/// `timestamp` fields cannot skew.
pub fn capture_now() -> (String, i64) {
    let now = Utc::now();
    (
        now.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        now.timestamp_millis(),
    )
}
