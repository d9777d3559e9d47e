// src/models/record.rs

//! Normalized cloud emoji record.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::utils::time;

/// A creator's cloud emoji set in the downstream normalized format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmojiRecord {
    /// Platform user id
    pub uid: String,

    /// Capture time, ISO-8601 UTC with second precision
    pub time: String,

    /// Capture time, milliseconds since Unix epoch
    pub timestamp: i64,

    /// Bracket-wrapped emoji name → image URL
    pub emotions: HashMap<String, String>,
}

impl EmojiRecord {
    /// Build a record from a raw (unbracketed) name → URL map.
    ///
    /// The normalized format requires names wrapped in `[` `]`; extraction
    /// strips the brackets, so they are re-added here. Both time fields come
    /// from a single clock read.
    pub fn from_raw(uid: impl Into<String>, raw: HashMap<String, String>) -> Self {
        let (time, timestamp) = time::capture_now();
        let emotions = raw
            .into_iter()
            .map(|(name, url)| (format!("[{name}]"), url))
            .collect();

        Self {
            uid: uid.into(),
            time,
            timestamp,
            emotions,
        }
    }

    /// Serialize to a compact JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_raw() -> HashMap<String, String> {
        HashMap::from([
            (
                "蛇年AC娘_威胁".to_string(),
                "https://imgs.example/a.png".to_string(),
            ),
            (
                "蛇年AC娘_亲亲".to_string(),
                "https://imgs.example/b.png".to_string(),
            ),
        ])
    }

    #[test]
    fn test_from_raw_wraps_names_in_brackets() {
        let record = EmojiRecord::from_raw("10845128", sample_raw());
        assert_eq!(record.uid, "10845128");
        assert_eq!(
            record.emotions.get("[蛇年AC娘_威胁]").map(String::as_str),
            Some("https://imgs.example/a.png")
        );
        assert!(!record.emotions.contains_key("蛇年AC娘_威胁"));
    }

    #[test]
    fn test_time_fields_agree() {
        let record = EmojiRecord::from_raw("1", HashMap::new());
        // Same clock read feeds both fields; the string is the truncated form.
        let reparsed = chrono::DateTime::parse_from_rfc3339(&record.time).unwrap();
        let delta = record.timestamp - reparsed.timestamp_millis();
        assert!((0..1000).contains(&delta), "delta was {delta}");
    }

    #[test]
    fn test_to_json_has_expected_keys() {
        let record = EmojiRecord::from_raw("10845128", sample_raw());
        let json = record.to_json().unwrap();
        for key in ["\"uid\"", "\"time\"", "\"timestamp\"", "\"emotions\""] {
            assert!(json.contains(key), "missing {key} in {json}");
        }

        let back: EmojiRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
