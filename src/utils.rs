//! Utility functions for the ratings run

use chrono::{DateTime, Utc};

/// Convert an epoch timestamp in milliseconds to UTC
pub fn timestamp_from_millis(millis: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
}

/// Case-insensitive match of `name` against a list of names; an empty list matches everything
pub fn name_matches(filter: &[String], name: &str) -> bool {
    filter.is_empty() || filter.iter().any(|f| f.trim().eq_ignore_ascii_case(name.trim()))
}
