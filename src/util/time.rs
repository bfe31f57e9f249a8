//! Date math and formatting shared by the record files and eligibility checks.

use chrono::{DateTime, Utc};

/// Human-readable timestamp stored next to the raw epoch value, e.g. `10/16/2026 at 9:05 PM`.
pub const RECORD_TIMESTAMP_FORMAT: &str = "%m/%d/%Y at %-I:%M %p";

/// Formats a timestamp for the human-readable column of a record file.
///
/// The text is always in UTC, whatever the host's time zone.
pub fn format_record_timestamp(at: DateTime<Utc>) -> String {
    at.format(RECORD_TIMESTAMP_FORMAT).to_string()
}

/// Number of full 24 hour periods between `from` and `to`.
///
/// Partial days are truncated, so 2 days 23 hours counts as 2. Negative when `from`
/// lies after `to`.
pub fn whole_days_between(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    (to - from).num_days()
}
