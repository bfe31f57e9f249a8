use chrono::{DateTime, Utc};

fn formatted(at: DateTime<Utc>) -> String {
    at.format("%m/%d/%Y at %-I:%M %p").to_string()
}

/// A nudge log row: `member_id,member_name,epoch_ms,formatted`.
pub fn nudge_row(member_id: u64, member_name: &str, nudged_at: DateTime<Utc>) -> String {
    format!(
        "{},{},{},{}\n",
        member_id,
        member_name,
        nudged_at.timestamp_millis(),
        formatted(nudged_at)
    )
}

/// A role/channel registry row: `role_id,channel_id,epoch_ms,formatted`.
pub fn role_channel_row(role_id: u64, channel_id: u64, created_at: DateTime<Utc>) -> String {
    format!(
        "{},{},{},{}\n",
        role_id,
        channel_id,
        created_at.timestamp_millis(),
        formatted(created_at)
    )
}
