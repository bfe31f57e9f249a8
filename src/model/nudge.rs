//! Persisted nudge records and the policy driving each run.
//!
//! Both record types map one-to-one onto a headerless CSV row: the field order of the
//! structs is the column order of the files and must not change, or existing logs would
//! be read back with their columns shuffled.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serenity::all::{ChannelId, RoleId, UserId};

use crate::{
    model::discord::GuildMember,
    util::time::{format_record_timestamp, whole_days_between},
};

/// One nudged member in the append-only nudge log.
///
/// Written once when the member is nudged and never touched again, including after the
/// member is kicked. Presence of a record is what makes a member ineligible for another
/// nudge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NudgeRecord {
    /// Discord user ID of the nudged member.
    pub member_id: UserId,
    /// Username at the time of the nudge.
    pub member_name: String,
    /// Nudge time as Unix epoch milliseconds.
    pub nudged_at_ms: i64,
    /// Nudge time formatted for humans reading the file.
    pub nudged_at_formatted: String,
}

impl NudgeRecord {
    /// Creates the log entry for a member nudged at `at`.
    pub fn new(member: &GuildMember, at: DateTime<Utc>) -> Self {
        Self {
            member_id: member.user.id,
            member_name: member.user.username.clone(),
            nudged_at_ms: at.timestamp_millis(),
            nudged_at_formatted: format_record_timestamp(at),
        }
    }
}

/// A temporary role and private channel created for one nudge batch.
///
/// Lives in the registry until it is old enough to be cleaned up, at which point both
/// Discord resources are deleted and the record is dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleChannelRecord {
    /// The mentionable role handed to the batch.
    pub role_id: RoleId,
    /// The private channel only that role (and the bot) can see.
    pub channel_id: ChannelId,
    /// Creation time as Unix epoch milliseconds.
    pub created_at_ms: i64,
    /// Creation time formatted for humans reading the file.
    pub created_at_formatted: String,
}

impl RoleChannelRecord {
    /// Creates the registry entry for a role/channel pair created at `at`.
    pub fn new(role_id: RoleId, channel_id: ChannelId, at: DateTime<Utc>) -> Self {
        Self {
            role_id,
            channel_id,
            created_at_ms: at.timestamp_millis(),
            created_at_formatted: format_record_timestamp(at),
        }
    }

    /// Creation time, or `None` if the stored epoch value is out of range.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.created_at_ms)
    }

    /// Full days elapsed between creation and `now`.
    pub fn age_in_days(&self, now: DateTime<Utc>) -> Option<i64> {
        self.created_at()
            .map(|created_at| whole_days_between(created_at, now))
    }
}

/// Thresholds and names used by a nudge run.
#[derive(Debug, Clone, PartialEq)]
pub struct NudgePolicy {
    /// Days a roleless member must have been in the guild before being nudged.
    pub nudge_after_days: i64,
    /// Days a nudged, still roleless member must have been in the guild before being kicked.
    pub kick_after_days: i64,
    /// Age in days at which a batch's role and channel are deleted.
    pub cleanup_after_days: i64,
    /// Whether the kick pass runs at all.
    pub kick_enabled: bool,
    /// Name of the mentionable role created for each batch.
    pub role_name: String,
    /// Name of the private channel created for each batch.
    pub channel_name: String,
}

impl Default for NudgePolicy {
    fn default() -> Self {
        Self {
            nudge_after_days: 4,
            kick_after_days: 30,
            cleanup_after_days: 3,
            kick_enabled: false,
            role_name: "Slow Roller".to_string(),
            channel_name: "Slow Rollers".to_string(),
        }
    }
}

/// Instructions posted into the private channel, pinging the batch role.
pub fn nudge_message(role_id: RoleId) -> String {
    format!(
        ":wave: <@&{}> Pssst! I noticed you don't have a role yet. That means you probably \
         can't see any of the useful channels :sob: Here's some instructions on how to give \
         yourself a role...",
        role_id
    )
}
