//! Expiry of batch roles and channels.

use std::{collections::HashSet, fmt::Display};

use chrono::{DateTime, Utc};

use crate::{error::AppError, model::nudge::RoleChannelRecord};

use super::{eligibility::is_cleanup_eligible, NudgeService};

impl<'a> NudgeService<'a> {
    /// Deletes the Discord resources of expired registry entries.
    ///
    /// For each expired entry the channel is deleted first, then the role. Each deletion
    /// is attempted on its own: a failure is logged and the job moves on to the next
    /// deletion, so an already-removed channel never prevents the role from being
    /// deleted. Expired entries are dropped from the returned set whatever the outcome,
    /// together with any other entry sharing the role.
    ///
    /// # Arguments
    /// - `records` - The registry as loaded from disk
    /// - `now` - Reference time for entry age
    ///
    /// # Returns
    /// - `Vec<RoleChannelRecord>` - Entries that have not expired, in their original order
    pub async fn cleanup_expired(
        &self,
        records: Vec<RoleChannelRecord>,
        now: DateTime<Utc>,
    ) -> Vec<RoleChannelRecord> {
        let guild_id = self.config.guild_id;
        let policy = &self.config.policy;
        let mut expired_roles = HashSet::new();

        for record in &records {
            if record.created_at().is_none() {
                tracing::warn!(
                    "Keeping role {} / channel {}: unreadable timestamp {}",
                    record.role_id,
                    record.channel_id,
                    record.created_at_ms
                );
                continue;
            }

            if !is_cleanup_eligible(record, policy, now) {
                continue;
            }

            tracing::info!(
                "Cleaning up role {} and channel {} created {}",
                record.role_id,
                record.channel_id,
                record.created_at_formatted
            );

            if let Err(e) = self.discord.delete_channel(record.channel_id, None).await {
                log_failed_deletion("channel", record.channel_id, &e);
            }
            if let Err(e) = self.discord.delete_role(guild_id, record.role_id, None).await {
                log_failed_deletion("role", record.role_id, &e);
            }

            expired_roles.insert(record.role_id);
        }

        records
            .into_iter()
            .filter(|record| !expired_roles.contains(&record.role_id))
            .collect()
    }
}

/// Logs a swallowed cleanup failure; resources already gone are expected.
fn log_failed_deletion(resource: &str, id: impl Display, error: &AppError) {
    match error {
        AppError::DiscordApiErr(e) if e.is_not_found() => {
            tracing::info!("Expired {} {} was already deleted", resource, id);
        }
        _ => {
            tracing::warn!("Failed to delete expired {} {}: {}", resource, id, error);
        }
    }
}
