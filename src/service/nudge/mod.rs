//! Nudge service running one pass of the roleless-member job.
//!
//! This module provides the `NudgeService`, which reconciles the guild's current members
//! against the two record files and performs the resulting Discord side effects. A run
//! is strictly sequential: every request is awaited before the next one is sent.
//!
//! The service is organized into separate modules by concern:
//! - `eligibility` - Pure predicates deciding who is nudged, kicked or cleaned up
//! - `cleanup` - Deletion of expired batch roles and channels
//! - `kick` - Optional removal of long-nudged, still roleless members
//! - `batch` - Role, channel and message creation for a new batch

pub mod batch;
pub mod cleanup;
pub mod eligibility;
pub mod kick;

#[cfg(test)]
mod test;

use chrono::{DateTime, Utc};

use crate::{
    config::Config,
    data::{NudgedMemberRepository, RoleChannelRepository},
    discord::DiscordClient,
    error::AppError,
};

/// Outcome of a single run, logged by the binary before it exits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Registry entries removed by the cleanup pass.
    pub expired: usize,
    /// Members removed from the guild by the kick pass.
    pub kicked: usize,
    /// Members added to this run's batch.
    pub nudged: usize,
}

/// Service running the nudge job against one guild.
///
/// Holds references to the Discord client and the loaded configuration. Record files
/// are opened through their repositories on each run; nothing is cached between runs.
pub struct NudgeService<'a> {
    /// Discord REST client for every side effect
    discord: &'a DiscordClient,
    /// Guild, bot identity, record file paths and policy
    config: &'a Config,
}

impl<'a> NudgeService<'a> {
    /// Creates a new NudgeService instance.
    ///
    /// # Arguments
    /// - `discord` - Client for the Discord REST API
    /// - `config` - Loaded job configuration
    ///
    /// # Returns
    /// - `NudgeService` - New service instance
    pub fn new(discord: &'a DiscordClient, config: &'a Config) -> Self {
        Self { discord, config }
    }

    /// Runs cleanup, the optional kick pass and nudging, in that order.
    ///
    /// Each record file is read when the stage needing it starts; a missing or corrupted
    /// file aborts the run. Only deletions during cleanup are allowed to fail
    /// without aborting.
    ///
    /// # Arguments
    /// - `now` - Reference time for every age and tenure comparison in this run
    ///
    /// # Returns
    /// - `Ok(RunSummary)` - Counts of what the run changed
    /// - `Err(AppError::StoreErr)` - A record file could not be read or written
    /// - `Err(AppError::DiscordApiErr)` - Member listing, kick or batch creation failed
    pub async fn run(&self, now: DateTime<Utc>) -> Result<RunSummary, AppError> {
        let registry = RoleChannelRepository::new(&self.config.roles_and_channels_path);
        let nudge_log = NudgedMemberRepository::new(&self.config.nudged_members_path);

        let records = registry.get_all()?;
        let loaded = records.len();
        let remaining = self.cleanup_expired(records, now).await;
        let expired = loaded - remaining.len();
        registry.replace_all(&remaining)?;

        let nudged_ids = nudge_log.get_nudged_ids()?;
        let members = self.discord.get_all_members(self.config.guild_id).await?;

        let kicked = if self.config.policy.kick_enabled {
            self.kick_stale_members(&members, &nudged_ids, now).await?
        } else {
            0
        };

        let batch = eligibility::select_nudge_batch(&members, &nudged_ids, &self.config.policy, now);
        if !batch.is_empty() {
            self.nudge_batch(&batch, now).await?;
        }

        Ok(RunSummary {
            expired,
            kicked,
            nudged: batch.len(),
        })
    }
}
