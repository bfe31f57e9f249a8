use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serenity::all::UserId;

use crate::{error::AppError, model::discord::GuildMember};

use super::{eligibility::select_kick_targets, NudgeService};

impl<'a> NudgeService<'a> {
    /// Removes members who were nudged and are still roleless after the kick window.
    ///
    /// Kicks run one at a time in listing order and the first failure aborts the run.
    /// A kicked member keeps their nudge log entry.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of members removed
    /// - `Err(AppError::DiscordApiErr)` - Discord refused a removal
    pub async fn kick_stale_members(
        &self,
        members: &[GuildMember],
        nudged_ids: &HashSet<UserId>,
        now: DateTime<Utc>,
    ) -> Result<usize, AppError> {
        let targets = select_kick_targets(members, nudged_ids, &self.config.policy, now);

        for member in &targets {
            tracing::info!(
                "Kicking {} ({}), still without a role",
                member.user.username,
                member.user.id
            );
            self.discord
                .remove_member(self.config.guild_id, member.user.id, None)
                .await?;
        }

        Ok(targets.len())
    }
}
