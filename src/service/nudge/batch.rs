//! Creation of a new nudge batch.

use chrono::{DateTime, Utc};

use crate::{
    data::{NudgedMemberRepository, RoleChannelRepository},
    error::AppError,
    model::{
        discord::GuildMember,
        nudge::{nudge_message, NudgeRecord, RoleChannelRecord},
    },
};

use super::NudgeService;

impl<'a> NudgeService<'a> {
    /// Pings a batch of roleless members through a temporary role and private channel.
    ///
    /// Creates one mentionable role, adds it to every member in order, creates a channel
    /// only that role and the bot can see, and posts the instructions mentioning the
    /// role. Records are written only after every request succeeded: one nudge log entry
    /// per member and one registry entry for the batch.
    ///
    /// # Arguments
    /// - `batch` - Members to nudge; must not be empty
    /// - `now` - Timestamp stored on the new records
    ///
    /// # Returns
    /// - `Ok(RoleChannelRecord)` - Registry entry of the new batch
    /// - `Err(AppError::DiscordApiErr)` - Any Discord request failed
    /// - `Err(AppError::StoreErr)` - A record file could not be appended to
    pub async fn nudge_batch(
        &self,
        batch: &[&GuildMember],
        now: DateTime<Utc>,
    ) -> Result<RoleChannelRecord, AppError> {
        let guild_id = self.config.guild_id;
        let policy = &self.config.policy;

        let role = self
            .discord
            .create_mentionable_role(guild_id, &policy.role_name, None)
            .await?;

        for member in batch {
            self.discord
                .add_role_to_member(guild_id, role.id, member.user.id, None)
                .await?;
        }

        let channel = self
            .discord
            .create_private_channel_for_role(
                guild_id,
                &policy.channel_name,
                role.id,
                self.config.bot_id,
                None,
            )
            .await?;

        let message = self
            .discord
            .create_channel_message(channel.id, &nudge_message(role.id))
            .await?;
        tracing::debug!(
            "Posted instructions as message {} in channel {}",
            message.id,
            message.channel_id
        );

        let nudged: Vec<NudgeRecord> = batch
            .iter()
            .map(|member| NudgeRecord::new(member, now))
            .collect();
        NudgedMemberRepository::new(&self.config.nudged_members_path).append(&nudged)?;

        let entry = RoleChannelRecord::new(role.id, channel.id, now);
        RoleChannelRepository::new(&self.config.roles_and_channels_path).append(&entry)?;

        tracing::info!(
            "Nudged {} members with role {} ({}) in channel {} ({})",
            batch.len(),
            role.name,
            role.id,
            channel.name,
            channel.id
        );

        Ok(entry)
    }
}
