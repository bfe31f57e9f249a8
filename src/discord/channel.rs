//! Private channel lifecycle and message posting.

use reqwest::Method;
use serenity::all::{
    ChannelId, ChannelType, GuildId, PermissionOverwrite, PermissionOverwriteType, Permissions,
    RoleId, UserId,
};

use crate::{
    error::AppError,
    model::discord::{CreateChannelRequest, CreateMessageRequest, CreatedChannel, CreatedMessage},
};

use super::{request::audit_log_reason, DiscordClient};

/// Longest message content Discord accepts, in characters.
pub const MESSAGE_MAX_CHARS: usize = 2000;

const DEFAULT_CREATE_CHANNEL_REASON: &str = "Creating private channel to nudge some members.";
const DEFAULT_CREATE_MESSAGE_REASON: &str = "Posting role instructions for nudged members.";
const DEFAULT_DELETE_CHANNEL_REASON: &str = "Removing expired nudge channel.";

impl DiscordClient {
    /// Creates a text channel visible only to one role and the bot.
    ///
    /// Permission overwrites:
    /// - everyone role: deny view channel and send messages
    /// - `role_id`: allow view channel
    /// - `bot_id`: allow view channel and send messages
    ///
    /// # Arguments
    /// - `guild_id` - Guild to create the channel in
    /// - `name` - Channel name
    /// - `role_id` - Role allowed to read the channel
    /// - `bot_id` - The bot's own user id, so it can keep posting
    /// - `reason` - Audit log reason; a default is used when `None`
    ///
    /// # Returns
    /// - `Ok(CreatedChannel)` - The new channel
    /// - `Err(AppError)` - Discord rejected the request
    pub async fn create_private_channel_for_role(
        &self,
        guild_id: GuildId,
        name: &str,
        role_id: RoleId,
        bot_id: UserId,
        reason: Option<&str>,
    ) -> Result<CreatedChannel, AppError> {
        let endpoint = format!("/guilds/{}/channels", guild_id);
        let channel = CreateChannelRequest {
            name,
            kind: ChannelType::Text,
            permission_overwrites: private_channel_overwrites(guild_id, role_id, bot_id),
        };
        let headers = audit_log_reason(reason, DEFAULT_CREATE_CHANNEL_REASON)?;

        self.request_json(Method::POST, &endpoint, Some(&channel), Some(headers))
            .await
    }

    /// Posts a text message into a channel.
    ///
    /// # Returns
    /// - `Ok(CreatedMessage)` - The posted message
    /// - `Err(AppError::BadRequest)` - Content exceeds `MESSAGE_MAX_CHARS`; nothing was sent
    /// - `Err(AppError)` - Discord rejected the request
    pub async fn create_channel_message(
        &self,
        channel_id: ChannelId,
        content: &str,
    ) -> Result<CreatedMessage, AppError> {
        let length = content.chars().count();
        if length > MESSAGE_MAX_CHARS {
            return Err(AppError::BadRequest(format!(
                "Message is {} characters long, Discord allows at most {}",
                length, MESSAGE_MAX_CHARS
            )));
        }

        let endpoint = format!("/channels/{}/messages", channel_id);
        let message = CreateMessageRequest { content };
        let headers = audit_log_reason(None, DEFAULT_CREATE_MESSAGE_REASON)?;

        self.request_json(Method::POST, &endpoint, Some(&message), Some(headers))
            .await
    }

    /// Deletes a channel.
    pub async fn delete_channel(
        &self,
        channel_id: ChannelId,
        reason: Option<&str>,
    ) -> Result<(), AppError> {
        let endpoint = format!("/channels/{}", channel_id);
        let headers = audit_log_reason(reason, DEFAULT_DELETE_CHANNEL_REASON)?;

        self.request::<()>(Method::DELETE, &endpoint, None, Some(headers))
            .await?;

        Ok(())
    }
}

/// Overwrites hiding a channel from everyone except `role_id` and the bot.
fn private_channel_overwrites(
    guild_id: GuildId,
    role_id: RoleId,
    bot_id: UserId,
) -> Vec<PermissionOverwrite> {
    let view_and_send = Permissions::VIEW_CHANNEL | Permissions::SEND_MESSAGES;

    vec![
        // The everyone role shares its id with the guild
        PermissionOverwrite {
            allow: Permissions::empty(),
            deny: view_and_send,
            kind: PermissionOverwriteType::Role(RoleId::new(guild_id.get())),
        },
        PermissionOverwrite {
            allow: Permissions::VIEW_CHANNEL,
            deny: Permissions::empty(),
            kind: PermissionOverwriteType::Role(role_id),
        },
        PermissionOverwrite {
            allow: view_and_send,
            deny: Permissions::empty(),
            kind: PermissionOverwriteType::Member(bot_id),
        },
    ]
}
