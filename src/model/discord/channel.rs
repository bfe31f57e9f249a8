//! Channel and message payloads for the private nudge channel.

use serde::{Deserialize, Serialize};
use serenity::all::{ChannelId, ChannelType, MessageId, PermissionOverwrite};

/// Body of `POST /guilds/{guild}/channels`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateChannelRequest<'a> {
    pub name: &'a str,
    #[serde(rename = "type")]
    pub kind: ChannelType,
    pub permission_overwrites: Vec<PermissionOverwrite>,
}

/// Channel returned by Discord after creation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreatedChannel {
    /// Discord channel ID.
    pub id: ChannelId,
    /// Channel name as normalized by Discord.
    pub name: String,
}

/// Body of `POST /channels/{channel}/messages`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateMessageRequest<'a> {
    pub content: &'a str,
}

/// Message returned by Discord after posting.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreatedMessage {
    pub id: MessageId,
    pub channel_id: ChannelId,
}
