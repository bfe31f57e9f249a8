//! Guild member listing and removal.

use reqwest::Method;
use serenity::all::{GuildId, UserId};

use crate::{error::AppError, model::discord::GuildMember};

use super::{request::audit_log_reason, DiscordClient};

/// Page size requested from the member listing endpoint; also Discord's maximum.
pub const MEMBERS_PAGE_LIMIT: usize = 1000;

const DEFAULT_REMOVE_MEMBER_REASON: &str = "Removing member who never picked a role.";

impl DiscordClient {
    /// Fetches every member of a guild.
    ///
    /// Requests pages of `MEMBERS_PAGE_LIMIT` members, passing the highest user id of
    /// the previous page as the `after` cursor. A page shorter than the limit (including
    /// an empty one) ends the listing. There is no cap on the number of pages.
    ///
    /// # Arguments
    /// - `guild_id` - Guild to list
    ///
    /// # Returns
    /// - `Ok(Vec<GuildMember>)` - All members in the order Discord returned them
    /// - `Err(AppError)` - Any page request failed
    pub async fn get_all_members(&self, guild_id: GuildId) -> Result<Vec<GuildMember>, AppError> {
        let mut all_members = Vec::new();
        let mut after: Option<UserId> = None;

        loop {
            let members = self.get_members(guild_id, MEMBERS_PAGE_LIMIT, after).await?;
            let page_len = members.len();

            after = members.iter().map(|member| member.user.id).max();
            all_members.extend(members);

            if page_len < MEMBERS_PAGE_LIMIT {
                break;
            }
        }

        tracing::debug!(
            "Fetched {} members for guild {}",
            all_members.len(),
            guild_id
        );

        Ok(all_members)
    }

    /// Fetches a single page of guild members.
    async fn get_members(
        &self,
        guild_id: GuildId,
        limit: usize,
        after: Option<UserId>,
    ) -> Result<Vec<GuildMember>, AppError> {
        let endpoint = match after {
            Some(after) => format!("/guilds/{}/members?limit={}&after={}", guild_id, limit, after),
            None => format!("/guilds/{}/members?limit={}", guild_id, limit),
        };

        self.request_json::<_, ()>(Method::GET, &endpoint, None, None)
            .await
    }

    /// Removes (kicks) a member from a guild.
    ///
    /// # Arguments
    /// - `guild_id` - Guild to remove the member from
    /// - `user_id` - Member to remove
    /// - `reason` - Audit log reason; a default is used when `None`
    pub async fn remove_member(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        reason: Option<&str>,
    ) -> Result<(), AppError> {
        let endpoint = format!("/guilds/{}/members/{}", guild_id, user_id);
        let headers = audit_log_reason(reason, DEFAULT_REMOVE_MEMBER_REASON)?;

        self.request::<()>(Method::DELETE, &endpoint, None, Some(headers))
            .await?;

        Ok(())
    }
}
