use reqwest::Method;
use serenity::all::{GuildId, RoleId, UserId};

use crate::{
    error::AppError,
    model::discord::{CreateRoleRequest, CreatedRole},
};

use super::{request::audit_log_reason, DiscordClient};

const DEFAULT_CREATE_ROLE_REASON: &str = "Creating a role to ping members without a role.";
const DEFAULT_ADD_ROLE_REASON: &str = "Adding a role to member so they can be pinged.";
const DEFAULT_DELETE_ROLE_REASON: &str = "Removing expired nudge role.";

impl DiscordClient {
    /// Creates a role that can be @-mentioned.
    ///
    /// # Arguments
    /// - `guild_id` - Guild to create the role in
    /// - `name` - Role name
    /// - `reason` - Audit log reason; a default is used when `None`
    ///
    /// # Returns
    /// - `Ok(CreatedRole)` - The new role
    /// - `Err(AppError)` - Discord rejected the request
    pub async fn create_mentionable_role(
        &self,
        guild_id: GuildId,
        name: &str,
        reason: Option<&str>,
    ) -> Result<CreatedRole, AppError> {
        let endpoint = format!("/guilds/{}/roles", guild_id);
        let role = CreateRoleRequest {
            name,
            mentionable: true,
        };
        let headers = audit_log_reason(reason, DEFAULT_CREATE_ROLE_REASON)?;

        self.request_json(Method::POST, &endpoint, Some(&role), Some(headers))
            .await
    }

    /// Adds a role to a guild member.
    ///
    /// Discord treats assigning a role the member already holds as a no-op.
    pub async fn add_role_to_member(
        &self,
        guild_id: GuildId,
        role_id: RoleId,
        user_id: UserId,
        reason: Option<&str>,
    ) -> Result<(), AppError> {
        let endpoint = format!("/guilds/{}/members/{}/roles/{}", guild_id, user_id, role_id);
        let headers = audit_log_reason(reason, DEFAULT_ADD_ROLE_REASON)?;

        self.request::<()>(Method::PUT, &endpoint, None, Some(headers))
            .await?;

        Ok(())
    }

    /// Deletes a role from a guild.
    pub async fn delete_role(
        &self,
        guild_id: GuildId,
        role_id: RoleId,
        reason: Option<&str>,
    ) -> Result<(), AppError> {
        let endpoint = format!("/guilds/{}/roles/{}", guild_id, role_id);
        let headers = audit_log_reason(reason, DEFAULT_DELETE_ROLE_REASON)?;

        self.request::<()>(Method::DELETE, &endpoint, None, Some(headers))
            .await?;

        Ok(())
    }
}
