use serde::{Deserialize, Serialize};
use serenity::all::RoleId;

/// Body of `POST /guilds/{guild}/roles`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateRoleRequest<'a> {
    pub name: &'a str,
    pub mentionable: bool,
}

/// Role returned by Discord after creation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreatedRole {
    /// Discord role ID.
    pub id: RoleId,
    /// Role display name.
    pub name: String,
}
