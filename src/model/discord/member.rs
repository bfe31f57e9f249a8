//! Discord guild member as returned by the member listing endpoint.
//!
//! Only the fields the nudge job reads are modelled; everything else in the payload is
//! ignored during deserialization.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serenity::all::{RoleId, UserId};

use crate::util::time::whole_days_between;

/// A user's membership in a guild.
///
/// Fetched fresh every run and never persisted; Discord owns this state.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GuildMember {
    /// The user behind the membership.
    pub user: GuildMemberUser,
    /// Ids of the roles assigned to the member, excluding the implicit everyone role.
    #[serde(default)]
    pub roles: Vec<RoleId>,
    /// When the user joined the guild. Discord may omit it for some members.
    #[serde(default)]
    pub joined_at: Option<DateTime<Utc>>,
}

/// User object nested inside a guild member.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GuildMemberUser {
    /// Discord user ID.
    pub id: UserId,
    /// Discord username, stored in the nudge log as the display name.
    pub username: String,
    /// Whether the account belongs to a bot application.
    #[serde(default)]
    pub bot: bool,
}

impl GuildMember {
    /// Whether the member holds exactly `count` roles.
    pub fn has_role_count(&self, count: usize) -> bool {
        self.roles.len() == count
    }

    /// Whether the member is a bot account.
    pub fn is_bot(&self) -> bool {
        self.user.bot
    }

    /// Full days since the member joined, or `None` when Discord did not report a join time.
    pub fn joined_days_ago(&self, now: DateTime<Utc>) -> Option<i64> {
        self.joined_at
            .map(|joined_at| whole_days_between(joined_at, now))
    }
}
