//! Guild member factory for creating member listing payloads.

use chrono::{DateTime, Duration, Utc};
use serde_json::{json, Value};

use crate::factory::helpers::next_id;

/// Factory for creating guild member payloads with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::member::MemberFactory;
///
/// let member = MemberFactory::new()
///     .id(123456789)
///     .roles(vec![42])
///     .joined_days_ago(3)
///     .build();
/// ```
pub struct MemberFactory {
    id: u64,
    username: String,
    bot: bool,
    roles: Vec<u64>,
    joined_at: Option<DateTime<Utc>>,
}

impl MemberFactory {
    /// Creates a new MemberFactory with default values.
    ///
    /// Defaults:
    /// - id: auto-incremented
    /// - username: `"member_{id}"`
    /// - bot: `false`
    /// - roles: none
    /// - joined_at: 10 days ago
    pub fn new() -> Self {
        let id = next_id();
        Self {
            id,
            username: format!("member_{}", id),
            bot: false,
            roles: Vec::new(),
            joined_at: Some(Utc::now() - Duration::days(10)),
        }
    }

    /// Sets the user id.
    pub fn id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }

    /// Sets the username.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Marks the member as a bot account.
    pub fn bot(mut self, bot: bool) -> Self {
        self.bot = bot;
        self
    }

    /// Sets the assigned role ids.
    pub fn roles(mut self, roles: Vec<u64>) -> Self {
        self.roles = roles;
        self
    }

    /// Sets the exact join time; `None` serializes as `null`.
    pub fn joined_at(mut self, joined_at: Option<DateTime<Utc>>) -> Self {
        self.joined_at = joined_at;
        self
    }

    /// Sets the join time to `days` days before now.
    pub fn joined_days_ago(self, days: i64) -> Self {
        self.joined_at(Some(Utc::now() - Duration::days(days)))
    }

    /// Builds the member payload as Discord's member listing returns it.
    pub fn build(self) -> Value {
        let roles: Vec<String> = self.roles.iter().map(|id| id.to_string()).collect();

        json!({
            "user": {
                "id": self.id.to_string(),
                "username": self.username,
                "discriminator": "0",
                "global_name": null,
                "avatar": null,
                "bot": self.bot
            },
            "nick": null,
            "avatar": null,
            "roles": roles,
            "joined_at": self.joined_at.map(|at| at.to_rfc3339()),
            "premium_since": null,
            "deaf": false,
            "mute": false,
            "flags": 0
        })
    }
}

impl Default for MemberFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates a member payload with default values.
///
/// Shorthand for `MemberFactory::new().build()`.
pub fn create_member() -> Value {
    MemberFactory::new().build()
}

/// Creates `count` default member payloads in ascending id order.
pub fn create_members(count: usize) -> Vec<Value> {
    (0..count).map(|_| create_member()).collect()
}
