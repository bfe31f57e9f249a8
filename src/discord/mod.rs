//! Discord REST API client for the nudge job.
//!
//! `DiscordClient` wraps a `reqwest::Client` with the bot token and API base URL. The
//! operations are organized into separate modules by concern, each adding methods to
//! the same client:
//! - `request` - Authenticated request construction and error classification
//! - `member` - Cursor-paginated member listing and member removal
//! - `role` - Role creation, assignment and deletion
//! - `channel` - Private channel creation/deletion and message posting

pub mod channel;
pub mod member;
pub mod request;
pub mod role;

#[cfg(test)]
mod test;

/// Versioned base URL of the Discord REST API.
pub const DISCORD_API_URL: &str = "https://discord.com/api/v10";

/// Client for the subset of the Discord REST API used by the nudge job.
///
/// Every call is a single request awaited to completion; the client performs no retries
/// and no rate-limit bookkeeping of its own.
#[derive(Clone)]
pub struct DiscordClient {
    /// Shared HTTP client; cheap to clone as it is reference-counted internally.
    http: reqwest::Client,
    /// API base URL without a trailing slash, e.g. `https://discord.com/api/v10`.
    base_url: String,
    /// Bot token sent as `Authorization: Bot <token>`.
    bot_token: String,
}

impl DiscordClient {
    /// Creates a new client.
    ///
    /// # Arguments
    /// - `http` - HTTP client used for every request
    /// - `base_url` - API base URL; a trailing slash is ignored
    /// - `bot_token` - Bot token from the Discord developer portal
    ///
    /// # Returns
    /// - `DiscordClient` - New client instance
    pub fn new(http: reqwest::Client, base_url: impl Into<String>, bot_token: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            http,
            base_url,
            bot_token: bot_token.into(),
        }
    }
}
