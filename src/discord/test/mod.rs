use crate::{
    discord::DiscordClient,
    error::AppError,
};
use reqwest::Method;
use serde_json::Value;
use serenity::all::{ChannelId, GuildId, RoleId, UserId};
use test_utils::{
    builder::TestBuilder, context::TestContext, factory, TEST_BOT_ID, TEST_BOT_TOKEN,
    TEST_GUILD_ID,
};


/// Client pointed at the test context's mock server.
fn client(test: &TestContext) -> DiscordClient {
    DiscordClient::new(reqwest::Client::new(), test.api_url(), TEST_BOT_TOKEN)
}

fn guild_id() -> GuildId {
    GuildId::new(TEST_GUILD_ID)
}

/// Reads a header of a received request as a string.
fn header(request: &wiremock::Request, name: &str) -> Option<String> {
    request
        .headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

/// Reads a snowflake or bitfield that may be serialized as either a string or a number.
fn as_u64(value: &Value) -> Option<u64> {
    match value {
        Value::String(s) => s.parse().ok(),
        other => other.as_u64(),
    }
}
