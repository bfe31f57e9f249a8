use std::collections::HashSet;

use crate::{
    config::Config,
    discord::DiscordClient,
    error::{store::StoreError, AppError},
    model::{
        discord::GuildMember,
        nudge::{NudgePolicy, RoleChannelRecord},
    },
    service::nudge::{eligibility, NudgeService, RunSummary},
};
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::Value;
use serenity::all::{ChannelId, GuildId, RoleId, UserId};
use test_utils::{
    builder::TestBuilder, context::TestContext, factory::member::MemberFactory, fixture,
    TEST_BOT_ID, TEST_BOT_TOKEN,
};

mod run;

/// Fixed reference time so tenure and age boundaries are exact.
fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap()
}

/// Configuration pointing at the test context's mock server and record files.
fn config(test: &TestContext, policy: NudgePolicy) -> Config {
    Config {
        bot_token: TEST_BOT_TOKEN.to_string(),
        guild_id: GuildId::new(test.guild_id),
        bot_id: UserId::new(TEST_BOT_ID),
        discord_api_url: test.api_url(),
        nudged_members_path: test.nudge_log_path(),
        roles_and_channels_path: test.role_channel_log_path(),
        policy,
    }
}

fn client(config: &Config) -> DiscordClient {
    DiscordClient::new(
        reqwest::Client::new(),
        &config.discord_api_url,
        &config.bot_token,
    )
}

fn kick_policy() -> NudgePolicy {
    NudgePolicy {
        kick_enabled: true,
        ..NudgePolicy::default()
    }
}

/// Decodes a member payload the way the member listing would.
fn member(payload: Value) -> GuildMember {
    serde_json::from_value(payload).unwrap()
}
