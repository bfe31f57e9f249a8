use std::path::PathBuf;

use serenity::all::{GuildId, UserId};

use crate::{
    discord::DISCORD_API_URL,
    error::{config::ConfigError, AppError},
    model::nudge::NudgePolicy,
    util::parse::parse_snowflake,
};

const DEFAULT_NUDGED_MEMBERS_CSV: &str = "nudgedMembers.csv";
const DEFAULT_ROLES_AND_CHANNELS_CSV: &str = "rolesAndChannels.csv";

pub struct Config {
    pub bot_token: String,
    pub guild_id: GuildId,
    /// The bot's own user id, granted access to every private channel it creates.
    pub bot_id: UserId,
    pub discord_api_url: String,

    pub nudged_members_path: PathBuf,
    pub roles_and_channels_path: PathBuf,

    pub policy: NudgePolicy,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from a variable lookup.
    ///
    /// `BOT_TOKEN`, `GUILD_ID` and `APP_ID` are required; everything else falls back to
    /// its default when unset.
    ///
    /// # Returns
    /// - `Ok(Config)` - Every variable present and valid
    /// - `Err(AppError::ConfigErr)` - A required variable is missing or any value is invalid
    pub fn from_vars<F>(var: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            var(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let defaults = NudgePolicy::default();
        let policy = NudgePolicy {
            nudge_after_days: days_var(&var, "NUDGE_AFTER_DAYS", defaults.nudge_after_days)?,
            kick_after_days: days_var(&var, "KICK_AFTER_DAYS", defaults.kick_after_days)?,
            cleanup_after_days: days_var(&var, "CLEANUP_AFTER_DAYS", defaults.cleanup_after_days)?,
            kick_enabled: bool_var(&var, "KICK_ENABLED", defaults.kick_enabled)?,
            ..defaults
        };

        Ok(Self {
            bot_token: required("BOT_TOKEN")?.trim().to_string(),
            guild_id: GuildId::new(snowflake_var("GUILD_ID", required("GUILD_ID")?)?),
            bot_id: UserId::new(snowflake_var("APP_ID", required("APP_ID")?)?),
            discord_api_url: var("DISCORD_API_URL").unwrap_or_else(|| DISCORD_API_URL.to_string()),
            nudged_members_path: var("NUDGED_MEMBERS_CSV")
                .unwrap_or_else(|| DEFAULT_NUDGED_MEMBERS_CSV.to_string())
                .into(),
            roles_and_channels_path: var("ROLES_AND_CHANNELS_CSV")
                .unwrap_or_else(|| DEFAULT_ROLES_AND_CHANNELS_CSV.to_string())
                .into(),
            policy,
        })
    }
}

fn snowflake_var(name: &str, value: String) -> Result<u64, ConfigError> {
    parse_snowflake(value.clone()).map_err(|e| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value,
        reason: e.to_string(),
    })
}

fn days_var<F>(var: &F, name: &str, default: i64) -> Result<i64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = var(name) else {
        return Ok(default);
    };

    match value.trim().parse::<i64>() {
        Ok(days) if days >= 0 => Ok(days),
        Ok(_) => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
            reason: "must not be negative".to_string(),
        }),
        Err(e) => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
            reason: e.to_string(),
        }),
    }
}

fn bool_var<F>(var: &F, name: &str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = var(name) else {
        return Ok(default);
    };

    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
            reason: "expected true, false, 1 or 0".to_string(),
        }),
    }
}
