mod config;
mod data;
mod discord;
mod error;
mod model;
mod service;
mod startup;
mod util;

use chrono::Utc;

use crate::{
    config::Config, discord::DiscordClient, error::AppError, service::nudge::NudgeService,
};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    match run().await {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            tracing::error!("Nudge run failed: {}", e);
            std::process::exit(1);
        }
    }
}

async fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;
    let http_client = startup::setup_reqwest_client()?;
    let discord = DiscordClient::new(http_client, &config.discord_api_url, &config.bot_token);

    tracing::info!("Starting nudge run for guild {}", config.guild_id);

    let summary = NudgeService::new(&discord, &config).run(Utc::now()).await?;

    tracing::info!(
        "Nudge run finished: {} expired, {} kicked, {} nudged",
        summary.expired,
        summary.kicked,
        summary.nudged
    );

    Ok(())
}
