use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use dotenvy::dotenv;
#[cfg(not(target_env = "msvc"))]
use jemallocator::Jemalloc;
use serenity::all::{Command, CreateInteractionResponseFollowup};
use serenity::async_trait;
use serenity::model::prelude::Interaction;
use serenity::prelude::*;
use tracing::{error, info};
use tracing_subscriber::{filter, prelude::*, Layer};

use commands::Reply;
use summary::MissingParticipant;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod commands;
mod error;
mod models;
mod riot_api;
mod riot_utils;
mod summary;

#[derive(Debug, Clone)]
pub struct Config {
    pub riot_api_key: String,
    pub discord_token: String,
    pub missing_participant: MissingParticipant,
    pub log_path: PathBuf,
}

fn load_config() -> Result<Config> {
    dotenv().ok();

    let riot_api_key = env::var("RIOT_API_KEY").context("Missing RIOT_API_KEY")?;
    let discord_token = env::var("DISCORD_TOKEN").context("Missing DISCORD_TOKEN")?;

    let missing_participant = match env::var("MISSING_PARTICIPANT_POLICY") {
        Result::Ok(value) => match value.to_lowercase().as_str() {
            "fail" => MissingParticipant::Fail,
            "skip" => MissingParticipant::Skip,
            other => {
                return Err(anyhow!(
                    "Invalid MISSING_PARTICIPANT_POLICY '{}' (must be 'fail' or 'skip')",
                    other
                ))
            }
        },
        Result::Err(_) => MissingParticipant::Fail,
    };

    let log_path_str = env::var("LOG_PATH").unwrap_or_else(|_| {
        if cfg!(target_os = "linux") {
            "/var/logs/discord"
        } else {
            "."
        }
        .to_string()
    });

    Ok(Config {
        riot_api_key,
        discord_token,
        missing_participant,
        log_path: PathBuf::from(log_path_str),
    })
}

struct Handler {
    config: Arc<Config>,
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: serenity::prelude::Context, _data: serenity::model::prelude::Ready) {
        info!("Ready event received");
        match Command::create_global_command(&ctx.http, commands::league::register()).await {
            Result::Ok(_) => info!("Registered the league command group"),
            Result::Err(e) => error!("Ran into error while trying to set up commands: {}", e),
        }
    }

    async fn interaction_create(&self, ctx: serenity::prelude::Context, interaction: Interaction) {
        if let Interaction::Command(command) = interaction {
            info!(
                "Received command interaction: {}",
                command.data.name.as_str()
            );
            if command.data.name.as_str() != "league" {
                return;
            }

            // Riot lookups can take a while; defer to get past the 3 second
            // default interaction deadline.
            if let Err(why) = command.defer(&ctx.http).await {
                error!("Unable to defer the interaction: {}", why);
                return;
            }

            let reply =
                match commands::league::run(&command.data.options, self.config.clone()).await {
                    Result::Ok(reply) => reply,
                    Result::Err(e) => {
                        error!("The league command failed: {:#}", e);
                        Reply::Text(format!("Something went wrong while looking up matches: {e}"))
                    }
                };

            let followup = match reply {
                Reply::Text(content) => CreateInteractionResponseFollowup::new().content(content),
                Reply::Embed(embed) => CreateInteractionResponseFollowup::new().embed(embed),
            };
            if let Err(why) = command.create_followup(&ctx.http, followup).await {
                error!("Cannot respond to slash command: {}", why);
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Arc::new(load_config().context("Failed to load configuration")?);

    let file_appender = tracing_appender::rolling::daily(&config.log_path, "server.log");
    let (non_blocking_appender, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking_appender)
                .with_filter(filter::filter_fn(|metadata| {
                    metadata.target().starts_with("jolly_bot")
                })),
        )
        .init();

    let intents = GatewayIntents::non_privileged();
    let handler = Handler {
        config: config.clone(),
    };

    let mut client = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await
        .context("Error creating Discord client")?;

    client.start().await.context("Discord client error")?;
    Ok(())
}
