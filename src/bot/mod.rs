//! Bot layer - Discord-specific interface and command handlers
//!
//! This module wires the coin ledger into poise: the command table, the shared
//! per-process data, the framework hooks and the gateway client.

/// Discord command implementations (balance, coins, history, buyers)
pub mod commands;
/// Framework hooks (error reporting, invocation logging)
pub mod handlers;
/// Reply formatting
pub mod replies;
/// Guild role maintenance
pub mod roles;

use crate::{
    config::AppConfig,
    errors::{Error, Result},
};
use poise::serenity_prelude as serenity;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tracing::{info, warn};

/// Shared data available to all bot commands.
/// This structure holds the database connection and the configuration,
/// including the admin allowlist every privileged command checks.
pub struct BotData {
    /// Database connection for all ledger operations
    pub database: DatabaseConnection,
    /// Configuration loaded at startup
    pub config: Arc<AppConfig>,
}

impl BotData {
    /// Creates a new `BotData` instance with the given database connection and configuration.
    #[must_use]
    pub const fn new(database: DatabaseConnection, config: Arc<AppConfig>) -> Self {
        Self { database, config }
    }
}

/// Poise context type used by every command.
pub type Context<'a> = poise::Context<'a, BotData, Error>;

/// Every slash command the bot registers.
#[must_use]
pub fn commands() -> Vec<poise::Command<BotData, Error>> {
    vec![
        commands::balance(),
        commands::addcoins(),
        commands::removecoins(),
        commands::usecoins(),
        commands::transactions(),
        commands::checkcoins(),
        commands::usertransactions(),
        commands::guildtransactions(),
        commands::clearbuyers(),
    ]
}

/// Connects to the gateway and runs the bot until the client stops.
///
/// Commands are registered in the configured guild once the client is ready.
pub async fn run_bot(config: Arc<AppConfig>, database: DatabaseConnection) -> Result<()> {
    let setup_config = Arc::clone(&config);

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: commands(),
            pre_command: |ctx| Box::pin(handlers::logging::log_invocation(ctx)),
            on_error: |error| Box::pin(handlers::errors::on_error(error)),
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                info!("Logged in as {}", ready.user.name);

                let application_id = ready.application.id.get();
                if application_id != setup_config.application_id {
                    warn!(
                        configured = setup_config.application_id,
                        actual = application_id,
                        "DISCORD_CLIENT_ID does not match the logged-in application"
                    );
                }

                let guild_id = serenity::GuildId::new(setup_config.guild_id);
                poise::builtins::register_in_guild(ctx, &framework.options().commands, guild_id)
                    .await?;
                info!(%guild_id, "Registered slash commands");

                Ok(BotData::new(database, setup_config))
            })
        })
        .build();

    // Member listing is needed by /clearbuyers
    let intents = serenity::GatewayIntents::GUILDS | serenity::GatewayIntents::GUILD_MEMBERS;

    info!("Setting up Serenity client for Poise framework...");
    let mut client = serenity::ClientBuilder::new(&config.discord_token, intents)
        .framework(framework)
        .await
        .inspect_err(|e| tracing::error!("Error creating client: {e:?}"))?;

    info!("Starting bot client...");
    client
        .start()
        .await
        .inspect_err(|e| tracing::error!("Client error: {e:?}"))?;
    Ok(())
}
