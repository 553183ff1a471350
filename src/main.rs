#![allow(clippy::result_large_err)]

use coin_ledger_bot::{
    bot,
    config::{AppConfig, database},
    errors::Result,
    server,
};
use dotenvy::dotenv;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; variables may also be set externally
    dotenv().ok();

    // 3. Load and validate configuration before touching the network
    let config = AppConfig::from_env()
        .inspect_err(|e| error!("Invalid configuration: {e}"))?;
    info!(?config, "Configuration loaded");
    let config = Arc::new(config);

    // 4. Connect to the database and make sure the ledger tables exist
    let db = database::create_connection(&config.database_url)
        .await
        .inspect_err(|e| error!("Failed to connect to database: {e}"))?;
    database::create_tables(&db)
        .await
        .inspect(|_| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to initialize database: {e}"))?;

    // 5. Liveness endpoint for the hosting platform
    let port = config.port;
    tokio::spawn(async move {
        if let Err(e) = server::serve(port).await {
            error!("Liveness server stopped: {e}");
        }
    });

    // 6. Run the bot
    bot::run_bot(config, db).await
}
