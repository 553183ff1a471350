//! Database connection and table creation.
//!
//! Tables are generated from the entity definitions with `SeaORM`'s
//! `Schema::create_table_from_entity`, so the schema always matches the Rust models.
//! Creation is idempotent and runs on every startup.

use crate::entities::{CoinBalance, Transaction, TransactionColumn};
use crate::errors::Result;
use sea_orm::sea_query::Index;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Schema};
use tracing::{debug, info};

/// Opens a pooled connection to the database at `database_url`.
///
/// Per-statement sqlx logging is disabled; the ledger operations log at a coarser grain.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(database_url);
    options.sqlx_logging(false);

    let db = Database::connect(options).await?;
    info!(backend = ?db.get_database_backend(), "Connected to database");
    Ok(db)
}

/// Creates the `coin_balances` and `transactions` tables and the history index
/// if they do not exist yet.
pub async fn create_tables<C>(db: &C) -> Result<()>
where
    C: ConnectionTrait,
{
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut balance_table = schema.create_table_from_entity(CoinBalance);
    balance_table.if_not_exists();
    let mut transaction_table = schema.create_table_from_entity(Transaction);
    transaction_table.if_not_exists();

    db.execute(builder.build(&balance_table)).await?;
    db.execute(builder.build(&transaction_table)).await?;

    // Serves the newest-first history queries
    let history_index = Index::create()
        .if_not_exists()
        .name("idx_transactions_guild_user_created")
        .table(Transaction)
        .col(TransactionColumn::GuildId)
        .col(TransactionColumn::UserId)
        .col(TransactionColumn::CreatedAt)
        .to_owned();
    db.execute(builder.build(&history_index)).await?;

    debug!("Ledger tables ensured");
    Ok(())
}
