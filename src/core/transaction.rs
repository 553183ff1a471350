//! Transaction business logic - balance adjustments and the transaction history.
//!
//! An adjustment mutates the balance and appends its ledger row inside one database
//! transaction, so the recorded `ending_balance` always matches the stored balance and a
//! failed append never leaves an unlogged balance change behind. History queries return
//! the newest rows first and are capped at [`RECENT_TRANSACTION_LIMIT`].

use crate::{
    core::balance::{self, LedgerKey},
    entities::{Transaction, transaction},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, QuerySelect, Select, Set, TransactionTrait, prelude::*};
use tracing::{debug, info};

/// Maximum number of rows returned by the history queries.
pub const RECENT_TRANSACTION_LIMIT: u64 = 5;

/// Whether an adjustment adds or removes coins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Adds coins
    Credit,
    /// Removes coins, rejected when the balance is too low
    Debit,
}

impl Direction {
    /// The signed ledger amount for a positive `amount`.
    #[must_use]
    pub const fn signed(self, amount: i64) -> i64 {
        match self {
            Self::Credit => amount,
            Self::Debit => -amount,
        }
    }
}

/// A requested balance change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adjustment {
    /// Whose balance changes
    pub key: LedgerKey,
    /// Credit or debit
    pub direction: Direction,
    /// Number of coins, strictly positive
    pub amount: i64,
    /// Reason stored with the ledger row
    pub reason: String,
    /// Discord user ID of whoever requested the change
    pub actor_id: String,
}

/// A committed adjustment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
    /// Balance before the change
    pub starting_balance: i64,
    /// Balance after the change
    pub ending_balance: i64,
    /// The appended ledger row
    pub record: transaction::Model,
}

/// Applies `adjustment` and appends its ledger row in a single database transaction.
///
/// Debits that exceed the balance fail with `Error::InsufficientFunds` and write nothing.
pub async fn apply_adjustment(
    db: &DatabaseConnection,
    adjustment: Adjustment,
) -> Result<Applied> {
    let Adjustment {
        key,
        direction,
        amount,
        reason,
        actor_id,
    } = adjustment;

    if amount <= 0 {
        return Err(Error::InvalidAmount { amount });
    }

    let txn = db.begin().await?;

    let ending_balance = match direction {
        Direction::Credit => balance::credit(&txn, &key, amount).await?,
        Direction::Debit => balance::debit(&txn, &key, amount).await?,
    };
    let signed_amount = direction.signed(amount);
    let starting_balance = ending_balance - signed_amount;

    let record = transaction::ActiveModel {
        guild_id: Set(key.guild_id.clone()),
        user_id: Set(key.user_id.clone()),
        amount: Set(signed_amount),
        reason: Set(reason),
        added_by: Set(Some(actor_id)),
        starting_balance: Set(Some(starting_balance)),
        ending_balance: Set(Some(ending_balance)),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;

    info!(
        guild_id = %key.guild_id,
        user_id = %key.user_id,
        amount = signed_amount,
        starting_balance,
        ending_balance,
        transaction_id = record.id,
        "Applied balance adjustment"
    );

    Ok(Applied {
        starting_balance,
        ending_balance,
        record,
    })
}

/// Retrieves the most recent transactions for one user, newest first.
pub async fn recent_transactions(
    db: &DatabaseConnection,
    key: &LedgerKey,
) -> Result<Vec<transaction::Model>> {
    let rows = newest_first(
        Transaction::find()
            .filter(transaction::Column::GuildId.eq(key.guild_id.as_str()))
            .filter(transaction::Column::UserId.eq(key.user_id.as_str())),
    )
    .all(db)
    .await?;

    debug!(user_id = %key.user_id, count = rows.len(), "Loaded recent transactions");
    Ok(rows)
}

/// Retrieves the most recent transactions across a whole guild, newest first.
pub async fn recent_guild_transactions(
    db: &DatabaseConnection,
    guild_id: &str,
) -> Result<Vec<transaction::Model>> {
    newest_first(Transaction::find().filter(transaction::Column::GuildId.eq(guild_id)))
        .all(db)
        .await
        .map_err(Into::into)
}

// Rows sharing a timestamp fall back to insertion order.
fn newest_first(query: Select<Transaction>) -> Select<Transaction> {
    query
        .order_by_desc(transaction::Column::CreatedAt)
        .order_by_desc(transaction::Column::Id)
        .limit(RECENT_TRANSACTION_LIMIT)
}
