//! Balance business logic - lookups and atomic balance mutations.
//!
//! Mutations never read a balance and write it back. A credit is a single upsert that
//! increments the stored value, and a debit is a single conditional `UPDATE` that only
//! matches when enough coins are available, so concurrent invocations on the same key
//! cannot overwrite each other. Lookups distinguish a missing row from a failed query.

use crate::{
    entities::{CoinBalance, coin_balance},
    errors::{Error, Result},
};
use sea_orm::{
    ConnectionTrait, EntityTrait, QueryFilter, Set,
    prelude::*,
    sea_query::{Expr, OnConflict},
};

/// Identifies one balance: a user within a guild.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LedgerKey {
    /// Discord guild ID
    pub guild_id: String,
    /// Discord user ID
    pub user_id: String,
}

impl LedgerKey {
    /// Builds a key from anything that renders as a Discord ID.
    pub fn new(guild_id: impl ToString, user_id: impl ToString) -> Self {
        Self {
            guild_id: guild_id.to_string(),
            user_id: user_id.to_string(),
        }
    }
}

/// Result of a balance lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceLookup {
    /// A row exists with this balance
    Found(i64),
    /// No row exists yet; the user has never been credited
    Absent,
}

impl BalanceLookup {
    /// The balance, treating an absent row as zero coins.
    #[must_use]
    pub const fn amount(self) -> i64 {
        match self {
            Self::Found(balance) => balance,
            Self::Absent => 0,
        }
    }
}

/// Looks up the balance for `key`.
///
/// A missing row is `BalanceLookup::Absent`; a failed query is an `Error::Database`.
pub async fn get_balance<C>(db: &C, key: &LedgerKey) -> Result<BalanceLookup>
where
    C: ConnectionTrait,
{
    let row = CoinBalance::find_by_id((key.guild_id.clone(), key.user_id.clone()))
        .one(db)
        .await?;

    Ok(row.map_or(BalanceLookup::Absent, |row| {
        BalanceLookup::Found(row.balance)
    }))
}

/// Atomically adds `amount` coins to `key`, creating the row when absent.
///
/// Executes `INSERT ... ON CONFLICT (guild_id, user_id) DO UPDATE SET balance =
/// coin_balances.balance + amount` and returns the resulting balance.
pub async fn credit<C>(db: &C, key: &LedgerKey, amount: i64) -> Result<i64>
where
    C: ConnectionTrait,
{
    if amount <= 0 {
        return Err(Error::InvalidAmount { amount });
    }

    let row = coin_balance::ActiveModel {
        guild_id: Set(key.guild_id.clone()),
        user_id: Set(key.user_id.clone()),
        balance: Set(amount),
    };

    CoinBalance::insert(row)
        .on_conflict(
            OnConflict::columns([coin_balance::Column::GuildId, coin_balance::Column::UserId])
                .value(
                    coin_balance::Column::Balance,
                    Expr::col((CoinBalance, coin_balance::Column::Balance)).add(amount),
                )
                .to_owned(),
        )
        .exec_without_returning(db)
        .await?;

    current_balance(db, key).await
}

/// Atomically removes `amount` coins from `key` if the balance covers it.
///
/// Executes `UPDATE coin_balances SET balance = balance - amount WHERE ... AND
/// balance >= amount`. When no row matches, nothing is written and the error carries
/// the balance observed at that moment (zero for an absent row).
pub async fn debit<C>(db: &C, key: &LedgerKey, amount: i64) -> Result<i64>
where
    C: ConnectionTrait,
{
    if amount <= 0 {
        return Err(Error::InvalidAmount { amount });
    }

    let result = CoinBalance::update_many()
        .col_expr(
            coin_balance::Column::Balance,
            Expr::col(coin_balance::Column::Balance).sub(amount),
        )
        .filter(coin_balance::Column::GuildId.eq(key.guild_id.as_str()))
        .filter(coin_balance::Column::UserId.eq(key.user_id.as_str()))
        .filter(coin_balance::Column::Balance.gte(amount))
        .exec(db)
        .await?;

    if result.rows_affected == 0 {
        let current = get_balance(db, key).await?.amount();
        return Err(Error::InsufficientFunds {
            current,
            required: amount,
        });
    }

    current_balance(db, key).await
}

// Reads back a row that the caller just wrote.
async fn current_balance<C>(db: &C, key: &LedgerKey) -> Result<i64>
where
    C: ConnectionTrait,
{
    match get_balance(db, key).await? {
        BalanceLookup::Found(balance) => Ok(balance),
        BalanceLookup::Absent => Err(Error::Database(DbErr::RecordNotFound(format!(
            "coin balance for user {} in guild {}",
            key.user_id, key.guild_id
        )))),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, PaginatorTrait};

    #[tokio::test]
    async fn test_absent_balance_reads_as_zero_without_creating_a_row() -> Result<()> {
        let db = setup_test_db().await?;
        let key = test_key("user1");

        let lookup = get_balance(&db, &key).await?;
        assert_eq!(lookup, BalanceLookup::Absent);
        assert_eq!(lookup.amount(), 0);
        assert_eq!(CoinBalance::find().count(&db).await?, 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_failed_lookup_is_an_error_not_zero() -> Result<()> {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();

        let result = get_balance(&db, &test_key("user1")).await;
        assert!(matches!(result, Err(Error::Database(_))));

        Ok(())
    }

    #[tokio::test]
    async fn test_credit_creates_then_increments() -> Result<()> {
        let db = setup_test_db().await?;
        let key = test_key("user1");

        assert_eq!(credit(&db, &key, 100).await?, 100);
        assert_eq!(credit(&db, &key, 25).await?, 125);
        assert_eq!(get_balance(&db, &key).await?, BalanceLookup::Found(125));
        assert_eq!(CoinBalance::find().count(&db).await?, 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_balances_are_scoped_by_guild_and_user() -> Result<()> {
        let db = setup_test_db().await?;

        credit(&db, &LedgerKey::new("guild-a", "user1"), 10).await?;
        credit(&db, &LedgerKey::new("guild-b", "user1"), 20).await?;
        credit(&db, &LedgerKey::new("guild-a", "user2"), 30).await?;

        assert_eq!(
            get_balance(&db, &LedgerKey::new("guild-a", "user1")).await?,
            BalanceLookup::Found(10)
        );
        assert_eq!(
            get_balance(&db, &LedgerKey::new("guild-b", "user1")).await?,
            BalanceLookup::Found(20)
        );
        assert_eq!(
            get_balance(&db, &LedgerKey::new("guild-a", "user2")).await?,
            BalanceLookup::Found(30)
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_debit_within_balance() -> Result<()> {
        let db = setup_test_db().await?;
        let key = test_key("user1");

        credit(&db, &key, 100).await?;
        assert_eq!(debit(&db, &key, 30).await?, 70);
        assert_eq!(debit(&db, &key, 70).await?, 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_debit_rejects_overdraft_and_leaves_balance_untouched() -> Result<()> {
        let db = setup_test_db().await?;
        let key = test_key("user1");

        credit(&db, &key, 70).await?;
        let result = debit(&db, &key, 1000).await;
        assert!(matches!(
            result,
            Err(Error::InsufficientFunds {
                current: 70,
                required: 1000
            })
        ));
        assert_eq!(get_balance(&db, &key).await?, BalanceLookup::Found(70));

        Ok(())
    }

    #[tokio::test]
    async fn test_debit_on_absent_row_reports_zero_balance() -> Result<()> {
        let db = setup_test_db().await?;
        let key = test_key("user1");

        let result = debit(&db, &key, 5).await;
        assert!(matches!(
            result,
            Err(Error::InsufficientFunds {
                current: 0,
                required: 5
            })
        ));
        assert_eq!(get_balance(&db, &key).await?, BalanceLookup::Absent);

        Ok(())
    }

    fn balance_row(balance: i64) -> coin_balance::Model {
        coin_balance::Model {
            guild_id: TEST_GUILD_ID.to_string(),
            user_id: "user1".to_string(),
            balance,
        }
    }

    fn executed_sql(db: sea_orm::DatabaseConnection) -> Vec<String> {
        db.into_transaction_log()
            .iter()
            .flat_map(|txn| txn.statements())
            .map(|stmt| stmt.sql.clone())
            .collect()
    }

    #[tokio::test]
    async fn test_credit_increments_in_a_single_upsert() -> Result<()> {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .append_query_results([vec![balance_row(125)]])
            .into_connection();

        assert_eq!(credit(&db, &test_key("user1"), 25).await?, 125);

        // The write comes first and never depends on a previously read value
        let sql = executed_sql(db);
        assert_eq!(sql.len(), 2);
        assert!(sql[0].starts_with(r#"INSERT INTO "coin_balances" ("guild_id", "user_id", "balance")"#));
        assert!(sql[0].contains(
            r#"ON CONFLICT ("guild_id", "user_id") DO UPDATE SET "balance" = "coin_balances"."balance" + $4"#
        ));
        assert!(sql[1].starts_with("SELECT"));

        Ok(())
    }

    #[tokio::test]
    async fn test_debit_is_a_single_conditional_update() -> Result<()> {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .append_query_results([vec![balance_row(70)]])
            .into_connection();

        assert_eq!(debit(&db, &test_key("user1"), 30).await?, 70);

        let sql = executed_sql(db);
        assert_eq!(sql.len(), 2);
        assert!(sql[0].starts_with(r#"UPDATE "coin_balances" SET "balance" = "balance" - $1"#));
        assert!(sql[0].contains(r#""coin_balances"."balance" >= $4"#));
        assert!(sql[1].starts_with("SELECT"));

        Ok(())
    }

    #[tokio::test]
    async fn test_unmatched_debit_writes_nothing_else() -> Result<()> {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .append_query_results([vec![balance_row(70)]])
            .into_connection();

        let result = debit(&db, &test_key("user1"), 1000).await;
        assert!(matches!(
            result,
            Err(Error::InsufficientFunds {
                current: 70,
                required: 1000
            })
        ));

        let sql = executed_sql(db);
        assert_eq!(sql.len(), 2);
        assert!(sql[0].starts_with("UPDATE"));
        assert!(sql[1].starts_with("SELECT"));

        Ok(())
    }

    #[tokio::test]
    async fn test_non_positive_amounts_are_rejected() -> Result<()> {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let key = test_key("user1");

        assert!(matches!(
            credit(&db, &key, 0).await,
            Err(Error::InvalidAmount { amount: 0 })
        ));
        assert!(matches!(
            debit(&db, &key, -5).await,
            Err(Error::InvalidAmount { amount: -5 })
        ));
        assert!(db.into_transaction_log().is_empty());

        Ok(())
    }
}
