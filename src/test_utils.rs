//! Shared test utilities.
//!
//! Helpers for setting up an in-memory database and building ledger inputs with
//! sensible defaults.

use crate::{
    core::{
        access::AdminAllowlist,
        balance::LedgerKey,
        transaction::{Adjustment, Direction},
    },
    errors::Result,
};
use sea_orm::DatabaseConnection;

/// Guild used by every test key.
pub const TEST_GUILD_ID: &str = "900000000000000001";
/// The only admin in [`test_allowlist`].
pub const TEST_ADMIN_ID: &str = "100000000000000001";
/// A user that is not an admin.
pub const TEST_MEMBER_ID: &str = "200000000000000002";

/// Creates an in-memory `SQLite` database with all tables initialized.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Key for `user_id` in the test guild.
pub fn test_key(user_id: &str) -> LedgerKey {
    LedgerKey::new(TEST_GUILD_ID, user_id)
}

/// Allowlist containing only [`TEST_ADMIN_ID`].
pub fn test_allowlist() -> AdminAllowlist {
    AdminAllowlist::parse(TEST_ADMIN_ID).unwrap_or_default()
}

/// A credit of `amount` performed by the test admin.
pub fn credit_of(key: &LedgerKey, amount: i64) -> Adjustment {
    Adjustment {
        key: key.clone(),
        direction: Direction::Credit,
        amount,
        reason: "Test credit".to_string(),
        actor_id: TEST_ADMIN_ID.to_string(),
    }
}

/// A debit of `amount` performed by the test admin.
pub fn debit_of(key: &LedgerKey, amount: i64) -> Adjustment {
    Adjustment {
        direction: Direction::Debit,
        reason: "Test debit".to_string(),
        ..credit_of(key, amount)
    }
}
