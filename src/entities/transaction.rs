//! Transaction entity - the append-only coin ledger.
//!
//! Each row records one balance adjustment for a `guild_id`/`user_id` pair: the signed
//! `amount`, a `reason`, who performed it (`added_by`) and the balance before and after.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Transaction database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    /// Unique identifier for the transaction
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Discord guild ID the transaction belongs to
    pub guild_id: String,
    /// Discord user ID whose balance changed
    pub user_id: String,
    /// Signed amount (positive for credits, negative for debits)
    pub amount: i64,
    /// Human-readable reason
    pub reason: String,
    /// Discord user ID who initiated the change
    pub added_by: Option<String>,
    /// Balance before the change
    pub starting_balance: Option<i64>,
    /// Balance after the change
    pub ending_balance: Option<i64>,
    /// When the transaction was recorded
    pub created_at: DateTimeUtc,
}

/// Defines relationships between Transaction and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
