//! Coin balance entity - one row per (`guild_id`, `user_id`) pair.
//!
//! Rows are created by the first credit and never deleted.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Coin balance database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "coin_balances")]
pub struct Model {
    /// Discord guild ID owning the balance
    #[sea_orm(primary_key, auto_increment = false)]
    pub guild_id: String,
    /// Discord user ID holding the balance
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,
    /// Current number of coins, never negative
    pub balance: i64,
}

/// Defines relationships between CoinBalance and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
