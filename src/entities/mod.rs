//! Entity module - Contains the SeaORM entity definitions for the ledger tables.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod coin_balance;
pub mod transaction;

pub use coin_balance::{Entity as CoinBalance, Model as CoinBalanceModel};
pub use transaction::{
    Column as TransactionColumn, Entity as Transaction, Model as TransactionModel,
};
