/// Admin allowlist and access requirements
pub mod access;
/// Balance lookups and atomic balance mutations
pub mod balance;
/// Parameterized command operations
pub mod operations;
/// Balance adjustments and transaction history
pub mod transaction;
