//! Unified error type for the bot.
//!
//! Domain rejections (authorization, insufficient funds, bad amounts) carry
//! enough data to produce a user-facing reply. Everything else is treated as
//! an unexpected failure and reported generically.

use thiserror::Error;

/// Reply sent for any error that is not a domain rejection.
pub const GENERIC_FAILURE: &str = "❌ Something went wrong. Try again later.";

/// All errors produced by the bot.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid or missing configuration
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the problem
        message: String,
    },

    /// The caller is not in the admin allowlist
    #[error("User {user_id} is not allowed to use this command")]
    Unauthorized {
        /// Discord user ID of the caller
        user_id: String,
    },

    /// A debit exceeds the current balance
    #[error("Insufficient funds: balance {current}, required {required}")]
    InsufficientFunds {
        /// Balance at the time of the attempt
        current: i64,
        /// Amount that was requested
        required: i64,
    },

    /// Amounts must be strictly positive
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The rejected amount
        amount: i64,
    },

    /// The command was invoked outside of a guild
    #[error("Command used outside of a guild")]
    GuildOnly,

    /// Database failure
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O failure (liveness listener)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serenity/Poise framework failure
    #[error("Serenity/Poise framework error: {0}")]
    Framework(Box<poise::serenity_prelude::Error>),
}

impl From<poise::serenity_prelude::Error> for Error {
    fn from(value: poise::serenity_prelude::Error) -> Self {
        Self::Framework(Box::new(value))
    }
}

impl Error {
    /// Whether this error is an expected rejection rather than a failure.
    #[must_use]
    pub const fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Self::Unauthorized { .. }
                | Self::InsufficientFunds { .. }
                | Self::InvalidAmount { .. }
                | Self::GuildOnly
        )
    }

    /// The message shown to the invoking user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Unauthorized { .. } => {
                "❌ You do not have permission to use this command.".to_string()
            }
            Self::InsufficientFunds { current, required } => {
                format!("❌ Not enough coins. You have **{current}**, need **{required}**.")
            }
            Self::InvalidAmount { .. } => "❌ Amount must be a positive whole number.".to_string(),
            Self::GuildOnly => "❌ This command can only be used inside a server.".to_string(),
            _ => GENERIC_FAILURE.to_string(),
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
