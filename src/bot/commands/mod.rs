//! Discord command implementations organized by category.

#![allow(clippy::too_long_first_doc_paragraph)]

/// Balance commands
pub mod balance;

/// Buyer role management
pub mod buyers;

/// Coin adjustment commands
pub mod coins;

/// Transaction history commands
pub mod history;

pub use balance::*;
pub use buyers::*;
pub use coins::*;
pub use history::*;

use crate::{
    bot::Context,
    core::{access::AdminAllowlist, operations::Invocation},
    errors::{Error, Result},
};
use poise::serenity_prelude as serenity;

/// The guild and user behind a command invocation, as ledger IDs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Caller {
    pub guild: serenity::GuildId,
    pub guild_id: String,
    pub user_id: String,
}

impl Caller {
    /// Extracts the caller from a guild command context.
    pub(crate) fn of(ctx: Context<'_>) -> Result<Self> {
        Self::in_guild(ctx.guild_id(), ctx.author().id)
    }

    fn in_guild(guild: Option<serenity::GuildId>, user: serenity::UserId) -> Result<Self> {
        let guild = guild.ok_or(Error::GuildOnly)?;
        Ok(Self {
            guild,
            guild_id: guild.to_string(),
            user_id: user.to_string(),
        })
    }

    pub(crate) fn invocation<'a>(&'a self, admins: &'a AdminAllowlist) -> Invocation<'a> {
        Invocation {
            admins,
            guild_id: &self.guild_id,
            caller_id: &self.user_id,
        }
    }
}

/// Uses the supplied reason unless it is missing or blank.
pub(crate) fn reason_or(reason: Option<String>, default: &str) -> String {
    reason
        .map(|reason| reason.trim().to_string())
        .filter(|reason| !reason.is_empty())
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_caller_keeps_the_guild_it_was_checked_against() {
        let caller =
            Caller::in_guild(Some(serenity::GuildId::new(7)), serenity::UserId::new(42)).unwrap();
        assert_eq!(caller.guild, serenity::GuildId::new(7));
        assert_eq!(caller.guild_id, "7");
        assert_eq!(caller.user_id, "42");

        assert!(matches!(
            Caller::in_guild(None, serenity::UserId::new(42)),
            Err(Error::GuildOnly)
        ));
    }

    #[test]
    fn test_reason_falls_back_when_missing_or_blank() {
        assert_eq!(reason_or(None, "used by user"), "used by user");
        assert_eq!(reason_or(Some("   ".to_string()), "used by user"), "used by user");
        assert_eq!(
            reason_or(Some(" raffle entry ".to_string()), "used by user"),
            "raffle entry"
        );
    }
}
