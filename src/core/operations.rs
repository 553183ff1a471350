//! Command operations - one parameterized operation per kind of command.
//!
//! `/balance` and `/checkcoins`, `/addcoins`, `/removecoins` and `/usecoins`, and the
//! history commands differ only in whose ledger they touch and who may run them. Each
//! operation takes the target explicitly plus an [`Access`] requirement, and performs the
//! authorization check before any database statement runs.

use crate::{
    core::{
        access::{Access, AdminAllowlist},
        balance::{self, BalanceLookup, LedgerKey},
        transaction::{self, Adjustment, Applied, Direction},
    },
    entities::transaction::Model as TransactionModel,
    errors::{Error, Result},
};
use sea_orm::DatabaseConnection;
use tracing::warn;

/// Who is invoking a command, and where.
#[derive(Debug, Clone, Copy)]
pub struct Invocation<'a> {
    /// Admin allowlist from the configuration
    pub admins: &'a AdminAllowlist,
    /// Guild the command was used in
    pub guild_id: &'a str,
    /// Discord user ID of the caller
    pub caller_id: &'a str,
}

impl Invocation<'_> {
    /// Ledger key for `user_id` in the invocation's guild.
    #[must_use]
    pub fn key_for(&self, user_id: &str) -> LedgerKey {
        LedgerKey::new(self.guild_id, user_id)
    }

    fn authorize(&self, access: Access) -> Result<()> {
        access
            .authorize(self.admins, self.caller_id)
            .inspect_err(|_| {
                warn!(
                    caller_id = self.caller_id,
                    guild_id = self.guild_id,
                    "Rejected unauthorized command"
                );
            })
    }
}

/// Which history a listing covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryScope<'a> {
    /// One user's transactions
    User(&'a str),
    /// Every transaction in the guild
    Guild,
}

/// Reads `target_id`'s balance.
pub async fn view_balance(
    db: &DatabaseConnection,
    invocation: Invocation<'_>,
    access: Access,
    target_id: &str,
) -> Result<BalanceLookup> {
    invocation.authorize(access)?;
    balance::get_balance(db, &invocation.key_for(target_id)).await
}

/// Credits or debits `target_id` by `amount`, recording the caller as the actor.
pub async fn adjust(
    db: &DatabaseConnection,
    invocation: Invocation<'_>,
    access: Access,
    target_id: &str,
    direction: Direction,
    amount: i64,
    reason: String,
) -> Result<Applied> {
    invocation.authorize(access)?;
    if amount <= 0 {
        return Err(Error::InvalidAmount { amount });
    }

    let adjustment = Adjustment {
        key: invocation.key_for(target_id),
        direction,
        amount,
        reason,
        actor_id: invocation.caller_id.to_string(),
    };
    transaction::apply_adjustment(db, adjustment).await
}

/// Lists the most recent transactions in `scope`, newest first.
pub async fn view_transactions(
    db: &DatabaseConnection,
    invocation: Invocation<'_>,
    access: Access,
    scope: HistoryScope<'_>,
) -> Result<Vec<TransactionModel>> {
    invocation.authorize(access)?;
    match scope {
        HistoryScope::User(user_id) => {
            transaction::recent_transactions(db, &invocation.key_for(user_id)).await
        }
        HistoryScope::Guild => {
            transaction::recent_guild_transactions(db, invocation.guild_id).await
        }
    }
}
