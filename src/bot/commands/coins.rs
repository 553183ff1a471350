//! Coin adjustment Discord commands - `addcoins`, `removecoins` and `usecoins`.
//!
//! All three go through the same adjustment operation; they differ in the target,
//! the direction, the access requirement and the default reason.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{
            Context,
            commands::{Caller, reason_or},
            replies,
        },
        core::{access::Access, operations, transaction::Direction},
        errors::Result,
    };
    use poise::serenity_prelude as serenity;

    /// Add coins to a user (admin only)
    #[poise::command(slash_command, guild_only, ephemeral)]
    pub async fn addcoins(
        ctx: Context<'_>,
        #[description = "User"] user: serenity::User,
        #[description = "Amount"]
        #[min = 1]
        amount: i64,
        #[description = "Reason"] reason: Option<String>,
    ) -> Result<()> {
        ctx.defer_ephemeral().await?;

        let caller = Caller::of(ctx)?;
        let data = ctx.data();
        let applied = operations::adjust(
            &data.database,
            caller.invocation(&data.config.admins),
            Access::Admin,
            &user.id.to_string(),
            Direction::Credit,
            amount,
            reason_or(reason, "addcoins by admin"),
        )
        .await?;

        ctx.say(replies::coins_added(user.id, amount, applied.ending_balance))
            .await?;
        Ok(())
    }

    /// Remove coins from a user (admin only)
    ///
    /// Removing more coins than the user holds is rejected.
    #[poise::command(slash_command, guild_only, ephemeral)]
    pub async fn removecoins(
        ctx: Context<'_>,
        #[description = "User"] user: serenity::User,
        #[description = "Amount"]
        #[min = 1]
        amount: i64,
        #[description = "Reason"] reason: Option<String>,
    ) -> Result<()> {
        ctx.defer_ephemeral().await?;

        let caller = Caller::of(ctx)?;
        let data = ctx.data();
        let applied = operations::adjust(
            &data.database,
            caller.invocation(&data.config.admins),
            Access::Admin,
            &user.id.to_string(),
            Direction::Debit,
            amount,
            reason_or(reason, "removecoins by admin"),
        )
        .await?;

        ctx.say(replies::coins_removed(user.id, amount, applied.ending_balance))
            .await?;
        Ok(())
    }

    /// Spend coins for entries or perks
    #[poise::command(slash_command, guild_only, ephemeral)]
    pub async fn usecoins(
        ctx: Context<'_>,
        #[description = "Amount"]
        #[min = 1]
        amount: i64,
        #[description = "Reason"] reason: Option<String>,
    ) -> Result<()> {
        ctx.defer_ephemeral().await?;

        let caller = Caller::of(ctx)?;
        let data = ctx.data();
        let applied = operations::adjust(
            &data.database,
            caller.invocation(&data.config.admins),
            Access::Anyone,
            &caller.user_id,
            Direction::Debit,
            amount,
            reason_or(reason, "used by user"),
        )
        .await?;

        ctx.say(replies::coins_used(amount, applied.ending_balance))
            .await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
