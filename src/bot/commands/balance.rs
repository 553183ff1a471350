//! Balance Discord commands - `balance` and `checkcoins`.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{Context, commands::Caller, replies},
        core::{access::Access, operations},
        errors::Result,
    };
    use poise::serenity_prelude as serenity;

    /// Check your coin balance
    ///
    /// Users who have never received coins have a balance of zero.
    #[poise::command(slash_command, guild_only, ephemeral)]
    pub async fn balance(ctx: Context<'_>) -> Result<()> {
        ctx.defer_ephemeral().await?;

        let caller = Caller::of(ctx)?;
        let data = ctx.data();
        let lookup = operations::view_balance(
            &data.database,
            caller.invocation(&data.config.admins),
            Access::Anyone,
            &caller.user_id,
        )
        .await?;

        ctx.say(replies::own_balance(lookup.amount())).await?;
        Ok(())
    }

    /// Check a user's coin balance (admin only)
    #[poise::command(slash_command, guild_only, ephemeral)]
    pub async fn checkcoins(
        ctx: Context<'_>,
        #[description = "User"] user: serenity::User,
    ) -> Result<()> {
        ctx.defer_ephemeral().await?;

        let caller = Caller::of(ctx)?;
        let data = ctx.data();
        let lookup = operations::view_balance(
            &data.database,
            caller.invocation(&data.config.admins),
            Access::Admin,
            &user.id.to_string(),
        )
        .await?;

        ctx.say(replies::user_balance(user.id, lookup.amount()))
            .await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
