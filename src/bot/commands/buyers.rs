//! Buyer role Discord command - `clearbuyers`.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{Context, commands::Caller, replies, roles},
        core::access::Access,
        errors::Result,
    };
    use poise::serenity_prelude as serenity;

    /// Remove the buyer role from every member (admin only)
    ///
    /// Does not touch any coin balances.
    #[poise::command(slash_command, guild_only, ephemeral)]
    pub async fn clearbuyers(ctx: Context<'_>) -> Result<()> {
        ctx.defer_ephemeral().await?;

        let caller = Caller::of(ctx)?;
        let data = ctx.data();
        Access::Admin.authorize(&data.config.admins, &caller.user_id)?;

        let Some(role_id) = data.config.buyer_role_id else {
            ctx.say(replies::BUYER_ROLE_MISSING).await?;
            return Ok(());
        };
        let sweep =
            roles::clear_role(ctx.http(), caller.guild, serenity::RoleId::new(role_id)).await?;

        ctx.say(replies::buyers_cleared(sweep.removed, sweep.failed))
            .await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
