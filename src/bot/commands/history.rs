//! Transaction history Discord commands - `transactions`, `usertransactions` and
//! `guildtransactions`.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{Context, commands::Caller, replies},
        core::{
            access::Access,
            operations::{self, HistoryScope},
        },
        errors::Result,
    };
    use poise::serenity_prelude as serenity;

    /// View your recent coin activity
    #[poise::command(slash_command, guild_only, ephemeral)]
    pub async fn transactions(ctx: Context<'_>) -> Result<()> {
        ctx.defer_ephemeral().await?;

        let caller = Caller::of(ctx)?;
        let data = ctx.data();
        let rows = operations::view_transactions(
            &data.database,
            caller.invocation(&data.config.admins),
            Access::Anyone,
            HistoryScope::User(&caller.user_id),
        )
        .await?;

        let reply = match replies::transactions_embed(
            "📑 Your Recent Transactions:",
            replies::OWN_HISTORY_COLOUR,
            &rows,
            false,
        ) {
            Some(embed) => poise::CreateReply::default().embed(embed),
            None => poise::CreateReply::default().content(replies::NO_TRANSACTIONS),
        };
        ctx.send(reply.ephemeral(true)).await?;
        Ok(())
    }

    /// View a user's recent coin activity (admin only)
    #[poise::command(slash_command, guild_only, ephemeral)]
    pub async fn usertransactions(
        ctx: Context<'_>,
        #[description = "User"] user: serenity::User,
    ) -> Result<()> {
        ctx.defer_ephemeral().await?;

        let caller = Caller::of(ctx)?;
        let data = ctx.data();
        let target_id = user.id.to_string();
        let rows = operations::view_transactions(
            &data.database,
            caller.invocation(&data.config.admins),
            Access::Admin,
            HistoryScope::User(&target_id),
        )
        .await?;

        let reply = match replies::transactions_embed(
            format!("📑 Transactions for {}:", user.name),
            replies::ADMIN_HISTORY_COLOUR,
            &rows,
            false,
        ) {
            Some(embed) => poise::CreateReply::default().embed(embed),
            None => poise::CreateReply::default().content(replies::no_transactions_for(user.id)),
        };
        ctx.send(reply.ephemeral(true)).await?;
        Ok(())
    }

    /// View the latest coin activity across the server (admin only)
    #[poise::command(slash_command, guild_only, ephemeral)]
    pub async fn guildtransactions(ctx: Context<'_>) -> Result<()> {
        ctx.defer_ephemeral().await?;

        let caller = Caller::of(ctx)?;
        let data = ctx.data();
        let rows = operations::view_transactions(
            &data.database,
            caller.invocation(&data.config.admins),
            Access::Admin,
            HistoryScope::Guild,
        )
        .await?;

        let reply = match replies::transactions_embed(
            "📑 Recent Server Transactions:",
            replies::ADMIN_HISTORY_COLOUR,
            &rows,
            true,
        ) {
            Some(embed) => poise::CreateReply::default().embed(embed),
            None => poise::CreateReply::default().content(replies::NO_TRANSACTIONS),
        };
        ctx.send(reply.ephemeral(true)).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
