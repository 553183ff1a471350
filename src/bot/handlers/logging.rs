//! Pre-command hook that records every invocation.

use crate::bot::Context;
use tracing::info;

/// Logs the command name, caller and guild before the command runs.
pub async fn log_invocation(ctx: Context<'_>) {
    info!(
        command = %ctx.command().qualified_name,
        user_id = %ctx.author().id,
        guild_id = ?ctx.guild_id(),
        "Command received"
    );
}
