//! Error handler that turns command failures into a single ephemeral reply.
//!
//! Domain rejections (missing permission, insufficient funds) are expected and logged
//! at `warn`; anything else is logged at `error` and answered with a generic failure.

use crate::{bot::BotData, errors::Error};
use tracing::{error, warn};

/// Poise `on_error` hook.
pub async fn on_error(error: poise::FrameworkError<'_, BotData, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            error!("Failed to start bot: {error:?}");
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            let command = &ctx.command().qualified_name;
            if error.is_user_facing() {
                warn!(%command, user_id = %ctx.author().id, "Command rejected: {error}");
            } else {
                error!(%command, user_id = %ctx.author().id, "Command failed: {error:?}");
            }

            let reply = poise::CreateReply::default()
                .content(error.user_message())
                .ephemeral(true);
            if let Err(e) = ctx.send(reply).await {
                error!("Failed to send error message: {e}");
            }
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                error!("Error while handling error: {e}");
            }
        }
    }
}
