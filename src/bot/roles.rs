//! Guild role maintenance.

use crate::errors::Result;
use poise::serenity_prelude as serenity;
use tracing::{info, warn};

/// Discord's maximum page size for the member list endpoint.
const MEMBER_PAGE_SIZE: u64 = 1000;

/// Outcome of stripping a role from every member that holds it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoleSweep {
    /// Members the role was removed from
    pub removed: usize,
    /// Members whose removal request failed
    pub failed: usize,
}

/// Removes `role_id` from every member of `guild_id` holding it.
///
/// Members are paged through in ID order. A failed removal is logged and counted,
/// and the sweep carries on with the remaining members; failing to list members aborts.
pub async fn clear_role(
    http: &serenity::Http,
    guild_id: serenity::GuildId,
    role_id: serenity::RoleId,
) -> Result<RoleSweep> {
    let mut sweep = RoleSweep::default();
    let mut after: Option<serenity::UserId> = None;

    loop {
        let page = guild_id.members(http, Some(MEMBER_PAGE_SIZE), after).await?;

        for member in page.iter().filter(|member| member.roles.contains(&role_id)) {
            match member.remove_role(http, role_id).await {
                Ok(()) => sweep.removed += 1,
                Err(e) => {
                    warn!(user_id = %member.user.id, error = %e, "Failed to remove role");
                    sweep.failed += 1;
                }
            }
        }

        let full_page = u64::try_from(page.len()).is_ok_and(|len| len == MEMBER_PAGE_SIZE);
        match page.last() {
            Some(last) if full_page => after = Some(last.user.id),
            _ => break,
        }
    }

    info!(
        %guild_id,
        %role_id,
        removed = sweep.removed,
        failed = sweep.failed,
        "Cleared role from members"
    );
    Ok(sweep)
}
