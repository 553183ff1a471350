//! Reply formatting - turns operation results into Discord message text and embeds.
//!
//! Everything here is pure so the exact wording can be tested without a gateway.

use crate::entities::transaction::Model as TransactionModel;
use poise::serenity_prelude as serenity;

/// Embed colour for a user's own history.
pub const OWN_HISTORY_COLOUR: u32 = 0x00AE86;
/// Embed colour for the admin history views.
pub const ADMIN_HISTORY_COLOUR: u32 = 0xFFD700;

/// Reply when a listing has no rows.
pub const NO_TRANSACTIONS: &str = "📭 No transactions found.";
/// Reply when `/clearbuyers` is used without a configured role.
pub const BUYER_ROLE_MISSING: &str = "⚠️ No buyer role is configured for this bot.";

/// `/balance` reply.
#[must_use]
pub fn own_balance(balance: i64) -> String {
    format!("💰 Your balance is **{balance}** coins.")
}

/// `/checkcoins` reply.
#[must_use]
pub fn user_balance(user_id: serenity::UserId, balance: i64) -> String {
    format!("🔍 <@{user_id}> has **{balance}** coins.")
}

/// `/addcoins` reply.
#[must_use]
pub fn coins_added(user_id: serenity::UserId, amount: i64, new_balance: i64) -> String {
    format!("✅ Added **{amount}** coins for <@{user_id}>. New balance: **{new_balance}**")
}

/// `/removecoins` reply.
#[must_use]
pub fn coins_removed(user_id: serenity::UserId, amount: i64, new_balance: i64) -> String {
    format!("✅ Removed **{amount}** coins for <@{user_id}>. New balance: **{new_balance}**")
}

/// `/usecoins` reply.
#[must_use]
pub fn coins_used(amount: i64, remaining: i64) -> String {
    format!("✅ You used **{amount}** coins. Remaining: **{remaining}**")
}

/// Empty-listing reply for another user's history.
#[must_use]
pub fn no_transactions_for(user_id: serenity::UserId) -> String {
    format!("📭 No transactions found for <@{user_id}>.")
}

/// `/clearbuyers` reply.
#[must_use]
pub fn buyers_cleared(removed: usize, failed: usize) -> String {
    let noun = if removed == 1 { "member" } else { "members" };
    let mut reply = format!("🧹 Removed the buyer role from **{removed}** {noun}.");
    if failed > 0 {
        reply.push_str(&format!(" ⚠️ {failed} removal(s) failed, check the logs."));
    }
    reply
}

/// One history line: sign marker, amount, reason, and a relative timestamp.
///
/// With `show_user` the affected user is mentioned, for guild-wide listings.
#[must_use]
pub fn transaction_line(row: &TransactionModel, show_user: bool) -> String {
    let marker = if row.amount >= 0 { "🟢" } else { "🔴" };
    let who = if show_user {
        format!("<@{}> ", row.user_id)
    } else {
        String::new()
    };
    format!(
        "{marker} {who}**{}** coins — *{}*\n🕒 <t:{}:R>",
        row.amount,
        row.reason,
        row.created_at.timestamp()
    )
}

/// Builds the history embed, or `None` when there is nothing to list.
#[must_use]
pub fn transactions_embed(
    title: impl Into<String>,
    colour: u32,
    rows: &[TransactionModel],
    show_user: bool,
) -> Option<serenity::CreateEmbed> {
    if rows.is_empty() {
        return None;
    }

    let description = rows
        .iter()
        .map(|row| transaction_line(row, show_user))
        .collect::<Vec<_>>()
        .join("\n\n");

    Some(
        serenity::CreateEmbed::default()
            .title(title)
            .description(description)
            .colour(colour),
    )
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use chrono::{TimeZone, Utc};

    fn row(amount: i64, reason: &str) -> TransactionModel {
        TransactionModel {
            id: 1,
            guild_id: "1".to_string(),
            user_id: "42".to_string(),
            amount,
            reason: reason.to_string(),
            added_by: None,
            starting_balance: None,
            ending_balance: None,
            created_at: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
        }
    }

    #[test]
    fn test_credit_line_uses_green_marker_and_relative_timestamp() {
        assert_eq!(
            transaction_line(&row(100, "addcoins by admin"), false),
            "🟢 **100** coins — *addcoins by admin*\n🕒 <t:1700000000:R>"
        );
    }

    #[test]
    fn test_debit_line_uses_red_marker() {
        let line = transaction_line(&row(-30, "used by user"), false);
        assert!(line.starts_with("🔴 **-30** coins"));
    }

    #[test]
    fn test_guild_listing_mentions_the_user() {
        let line = transaction_line(&row(5, "bonus"), true);
        assert!(line.starts_with("🟢 <@42> **5** coins"));
    }

    #[test]
    fn test_empty_history_has_no_embed() {
        assert!(transactions_embed("📑 Your Recent Transactions:", OWN_HISTORY_COLOUR, &[], false)
            .is_none());
        assert!(
            transactions_embed(
                "📑 Your Recent Transactions:",
                OWN_HISTORY_COLOUR,
                &[row(1, "x")],
                false
            )
            .is_some()
        );
    }

    #[test]
    fn test_balance_replies() {
        let user = serenity::UserId::new(42);
        assert_eq!(own_balance(0), "💰 Your balance is **0** coins.");
        assert_eq!(user_balance(user, 70), "🔍 <@42> has **70** coins.");
        assert_eq!(
            coins_added(user, 100, 100),
            "✅ Added **100** coins for <@42>. New balance: **100**"
        );
        assert_eq!(coins_used(30, 70), "✅ You used **30** coins. Remaining: **70**");
    }

    #[test]
    fn test_buyers_cleared_mentions_failures_only_when_present() {
        assert_eq!(
            buyers_cleared(1, 0),
            "🧹 Removed the buyer role from **1** member."
        );
        assert!(buyers_cleared(3, 2).contains("2 removal(s) failed"));
    }
}
