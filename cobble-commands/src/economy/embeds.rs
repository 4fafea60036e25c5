use poise::serenity_prelude as serenity;

use cobble_core::{Context, Error};
use cobble_database::model::leveling::xp_needed;
use cobble_database::model::user::{LeaderboardEntry, UserAccount};
use cobble_economy::EconomyError;
use cobble_economy::quests::catalog::DAILY_QUEST_COUNT;
use cobble_utils::embed::{DEFAULT_EMBED_COLOR, GOLD, GREEN, rejection_embed, titled_embed};
use cobble_utils::formatting::format_coins;

const MEDALS: [&str; 3] = ["🥇", "🥈", "🥉"];

/// User-facing text for a rejected economy operation.
pub fn rejection_text(error: &EconomyError) -> String {
    match error {
        EconomyError::InsufficientFunds { balance, .. } => format!(
            "You don't have enough coins! Your balance: {} coins",
            format_coins(*balance)
        ),
        other => other.to_string(),
    }
}

/// Reply with a rejection embed for user errors and pass storage errors on.
///
/// Returns `Ok(None)` once the rejection has been shown.
pub async fn reject_or_propagate<T>(
    ctx: Context<'_>,
    result: Result<T, EconomyError>,
) -> Result<Option<T>, Error> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(error) if error.is_rejection() => {
            ctx.send(poise::CreateReply::default().embed(rejection_embed(rejection_text(&error))))
                .await?;
            Ok(None)
        }
        Err(error) => Err(error.into()),
    }
}

pub fn balance_embed(
    display_name: &str,
    avatar_url: String,
    balance: i64,
    requested_by: &str,
) -> serenity::CreateEmbed {
    titled_embed(
        format!("💰 {}'s Balance", display_name),
        GOLD,
        format!("Requested by {}", requested_by),
    )
    .description(format!("**{}** coins", format_coins(balance)))
    .thumbnail(avatar_url)
}

pub fn profile_embed(
    display_name: &str,
    avatar_url: String,
    account: &UserAccount,
    completed_today: usize,
    requested_by: &str,
) -> serenity::CreateEmbed {
    titled_embed(
        format!("📊 {}'s Profile", display_name),
        DEFAULT_EMBED_COLOR,
        format!("Requested by {}", requested_by),
    )
    .description(format!(
        "⭐ Level {} | {}/{} XP",
        account.level,
        account.xp,
        xp_needed(account.level)
    ))
    .thumbnail(avatar_url)
    .field("💰 Balance", format!("{} coins", format_coins(account.balance)), true)
    .field(
        "📈 Total Earned",
        format!("{} coins", format_coins(account.total_earned)),
        true,
    )
    .field(
        "📉 Total Spent",
        format!("{} coins", format_coins(account.total_spent)),
        true,
    )
    .field(
        "✅ Quests Completed Today",
        format!("{}/{}", completed_today, DAILY_QUEST_COUNT),
        true,
    )
}

pub fn leaderboard_embed(entries: &[LeaderboardEntry], requested_by: &str) -> serenity::CreateEmbed {
    let mut embed = titled_embed(
        "🏆 Richest Players Leaderboard",
        GOLD,
        format!("Requested by {}", requested_by),
    )
    .description(format!("Top {} wealthiest members", entries.len()));

    for (idx, entry) in entries.iter().enumerate() {
        embed = embed.field(
            format!("{} {}", rank_label(idx), entry.display_name),
            format!("💰 {} coins", format_coins(entry.balance)),
            false,
        );
    }

    embed
}

pub fn give_embed(target_user_id: u64, amount: i64, new_balance: i64, given_by: &str) -> serenity::CreateEmbed {
    titled_embed("✅ Coins Given!", GREEN, format!("Given by {}", given_by))
        .description(format!(
            "Gave **{}** coins to <@{}>",
            format_coins(amount),
            target_user_id
        ))
        .field("💳 New Balance", format!("{} coins", format_coins(new_balance)), true)
}

fn rank_label(idx: usize) -> String {
    MEDALS
        .get(idx)
        .map(|medal| (*medal).to_owned())
        .unwrap_or_else(|| format!("#{}", idx + 1))
}

#[cfg(test)]
mod tests {
    use cobble_economy::EconomyError;

    use super::{rank_label, rejection_text};

    #[test]
    fn top_three_get_medals() {
        assert_eq!(rank_label(0), "🥇");
        assert_eq!(rank_label(2), "🥉");
        assert_eq!(rank_label(3), "#4");
    }

    #[test]
    fn insufficient_funds_shows_the_balance() {
        let text = rejection_text(&EconomyError::InsufficientFunds {
            balance: 1_500,
            stake: 2_000,
        });
        assert_eq!(text, "You don't have enough coins! Your balance: 1,500 coins");
        assert_eq!(
            rejection_text(&EconomyError::validation("Amount must be positive!")),
            "Amount must be positive!"
        );
    }
}
