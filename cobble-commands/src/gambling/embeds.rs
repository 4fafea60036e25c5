use poise::serenity_prelude as serenity;

use cobble_economy::games::{CoinflipOutcome, GambleOutcome, SlotTier};
use cobble_utils::embed::{DEFAULT_EMBED_COLOR, GOLD, GREEN, RED, titled_embed};
use cobble_utils::formatting::format_coins;

pub fn coinflip_embed(outcome: &CoinflipOutcome, player: &str) -> serenity::CreateEmbed {
    let (title, color, label, amount) = if outcome.won() {
        ("🎉 You Won!", GREEN, "💰 Winnings", format!("+{}", format_coins(outcome.stake)))
    } else {
        ("😢 You Lost!", RED, "💸 Lost", format!("-{}", format_coins(outcome.stake)))
    };

    titled_embed(title, color, player)
        .description(format!("The coin landed on **{}**!", outcome.landed.as_str()))
        .field(label, format!("{} coins", amount), true)
        .field(
            "💳 New Balance",
            format!("{} coins", format_coins(outcome.new_balance)),
            true,
        )
}

pub fn gamble_embed(outcome: &GambleOutcome, player: &str) -> serenity::CreateEmbed {
    let reels = outcome.reels.join(" ");
    let (title, color, blurb) = match outcome.tier {
        SlotTier::Jackpot => ("🎰 JACKPOT! 💰", GOLD, "**YOU HIT THE JACKPOT!**"),
        SlotTier::BigWin => ("🎰 Big Win!", GREEN, "You won big!"),
        SlotTier::Win => ("🎰 You Won!", DEFAULT_EMBED_COLOR, "Nice!"),
        SlotTier::Loss => ("🎰 You Lost!", RED, "Better luck next time!"),
    };

    let result_field = if outcome.tier == SlotTier::Loss {
        ("💸 Lost".to_owned(), format!("-{} coins", format_coins(outcome.stake)))
    } else {
        (
            "💰 Winnings".to_owned(),
            format!(
                "+{} coins (x{}!)",
                format_coins(outcome.delta),
                outcome.tier.multiplier()
            ),
        )
    };

    titled_embed(title, color, player)
        .description(format!("{}\n\n{}", reels, blurb))
        .field(result_field.0, result_field.1, true)
        .field(
            "💳 New Balance",
            format!("{} coins", format_coins(outcome.new_balance)),
            true,
        )
}
