use poise::serenity_prelude as serenity;

use cobble_database::model::leveling::LevelUpdate;
use cobble_economy::quests::{QuestNotification, SecretNotification, UserSnapshot};
use cobble_utils::embed::{DEFAULT_EMBED_COLOR, GOLD, PURPLE, titled_embed};
use cobble_utils::formatting::{format_coins, format_hours_minutes, format_progress};

pub fn quest_completed_embed(
    notification: &QuestNotification,
    display_name: &str,
) -> serenity::CreateEmbed {
    titled_embed(
        "🎉 Quest Completed!",
        GOLD,
        format!("Great job, {}!", display_name),
    )
    .description(format!(
        "**{} {}**\n{}",
        notification.emoji, notification.name, notification.description
    ))
    .field(
        "💰 Reward",
        format!("+{} coins", format_coins(notification.reward)),
        false,
    )
}

pub fn level_up_embed(
    display_name: &str,
    avatar_url: String,
    update: &LevelUpdate,
) -> serenity::CreateEmbed {
    titled_embed("🎊 LEVEL UP! 🎊", PURPLE, "Keep chatting to level up!")
        .description(format!(
            "**{}** reached **Level {}**!",
            display_name, update.new_level
        ))
        .thumbnail(avatar_url)
        .field(
            "💰 Reward",
            format!("+{} coins!", format_coins(update.coins_earned)),
            true,
        )
        .field(
            "📊 Next Level",
            format!("{}/{} XP", update.new_xp, update.xp_needed),
            true,
        )
}

pub fn secret_quest_embed(
    display_name: &str,
    notification: &SecretNotification,
) -> serenity::CreateEmbed {
    titled_embed(
        "🎊 SECRET QUEST UNLOCKED! 🎊",
        PURPLE,
        format!(
            "Congratulations, {}! You're one of the few who knows...",
            display_name
        ),
    )
    .description("**🌿 The CBD Master**\nYou discovered and completed the secret quest!")
    .field(
        "💰 Secret Reward",
        format!("+{} coins!", format_coins(notification.reward)),
        false,
    )
    .field(
        "📊 Progress",
        format!("You typed 'cbd' {} times!", notification.progress),
        false,
    )
}

pub fn daily_quests_embed(snapshot: &UserSnapshot) -> serenity::CreateEmbed {
    let mut embed = titled_embed(
        "📋 Your Daily Quests",
        DEFAULT_EMBED_COLOR,
        format!("Resets in {}", format_hours_minutes(snapshot.resets_in_secs)),
    )
    .description("Complete these to earn coins!");

    for status in &snapshot.quests {
        let quest = status.quest;
        embed = embed.field(
            format!("{} {}", quest.emoji, quest.name),
            format!(
                "{}\n{}\n💰 Reward: {} coins",
                quest.description,
                format_progress(
                    status.progress.progress,
                    quest.target,
                    status.progress.completed
                ),
                format_coins(quest.reward)
            ),
            false,
        );
    }

    embed
}
