use crate::CommandMeta;
use crate::economy::embeds::leaderboard_embed;
use crate::quests::announce_completions;
use cobble_core::{Context, Error};
use cobble_economy::quests::QuestType;
use cobble_utils::embed::{display_name, rejection_embed};

pub const META: CommandMeta = CommandMeta {
    name: "leaderboard",
    desc: "Show the ten richest members.",
    category: "economy",
    usage: "a leaderboard",
};

const LEADERBOARD_SIZE: u32 = 10;

#[poise::command(
    prefix_command,
    slash_command,
    aliases("lb", "top"),
    category = "Economy"
)]
pub async fn leaderboard(ctx: Context<'_>) -> Result<(), Error> {
    let name = display_name(ctx.author());
    let economy = &ctx.data().economy;

    let completed = economy
        .record_command_usage(ctx.author().id.get(), &name, QuestType::Leaderboard)
        .await?;
    let entries = economy.leaderboard(LEADERBOARD_SIZE).await?;

    let embed = if entries.is_empty() {
        rejection_embed("No users found in the leaderboard!")
    } else {
        leaderboard_embed(&entries, &ctx.author().name)
    };
    ctx.send(poise::CreateReply::default().embed(embed)).await?;

    announce_completions(ctx, &name, &completed).await
}
