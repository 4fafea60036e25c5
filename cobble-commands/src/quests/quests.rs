use crate::CommandMeta;
use crate::quests::announce_completions;
use crate::quests::embeds::daily_quests_embed;
use cobble_core::{Context, Error};
use cobble_economy::quests::QuestType;
use cobble_utils::embed::display_name;

pub const META: CommandMeta = CommandMeta {
    name: "quests",
    desc: "View your daily quests and when they reset.",
    category: "quests",
    usage: "a quests",
};

#[poise::command(
    prefix_command,
    slash_command,
    aliases("quest", "daily"),
    category = "Quests"
)]
pub async fn quests(ctx: Context<'_>) -> Result<(), Error> {
    let user_id = ctx.author().id.get();
    let name = display_name(ctx.author());
    let economy = &ctx.data().economy;

    let completed = economy
        .record_command_usage(user_id, &name, QuestType::CheckQuest)
        .await?;
    let snapshot = economy.snapshot(user_id, &name).await?;

    ctx.send(poise::CreateReply::default().embed(daily_quests_embed(&snapshot)))
        .await?;

    announce_completions(ctx, &name, &completed).await
}
