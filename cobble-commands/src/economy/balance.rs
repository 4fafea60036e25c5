use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::economy::embeds::balance_embed;
use crate::quests::announce_completions;
use cobble_core::{Context, Error};
use cobble_economy::quests::QuestType;
use cobble_utils::embed::display_name;

pub const META: CommandMeta = CommandMeta {
    name: "balance",
    desc: "Check your balance or someone else's.",
    category: "economy",
    usage: "a balance [user]",
};

#[poise::command(
    prefix_command,
    slash_command,
    aliases("bal", "money"),
    category = "Economy"
)]
pub async fn balance(
    ctx: Context<'_>,
    #[description = "User to look up"] user: Option<serenity::User>,
) -> Result<(), Error> {
    let target = user.as_ref().unwrap_or_else(|| ctx.author());
    let name = display_name(target);
    let economy = &ctx.data().economy;

    let completed = economy
        .record_command_usage(target.id.get(), &name, QuestType::Balance)
        .await?;
    let account = economy.account(target.id.get(), &name).await?;

    ctx.send(poise::CreateReply::default().embed(balance_embed(
        &name,
        target.face(),
        account.balance,
        &ctx.author().name,
    )))
    .await?;

    announce_completions(ctx, &name, &completed).await
}
