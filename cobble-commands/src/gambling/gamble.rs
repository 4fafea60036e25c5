use crate::CommandMeta;
use crate::economy::embeds::reject_or_propagate;
use crate::gambling::embeds::gamble_embed;
use crate::quests::announce_completions;
use cobble_core::{Context, Error};
use cobble_utils::embed::display_name;

pub const META: CommandMeta = CommandMeta {
    name: "gamble",
    desc: "Spin the slot machine for up to 100x. Use 'all' to bet everything.",
    category: "gambling",
    usage: "a gamble <amount|all>",
};

#[poise::command(
    prefix_command,
    slash_command,
    aliases("slots", "slot"),
    category = "Gambling"
)]
pub async fn gamble(
    ctx: Context<'_>,
    #[description = "Coins to bet, or 'all'"] amount: String,
) -> Result<(), Error> {
    let name = display_name(ctx.author());
    let result = ctx
        .data()
        .economy
        .gamble(ctx.author().id.get(), &name, &amount)
        .await;
    let Some(outcome) = reject_or_propagate(ctx, result).await? else {
        return Ok(());
    };

    ctx.send(poise::CreateReply::default().embed(gamble_embed(&outcome, &ctx.author().name)))
        .await?;

    announce_completions(ctx, &name, &outcome.notifications).await
}
