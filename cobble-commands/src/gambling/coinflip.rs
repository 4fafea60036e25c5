use crate::CommandMeta;
use crate::economy::embeds::reject_or_propagate;
use crate::gambling::embeds::coinflip_embed;
use crate::quests::announce_completions;
use cobble_core::{Context, Error};
use cobble_utils::embed::display_name;

pub const META: CommandMeta = CommandMeta {
    name: "coinflip",
    desc: "Double or nothing on a coin toss. Use 'all' to bet everything.",
    category: "gambling",
    usage: "a coinflip <amount|all> <heads|tails>",
};

#[poise::command(
    prefix_command,
    slash_command,
    aliases("cf", "flip"),
    category = "Gambling"
)]
pub async fn coinflip(
    ctx: Context<'_>,
    #[description = "Coins to bet, or 'all'"] amount: String,
    #[description = "heads or tails"] side: String,
) -> Result<(), Error> {
    let name = display_name(ctx.author());
    let result = ctx
        .data()
        .economy
        .coinflip(ctx.author().id.get(), &name, &amount, &side)
        .await;
    let Some(outcome) = reject_or_propagate(ctx, result).await? else {
        return Ok(());
    };

    ctx.send(poise::CreateReply::default().embed(coinflip_embed(&outcome, &ctx.author().name)))
        .await?;

    announce_completions(ctx, &name, &outcome.notifications).await
}
