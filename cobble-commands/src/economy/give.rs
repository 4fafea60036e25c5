use poise::serenity_prelude as serenity;
use tracing::info;

use crate::CommandMeta;
use crate::economy::embeds::{give_embed, reject_or_propagate};
use cobble_core::{Context, Error};
use cobble_utils::embed::display_name;

pub const META: CommandMeta = CommandMeta {
    name: "give",
    desc: "Give coins to a user (administrators only).",
    category: "admin",
    usage: "a give <user> <amount>",
};

#[poise::command(
    prefix_command,
    slash_command,
    guild_only,
    required_permissions = "ADMINISTRATOR",
    category = "Admin"
)]
pub async fn give(
    ctx: Context<'_>,
    #[description = "User receiving the coins"] user: serenity::User,
    #[description = "Amount of coins"] amount: i64,
) -> Result<(), Error> {
    let result = ctx
        .data()
        .economy
        .give(user.id.get(), &display_name(&user), amount)
        .await;
    let Some(new_balance) = reject_or_propagate(ctx, result).await? else {
        return Ok(());
    };

    info!(
        admin_id = ctx.author().id.get(),
        user_id = user.id.get(),
        amount,
        "coins granted"
    );

    ctx.send(poise::CreateReply::default().embed(give_embed(
        user.id.get(),
        amount,
        new_balance,
        &ctx.author().name,
    )))
    .await?;
    Ok(())
}
