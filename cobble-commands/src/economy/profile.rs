use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::economy::embeds::profile_embed;
use cobble_core::{Context, Error};
use cobble_utils::embed::display_name;

pub const META: CommandMeta = CommandMeta {
    name: "profile",
    desc: "View your profile or someone else's.",
    category: "economy",
    usage: "a profile [user]",
};

#[poise::command(
    prefix_command,
    slash_command,
    aliases("stats", "me"),
    category = "Economy"
)]
pub async fn profile(
    ctx: Context<'_>,
    #[description = "User to look up"] user: Option<serenity::User>,
) -> Result<(), Error> {
    let target = user.as_ref().unwrap_or_else(|| ctx.author());
    let name = display_name(target);

    let snapshot = ctx.data().economy.snapshot(target.id.get(), &name).await?;

    ctx.send(poise::CreateReply::default().embed(profile_embed(
        &name,
        target.face(),
        &snapshot.account,
        snapshot.completed_count(),
        &ctx.author().name,
    )))
    .await?;
    Ok(())
}
