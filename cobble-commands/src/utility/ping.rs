use crate::CommandMeta;
use crate::utility::embeds::pong_embed;
use cobble_core::{Context, Error};

pub const META: CommandMeta = CommandMeta {
    name: "ping",
    desc: "Check the gateway latency.",
    category: "utility",
    usage: "a ping",
};

#[poise::command(prefix_command, slash_command, category = "Utility")]
pub async fn ping(ctx: Context<'_>) -> Result<(), Error> {
    let latency = ctx.ping().await;
    ctx.send(poise::CreateReply::default().embed(pong_embed(latency.as_millis())))
        .await?;
    Ok(())
}
