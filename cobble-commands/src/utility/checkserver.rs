use tracing::debug;

use crate::CommandMeta;
use crate::config::embeds::guild_only_message;
use crate::utility::embeds::{server_offline_embed, server_online_embed};
use cobble_core::{Context, Error};
use cobble_database::impls::server_settings::get_server_settings;
use cobble_utils::COMMAND_PREFIX;
use cobble_utils::minecraft::{DEFAULT_PORT, check_server};

pub const META: CommandMeta = CommandMeta {
    name: "checkserver",
    desc: "Check whether the Minecraft server is online.",
    category: "utility",
    usage: "a checkserver",
};

#[poise::command(prefix_command, slash_command, category = "Utility")]
pub async fn checkserver(ctx: Context<'_>) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        ctx.say(guild_only_message()).await?;
        return Ok(());
    };

    let settings = get_server_settings(&ctx.data().db, guild_id.get()).await?;
    let Some((ip, port)) = settings.and_then(|settings| {
        let port = settings.server_port.unwrap_or(DEFAULT_PORT);
        settings.server_ip.map(|ip| (ip, port))
    }) else {
        ctx.send(
            poise::CreateReply::default()
                .content(format!(
                    "❌ Server IP not configured! Use `{}setup` first.",
                    COMMAND_PREFIX
                ))
                .ephemeral(true),
        )
        .await?;
        return Ok(());
    };

    ctx.defer().await?;

    let address = format!("{}:{}", ip, port);
    let requested_by = &ctx.author().name;
    let embed = match check_server(&ip, port).await {
        Ok(status) => server_online_embed(&address, &status, requested_by),
        Err(error) => {
            let error = format!("{error:#}");
            debug!(guild_id = guild_id.get(), %address, %error, "server status check failed");
            server_offline_embed(&address, &error, requested_by)
        }
    };

    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}
