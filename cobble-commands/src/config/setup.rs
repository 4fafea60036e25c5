use tracing::info;

use crate::CommandMeta;
use crate::config::embeds::{guild_only_message, setup_complete_embed};
use cobble_core::{Context, Error};
use cobble_database::impls::server_settings::update_server_settings;
use cobble_database::model::settings::ServerSettingsUpdate;

pub const META: CommandMeta = CommandMeta {
    name: "setup",
    desc: "Set the Minecraft server address (administrators only).",
    category: "admin",
    usage: "a setup <ip> <port>",
};

#[poise::command(
    prefix_command,
    slash_command,
    guild_only,
    required_permissions = "ADMINISTRATOR",
    category = "Admin"
)]
pub async fn setup(
    ctx: Context<'_>,
    #[description = "Server address"] ip: String,
    #[description = "Server port"] port: u16,
) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        ctx.say(guild_only_message()).await?;
        return Ok(());
    };

    update_server_settings(
        &ctx.data().db,
        guild_id.get(),
        ServerSettingsUpdate {
            server_ip: Some(ip.clone()),
            server_port: Some(port),
            ..Default::default()
        },
    )
    .await?;
    info!(guild_id = guild_id.get(), %ip, port, "server address configured");

    ctx.send(poise::CreateReply::default().embed(setup_complete_embed(
        &ip,
        port,
        &ctx.author().name,
    )))
    .await?;
    Ok(())
}
