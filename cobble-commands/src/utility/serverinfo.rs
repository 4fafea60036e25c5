use crate::CommandMeta;
use crate::config::embeds::{guild_only_message, not_configured_message, server_info_embed};
use crate::quests::announce_completions;
use cobble_core::{Context, Error};
use cobble_database::impls::server_settings::get_server_settings;
use cobble_economy::quests::QuestType;
use cobble_utils::embed::display_name;

pub const META: CommandMeta = CommandMeta {
    name: "serverinfo",
    desc: "View the Minecraft server details.",
    category: "utility",
    usage: "a serverinfo",
};

#[poise::command(
    prefix_command,
    slash_command,
    aliases("server"),
    category = "Utility"
)]
pub async fn serverinfo(ctx: Context<'_>) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        ctx.say(guild_only_message()).await?;
        return Ok(());
    };

    let name = display_name(ctx.author());
    let completed = ctx
        .data()
        .economy
        .record_command_usage(ctx.author().id.get(), &name, QuestType::ServerInfo)
        .await?;

    match get_server_settings(&ctx.data().db, guild_id.get()).await? {
        Some(settings) => {
            ctx.send(
                poise::CreateReply::default()
                    .embed(server_info_embed(&settings, &ctx.author().name)),
            )
            .await?;
        }
        None => {
            ctx.say(not_configured_message()).await?;
        }
    }

    announce_completions(ctx, &name, &completed).await
}
