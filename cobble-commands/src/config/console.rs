use crate::CommandMeta;
use crate::config::embeds::{
    console_not_configured_message, console_status_embed, console_toggled_embed,
    guild_only_message,
};
use cobble_core::{Context, Error};
use cobble_database::impls::server_settings::{get_server_settings, update_server_settings};
use cobble_database::model::settings::ServerSettingsUpdate;

pub const META: CommandMeta = CommandMeta {
    name: "console",
    desc: "Turn console logging on or off, or show its status (administrators only).",
    category: "admin",
    usage: "a console [on|off|status]",
};

#[derive(Debug, PartialEq, Eq)]
enum ConsoleAction {
    Toggle(bool),
    Status,
}

fn parse_action(input: Option<&str>) -> Option<ConsoleAction> {
    let Some(input) = input.map(str::trim).filter(|entry| !entry.is_empty()) else {
        return Some(ConsoleAction::Status);
    };

    match input.to_ascii_lowercase().as_str() {
        "on" => Some(ConsoleAction::Toggle(true)),
        "off" => Some(ConsoleAction::Toggle(false)),
        "status" => Some(ConsoleAction::Status),
        _ => None,
    }
}

#[poise::command(
    prefix_command,
    slash_command,
    guild_only,
    required_permissions = "ADMINISTRATOR",
    category = "Admin"
)]
pub async fn console(
    ctx: Context<'_>,
    #[description = "'on', 'off', or 'status'"] action: Option<String>,
) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        ctx.say(guild_only_message()).await?;
        return Ok(());
    };

    let Some(action) = parse_action(action.as_deref()) else {
        ctx.say(format!("Usage: `{}`", META.usage)).await?;
        return Ok(());
    };

    let db = &ctx.data().db;
    let author = &ctx.author().name;

    let embed = match action {
        ConsoleAction::Toggle(enabled) => {
            update_server_settings(
                db,
                guild_id.get(),
                ServerSettingsUpdate {
                    console_enabled: Some(enabled),
                    ..Default::default()
                },
            )
            .await?;
            console_toggled_embed(enabled, author)
        }
        ConsoleAction::Status => match get_server_settings(db, guild_id.get()).await? {
            Some(settings) => console_status_embed(&settings, author),
            None => {
                ctx.say(console_not_configured_message()).await?;
                return Ok(());
            }
        },
    };

    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}
