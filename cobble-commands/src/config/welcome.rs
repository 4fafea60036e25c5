use crate::CommandMeta;
use crate::config::embeds::{
    guild_only_message, not_configured_message, welcome_channel_set_embed, welcome_status_embed,
    welcome_toggled_embed,
};
use cobble_core::{Context, Error};
use cobble_database::impls::server_settings::{get_server_settings, update_server_settings};
use cobble_database::model::settings::ServerSettingsUpdate;
use cobble_utils::parse::parse_channel_id;

pub const META: CommandMeta = CommandMeta {
    name: "welcome",
    desc: "Configure member welcome messages (administrators only).",
    category: "admin",
    usage: "a welcome [#channel|on|off|status]",
};

#[derive(Debug, PartialEq, Eq)]
enum WelcomeAction {
    SetChannel(u64),
    Toggle(bool),
    Status,
}

fn parse_action(input: Option<&str>, current_channel_id: u64) -> Option<WelcomeAction> {
    let Some(input) = input.map(str::trim).filter(|entry| !entry.is_empty()) else {
        return Some(WelcomeAction::SetChannel(current_channel_id));
    };

    match input.to_ascii_lowercase().as_str() {
        "on" => Some(WelcomeAction::Toggle(true)),
        "off" => Some(WelcomeAction::Toggle(false)),
        "status" => Some(WelcomeAction::Status),
        _ => parse_channel_id(input).map(WelcomeAction::SetChannel),
    }
}

#[poise::command(
    prefix_command,
    slash_command,
    guild_only,
    required_permissions = "ADMINISTRATOR",
    category = "Admin"
)]
pub async fn welcome(
    ctx: Context<'_>,
    #[description = "Channel mention/id, 'on', 'off', or 'status'"]
    #[rest]
    input: Option<String>,
) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        ctx.say(guild_only_message()).await?;
        return Ok(());
    };

    let Some(action) = parse_action(input.as_deref(), ctx.channel_id().get()) else {
        ctx.say(format!("Usage: `{}`", META.usage)).await?;
        return Ok(());
    };

    let db = &ctx.data().db;
    let author = &ctx.author().name;

    let embed = match action {
        WelcomeAction::SetChannel(channel_id) => {
            update_server_settings(
                db,
                guild_id.get(),
                ServerSettingsUpdate {
                    welcome_channel_id: Some(channel_id),
                    ..Default::default()
                },
            )
            .await?;
            welcome_channel_set_embed(channel_id, author)
        }
        WelcomeAction::Toggle(enabled) => {
            update_server_settings(
                db,
                guild_id.get(),
                ServerSettingsUpdate {
                    welcome_enabled: Some(enabled),
                    ..Default::default()
                },
            )
            .await?;
            welcome_toggled_embed(enabled, author)
        }
        WelcomeAction::Status => match get_server_settings(db, guild_id.get()).await? {
            Some(settings) => welcome_status_embed(&settings, author),
            None => {
                ctx.say(not_configured_message()).await?;
                return Ok(());
            }
        },
    };

    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{WelcomeAction, parse_action};

    #[test]
    fn parses_welcome_arguments() {
        assert_eq!(parse_action(None, 9), Some(WelcomeAction::SetChannel(9)));
        assert_eq!(parse_action(Some("  "), 9), Some(WelcomeAction::SetChannel(9)));
        assert_eq!(parse_action(Some("ON"), 9), Some(WelcomeAction::Toggle(true)));
        assert_eq!(parse_action(Some("off"), 9), Some(WelcomeAction::Toggle(false)));
        assert_eq!(parse_action(Some("status"), 9), Some(WelcomeAction::Status));
        assert_eq!(parse_action(Some("<#42>"), 9), Some(WelcomeAction::SetChannel(42)));
        assert_eq!(parse_action(Some("later"), 9), None);
    }
}
