use crate::CommandMeta;
use crate::config::embeds::{console_channel_set_embed, guild_only_message};
use cobble_core::{Context, Error};
use cobble_database::impls::server_settings::update_server_settings;
use cobble_database::model::settings::ServerSettingsUpdate;
use cobble_utils::parse::parse_channel_id;

pub const META: CommandMeta = CommandMeta {
    name: "setupchannel",
    desc: "Set the channel that receives Minecraft console output (administrators only).",
    category: "admin",
    usage: "a setupchannel [#channel]",
};

/// Target channel: the mentioned one, or the current one when omitted.
fn target_channel(input: Option<&str>, current_channel_id: u64) -> Option<u64> {
    match input.map(str::trim).filter(|entry| !entry.is_empty()) {
        None => Some(current_channel_id),
        Some(raw) => parse_channel_id(raw),
    }
}

#[poise::command(
    prefix_command,
    slash_command,
    guild_only,
    required_permissions = "ADMINISTRATOR",
    category = "Admin"
)]
pub async fn setupchannel(
    ctx: Context<'_>,
    #[description = "Channel mention or id (defaults to this channel)"]
    #[rest]
    channel: Option<String>,
) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        ctx.say(guild_only_message()).await?;
        return Ok(());
    };

    let Some(channel_id) = target_channel(channel.as_deref(), ctx.channel_id().get()) else {
        ctx.say(format!("Usage: `{}`", META.usage)).await?;
        return Ok(());
    };

    update_server_settings(
        &ctx.data().db,
        guild_id.get(),
        ServerSettingsUpdate {
            console_channel_id: Some(channel_id),
            ..Default::default()
        },
    )
    .await?;

    ctx.send(
        poise::CreateReply::default()
            .embed(console_channel_set_embed(channel_id, &ctx.author().name)),
    )
    .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::target_channel;

    #[test]
    fn defaults_to_the_current_channel() {
        assert_eq!(target_channel(None, 5), Some(5));
        assert_eq!(target_channel(Some(" "), 5), Some(5));
        assert_eq!(target_channel(Some("<#77>"), 5), Some(77));
        assert_eq!(target_channel(Some("#general"), 5), None);
    }
}
