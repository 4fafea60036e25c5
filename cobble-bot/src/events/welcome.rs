use poise::serenity_prelude as serenity;
use tracing::{debug, error};

use cobble_commands::config::embeds::member_welcome_embed;
use cobble_core::Data;
use cobble_database::impls::server_settings::get_server_settings;

/// Greet a new member in the guild's welcome channel, when one is enabled.
pub async fn handle_member_welcome(
    ctx: &serenity::Context,
    data: &Data,
    member: &serenity::Member,
) {
    let guild_id = member.guild_id;

    let settings = match get_server_settings(&data.db, guild_id.get()).await {
        Ok(Some(settings)) => settings,
        Ok(None) => return,
        Err(source) => {
            error!(?source, guild_id = guild_id.get(), "failed to load welcome settings");
            return;
        }
    };

    let Some(channel_id) = settings.welcome_channel_id.filter(|_| settings.welcome_enabled) else {
        debug!(guild_id = guild_id.get(), "welcome messages not enabled");
        return;
    };

    let (guild_name, member_count) = ctx
        .cache
        .guild(guild_id)
        .map(|guild| (guild.name.clone(), Some(guild.member_count)))
        .unwrap_or_else(|| ("the server".to_owned(), None));

    let embed = member_welcome_embed(
        member.user.id.get(),
        member.user.face(),
        &guild_name,
        member_count,
    );

    if let Err(source) = serenity::ChannelId::new(channel_id)
        .send_message(&ctx.http, serenity::CreateMessage::new().embed(embed))
        .await
    {
        error!(?source, guild_id = guild_id.get(), channel_id, "failed to send welcome message");
    }
}
