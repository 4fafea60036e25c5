use poise::serenity_prelude as serenity;
use tracing::error;

use cobble_commands::config::embeds::server_address_embed;
use cobble_commands::quests::embeds::{level_up_embed, quest_completed_embed, secret_quest_embed};
use cobble_core::Data;
use cobble_database::impls::server_settings::get_server_settings;
use cobble_economy::quests::{MessageEvent, ReactionEvent};
use cobble_utils::embed::display_name;
use cobble_utils::parse::asks_for_server_ip;
use cobble_utils::time::local_hour;

/// Award XP, answer server-address questions, and advance the author's quests.
pub async fn handle_message_quests(
    ctx: &serenity::Context,
    data: &Data,
    message: &serenity::Message,
) {
    if message.author.bot || message.webhook_id.is_some() {
        return;
    }

    let name = display_name(&message.author);
    let event = MessageEvent {
        user_id: message.author.id.get(),
        display_name: name.clone(),
        channel_id: message.channel_id.get(),
        content: message.content.clone(),
        mentions: message.mentions.iter().map(|user| user.id.get()).collect(),
        local_hour: local_hour(),
    };

    let outcome = match data.economy.process_message(&event).await {
        Ok(outcome) => outcome,
        Err(source) => {
            error!(?source, user_id = event.user_id, "failed to process message for quests");
            return;
        }
    };

    let mut embeds = Vec::new();

    if let Some(update) = outcome.level_up.as_ref() {
        embeds.push(level_up_embed(&name, message.author.face(), update));
    }

    if let Some(guild_id) = message.guild_id
        && asks_for_server_ip(&message.content.to_lowercase())
    {
        match get_server_settings(&data.db, guild_id.get()).await {
            Ok(Some(settings)) => {
                if let Some(ip) = settings.server_ip.as_deref() {
                    embeds.push(server_address_embed(ip, settings.server_port));
                }
            }
            Ok(None) => {}
            Err(source) => {
                error!(?source, guild_id = guild_id.get(), "failed to load server settings");
            }
        }
    }

    embeds.extend(
        outcome
            .completed
            .iter()
            .map(|notification| quest_completed_embed(notification, &name)),
    );

    if let Some(secret) = outcome.secret.as_ref() {
        embeds.push(secret_quest_embed(&name, secret));
    }

    send_embeds(ctx, message.channel_id, embeds).await;
}

/// Advance reaction quests for whoever added the reaction.
pub async fn handle_reaction_quests(
    ctx: &serenity::Context,
    data: &Data,
    reaction: &serenity::Reaction,
) {
    let user = match reaction.user(ctx).await {
        Ok(user) => user,
        Err(source) => {
            error!(?source, "failed to resolve reacting user");
            return;
        }
    };

    if user.bot {
        return;
    }

    let name = display_name(&user);
    let event = ReactionEvent {
        user_id: user.id.get(),
        display_name: name.clone(),
        symbol: reaction.emoji.to_string(),
    };

    let completed = match data.economy.process_reaction(&event).await {
        Ok(completed) => completed,
        Err(source) => {
            error!(?source, user_id = event.user_id, "failed to process reaction for quests");
            return;
        }
    };

    let embeds = completed
        .iter()
        .map(|notification| quest_completed_embed(notification, &name))
        .collect();
    send_embeds(ctx, reaction.channel_id, embeds).await;
}

async fn send_embeds(
    ctx: &serenity::Context,
    channel_id: serenity::ChannelId,
    embeds: Vec<serenity::CreateEmbed>,
) {
    for embed in embeds {
        if let Err(source) = channel_id
            .send_message(&ctx.http, serenity::CreateMessage::new().embed(embed))
            .await
        {
            error!(?source, channel_id = channel_id.get(), "failed to send notification");
        }
    }
}
