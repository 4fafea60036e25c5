use poise::serenity_prelude as serenity;

use cobble_database::model::settings::ServerSettings;
use cobble_utils::COMMAND_PREFIX;
use cobble_utils::embed::{DEFAULT_EMBED_COLOR, GREEN, ORANGE, titled_embed};

pub fn guild_only_message() -> &'static str {
    "This command can only be used in a server."
}

pub fn not_configured_message() -> String {
    format!(
        "❌ Server not configured! Ask an admin to use `{}setup`",
        COMMAND_PREFIX
    )
}

pub fn setup_complete_embed(ip: &str, port: u16, set_by: &str) -> serenity::CreateEmbed {
    titled_embed(
        "✅ Server Setup Complete!",
        GREEN,
        format!("Set by {}", set_by),
    )
    .description("Minecraft server configured successfully")
    .field("🌐 Server IP", ip, true)
    .field("🔌 Port", port.to_string(), true)
}

pub fn welcome_channel_set_embed(channel_id: u64, set_by: &str) -> serenity::CreateEmbed {
    titled_embed(
        "✅ Welcome Channel Configured!",
        GREEN,
        format!("Set by {}", set_by),
    )
    .description(format!("New members will be welcomed in <#{}>", channel_id))
    .field(
        "📋 What happens next?",
        "When someone joins the server, they'll receive a welcome message with the member count!",
        false,
    )
}

pub fn welcome_toggled_embed(enabled: bool, changed_by: &str) -> serenity::CreateEmbed {
    if enabled {
        titled_embed(
            "✅ Welcome System Enabled!",
            GREEN,
            format!("Enabled by {}", changed_by),
        )
        .description("New members will receive welcome messages")
    } else {
        titled_embed(
            "⏸️ Welcome System Disabled",
            ORANGE,
            format!("Disabled by {}", changed_by),
        )
        .description("New members will not receive welcome messages")
    }
}

pub fn welcome_status_embed(settings: &ServerSettings, requested_by: &str) -> serenity::CreateEmbed {
    titled_embed(
        "👋 Welcome System Status",
        DEFAULT_EMBED_COLOR,
        format!("Requested by {}", requested_by),
    )
    .field("Status", toggle_label(settings.welcome_enabled), true)
    .field("Channel", channel_label(settings.welcome_channel_id), true)
}

pub fn console_not_configured_message() -> String {
    format!(
        "❌ Server not configured! Ask an admin to use `{}setupchannel`",
        COMMAND_PREFIX
    )
}

pub fn console_channel_set_embed(channel_id: u64, set_by: &str) -> serenity::CreateEmbed {
    titled_embed(
        "✅ Console Channel Configured!",
        GREEN,
        format!("Set by {}", set_by),
    )
    .description(format!("Server console will output to <#{}>", channel_id))
}

pub fn console_toggled_embed(enabled: bool, changed_by: &str) -> serenity::CreateEmbed {
    if enabled {
        titled_embed(
            "✅ Console Logging Enabled!",
            GREEN,
            format!("Enabled by {}", changed_by),
        )
        .description("Console output will be sent to Discord")
        .field(
            "📋 Note",
            "Make sure you have the Minecraft server mod configured!",
            false,
        )
    } else {
        titled_embed(
            "⏸️ Console Logging Disabled",
            ORANGE,
            format!("Disabled by {}", changed_by),
        )
        .description("Console output will not be sent to Discord")
    }
}

pub fn console_status_embed(settings: &ServerSettings, requested_by: &str) -> serenity::CreateEmbed {
    titled_embed(
        "📺 Console Logging Status",
        DEFAULT_EMBED_COLOR,
        format!("Requested by {}", requested_by),
    )
    .field("Status", toggle_label(settings.console_enabled), true)
    .field("Channel", channel_label(settings.console_channel_id), true)
}

fn toggle_label(enabled: bool) -> &'static str {
    if enabled { "✅ Enabled" } else { "❌ Disabled" }
}

fn channel_label(channel_id: Option<u64>) -> String {
    channel_id
        .map(|id| format!("<#{}>", id))
        .unwrap_or_else(|| "Not configured".to_owned())
}

pub fn server_info_embed(settings: &ServerSettings, requested_by: &str) -> serenity::CreateEmbed {
    let mut embed = titled_embed(
        "⛏️ Minecraft Server Info",
        GREEN,
        format!("Requested by {}", requested_by),
    );

    if let Some(ip) = settings.server_ip.as_deref() {
        embed = embed.field("🌐 Server IP", ip, true);
    }
    if let Some(port) = settings.server_port {
        embed = embed.field("🔌 Port", port.to_string(), true);
    }
    if let Some(channel_id) = settings.console_channel_id {
        embed = embed.field("📺 Console Channel", format!("<#{}>", channel_id), false);
    }
    if let Some(channel_id) = settings.welcome_channel_id {
        embed = embed.field("👋 Welcome Channel", format!("<#{}>", channel_id), false);
    }

    embed
}

/// Reply to "what's the ip" style chat messages.
pub fn server_address_embed(ip: &str, port: Option<u16>) -> serenity::CreateEmbed {
    let port = port
        .map(|port| port.to_string())
        .unwrap_or_else(|| "Default".to_owned());

    titled_embed("🎮 Minecraft Server Info", GREEN, "See you in game!")
        .description("Join our server with these details:")
        .field("🌐 Server IP", format!("`{}`", ip), false)
        .field("🔌 Port", format!("`{}`", port), false)
}

pub fn member_welcome_embed(
    member_user_id: u64,
    avatar_url: String,
    guild_name: &str,
    member_count: Option<u64>,
) -> serenity::CreateEmbed {
    let mut embed = titled_embed(
        "👋 Welcome to the Server!",
        DEFAULT_EMBED_COLOR,
        format!("Welcome to {}!", guild_name),
    )
    .description(format!(
        "Hey <@{}>, welcome to **{}**!",
        member_user_id, guild_name
    ))
    .thumbnail(avatar_url)
    .timestamp(serenity::Timestamp::now());

    if let Some(count) = member_count {
        embed = embed.field(
            "👥 Member Count",
            format!("You are member **#{}**!", count),
            false,
        );
    }

    embed.field(
        "🎮 Get Started",
        format!(
            "Use `{}help` to see all available commands and start your adventure!",
            COMMAND_PREFIX
        ),
        false,
    )
}
