use poise::serenity_prelude as serenity;

/// Default embed color used across the bot UI.
pub const DEFAULT_EMBED_COLOR: u32 = 0x34_98_db;

pub const GOLD: u32 = 0xf1_c4_0f;
pub const GREEN: u32 = 0x2e_cc_71;
pub const RED: u32 = 0xe7_4c_3c;
pub const PURPLE: u32 = 0x9b_59_b6;
pub const ORANGE: u32 = 0xe6_7e_22;

/// Embed shown when a command is refused without touching any state.
pub fn rejection_embed(message: impl Into<String>) -> serenity::CreateEmbed {
    serenity::CreateEmbed::new()
        .color(RED)
        .description(format!("❌ {}", message.into()))
}

/// Titled embed with a "Requested by" style footer.
pub fn titled_embed(title: impl Into<String>, color: u32, footer: impl Into<String>) -> serenity::CreateEmbed {
    let footer = footer.into();
    let builder = serenity::CreateEmbed::new().title(title).color(color);

    if footer.is_empty() {
        builder
    } else {
        builder.footer(serenity::CreateEmbedFooter::new(footer))
    }
}

/// Name shown in embeds: global display name, falling back to the username.
pub fn display_name(user: &serenity::User) -> String {
    user.global_name.clone().unwrap_or_else(|| user.name.clone())
}
