use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use cobble_utils::COMMAND_PREFIX;
use cobble_utils::embed::{GREEN, PURPLE, RED, titled_embed};
use cobble_utils::minecraft::{PlayerSample, ServerStatus};

const SAMPLE_PLAYERS_SHOWN: usize = 10;
const ERROR_CHARS_SHOWN: usize = 100;

pub fn unknown_category_message(wanted_category: &str, valid_categories: &[&str]) -> String {
    let valid = valid_categories
        .iter()
        .map(|category| display_category(category))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Unknown category: {}\nValid categories: {}",
        display_category(wanted_category),
        valid
    )
}

pub fn grouped_help_description(commands: &[&CommandMeta]) -> String {
    let mut out = String::new();
    let mut current_category: Option<&str> = None;

    for command in commands {
        if current_category != Some(command.category) {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(&format!("**{}**\n", display_category(command.category)));
            current_category = Some(command.category);
        }

        out.push_str(&format!("`{}`: {}\n", command.usage, command.desc));
    }

    if out.is_empty() {
        out.push_str("No commands available.");
    }

    out.trim_end().to_owned()
}

pub fn help_embed(description: String) -> serenity::CreateEmbed {
    titled_embed(
        "🤖 Minecraft Server Bot - Help",
        PURPLE,
        "💡 Tip: Complete daily quests to earn coins!",
    )
    .description(format!(
        "Use `{}` as the prefix, or slash commands.\n\n{}",
        COMMAND_PREFIX.trim_end(),
        description
    ))
}

pub fn pong_embed(latency_ms: u128) -> serenity::CreateEmbed {
    titled_embed("🏓 Pong!", GREEN, "").description(format!("Latency: **{}ms**", latency_ms))
}

pub fn server_online_embed(address: &str, status: &ServerStatus, requested_by: &str) -> serenity::CreateEmbed {
    let mut embed = titled_embed(
        "🟢 Server Online!",
        GREEN,
        format!("Requested by {}", requested_by),
    )
    .description(format!("**{}**", address))
    .field(
        "👥 Players Online",
        format!("{}/{}", status.players.online, status.players.max),
        true,
    )
    .field("📊 Latency", format!("{}ms", status.latency.as_millis()), true)
    .field("🎮 Version", status.version.name.as_str(), true);

    if let Some(players) = sample_player_list(&status.players.sample) {
        embed = embed.field("🎯 Players", players, false);
    }

    embed
}

pub fn server_offline_embed(address: &str, error: &str, requested_by: &str) -> serenity::CreateEmbed {
    titled_embed(
        "🔴 Server Offline",
        RED,
        format!("Requested by {}", requested_by),
    )
    .description(format!(
        "**{}**\n\nThe server appears to be offline or unreachable.",
        address
    ))
    .field("❌ Error", short_error(error), false)
}

fn sample_player_list(sample: &[PlayerSample]) -> Option<String> {
    if sample.is_empty() {
        return None;
    }

    Some(
        sample
            .iter()
            .take(SAMPLE_PLAYERS_SHOWN)
            .map(|player| player.name.as_str())
            .collect::<Vec<_>>()
            .join("\n"),
    )
}

fn short_error(error: &str) -> String {
    error.chars().take(ERROR_CHARS_SHOWN).collect()
}

fn display_category(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => format!("{}{}", first.to_uppercase(), chars.as_str()),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use cobble_utils::minecraft::PlayerSample;

    use super::{grouped_help_description, sample_player_list, short_error, unknown_category_message};
    use crate::CommandMeta;

    const BALANCE: CommandMeta = CommandMeta {
        name: "balance",
        desc: "Check a balance.",
        category: "economy",
        usage: "a balance [user]",
    };
    const PING: CommandMeta = CommandMeta {
        name: "ping",
        desc: "Latency check.",
        category: "utility",
        usage: "a ping",
    };

    #[test]
    fn groups_commands_under_category_headers() {
        let text = grouped_help_description(&[&BALANCE, &PING]);
        assert_eq!(
            text,
            "**Economy**\n`a balance [user]`: Check a balance.\n\n**Utility**\n`a ping`: Latency check."
        );
        assert_eq!(grouped_help_description(&[]), "No commands available.");
    }

    #[test]
    fn unknown_category_lists_valid_ones() {
        assert_eq!(
            unknown_category_message("fun", &["economy", "utility"]),
            "Unknown category: Fun\nValid categories: Economy, Utility"
        );
    }

    #[test]
    fn player_sample_is_capped() {
        assert_eq!(sample_player_list(&[]), None);

        let sample: Vec<PlayerSample> = (1..=12)
            .map(|n| PlayerSample { name: format!("p{n}") })
            .collect();
        let listed = sample_player_list(&sample).unwrap();
        assert_eq!(listed.lines().count(), 10);
        assert!(listed.starts_with("p1\np2"));
        assert!(!listed.contains("p11"));
    }

    #[test]
    fn long_errors_are_shortened() {
        assert_eq!(short_error("refused"), "refused");
        assert_eq!(short_error(&"é".repeat(150)).chars().count(), 100);
    }
}
