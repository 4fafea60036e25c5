use cobble_core::{Context, Error};
use cobble_utils::COMMAND_PREFIX;

use crate::{COMMANDS, CommandMeta};

pub const META: CommandMeta = CommandMeta {
    name: "usage",
    desc: "Show usage syntax for a specific command.",
    category: "utility",
    usage: "a usage <command>",
};

#[poise::command(prefix_command, slash_command, category = "Utility")]
pub async fn usage(
    ctx: Context<'_>,
    #[description = "Command name"] command: Option<String>,
) -> Result<(), Error> {
    let Some(raw_name) = command.as_deref() else {
        ctx.say(format!("Usage: `{}`", META.usage)).await?;
        return Ok(());
    };

    let lookup = normalize_command_name(raw_name);

    let Some(command) = COMMANDS.iter().find(|command| command.name == lookup) else {
        ctx.say(format!("Unknown command: `{}`", lookup)).await?;
        return Ok(());
    };

    ctx.say(format!("Usage: `{}`", command.usage)).await?;
    Ok(())
}

fn normalize_command_name(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix(COMMAND_PREFIX)
        .unwrap_or(trimmed)
        .trim_start_matches('/')
        .trim()
        .to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::normalize_command_name;

    #[test]
    fn strips_prefixes_and_case() {
        assert_eq!(normalize_command_name("Balance"), "balance");
        assert_eq!(normalize_command_name("a gamble"), "gamble");
        assert_eq!(normalize_command_name("/quests"), "quests");
    }
}
