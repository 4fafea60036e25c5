use crate::quests::announce_completions;
use crate::utility::embeds::{grouped_help_description, help_embed, unknown_category_message};
use crate::{COMMANDS, CommandMeta};
use cobble_core::{Context, Error};
use cobble_economy::quests::QuestType;
use cobble_utils::embed::display_name;

pub const META: CommandMeta = CommandMeta {
    name: "help",
    desc: "Lists out all available commands.",
    category: "utility",
    usage: "a help [category]",
};

#[poise::command(prefix_command, slash_command, category = "Utility")]
pub async fn help(
    ctx: Context<'_>,
    #[description = "Category"] category: Option<String>,
) -> Result<(), Error> {
    let category = category.as_deref().map(str::trim).map(str::to_ascii_lowercase);

    let mut categories: Vec<&str> = COMMANDS.iter().map(|c| c.category).collect();
    categories.sort_unstable();
    categories.dedup();

    if let Some(wanted_category) = category.as_deref()
        && !categories.contains(&wanted_category)
    {
        ctx.say(unknown_category_message(wanted_category, &categories))
            .await?;
        return Ok(());
    }

    let name = display_name(ctx.author());
    let completed = ctx
        .data()
        .economy
        .record_command_usage(ctx.author().id.get(), &name, QuestType::Help)
        .await?;

    let commands = sorted_commands(category.as_deref());
    ctx.send(
        poise::CreateReply::default().embed(help_embed(grouped_help_description(&commands))),
    )
    .await?;

    announce_completions(ctx, &name, &completed).await
}

fn sorted_commands(category: Option<&str>) -> Vec<&'static CommandMeta> {
    let mut filtered: Vec<&'static CommandMeta> = COMMANDS
        .iter()
        .filter(|cmd| match category {
            Some(wanted) => cmd.category == wanted,
            None => true,
        })
        .collect();

    filtered.sort_unstable_by(|left, right| {
        left.category
            .cmp(right.category)
            .then_with(|| left.name.cmp(right.name))
    });

    filtered
}

#[cfg(test)]
mod tests {
    use super::sorted_commands;

    #[test]
    fn filters_and_sorts_by_category_then_name() {
        let gambling = sorted_commands(Some("gambling"));
        let names: Vec<&str> = gambling.iter().map(|cmd| cmd.name).collect();
        assert_eq!(names, vec!["coinflip", "gamble"]);

        let all = sorted_commands(None);
        assert_eq!(all.first().map(|cmd| cmd.category), Some("admin"));
        assert!(
            all.windows(2)
                .all(|pair| (pair[0].category, pair[0].name) <= (pair[1].category, pair[1].name))
        );
    }
}
