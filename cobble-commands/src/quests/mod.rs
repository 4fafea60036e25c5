pub mod embeds;
pub mod quests;

use cobble_core::{Context, Error};
use cobble_economy::quests::QuestNotification;

use crate::quests::embeds::quest_completed_embed;

/// Post one completion embed per quest finished by a command.
pub async fn announce_completions(
    ctx: Context<'_>,
    display_name: &str,
    notifications: &[QuestNotification],
) -> Result<(), Error> {
    for notification in notifications {
        ctx.send(
            poise::CreateReply::default().embed(quest_completed_embed(notification, display_name)),
        )
        .await?;
    }

    Ok(())
}
