use cobble_database::Database;
use cobble_database::impls::users::adjust_balance;

use super::catalog::QuestDefinition;

/// Payload handed to the presentation layer when a quest completes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestNotification {
    pub quest_id: u32,
    pub name: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
    pub reward: i64,
}

/// Credit the quest reward. Callers guarantee this runs once per completion.
pub async fn settle(
    db: &Database,
    user_id: u64,
    quest: &QuestDefinition,
) -> anyhow::Result<QuestNotification> {
    adjust_balance(db, user_id, quest.reward).await?;

    Ok(QuestNotification {
        quest_id: quest.id,
        name: quest.name,
        emoji: quest.emoji,
        description: quest.description,
        reward: quest.reward,
    })
}
