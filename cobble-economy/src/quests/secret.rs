use tracing::info;

use cobble_database::Database;
use cobble_database::impls::progress::{get_secret_progress, set_secret_progress};
use cobble_database::impls::users::adjust_balance;
use cobble_database::model::quests::QuestProgress;

pub const SECRET_QUEST_KEYWORD: &str = "cbd";
pub const SECRET_QUEST_TARGET: u64 = 100;
pub const SECRET_QUEST_REWARD: i64 = 1_000_000_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SecretNotification {
    pub progress: u64,
    pub reward: i64,
}

/// Count one keyword message towards the hidden quest. It lives outside the
/// daily rotation and pays out exactly once.
pub async fn advance_secret_quest(
    db: &Database,
    user_id: u64,
    lowered: &str,
) -> anyhow::Result<Option<SecretNotification>> {
    if !lowered.contains(SECRET_QUEST_KEYWORD) {
        return Ok(None);
    }

    let current = get_secret_progress(db, user_id).await?;
    if current.completed {
        return Ok(None);
    }

    let progress = current.progress + 1;
    if progress < SECRET_QUEST_TARGET {
        set_secret_progress(
            db,
            user_id,
            QuestProgress {
                progress,
                completed: false,
            },
        )
        .await?;
        return Ok(None);
    }

    adjust_balance(db, user_id, SECRET_QUEST_REWARD).await?;
    set_secret_progress(
        db,
        user_id,
        QuestProgress {
            progress,
            completed: true,
        },
    )
    .await?;
    info!(user_id, "secret quest completed");

    Ok(Some(SecretNotification {
        progress,
        reward: SECRET_QUEST_REWARD,
    }))
}
