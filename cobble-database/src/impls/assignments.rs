use anyhow::Context as _;

use crate::{database::Database, impls::users::now_unix_secs, model::quests::DailyAssignment};

/// Current assignment for a user; an unknown user reads as an empty
/// assignment stamped now.
pub async fn get_assignment(db: &Database, user_id: u64) -> anyhow::Result<DailyAssignment> {
    let user_id_i64 = i64::try_from(user_id).context("user_id out of i64 range")?;

    let row: Option<(String, i64)> =
        sqlx::query_as("SELECT daily_quests, last_quest_reset FROM users WHERE user_id = ?1")
            .bind(user_id_i64)
            .fetch_optional(db.pool())
            .await?;

    let Some((raw_ids, assigned_at)) = row else {
        return Ok(DailyAssignment {
            quest_ids: Vec::new(),
            assigned_at: now_unix_secs(),
        });
    };

    let quest_ids: Vec<u32> = serde_json::from_str(&raw_ids)
        .with_context(|| format!("daily_quests for user {user_id} is not a JSON id list"))?;
    let assigned_at = u64::try_from(assigned_at).context("last_quest_reset out of u64 range")?;

    Ok(DailyAssignment {
        quest_ids,
        assigned_at,
    })
}

/// Replace the assignment wholesale, stamped with the current time.
pub async fn set_assignment(db: &Database, user_id: u64, quest_ids: &[u32]) -> anyhow::Result<()> {
    set_assignment_at(db, user_id, quest_ids, now_unix_secs()).await
}

pub async fn set_assignment_at(
    db: &Database,
    user_id: u64,
    quest_ids: &[u32],
    assigned_at: u64,
) -> anyhow::Result<()> {
    let user_id_i64 = i64::try_from(user_id).context("user_id out of i64 range")?;
    let assigned_at_i64 = i64::try_from(assigned_at).context("assigned_at out of i64 range")?;
    let raw_ids = serde_json::to_string(quest_ids)?;

    let updated = sqlx::query(
        "UPDATE users SET daily_quests = ?1, last_quest_reset = ?2 WHERE user_id = ?3",
    )
    .bind(raw_ids)
    .bind(assigned_at_i64)
    .bind(user_id_i64)
    .execute(db.pool())
    .await?
    .rows_affected();

    if updated == 0 {
        anyhow::bail!("no account exists for user {user_id}");
    }

    Ok(())
}
