use anyhow::Context as _;

use crate::{database::Database, model::quests::QuestProgress};

#[derive(sqlx::FromRow)]
struct ProgressRow {
    progress: i64,
    completed: bool,
}

impl TryFrom<ProgressRow> for QuestProgress {
    type Error = anyhow::Error;

    fn try_from(row: ProgressRow) -> anyhow::Result<Self> {
        Ok(Self {
            progress: u64::try_from(row.progress).context("progress row out of u64 range")?,
            completed: row.completed,
        })
    }
}

/// Progress for one (user, quest) pair; absent rows read as `0 / not completed`.
pub async fn get_progress(
    db: &Database,
    user_id: u64,
    quest_id: u32,
) -> anyhow::Result<QuestProgress> {
    let user_id_i64 = i64::try_from(user_id).context("user_id out of i64 range")?;

    let row: Option<ProgressRow> = sqlx::query_as(
        "SELECT progress, completed FROM quest_progress WHERE user_id = ?1 AND quest_id = ?2",
    )
    .bind(user_id_i64)
    .bind(i64::from(quest_id))
    .fetch_optional(db.pool())
    .await?;

    row.map(QuestProgress::try_from)
        .transpose()
        .map(Option::unwrap_or_default)
}

pub async fn set_progress(
    db: &Database,
    user_id: u64,
    quest_id: u32,
    progress: QuestProgress,
) -> anyhow::Result<()> {
    let user_id_i64 = i64::try_from(user_id).context("user_id out of i64 range")?;
    let progress_i64 = i64::try_from(progress.progress).context("progress out of i64 range")?;

    sqlx::query(
        "INSERT INTO quest_progress (user_id, quest_id, progress, completed)
         VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT (user_id, quest_id) DO UPDATE SET
             progress = excluded.progress,
             completed = excluded.completed",
    )
    .bind(user_id_i64)
    .bind(i64::from(quest_id))
    .bind(progress_i64)
    .bind(progress.completed)
    .execute(db.pool())
    .await?;

    Ok(())
}

/// Drop every daily progress row for a user. Returns the number of rows removed.
pub async fn clear_all_progress(db: &Database, user_id: u64) -> anyhow::Result<u64> {
    let user_id_i64 = i64::try_from(user_id).context("user_id out of i64 range")?;

    let deleted = sqlx::query("DELETE FROM quest_progress WHERE user_id = ?1")
        .bind(user_id_i64)
        .execute(db.pool())
        .await?
        .rows_affected();

    Ok(deleted)
}

pub async fn get_secret_progress(db: &Database, user_id: u64) -> anyhow::Result<QuestProgress> {
    let user_id_i64 = i64::try_from(user_id).context("user_id out of i64 range")?;

    let row: Option<ProgressRow> = sqlx::query_as(
        "SELECT progress, completed FROM secret_quest_progress WHERE user_id = ?1",
    )
    .bind(user_id_i64)
    .fetch_optional(db.pool())
    .await?;

    row.map(QuestProgress::try_from)
        .transpose()
        .map(Option::unwrap_or_default)
}

pub async fn set_secret_progress(
    db: &Database,
    user_id: u64,
    progress: QuestProgress,
) -> anyhow::Result<()> {
    let user_id_i64 = i64::try_from(user_id).context("user_id out of i64 range")?;
    let progress_i64 = i64::try_from(progress.progress).context("progress out of i64 range")?;

    sqlx::query(
        "INSERT INTO secret_quest_progress (user_id, progress, completed)
         VALUES (?1, ?2, ?3)
         ON CONFLICT (user_id) DO UPDATE SET
             progress = excluded.progress,
             completed = excluded.completed",
    )
    .bind(user_id_i64)
    .bind(progress_i64)
    .bind(progress.completed)
    .execute(db.pool())
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{
        clear_all_progress, get_progress, get_secret_progress, set_progress, set_secret_progress,
    };
    use crate::database::Database;
    use crate::model::quests::QuestProgress;

    #[tokio::test]
    async fn absent_progress_defaults_to_zero() {
        let db = Database::connect_in_memory().await.unwrap();

        let progress = get_progress(&db, 1, 12).await.unwrap();
        assert_eq!(progress, QuestProgress::default());
    }

    #[tokio::test]
    async fn upsert_overwrites_existing_row() {
        let db = Database::connect_in_memory().await.unwrap();

        set_progress(&db, 1, 12, QuestProgress { progress: 3, completed: false })
            .await
            .unwrap();
        set_progress(&db, 1, 12, QuestProgress { progress: 5, completed: true })
            .await
            .unwrap();

        let progress = get_progress(&db, 1, 12).await.unwrap();
        assert_eq!(progress, QuestProgress { progress: 5, completed: true });
    }

    #[tokio::test]
    async fn clearing_progress_spares_other_users_and_the_secret_quest() {
        let db = Database::connect_in_memory().await.unwrap();
        let partial = QuestProgress { progress: 2, completed: false };

        set_progress(&db, 1, 1, partial).await.unwrap();
        set_progress(&db, 1, 2, partial).await.unwrap();
        set_progress(&db, 2, 1, partial).await.unwrap();
        set_secret_progress(&db, 1, QuestProgress { progress: 40, completed: false })
            .await
            .unwrap();

        assert_eq!(clear_all_progress(&db, 1).await.unwrap(), 2);
        assert_eq!(get_progress(&db, 1, 1).await.unwrap(), QuestProgress::default());
        assert_eq!(get_progress(&db, 2, 1).await.unwrap(), partial);
        assert_eq!(get_secret_progress(&db, 1).await.unwrap().progress, 40);
    }
}
