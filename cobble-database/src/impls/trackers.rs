use anyhow::Context as _;

use crate::{
    database::{BEGIN_WRITE, Database},
    model::quests::Tracker,
};

/// Add `values` to the user's tracker set and return how many were new.
pub async fn record_tracker_values(
    db: &Database,
    user_id: u64,
    tracker: Tracker,
    values: &[u64],
) -> anyhow::Result<u64> {
    if values.is_empty() {
        return Ok(0);
    }

    let user_id_i64 = i64::try_from(user_id).context("user_id out of i64 range")?;
    let mut tx = db.pool().begin_with(BEGIN_WRITE).await?;
    let mut added = 0;

    for value in values {
        let value_i64 = i64::try_from(*value).context("tracker value out of i64 range")?;
        added += sqlx::query(
            "INSERT OR IGNORE INTO quest_trackers (user_id, tracker, value) VALUES (?1, ?2, ?3)",
        )
        .bind(user_id_i64)
        .bind(tracker.as_str())
        .bind(value_i64)
        .execute(&mut *tx)
        .await?
        .rows_affected();
    }

    tx.commit().await?;
    Ok(added)
}

pub async fn count_tracker_values(
    db: &Database,
    user_id: u64,
    tracker: Tracker,
) -> anyhow::Result<u64> {
    let user_id_i64 = i64::try_from(user_id).context("user_id out of i64 range")?;

    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM quest_trackers WHERE user_id = ?1 AND tracker = ?2",
    )
    .bind(user_id_i64)
    .bind(tracker.as_str())
    .fetch_one(db.pool())
    .await?;

    u64::try_from(count).context("tracker count out of u64 range")
}

pub async fn clear_trackers(db: &Database, user_id: u64) -> anyhow::Result<()> {
    let user_id_i64 = i64::try_from(user_id).context("user_id out of i64 range")?;

    sqlx::query("DELETE FROM quest_trackers WHERE user_id = ?1")
        .bind(user_id_i64)
        .execute(db.pool())
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{clear_trackers, count_tracker_values, record_tracker_values};
    use crate::database::Database;
    use crate::model::quests::Tracker;

    #[tokio::test]
    async fn only_unseen_values_count_as_added() {
        let db = Database::connect_in_memory().await.unwrap();

        let first = record_tracker_values(&db, 1, Tracker::Mentions, &[10, 11])
            .await
            .unwrap();
        let second = record_tracker_values(&db, 1, Tracker::Mentions, &[11, 12, 12])
            .await
            .unwrap();

        assert_eq!(first, 2);
        assert_eq!(second, 1);
        assert_eq!(count_tracker_values(&db, 1, Tracker::Mentions).await.unwrap(), 3);
        assert_eq!(count_tracker_values(&db, 1, Tracker::Channels).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn clearing_resets_every_tracker() {
        let db = Database::connect_in_memory().await.unwrap();
        record_tracker_values(&db, 1, Tracker::Mentions, &[10]).await.unwrap();
        record_tracker_values(&db, 1, Tracker::Channels, &[20]).await.unwrap();

        clear_trackers(&db, 1).await.unwrap();

        assert_eq!(count_tracker_values(&db, 1, Tracker::Mentions).await.unwrap(), 0);
        assert_eq!(
            record_tracker_values(&db, 1, Tracker::Channels, &[20]).await.unwrap(),
            1
        );
    }
}
