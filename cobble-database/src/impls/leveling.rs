use anyhow::Context as _;

use crate::{
    database::{BEGIN_WRITE, Database},
    model::leveling::{LevelUpdate, apply_xp},
};

/// Add XP to a user, rolling over into as many levels as it covers and
/// crediting the level-up bonus in the same transaction.
pub async fn add_xp(db: &Database, user_id: u64, amount: i64) -> anyhow::Result<LevelUpdate> {
    let user_id_i64 = i64::try_from(user_id).context("user_id out of i64 range")?;

    let mut tx = db.pool().begin_with(BEGIN_WRITE).await?;

    let (level, xp): (i64, i64) = sqlx::query_as("SELECT level, xp FROM users WHERE user_id = ?1")
        .bind(user_id_i64)
        .fetch_optional(&mut *tx)
        .await?
        .with_context(|| format!("no account exists for user {user_id}"))?;

    let update = apply_xp(level, xp, amount);

    sqlx::query(
        "UPDATE users
         SET level = ?1,
             xp = ?2,
             balance = balance + ?3,
             total_earned = total_earned + ?3
         WHERE user_id = ?4",
    )
    .bind(update.new_level)
    .bind(update.new_xp)
    .bind(update.coins_earned)
    .bind(user_id_i64)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(update)
}

#[cfg(test)]
mod tests {
    use super::add_xp;
    use crate::database::Database;
    use crate::impls::users::{get_or_create_user, get_user};

    #[tokio::test]
    async fn level_up_credits_bonus_coins() {
        let db = Database::connect_in_memory().await.unwrap();
        get_or_create_user(&db, 5, "notch").await.unwrap();

        let first = add_xp(&db, 5, 60).await.unwrap();
        assert!(!first.leveled_up);

        let second = add_xp(&db, 5, 60).await.unwrap();
        assert!(second.leveled_up);
        assert_eq!(second.new_level, 2);
        assert_eq!(second.new_xp, 20);

        let account = get_user(&db, 5).await.unwrap().unwrap();
        assert_eq!((account.level, account.xp), (2, 20));
        assert_eq!(account.balance, second.coins_earned);
        assert_eq!(account.total_earned, second.coins_earned);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_grants_for_different_users_all_land() {
        let db = Database::connect_scratch_file("add-xp").await.unwrap();
        for user_id in 1..=8 {
            get_or_create_user(&db, user_id, "miner").await.unwrap();
        }

        let mut tasks = Vec::new();
        for user_id in 1..=8 {
            let db = db.clone();
            tasks.push(tokio::spawn(async move {
                for _ in 0..200 {
                    add_xp(&db, user_id, 1).await?;
                }
                anyhow::Ok(())
            }));
        }
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        // 200 XP is one full level (100) with 100 carried toward the next.
        for user_id in 1..=8 {
            let account = get_user(&db, user_id).await.unwrap().unwrap();
            assert_eq!((account.level, account.xp), (2, 100));
            assert_eq!(account.balance, 100);
        }
    }

    #[tokio::test]
    async fn split_xp_matches_single_grant() {
        let db = Database::connect_in_memory().await.unwrap();
        get_or_create_user(&db, 1, "split").await.unwrap();
        get_or_create_user(&db, 2, "whole").await.unwrap();

        add_xp(&db, 1, 180).await.unwrap();
        add_xp(&db, 1, 270).await.unwrap();
        add_xp(&db, 2, 450).await.unwrap();

        let split = get_user(&db, 1).await.unwrap().unwrap();
        let whole = get_user(&db, 2).await.unwrap().unwrap();
        assert_eq!((split.level, split.xp), (whole.level, whole.xp));
        assert_eq!(split.balance, whole.balance);
    }
}
