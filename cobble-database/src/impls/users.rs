use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context as _;

use crate::{
    database::Database,
    model::user::{LeaderboardEntry, UserAccount},
};

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: i64,
    username: String,
    balance: i64,
    total_earned: i64,
    total_spent: i64,
    level: i64,
    xp: i64,
}

impl TryFrom<UserRow> for UserAccount {
    type Error = anyhow::Error;

    fn try_from(row: UserRow) -> anyhow::Result<Self> {
        Ok(Self {
            user_id: u64::try_from(row.user_id).context("user_id row out of u64 range")?,
            display_name: row.username,
            balance: row.balance,
            total_earned: row.total_earned,
            total_spent: row.total_spent,
            level: row.level,
            xp: row.xp,
        })
    }
}

/// Fetch the account for `user_id`, creating it on first sight. The stored
/// display name is refreshed on every call.
pub async fn get_or_create_user(
    db: &Database,
    user_id: u64,
    display_name: &str,
) -> anyhow::Result<UserAccount> {
    let user_id_i64 = i64::try_from(user_id).context("user_id out of i64 range")?;
    let now_i64 = i64::try_from(now_unix_secs()).context("now out of i64 range")?;

    let row: UserRow = sqlx::query_as(
        "INSERT INTO users (user_id, username, daily_quests, last_quest_reset)
         VALUES (?1, ?2, '[]', ?3)
         ON CONFLICT (user_id) DO UPDATE SET username = excluded.username
         RETURNING user_id, username, balance, total_earned, total_spent, level, xp",
    )
    .bind(user_id_i64)
    .bind(display_name)
    .bind(now_i64)
    .fetch_one(db.pool())
    .await?;

    UserAccount::try_from(row)
}

pub async fn get_user(db: &Database, user_id: u64) -> anyhow::Result<Option<UserAccount>> {
    let user_id_i64 = i64::try_from(user_id).context("user_id out of i64 range")?;

    let row: Option<UserRow> = sqlx::query_as(
        "SELECT user_id, username, balance, total_earned, total_spent, level, xp
         FROM users
         WHERE user_id = ?1",
    )
    .bind(user_id_i64)
    .fetch_optional(db.pool())
    .await?;

    row.map(UserAccount::try_from).transpose()
}

/// Apply `delta` to the balance. Positive deltas count towards total earned,
/// negative ones towards total spent. No floor is enforced here; callers
/// gate stakes against the balance first.
pub async fn adjust_balance(db: &Database, user_id: u64, delta: i64) -> anyhow::Result<()> {
    let user_id_i64 = i64::try_from(user_id).context("user_id out of i64 range")?;

    let updated = sqlx::query(
        "UPDATE users
         SET balance = balance + ?1,
             total_earned = total_earned + CASE WHEN ?1 > 0 THEN ?1 ELSE 0 END,
             total_spent = total_spent + CASE WHEN ?1 < 0 THEN -?1 ELSE 0 END
         WHERE user_id = ?2",
    )
    .bind(delta)
    .bind(user_id_i64)
    .execute(db.pool())
    .await?
    .rows_affected();

    if updated == 0 {
        anyhow::bail!("no account exists for user {user_id}");
    }

    Ok(())
}

pub async fn get_balance(db: &Database, user_id: u64) -> anyhow::Result<i64> {
    let user_id_i64 = i64::try_from(user_id).context("user_id out of i64 range")?;

    let balance: Option<i64> = sqlx::query_scalar("SELECT balance FROM users WHERE user_id = ?1")
        .bind(user_id_i64)
        .fetch_optional(db.pool())
        .await?;

    Ok(balance.unwrap_or(0))
}

/// Richest accounts first; equal balances keep account creation order.
pub async fn top_balances(db: &Database, limit: u32) -> anyhow::Result<Vec<LeaderboardEntry>> {
    let rows: Vec<(i64, String, i64)> = sqlx::query_as(
        "SELECT user_id, username, balance
         FROM users
         ORDER BY balance DESC, id ASC
         LIMIT ?1",
    )
    .bind(i64::from(limit))
    .fetch_all(db.pool())
    .await?;

    let mut entries = Vec::with_capacity(rows.len());
    for (user_id, display_name, balance) in rows {
        entries.push(LeaderboardEntry {
            user_id: u64::try_from(user_id).context("user_id row out of u64 range")?,
            display_name,
            balance,
        });
    }

    Ok(entries)
}

pub fn now_unix_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |duration| duration.as_secs())
}

#[cfg(test)]
mod tests {
    use super::{adjust_balance, get_balance, get_or_create_user, get_user, top_balances};
    use crate::database::Database;

    #[tokio::test]
    async fn creates_account_once_and_refreshes_name() {
        let db = Database::connect_in_memory().await.unwrap();

        let created = get_or_create_user(&db, 42, "steve").await.unwrap();
        assert_eq!(created.balance, 0);
        assert_eq!(created.level, 1);
        assert_eq!(created.xp, 0);

        adjust_balance(&db, 42, 25).await.unwrap();
        let again = get_or_create_user(&db, 42, "alex").await.unwrap();
        assert_eq!(again.display_name, "alex");
        assert_eq!(again.balance, 25);
    }

    #[tokio::test]
    async fn balance_adjustments_track_earned_and_spent() {
        let db = Database::connect_in_memory().await.unwrap();
        get_or_create_user(&db, 7, "herobrine").await.unwrap();

        adjust_balance(&db, 7, 100).await.unwrap();
        adjust_balance(&db, 7, -30).await.unwrap();
        adjust_balance(&db, 7, -120).await.unwrap();

        let account = get_user(&db, 7).await.unwrap().unwrap();
        assert_eq!(account.balance, -50);
        assert_eq!(account.total_earned, 100);
        assert_eq!(account.total_spent, 150);
        assert_eq!(get_balance(&db, 7).await.unwrap(), -50);
    }

    #[tokio::test]
    async fn missing_accounts_read_as_zero_and_reject_adjustments() {
        let db = Database::connect_in_memory().await.unwrap();

        assert_eq!(get_balance(&db, 9).await.unwrap(), 0);
        assert!(get_user(&db, 9).await.unwrap().is_none());
        assert!(adjust_balance(&db, 9, 10).await.is_err());
    }

    #[tokio::test]
    async fn leaderboard_orders_by_balance_then_creation() {
        let db = Database::connect_in_memory().await.unwrap();
        for (user_id, name, balance) in [(3, "c", 50), (1, "a", 80), (2, "b", 50), (4, "d", 10)] {
            get_or_create_user(&db, user_id, name).await.unwrap();
            adjust_balance(&db, user_id, balance).await.unwrap();
        }

        let top = top_balances(&db, 3).await.unwrap();
        let ids: Vec<u64> = top.iter().map(|entry| entry.user_id).collect();
        assert_eq!(ids, vec![1, 3, 2]);
        assert_eq!(top[0].display_name, "a");
        assert_eq!(top[0].balance, 80);
    }
}
