/// Economy account for one Discord user, created lazily on first activity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserAccount {
    pub user_id: u64,
    pub display_name: String,
    pub balance: i64,
    pub total_earned: i64,
    pub total_spent: i64,
    pub level: i64,
    pub xp: i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub user_id: u64,
    pub display_name: String,
    pub balance: i64,
}
