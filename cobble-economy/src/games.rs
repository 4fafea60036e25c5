use rand::Rng;
use rand::seq::SliceRandom;
use tracing::info;

use cobble_database::impls::users::{adjust_balance, get_balance, get_or_create_user};

use crate::error::EconomyError;
use crate::quests::catalog::QuestType;
use crate::quests::settlement::QuestNotification;
use crate::service::EconomyService;

pub const SLOT_SYMBOLS: [&str; 7] = ["🍒", "🍋", "🍊", "🍇", "⭐", "💎", "7️⃣"];
const JACKPOT_REELS: [&str; 3] = ["💎", "💎", "💎"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoinSide {
    Heads,
    Tails,
}

impl CoinSide {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "heads" | "head" | "h" => Some(Self::Heads),
            "tails" | "tail" | "t" => Some(Self::Tails),
            _ => None,
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen_bool(0.5) {
            Self::Heads
        } else {
            Self::Tails
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Heads => "heads",
            Self::Tails => "tails",
        }
    }
}

/// Parse a stake argument: a positive integer or `all`, capped by `balance`.
pub fn parse_stake(raw: &str, balance: i64) -> Result<i64, EconomyError> {
    let raw = raw.trim();
    let stake = if raw.eq_ignore_ascii_case("all") {
        balance
    } else {
        raw.parse::<i64>()
            .map_err(|_| EconomyError::validation("Amount must be a number or 'all'!"))?
    };

    if stake <= 0 {
        return Err(EconomyError::validation("Amount must be positive!"));
    }

    if balance < stake {
        return Err(EconomyError::InsufficientFunds { balance, stake });
    }

    Ok(stake)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotTier {
    Jackpot,
    BigWin,
    Win,
    Loss,
}

impl SlotTier {
    /// Map a 1..=100 roll: 1% jackpot, 9% big win, 20% win, otherwise a loss.
    pub fn from_roll(roll: u32) -> Self {
        match roll {
            0..=1 => Self::Jackpot,
            2..=10 => Self::BigWin,
            11..=30 => Self::Win,
            _ => Self::Loss,
        }
    }

    pub fn multiplier(self) -> i64 {
        match self {
            Self::Jackpot => 100,
            Self::BigWin => 5,
            Self::Win => 2,
            Self::Loss => 0,
        }
    }

    /// Balance change for `stake`. Winning stakes are kept, so wins pay the
    /// full multiple on top.
    pub fn balance_delta(self, stake: i64) -> i64 {
        match self {
            Self::Loss => -stake,
            tier => stake.saturating_mul(tier.multiplier()),
        }
    }
}

#[derive(Clone, Debug)]
pub struct CoinflipOutcome {
    pub called: CoinSide,
    pub landed: CoinSide,
    pub stake: i64,
    pub new_balance: i64,
    pub notifications: Vec<QuestNotification>,
}

impl CoinflipOutcome {
    pub fn won(&self) -> bool {
        self.called == self.landed
    }
}

#[derive(Clone, Debug)]
pub struct GambleOutcome {
    pub tier: SlotTier,
    pub reels: [&'static str; 3],
    pub stake: i64,
    pub delta: i64,
    pub new_balance: i64,
    pub notifications: Vec<QuestNotification>,
}

impl EconomyService {
    pub async fn coinflip(
        &self,
        user_id: u64,
        display_name: &str,
        raw_amount: &str,
        raw_side: &str,
    ) -> Result<CoinflipOutcome, EconomyError> {
        let landed = CoinSide::random(&mut rand::thread_rng());
        self.coinflip_landing(user_id, display_name, raw_amount, raw_side, landed)
            .await
    }

    pub(crate) async fn coinflip_landing(
        &self,
        user_id: u64,
        display_name: &str,
        raw_amount: &str,
        raw_side: &str,
        landed: CoinSide,
    ) -> Result<CoinflipOutcome, EconomyError> {
        let _guard = self.locks.acquire(user_id).await;

        let called = CoinSide::parse(raw_side)
            .ok_or_else(|| EconomyError::validation("Please choose 'heads' or 'tails'!"))?;

        get_or_create_user(&self.db, user_id, display_name).await?;
        let balance = get_balance(&self.db, user_id).await?;
        let stake = parse_stake(raw_amount, balance)?;

        let mut notifications = self
            .record_command_usage_locked(user_id, display_name, QuestType::Coinflip)
            .await?;

        if called == landed {
            adjust_balance(&self.db, user_id, stake).await?;
            notifications.extend(
                self.record_command_usage_locked(user_id, display_name, QuestType::WinCoinflip)
                    .await?,
            );
        } else {
            adjust_balance(&self.db, user_id, -stake).await?;
        }

        let new_balance = get_balance(&self.db, user_id).await?;
        info!(user_id, stake, won = called == landed, "coinflip settled");

        Ok(CoinflipOutcome {
            called,
            landed,
            stake,
            new_balance,
            notifications,
        })
    }

    pub async fn gamble(
        &self,
        user_id: u64,
        display_name: &str,
        raw_amount: &str,
    ) -> Result<GambleOutcome, EconomyError> {
        let (roll, reels) = {
            let mut rng = rand::thread_rng();
            let roll = rng.gen_range(1..=100);
            let mut reels = [""; 3];
            for reel in &mut reels {
                *reel = SLOT_SYMBOLS.choose(&mut rng).copied().unwrap_or(SLOT_SYMBOLS[0]);
            }
            (roll, reels)
        };

        self.gamble_roll(user_id, display_name, raw_amount, roll, reels)
            .await
    }

    pub(crate) async fn gamble_roll(
        &self,
        user_id: u64,
        display_name: &str,
        raw_amount: &str,
        roll: u32,
        reels: [&'static str; 3],
    ) -> Result<GambleOutcome, EconomyError> {
        let _guard = self.locks.acquire(user_id).await;

        get_or_create_user(&self.db, user_id, display_name).await?;
        let balance = get_balance(&self.db, user_id).await?;
        let stake = parse_stake(raw_amount, balance)?;

        let notifications = self
            .record_command_usage_locked(user_id, display_name, QuestType::Gamble)
            .await?;

        let tier = SlotTier::from_roll(roll);
        let delta = tier.balance_delta(stake);
        adjust_balance(&self.db, user_id, delta).await?;
        let new_balance = get_balance(&self.db, user_id).await?;
        info!(user_id, stake, roll, delta, "slots settled");

        Ok(GambleOutcome {
            tier,
            reels: if tier == SlotTier::Jackpot {
                JACKPOT_REELS
            } else {
                reels
            },
            stake,
            delta,
            new_balance,
            notifications,
        })
    }

    /// Administrative grant. Returns the new balance.
    pub async fn give(
        &self,
        user_id: u64,
        display_name: &str,
        amount: i64,
    ) -> Result<i64, EconomyError> {
        if amount <= 0 {
            return Err(EconomyError::validation("Amount must be positive!"));
        }

        let _guard = self.locks.acquire(user_id).await;
        get_or_create_user(&self.db, user_id, display_name).await?;
        adjust_balance(&self.db, user_id, amount).await?;

        Ok(get_balance(&self.db, user_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use cobble_database::Database;
    use cobble_database::impls::assignments::set_assignment_at;
    use cobble_database::impls::progress::get_progress;
    use cobble_database::impls::users::{adjust_balance, get_balance, get_or_create_user, now_unix_secs};

    use super::{CoinSide, SLOT_SYMBOLS, SlotTier, parse_stake};
    use crate::error::EconomyError;
    use crate::service::EconomyService;

    const USER: u64 = 77;

    async fn funded_service(balance: i64, quest_ids: &[u32]) -> EconomyService {
        let db = Database::connect_in_memory().await.unwrap();
        get_or_create_user(&db, USER, "alex").await.unwrap();
        if balance > 0 {
            adjust_balance(&db, USER, balance).await.unwrap();
        }
        set_assignment_at(&db, USER, quest_ids, now_unix_secs())
            .await
            .unwrap();
        EconomyService::new(db)
    }

    #[test]
    fn parses_coin_sides() {
        assert_eq!(CoinSide::parse("H"), Some(CoinSide::Heads));
        assert_eq!(CoinSide::parse("tails"), Some(CoinSide::Tails));
        assert_eq!(CoinSide::parse("edge"), None);
    }

    #[test]
    fn stake_parsing_rules() {
        assert_eq!(parse_stake("25", 100).unwrap(), 25);
        assert_eq!(parse_stake("ALL", 100).unwrap(), 100);
        assert!(matches!(parse_stake("lots", 100), Err(EconomyError::Validation(_))));
        assert!(matches!(parse_stake("0", 100), Err(EconomyError::Validation(_))));
        assert!(matches!(parse_stake("all", 0), Err(EconomyError::Validation(_))));
        assert!(matches!(
            parse_stake("150", 100),
            Err(EconomyError::InsufficientFunds { balance: 100, stake: 150 })
        ));
    }

    #[test]
    fn slot_tiers_follow_roll_bands() {
        assert_eq!(SlotTier::from_roll(1), SlotTier::Jackpot);
        assert_eq!(SlotTier::from_roll(2), SlotTier::BigWin);
        assert_eq!(SlotTier::from_roll(10), SlotTier::BigWin);
        assert_eq!(SlotTier::from_roll(11), SlotTier::Win);
        assert_eq!(SlotTier::from_roll(30), SlotTier::Win);
        assert_eq!(SlotTier::from_roll(31), SlotTier::Loss);
        assert_eq!(SlotTier::from_roll(100), SlotTier::Loss);

        assert_eq!(SlotTier::Jackpot.balance_delta(10), 1_000);
        assert_eq!(SlotTier::Win.balance_delta(10), 20);
        assert_eq!(SlotTier::Loss.balance_delta(10), -10);
    }

    #[tokio::test]
    async fn overdrawn_coinflip_changes_nothing() {
        let economy = service_with_coinflip_quests(20).await;

        let result = economy
            .coinflip_landing(USER, "alex", "50", "heads", CoinSide::Heads)
            .await;

        assert!(matches!(
            result,
            Err(EconomyError::InsufficientFunds { balance: 20, stake: 50 })
        ));
        assert_eq!(get_balance(economy.db(), USER).await.unwrap(), 20);
        assert_eq!(get_progress(economy.db(), USER, 16).await.unwrap().progress, 0);
    }

    #[tokio::test]
    async fn invalid_side_is_rejected_before_anything_else() {
        let economy = service_with_coinflip_quests(20).await;

        let result = economy
            .coinflip_landing(USER, "alex", "5", "sideways", CoinSide::Heads)
            .await;

        assert!(matches!(result, Err(EconomyError::Validation(_))));
        assert_eq!(get_progress(economy.db(), USER, 16).await.unwrap().progress, 0);
    }

    #[tokio::test]
    async fn winning_coinflip_doubles_and_counts_the_win() {
        let economy = service_with_coinflip_quests(100).await;

        let outcome = economy
            .coinflip_landing(USER, "alex", "40", "h", CoinSide::Heads)
            .await
            .unwrap();

        assert!(outcome.won());
        assert_eq!(outcome.new_balance, 140);
        assert_eq!(get_progress(economy.db(), USER, 16).await.unwrap().progress, 1);
        assert_eq!(get_progress(economy.db(), USER, 18).await.unwrap().progress, 1);
    }

    #[tokio::test]
    async fn losing_coinflip_takes_the_stake() {
        let economy = service_with_coinflip_quests(100).await;

        let outcome = economy
            .coinflip_landing(USER, "alex", "all", "tails", CoinSide::Heads)
            .await
            .unwrap();

        assert!(!outcome.won());
        assert_eq!(outcome.new_balance, 0);
        assert_eq!(get_progress(economy.db(), USER, 16).await.unwrap().progress, 1);
        assert_eq!(get_progress(economy.db(), USER, 18).await.unwrap().progress, 0);
    }

    #[tokio::test]
    async fn slots_pay_by_tier_and_count_usage() {
        let economy = funded_service(100, &[17]).await;
        let reels = [SLOT_SYMBOLS[0], SLOT_SYMBOLS[1], SLOT_SYMBOLS[2]];

        let win = economy.gamble_roll(USER, "alex", "10", 20, reels).await.unwrap();
        assert_eq!(win.tier, SlotTier::Win);
        assert_eq!(win.new_balance, 120);

        let loss = economy.gamble_roll(USER, "alex", "20", 80, reels).await.unwrap();
        assert_eq!(loss.delta, -20);
        assert_eq!(loss.new_balance, 100);

        let jackpot = economy.gamble_roll(USER, "alex", "1", 1, reels).await.unwrap();
        assert_eq!(jackpot.reels, ["💎", "💎", "💎"]);
        // 100 + 100 jackpot + 200 for finishing the three-spin quest.
        assert_eq!(jackpot.new_balance, 400);
        assert_eq!(jackpot.notifications.len(), 1);
        assert_eq!(jackpot.notifications[0].quest_id, 17);
    }

    #[tokio::test]
    async fn give_requires_a_positive_amount() {
        let economy = funded_service(0, &[21]).await;

        assert!(matches!(
            economy.give(USER, "alex", 0).await,
            Err(EconomyError::Validation(_))
        ));
        assert_eq!(economy.give(USER, "alex", 500).await.unwrap(), 500);
    }

    async fn service_with_coinflip_quests(balance: i64) -> EconomyService {
        funded_service(balance, &[16, 18]).await
    }
}
