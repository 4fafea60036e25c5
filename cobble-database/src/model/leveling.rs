/// Coins granted for every level reached, multiplied by that level.
pub const LEVEL_UP_COINS_PER_LEVEL: i64 = 50;

/// Outcome of adding XP to a profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelUpdate {
    pub leveled_up: bool,
    pub new_level: i64,
    pub new_xp: i64,
    pub xp_needed: i64,
    pub coins_earned: i64,
}

pub fn xp_needed(level: i64) -> i64 {
    level.max(1) * 100
}

/// Add `amount` XP to `(level, xp)`, carrying remainders across as many
/// levels as the amount covers.
pub fn apply_xp(level: i64, xp: i64, amount: i64) -> LevelUpdate {
    let mut level = level.max(1);
    let mut xp = xp.max(0) + amount.max(0);
    let mut coins_earned = 0;
    let mut leveled_up = false;

    while xp >= xp_needed(level) {
        xp -= xp_needed(level);
        level += 1;
        coins_earned += LEVEL_UP_COINS_PER_LEVEL * level;
        leveled_up = true;
    }

    LevelUpdate {
        leveled_up,
        new_level: level,
        new_xp: xp,
        xp_needed: xp_needed(level),
        coins_earned,
    }
}

#[cfg(test)]
mod tests {
    use super::{apply_xp, xp_needed};

    #[test]
    fn xp_requirement_scales_with_level() {
        assert_eq!(xp_needed(1), 100);
        assert_eq!(xp_needed(7), 700);
        assert_eq!(xp_needed(0), 100);
    }

    #[test]
    fn stays_on_level_below_threshold() {
        let update = apply_xp(1, 40, 59);
        assert!(!update.leveled_up);
        assert_eq!(update.new_level, 1);
        assert_eq!(update.new_xp, 99);
        assert_eq!(update.coins_earned, 0);
    }

    #[test]
    fn carries_remainder_on_level_up() {
        let update = apply_xp(1, 90, 15);
        assert!(update.leveled_up);
        assert_eq!(update.new_level, 2);
        assert_eq!(update.new_xp, 5);
        assert_eq!(update.xp_needed, 200);
        assert_eq!(update.coins_earned, 100);
    }

    #[test]
    fn jumps_multiple_levels_in_one_call() {
        // 100 + 200 + 300 = 600 reaches level 4 exactly.
        let update = apply_xp(1, 0, 650);
        assert_eq!(update.new_level, 4);
        assert_eq!(update.new_xp, 50);
        assert_eq!(update.coins_earned, 100 + 150 + 200);
    }

    #[test]
    fn split_and_combined_amounts_agree() {
        for (first, second) in [(0, 0), (99, 1), (150, 375), (1_000, 2_345), (7, 4_000)] {
            let step = apply_xp(1, 0, first);
            let split = apply_xp(step.new_level, step.new_xp, second);
            let combined = apply_xp(1, 0, first + second);

            assert_eq!((split.new_level, split.new_xp), (combined.new_level, combined.new_xp));
            assert_eq!(step.coins_earned + split.coins_earned, combined.coins_earned);
        }
    }
}
