/// The quest ids handed to a user for the current day.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DailyAssignment {
    pub quest_ids: Vec<u32>,
    pub assigned_at: u64,
}

impl DailyAssignment {
    /// Seconds an assignment stays live before it is rotated.
    pub const LIFETIME_SECS: u64 = 24 * 60 * 60;

    pub fn is_stale(&self, now: u64) -> bool {
        now.saturating_sub(self.assigned_at) > Self::LIFETIME_SECS
    }

    pub fn resets_in(&self, now: u64) -> u64 {
        (self.assigned_at + Self::LIFETIME_SECS).saturating_sub(now)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QuestProgress {
    pub progress: u64,
    pub completed: bool,
}

/// Per-day sets of distinct values a user has produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tracker {
    Mentions,
    Channels,
}

impl Tracker {
    pub fn as_str(self) -> &'static str {
        match self {
            Tracker::Mentions => "mentions",
            Tracker::Channels => "channels",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DailyAssignment;

    #[test]
    fn assignment_goes_stale_strictly_after_a_day() {
        let assignment = DailyAssignment {
            quest_ids: vec![1, 2, 3],
            assigned_at: 1_000,
        };

        assert!(!assignment.is_stale(1_000));
        assert!(!assignment.is_stale(1_000 + DailyAssignment::LIFETIME_SECS));
        assert!(assignment.is_stale(1_001 + DailyAssignment::LIFETIME_SECS));
    }

    #[test]
    fn resets_in_counts_down_and_saturates() {
        let assignment = DailyAssignment {
            quest_ids: Vec::new(),
            assigned_at: 0,
        };

        assert_eq!(assignment.resets_in(0), DailyAssignment::LIFETIME_SECS);
        assert_eq!(assignment.resets_in(3_600), DailyAssignment::LIFETIME_SECS - 3_600);
        assert_eq!(assignment.resets_in(u64::MAX), 0);
    }
}
