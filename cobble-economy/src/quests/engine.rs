use std::collections::BTreeSet;

use tracing::{debug, info};

use cobble_database::impls::assignments::{get_assignment, set_assignment_at};
use cobble_database::impls::leveling::add_xp;
use cobble_database::impls::progress::{clear_all_progress, get_progress, set_progress};
use cobble_database::impls::trackers::{clear_trackers, record_tracker_values};
use cobble_database::impls::users::{get_or_create_user, now_unix_secs, top_balances};
use cobble_database::model::leveling::LevelUpdate;
use cobble_database::model::quests::{DailyAssignment, QuestProgress, Tracker};
use cobble_database::model::user::{LeaderboardEntry, UserAccount};

use super::catalog::{QuestDefinition, QuestType, draw_daily_quests, quest_by_id};
use super::classifier::{MessageFeatures, QuestEvent, advances};
use super::secret::{SecretNotification, advance_secret_quest};
use super::settlement::{QuestNotification, settle};
use crate::service::EconomyService;

/// A chat message as delivered by the gateway.
#[derive(Clone, Debug)]
pub struct MessageEvent {
    pub user_id: u64,
    pub display_name: String,
    pub channel_id: u64,
    pub content: String,
    pub mentions: Vec<u64>,
    pub local_hour: u32,
}

#[derive(Clone, Debug)]
pub struct ReactionEvent {
    pub user_id: u64,
    pub display_name: String,
    pub symbol: String,
}

#[derive(Clone, Debug, Default)]
pub struct MessageOutcome {
    pub level_up: Option<LevelUpdate>,
    pub completed: Vec<QuestNotification>,
    pub secret: Option<SecretNotification>,
}

#[derive(Clone, Copy, Debug)]
pub struct QuestStatus {
    pub quest: &'static QuestDefinition,
    pub progress: QuestProgress,
}

/// Everything the quests and profile views display for one user.
#[derive(Clone, Debug)]
pub struct UserSnapshot {
    pub account: UserAccount,
    pub quests: Vec<QuestStatus>,
    pub resets_in_secs: u64,
}

impl UserSnapshot {
    pub fn completed_count(&self) -> usize {
        self.quests
            .iter()
            .filter(|status| status.progress.completed)
            .count()
    }
}

impl EconomyService {
    /// Apply a chat message: XP, daily quests, then the secret quest.
    pub async fn process_message(&self, event: &MessageEvent) -> anyhow::Result<MessageOutcome> {
        let _guard = self.locks.acquire(event.user_id).await;
        let user_id = event.user_id;

        get_or_create_user(&self.db, user_id, &event.display_name).await?;

        let mentions: Vec<u64> = event
            .mentions
            .iter()
            .copied()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let xp = 1 + i64::try_from(mentions.len())?;
        let level = add_xp(&self.db, user_id, xp).await?;

        let assignment = self.current_assignment(user_id, now_unix_secs()).await?;

        let new_mentions =
            record_tracker_values(&self.db, user_id, Tracker::Mentions, &mentions).await?;
        let new_channels =
            record_tracker_values(&self.db, user_id, Tracker::Channels, &[event.channel_id])
                .await?;

        let features =
            MessageFeatures::new(&event.content, new_mentions, new_channels, event.local_hour);
        let lowered = features.lowered.clone();
        let completed = self
            .advance_assigned(user_id, &assignment.quest_ids, &QuestEvent::Message(features))
            .await?;

        let secret = advance_secret_quest(&self.db, user_id, &lowered).await?;

        Ok(MessageOutcome {
            level_up: level.leveled_up.then_some(level),
            completed,
            secret,
        })
    }

    pub async fn process_reaction(
        &self,
        event: &ReactionEvent,
    ) -> anyhow::Result<Vec<QuestNotification>> {
        let _guard = self.locks.acquire(event.user_id).await;

        get_or_create_user(&self.db, event.user_id, &event.display_name).await?;
        let assignment = self
            .current_assignment(event.user_id, now_unix_secs())
            .await?;

        self.advance_assigned(
            event.user_id,
            &assignment.quest_ids,
            &QuestEvent::Reaction {
                symbol: &event.symbol,
            },
        )
        .await
    }

    /// Count one successful use of the command behind `quest_type`.
    pub async fn record_command_usage(
        &self,
        user_id: u64,
        display_name: &str,
        quest_type: QuestType,
    ) -> anyhow::Result<Vec<QuestNotification>> {
        let _guard = self.locks.acquire(user_id).await;
        self.record_command_usage_locked(user_id, display_name, quest_type)
            .await
    }

    pub(crate) async fn record_command_usage_locked(
        &self,
        user_id: u64,
        display_name: &str,
        quest_type: QuestType,
    ) -> anyhow::Result<Vec<QuestNotification>> {
        get_or_create_user(&self.db, user_id, display_name).await?;
        let assignment = self.current_assignment(user_id, now_unix_secs()).await?;

        self.advance_assigned(user_id, &assignment.quest_ids, &QuestEvent::Command(quest_type))
            .await
    }

    pub async fn account(&self, user_id: u64, display_name: &str) -> anyhow::Result<UserAccount> {
        let _guard = self.locks.acquire(user_id).await;
        get_or_create_user(&self.db, user_id, display_name).await
    }

    /// Account plus today's quests, rotating them first if they went stale.
    pub async fn snapshot(&self, user_id: u64, display_name: &str) -> anyhow::Result<UserSnapshot> {
        let _guard = self.locks.acquire(user_id).await;

        let account = get_or_create_user(&self.db, user_id, display_name).await?;
        let now = now_unix_secs();
        let assignment = self.current_assignment(user_id, now).await?;

        let mut quests = Vec::with_capacity(assignment.quest_ids.len());
        for quest_id in &assignment.quest_ids {
            let Some(quest) = quest_by_id(*quest_id) else {
                debug!(user_id, quest_id, "assigned quest id missing from catalog");
                continue;
            };
            let progress = get_progress(&self.db, user_id, *quest_id).await?;
            quests.push(QuestStatus { quest, progress });
        }

        Ok(UserSnapshot {
            account,
            quests,
            resets_in_secs: assignment.resets_in(now),
        })
    }

    pub async fn leaderboard(&self, limit: u32) -> anyhow::Result<Vec<LeaderboardEntry>> {
        top_balances(&self.db, limit).await
    }

    async fn current_assignment(&self, user_id: u64, now: u64) -> anyhow::Result<DailyAssignment> {
        let assignment = get_assignment(&self.db, user_id).await?;
        if !assignment.quest_ids.is_empty() && !assignment.is_stale(now) {
            return Ok(assignment);
        }

        self.rotate(user_id, now).await
    }

    async fn rotate(&self, user_id: u64, now: u64) -> anyhow::Result<DailyAssignment> {
        clear_all_progress(&self.db, user_id).await?;
        clear_trackers(&self.db, user_id).await?;

        let quest_ids = draw_daily_quests(&mut rand::thread_rng());
        set_assignment_at(&self.db, user_id, &quest_ids, now).await?;
        info!(user_id, ?quest_ids, "rotated daily quests");

        Ok(DailyAssignment {
            quest_ids,
            assigned_at: now,
        })
    }

    /// Feed one event through every live quest in assignment order.
    async fn advance_assigned(
        &self,
        user_id: u64,
        quest_ids: &[u32],
        event: &QuestEvent<'_>,
    ) -> anyhow::Result<Vec<QuestNotification>> {
        let mut notifications = Vec::new();

        for quest_id in quest_ids {
            let Some(quest) = quest_by_id(*quest_id) else {
                debug!(user_id, quest_id, "assigned quest id missing from catalog");
                continue;
            };

            let current = get_progress(&self.db, user_id, quest.id).await?;
            if current.completed {
                continue;
            }

            let delta = advances(quest.quest_type, event);
            let progress = if quest.quest_type.is_forced() {
                if delta > 0 { delta } else { current.progress }
            } else if delta == 0 {
                continue;
            } else {
                current.progress + delta
            };

            if progress >= quest.target {
                // Credit first, then flag completed.
                let notification = settle(&self.db, user_id, quest).await?;
                set_progress(
                    &self.db,
                    user_id,
                    quest.id,
                    QuestProgress {
                        progress,
                        completed: true,
                    },
                )
                .await?;
                info!(user_id, quest_id = quest.id, reward = quest.reward, "quest completed");
                notifications.push(notification);
            } else if progress != current.progress {
                set_progress(
                    &self.db,
                    user_id,
                    quest.id,
                    QuestProgress {
                        progress,
                        completed: false,
                    },
                )
                .await?;
            }
        }

        Ok(notifications)
    }
}
