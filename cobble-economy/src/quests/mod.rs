pub mod catalog;
pub mod classifier;
pub mod engine;
pub mod secret;
pub mod settlement;

pub use catalog::{CATALOG, QuestDefinition, QuestType, quest_by_id};
pub use engine::{MessageEvent, MessageOutcome, QuestStatus, ReactionEvent, UserSnapshot};
pub use secret::SecretNotification;
pub use settlement::QuestNotification;
