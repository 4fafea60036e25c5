pub mod leveling;
pub mod quests;
pub mod settings;
pub mod user;
