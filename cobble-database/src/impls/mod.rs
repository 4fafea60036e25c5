pub mod assignments;
pub mod leveling;
pub mod progress;
pub mod server_settings;
pub mod trackers;
pub mod users;
