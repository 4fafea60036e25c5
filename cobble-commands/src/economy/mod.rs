pub mod balance;
pub mod embeds;
pub mod give;
pub mod leaderboard;
pub mod profile;
