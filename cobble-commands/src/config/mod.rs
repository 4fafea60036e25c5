pub mod console;
pub mod embeds;
pub mod setup;
pub mod setupchannel;
pub mod welcome;
