/// Embed colours and shared embed builders.
pub mod embed;
/// Coin and duration formatting.
pub mod formatting;
/// Minecraft server status queries.
pub mod minecraft;
/// Single source of truth for the message-command prefix.
pub const COMMAND_PREFIX: &str = "a ";
/// Pure parser helpers.
pub mod parse;
/// Shared time helpers.
pub mod time;
