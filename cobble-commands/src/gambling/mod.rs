pub mod coinflip;
pub mod embeds;
pub mod gamble;
