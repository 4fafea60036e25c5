pub mod config;
pub mod economy;
pub mod gambling;
pub mod quests;
pub mod utility;

use cobble_core::{Data, Error};

pub struct CommandMeta {
    pub name: &'static str,
    pub desc: &'static str,
    pub category: &'static str,
    pub usage: &'static str,
}

pub const COMMANDS: &[CommandMeta] = &[
    utility::ping::META,
    utility::help::META,
    utility::usage::META,
    utility::serverinfo::META,
    utility::checkserver::META,
    economy::balance::META,
    economy::profile::META,
    economy::leaderboard::META,
    economy::give::META,
    quests::quests::META,
    gambling::coinflip::META,
    gambling::gamble::META,
    config::setup::META,
    config::welcome::META,
    config::setupchannel::META,
    config::console::META,
];

pub fn commands() -> Vec<poise::Command<Data, Error>> {
    vec![
        utility::ping::ping(),
        utility::help::help(),
        utility::usage::usage(),
        utility::serverinfo::serverinfo(),
        utility::checkserver::checkserver(),
        economy::balance::balance(),
        economy::profile::profile(),
        economy::leaderboard::leaderboard(),
        economy::give::give(),
        quests::quests::quests(),
        gambling::coinflip::coinflip(),
        gambling::gamble::gamble(),
        config::setup::setup(),
        config::welcome::welcome(),
        config::setupchannel::setupchannel(),
        config::console::console(),
    ]
}
