//! Coin economy: daily quests, leveling hooks, and the gambling games.

pub mod error;
pub mod games;
pub mod locks;
pub mod quests;
pub mod service;

pub use error::EconomyError;
pub use service::EconomyService;
