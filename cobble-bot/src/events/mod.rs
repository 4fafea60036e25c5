pub mod quest_events;
pub mod welcome;
