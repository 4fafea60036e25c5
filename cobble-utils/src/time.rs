use chrono::{Local, Timelike};

/// Hour of day (0..=23) on the host's local clock.
pub fn local_hour() -> u32 {
    Local::now().hour()
}
