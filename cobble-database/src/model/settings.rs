use serde::{Deserialize, Serialize};

/// Per-guild Minecraft server and welcome configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    pub guild_id: u64,
    pub server_ip: Option<String>,
    pub server_port: Option<u16>,
    pub console_channel_id: Option<u64>,
    pub welcome_channel_id: Option<u64>,
    pub console_enabled: bool,
    pub welcome_enabled: bool,
}

/// Partial update; `None` leaves the stored column untouched.
#[derive(Clone, Debug, Default)]
pub struct ServerSettingsUpdate {
    pub server_ip: Option<String>,
    pub server_port: Option<u16>,
    pub console_channel_id: Option<u64>,
    pub welcome_channel_id: Option<u64>,
    pub console_enabled: Option<bool>,
    pub welcome_enabled: Option<bool>,
}
