/// Parse a channel mention (`<#123>`) or raw channel id.
pub fn parse_channel_id(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    if let Ok(id) = raw.parse::<u64>() {
        return Some(id);
    }

    raw.strip_prefix("<#")
        .and_then(|rest| rest.strip_suffix('>'))
        .and_then(|id| id.parse::<u64>().ok())
}

/// True when a lowercased message is asking for the game server address.
pub fn asks_for_server_ip(lowered: &str) -> bool {
    lowered.split_whitespace().any(|word| word == "ip")
        || lowered.contains("server ip")
        || lowered.contains("what's the ip")
        || lowered.contains("whats the ip")
}
