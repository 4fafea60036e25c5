use std::env;

use anyhow::Context;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://cobble.db";
pub const DEFAULT_REDIS_KEY_PREFIX: &str = "cobble:prod";

/// Process configuration read once at startup.
#[derive(Clone, Debug)]
pub struct BotConfig {
    pub token: String,
    pub database_url: String,
    /// Register commands in this guild only; globally when unset.
    pub guild_id: Option<u64>,
    pub auto_run_migrations: bool,
    pub redis_enabled: bool,
    pub redis_url: Option<String>,
    pub redis_key_prefix: String,
}

impl BotConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let token = env::var("DISCORD_TOKEN").context("DISCORD_TOKEN must be set")?;

        Ok(Self {
            token,
            database_url: env_string("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_owned()),
            guild_id: env_optional_u64("DISCORD_GUILD_ID")?,
            auto_run_migrations: env_bool("AUTO_RUN_MIGRATIONS", true),
            redis_enabled: env_bool("REDIS_ENABLED", false),
            redis_url: env_string("REDIS_URL"),
            redis_key_prefix: env_string("REDIS_KEY_PREFIX")
                .unwrap_or_else(|| DEFAULT_REDIS_KEY_PREFIX.to_owned()),
        })
    }
}

fn env_string(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

fn env_bool(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(value) => parse_bool(&value),
        Err(_) => default,
    }
}

fn env_optional_u64(key: &str) -> anyhow::Result<Option<u64>> {
    env_string(key)
        .map(|value| {
            value
                .parse::<u64>()
                .with_context(|| format!("{key} must be a numeric id"))
        })
        .transpose()
}

fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::parse_bool;

    #[test]
    fn boolean_flags() {
        assert!(parse_bool("true"));
        assert!(parse_bool(" YES "));
        assert!(parse_bool("1"));
        assert!(!parse_bool("false"));
        assert!(!parse_bool("enabled"));
    }
}
