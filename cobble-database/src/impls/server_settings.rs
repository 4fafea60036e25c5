use anyhow::Context as _;

use crate::cache::{CONFIG_CACHE_TTL, invalidate_server_settings, server_settings_key};
use crate::database::Database;
use crate::model::settings::{ServerSettings, ServerSettingsUpdate};

#[derive(sqlx::FromRow)]
struct ServerSettingsRow {
    guild_id: i64,
    server_ip: Option<String>,
    server_port: Option<i64>,
    console_channel_id: Option<i64>,
    welcome_channel_id: Option<i64>,
    console_enabled: bool,
    welcome_enabled: bool,
}

impl TryFrom<ServerSettingsRow> for ServerSettings {
    type Error = anyhow::Error;

    fn try_from(row: ServerSettingsRow) -> anyhow::Result<Self> {
        Ok(Self {
            guild_id: u64::try_from(row.guild_id).context("guild_id row out of u64 range")?,
            server_ip: row.server_ip,
            server_port: row
                .server_port
                .map(u16::try_from)
                .transpose()
                .context("server_port row out of u16 range")?,
            console_channel_id: row
                .console_channel_id
                .map(u64::try_from)
                .transpose()
                .context("console_channel_id row out of u64 range")?,
            welcome_channel_id: row
                .welcome_channel_id
                .map(u64::try_from)
                .transpose()
                .context("welcome_channel_id row out of u64 range")?,
            console_enabled: row.console_enabled,
            welcome_enabled: row.welcome_enabled,
        })
    }
}

pub async fn get_server_settings(
    db: &Database,
    guild_id: u64,
) -> anyhow::Result<Option<ServerSettings>> {
    let cache_key = server_settings_key(db.cache(), guild_id);
    db.cache()
        .get_or_load_json(&cache_key, CONFIG_CACHE_TTL, || async {
            let guild_id_i64 = i64::try_from(guild_id).context("guild_id out of i64 range")?;

            let row: Option<ServerSettingsRow> = sqlx::query_as(
                "SELECT guild_id, server_ip, server_port, console_channel_id, welcome_channel_id,
                        console_enabled, welcome_enabled
                 FROM server_settings
                 WHERE guild_id = ?1",
            )
            .bind(guild_id_i64)
            .fetch_optional(db.pool())
            .await?;

            row.map(ServerSettings::try_from).transpose()
        })
        .await
}

/// Merge `update` into the guild's settings, creating the row when needed.
/// Toggles default to enabled for new rows.
pub async fn update_server_settings(
    db: &Database,
    guild_id: u64,
    update: ServerSettingsUpdate,
) -> anyhow::Result<()> {
    let guild_id_i64 = i64::try_from(guild_id).context("guild_id out of i64 range")?;
    let console_channel_id = update
        .console_channel_id
        .map(i64::try_from)
        .transpose()
        .context("console_channel_id out of i64 range")?;
    let welcome_channel_id = update
        .welcome_channel_id
        .map(i64::try_from)
        .transpose()
        .context("welcome_channel_id out of i64 range")?;

    sqlx::query(
        "INSERT INTO server_settings (
            guild_id,
            server_ip,
            server_port,
            console_channel_id,
            welcome_channel_id,
            console_enabled,
            welcome_enabled
         ) VALUES (?1, ?2, ?3, ?4, ?5, COALESCE(?6, 1), COALESCE(?7, 1))
         ON CONFLICT (guild_id) DO UPDATE SET
            server_ip = COALESCE(?2, server_settings.server_ip),
            server_port = COALESCE(?3, server_settings.server_port),
            console_channel_id = COALESCE(?4, server_settings.console_channel_id),
            welcome_channel_id = COALESCE(?5, server_settings.welcome_channel_id),
            console_enabled = COALESCE(?6, server_settings.console_enabled),
            welcome_enabled = COALESCE(?7, server_settings.welcome_enabled)",
    )
    .bind(guild_id_i64)
    .bind(update.server_ip)
    .bind(update.server_port.map(i64::from))
    .bind(console_channel_id)
    .bind(welcome_channel_id)
    .bind(update.console_enabled)
    .bind(update.welcome_enabled)
    .execute(db.pool())
    .await?;

    invalidate_server_settings(db.cache(), guild_id).await?;

    Ok(())
}
