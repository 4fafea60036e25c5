mod config;
mod events;

use poise::serenity_prelude as serenity;
use tracing::{debug, error, info, warn};
use tracing_subscriber::Layer;
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use rustls::crypto::ring::default_provider;

use cobble_core::{Data, Error};
use cobble_database::{CacheService, Database, MIGRATOR};
use cobble_utils::embed::{DEFAULT_EMBED_COLOR, rejection_embed};

use crate::config::BotConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let fmt_layer = tracing_subscriber::fmt::layer().with_filter(filter_fn(|metadata| {
        let target = metadata.target();

        let within_info_level = *metadata.level() <= tracing::Level::INFO;
        if !within_info_level {
            return false;
        }

        !(target.starts_with("serenity::gateway::bridge::shard_manager")
            || target.starts_with("serenity::gateway::bridge::shard_runner"))
    }));

    tracing_subscriber::registry().with(fmt_layer).init();

    default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("failed to install rustls ring provider"))?;

    dotenvy::dotenv().ok();
    let config = BotConfig::from_env()?;

    let db_pool = Database::connect(&config.database_url).await?;
    info!(database_url = %config.database_url, "SQLite connection established.");

    let cache = build_cache(&config);
    if cache.is_redis_enabled() {
        if let Err(err) = cache.ping().await {
            warn!(
                ?err,
                "Redis cache ping failed; cache operations will continue with fallback behavior."
            );
        } else {
            info!("Redis cache health check passed.");
        }
    }

    let db = Database::with_cache(db_pool, cache);

    if config.auto_run_migrations {
        MIGRATOR.run(db.pool()).await?;
        info!("Database migrations applied.");
    } else {
        info!("Auto migrations disabled (set AUTO_RUN_MIGRATIONS=true to run at startup).");
    }

    let intents = serenity::GatewayIntents::GUILDS
        | serenity::GatewayIntents::GUILD_MESSAGES
        | serenity::GatewayIntents::MESSAGE_CONTENT
        | serenity::GatewayIntents::GUILD_MESSAGE_REACTIONS
        | serenity::GatewayIntents::GUILD_MEMBERS;

    let guild_id = config.guild_id;
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: cobble_commands::commands(),
            event_handler: |ctx, event, framework, data| {
                Box::pin(handle_event(ctx, event, framework, data))
            },
            on_error: |error| Box::pin(on_error(error)),
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some(cobble_utils::COMMAND_PREFIX.to_string()),
                mention_as_prefix: false,
                case_insensitive_commands: true,
                ..Default::default()
            },
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            let db = db.clone();
            Box::pin(async move {
                info!(guilds = ready.guilds.len(), "Cobble has connected!");

                match guild_id {
                    Some(guild_id) => {
                        poise::builtins::register_in_guild(
                            ctx,
                            &framework.options().commands,
                            serenity::GuildId::new(guild_id),
                        )
                        .await?;
                        info!(guild_id, "Slash commands registered in guild.");
                    }
                    None => {
                        poise::builtins::register_globally(ctx, &framework.options().commands)
                            .await?;
                        info!("Slash commands registered globally.");
                    }
                }

                Ok(Data::new(db))
            })
        })
        .build();

    info!("Cobble is connecting...");

    let mut client = serenity::ClientBuilder::new(&config.token, intents)
        .framework(framework)
        .await?;

    client.start().await?;
    Ok(())
}

fn build_cache(config: &BotConfig) -> CacheService {
    let key_prefix = config.redis_key_prefix.clone();

    if !config.redis_enabled {
        info!("Redis cache disabled (set REDIS_ENABLED=true to enable).");
        return CacheService::disabled(key_prefix);
    }

    let Some(redis_url) = config.redis_url.as_deref() else {
        warn!(key_prefix = %key_prefix, "REDIS_ENABLED=true but REDIS_URL is missing; continuing with DB-only mode.");
        return CacheService::disabled(key_prefix);
    };

    match CacheService::redis(redis_url, key_prefix.clone()) {
        Ok(cache) => {
            info!(key_prefix = %key_prefix, "Redis cache enabled.");
            cache
        }
        Err(err) => {
            warn!(?err, key_prefix = %key_prefix, "Failed to initialize Redis cache; continuing with DB-only mode.");
            CacheService::disabled(key_prefix)
        }
    }
}

async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!(?error, command = %ctx.command().qualified_name, "command error");

            let embed = serenity::CreateEmbed::new()
                .title("Command Error")
                .description("Something went wrong while running this command.")
                .color(DEFAULT_EMBED_COLOR);

            let _ = ctx
                .send(poise::CreateReply::default().ephemeral(true).embed(embed))
                .await;
        }
        poise::FrameworkError::ArgumentParse { ctx, input, .. } => {
            let usage = cobble_commands::COMMANDS
                .iter()
                .find(|meta| meta.name == ctx.command().name)
                .map(|meta| meta.usage.to_owned())
                .unwrap_or_else(|| {
                    format!(
                        "{}{}",
                        cobble_utils::COMMAND_PREFIX,
                        ctx.command().qualified_name
                    )
                });
            let description = if let Some(input) = input {
                format!("Invalid argument: `{}`\nUsage: `{}`", input, usage)
            } else {
                format!("Missing required argument.\nUsage: `{}`", usage)
            };

            let _ = ctx.say(description).await;
        }
        poise::FrameworkError::MissingUserPermissions { ctx, .. } => {
            let _ = ctx
                .send(poise::CreateReply::default().embed(rejection_embed(
                    "You need the Administrator permission to use this command.",
                )))
                .await;
        }
        poise::FrameworkError::UnknownCommand { .. } => {
            debug!("unknown command invocation");
        }
        other => {
            error!(?other, "framework error");
        }
    }
}

async fn handle_event(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, Data, Error>,
    data: &Data,
) -> Result<(), Error> {
    match event {
        serenity::FullEvent::Message { new_message } => {
            events::quest_events::handle_message_quests(ctx, data, new_message).await;
        }
        serenity::FullEvent::ReactionAdd { add_reaction } => {
            events::quest_events::handle_reaction_quests(ctx, data, add_reaction).await;
        }
        serenity::FullEvent::GuildMemberAddition { new_member } => {
            events::welcome::handle_member_welcome(ctx, data, new_member).await;
        }
        _ => {}
    }

    Ok(())
}
