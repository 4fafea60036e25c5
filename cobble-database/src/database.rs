use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};

use crate::cache::CacheService;

/// Compile-time discovered SQLx migrations for the `cobble-database` crate.
pub static MIGRATOR: Migrator = sqlx::migrate!();

/// How long a connection waits on another writer before giving up.
pub const BUSY_TIMEOUT: Duration = Duration::from_secs(10);

/// Begin statement for read-modify-write transactions. SQLite will not
/// upgrade a deferred reader while another writer is pending.
pub(crate) const BEGIN_WRITE: &str = "BEGIN IMMEDIATE";

/// Shared database handle passed across crates.
#[derive(Clone, Debug)]
pub struct Database {
    pool: SqlitePool,
    cache: CacheService,
}

impl Database {
    /// Create a database handle from an existing pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            cache: CacheService::disabled("cobble:prod"),
        }
    }

    /// Create a database handle from an existing pool and cache service.
    pub fn with_cache(pool: SqlitePool, cache: CacheService) -> Self {
        Self { pool, cache }
    }

    /// Open (and create if missing) the SQLite file behind `database_url`.
    pub async fn connect(database_url: &str) -> anyhow::Result<SqlitePool> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(BUSY_TIMEOUT);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        Ok(pool)
    }

    /// Private in-memory database with all migrations applied.
    ///
    /// The pool is pinned to a single connection that never expires, since
    /// every SQLite memory connection owns its own database.
    pub async fn connect_in_memory() -> anyhow::Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        MIGRATOR.run(&pool).await?;
        Ok(Self::new(pool))
    }

    /// Migrated database in a fresh file under the system temp directory.
    ///
    /// Uses the same pool settings as `connect`, so tests can run several
    /// writers against it at once.
    pub async fn connect_scratch_file(label: &str) -> anyhow::Result<Self> {
        static NEXT: AtomicU64 = AtomicU64::new(0);

        let stamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)?
            .as_nanos();
        let path = std::env::temp_dir().join(format!(
            "cobble-{label}-{}-{stamp}-{}.db",
            std::process::id(),
            NEXT.fetch_add(1, Ordering::Relaxed)
        ));

        let pool = Self::connect(&format!("sqlite://{}", path.display())).await?;
        MIGRATOR.run(&pool).await?;
        Ok(Self::new(pool))
    }

    /// Expose the underlying pool for query modules.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Expose the cache service for query modules.
    pub fn cache(&self) -> &CacheService {
        &self.cache
    }
}
