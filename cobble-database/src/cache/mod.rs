mod redis_store;

use std::future::Future;
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use redis_store::RedisStore;

/// How long a guild's server settings stay cached.
pub const CONFIG_CACHE_TTL: Duration = Duration::from_secs(300);

#[derive(Clone, Debug)]
enum CacheBackend {
    Disabled,
    Redis(RedisStore),
}

/// Optional read-through JSON cache in front of SQLite.
///
/// With the disabled backend every lookup misses and every write is dropped,
/// so callers never need to branch on whether Redis is configured.
#[derive(Clone, Debug)]
pub struct CacheService {
    key_prefix: String,
    backend: CacheBackend,
}

impl CacheService {
    pub fn disabled(prefix: impl Into<String>) -> Self {
        Self {
            key_prefix: prefix.into(),
            backend: CacheBackend::Disabled,
        }
    }

    pub fn redis(redis_url: &str, prefix: impl Into<String>) -> anyhow::Result<Self> {
        Ok(Self {
            key_prefix: prefix.into(),
            backend: CacheBackend::Redis(RedisStore::from_url(redis_url)?),
        })
    }

    pub fn is_redis_enabled(&self) -> bool {
        matches!(self.backend, CacheBackend::Redis(_))
    }

    pub async fn ping(&self) -> anyhow::Result<()> {
        match &self.backend {
            CacheBackend::Disabled => Ok(()),
            CacheBackend::Redis(store) => store.ping().await,
        }
    }

    pub fn key(&self, suffix: impl AsRef<str>) -> String {
        format!("{}:{}", self.key_prefix, suffix.as_ref())
    }

    pub async fn get_json<T>(&self, key: &str) -> anyhow::Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        let CacheBackend::Redis(store) = &self.backend else {
            return Ok(None);
        };

        store
            .get(key)
            .await?
            .map(|bytes| {
                serde_json::from_slice(&bytes).map_err(|e| {
                    anyhow::anyhow!("failed to deserialize cache value for `{key}`: {e}")
                })
            })
            .transpose()
    }

    pub async fn set_json<T>(&self, key: &str, value: &T, ttl: Duration) -> anyhow::Result<()>
    where
        T: Serialize,
    {
        let CacheBackend::Redis(store) = &self.backend else {
            return Ok(());
        };

        let payload = serde_json::to_vec(value)
            .map_err(|e| anyhow::anyhow!("failed to serialize cache value for `{key}`: {e}"))?;
        store.set_ex(key, payload, ttl.as_secs().max(1)).await
    }

    pub async fn del(&self, key: &str) -> anyhow::Result<()> {
        match &self.backend {
            CacheBackend::Disabled => Ok(()),
            CacheBackend::Redis(store) => store.del(key).await,
        }
    }

    /// Return the cached value for `key`, or run `loader` and cache its result.
    /// Cache failures are logged and fall through to `loader`.
    pub async fn get_or_load_json<T, F, Fut>(
        &self,
        key: &str,
        ttl: Duration,
        loader: F,
    ) -> anyhow::Result<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = anyhow::Result<T>>,
    {
        match self.get_json::<T>(key).await {
            Ok(Some(cached)) => return Ok(cached),
            Ok(None) => {}
            Err(e) => warn!(?e, cache_key = key, "cache get failed; falling back to database"),
        }

        let loaded = loader().await?;

        if let Err(e) = self.set_json(key, &loaded, ttl).await {
            warn!(?e, cache_key = key, "cache set failed; returning database value");
        }

        Ok(loaded)
    }
}

pub fn server_settings_key(cache: &CacheService, guild_id: u64) -> String {
    cache.key(format!("server_settings:{guild_id}"))
}

pub async fn invalidate_server_settings(cache: &CacheService, guild_id: u64) -> anyhow::Result<()> {
    cache.del(&server_settings_key(cache, guild_id)).await
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::{CONFIG_CACHE_TTL, CacheService, server_settings_key};

    #[test]
    fn keys_are_namespaced() {
        let cache = CacheService::disabled("cobble:test");
        assert_eq!(server_settings_key(&cache, 42), "cobble:test:server_settings:42");
        assert!(!cache.is_redis_enabled());
    }

    #[tokio::test]
    async fn disabled_cache_always_loads() {
        let cache = CacheService::disabled("cobble:test");
        let loads = AtomicUsize::new(0);

        for _ in 0..2 {
            let value: u32 = cache
                .get_or_load_json("k", CONFIG_CACHE_TTL, || async {
                    loads.fetch_add(1, Ordering::SeqCst);
                    Ok(7)
                })
                .await
                .unwrap();
            assert_eq!(value, 7);
        }

        assert_eq!(loads.load(Ordering::SeqCst), 2);
        cache.ping().await.unwrap();
        cache.del("k").await.unwrap();
    }
}
