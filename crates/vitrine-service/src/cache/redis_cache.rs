//! Redis-backed cache.

use crate::cache::CacheInterface;
use async_trait::async_trait;
use deadpool_redis::redis::AsyncCommands;
use deadpool_redis::{Connection, Pool};
use std::sync::Arc;
use vitrine_core::{VitrineError, VitrineResult};

/// Redis implementation of [`CacheInterface`].
///
/// Built with [`RedisCacheService::disabled`] it becomes a no-op: reads
/// miss, writes and invalidations report success without doing anything.
#[derive(Clone)]
pub struct RedisCacheService {
    pool: Option<Arc<Pool>>,
}

impl RedisCacheService {
    /// Creates a cache backed by the given pool.
    #[must_use]
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool: Some(pool) }
    }

    /// Creates a disabled cache.
    #[must_use]
    pub const fn disabled() -> Self {
        Self { pool: None }
    }

    async fn connection(&self) -> VitrineResult<Option<Connection>> {
        match &self.pool {
            Some(pool) => {
                let conn = pool
                    .get()
                    .await
                    .map_err(|e| VitrineError::Cache(format!("Failed to get connection: {e}")))?;
                Ok(Some(conn))
            }
            None => Ok(None),
        }
    }
}

fn cache_error(e: deadpool_redis::redis::RedisError) -> VitrineError {
    VitrineError::Cache(e.to_string())
}

#[async_trait]
impl CacheInterface for RedisCacheService {
    async fn get_raw(&self, key: &str) -> VitrineResult<Option<String>> {
        let Some(mut conn) = self.connection().await? else {
            return Ok(None);
        };
        conn.get::<_, Option<String>>(key).await.map_err(cache_error)
    }

    async fn set_raw(&self, key: &str, value: &str, ttl_secs: u64) -> VitrineResult<()> {
        let Some(mut conn) = self.connection().await? else {
            return Ok(());
        };
        conn.set_ex::<_, _, ()>(key, value, ttl_secs)
            .await
            .map_err(cache_error)
    }

    async fn delete(&self, key: &str) -> VitrineResult<()> {
        let Some(mut conn) = self.connection().await? else {
            return Ok(());
        };
        conn.del::<_, ()>(key).await.map_err(cache_error)
    }

    async fn add_to_set(&self, set_key: &str, member: &str) -> VitrineResult<()> {
        let Some(mut conn) = self.connection().await? else {
            return Ok(());
        };
        conn.sadd::<_, _, ()>(set_key, member)
            .await
            .map_err(cache_error)
    }

    async fn set_members(&self, set_key: &str) -> VitrineResult<Vec<String>> {
        let Some(mut conn) = self.connection().await? else {
            return Ok(Vec::new());
        };
        conn.smembers::<_, Vec<String>>(set_key)
            .await
            .map_err(cache_error)
    }

    async fn delete_keys(&self, keys: &[String]) -> VitrineResult<u64> {
        if keys.is_empty() {
            return Ok(0);
        }
        let Some(mut conn) = self.connection().await? else {
            return Ok(0);
        };
        conn.del::<_, u64>(keys).await.map_err(cache_error)
    }

    fn is_enabled(&self) -> bool {
        self.pool.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheExt;

    #[tokio::test]
    async fn test_disabled_cache_is_a_noop() {
        let cache = RedisCacheService::disabled();
        assert!(!cache.is_enabled());

        assert_eq!(cache.get_raw("k").await.unwrap(), None);
        cache.set_raw("k", "v", 60).await.unwrap();
        assert_eq!(cache.get_raw("k").await.unwrap(), None);

        cache.add_to_set("s", "m").await.unwrap();
        assert!(cache.set_members("s").await.unwrap().is_empty());
        assert_eq!(cache.delete_keys(&["k".to_string()]).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_disabled_cache_json_misses() {
        let cache = RedisCacheService::disabled();
        let value: Option<Vec<String>> = cache.get_json("k").await.unwrap();
        assert!(value.is_none());
    }
}
