//! Cache abstraction.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use vitrine_core::VitrineResult;

/// Low-level cache operations.
///
/// Implementations must be safe to call when the backing store is down:
/// callers treat errors as misses or skipped invalidations, never as
/// request failures.
#[async_trait]
pub trait CacheInterface: Send + Sync {
    /// Gets a raw string value.
    async fn get_raw(&self, key: &str) -> VitrineResult<Option<String>>;

    /// Sets a raw string value with a TTL in seconds.
    async fn set_raw(&self, key: &str, value: &str, ttl_secs: u64) -> VitrineResult<()>;

    /// Deletes a single key.
    async fn delete(&self, key: &str) -> VitrineResult<()>;

    /// Adds a member to a set (no TTL: the set is a secondary index).
    async fn add_to_set(&self, set_key: &str, member: &str) -> VitrineResult<()>;

    /// Returns all members of a set.
    async fn set_members(&self, set_key: &str) -> VitrineResult<Vec<String>>;

    /// Deletes the given keys in one round trip, returning the number
    /// actually removed.
    async fn delete_keys(&self, keys: &[String]) -> VitrineResult<u64>;

    /// Whether the cache backend is configured and enabled.
    fn is_enabled(&self) -> bool;
}

/// JSON convenience layer over [`CacheInterface`].
#[async_trait]
pub trait CacheExt: CacheInterface {
    /// Gets a value and deserializes it from JSON.
    ///
    /// A value that fails to deserialize is treated as a miss: stale
    /// shapes from older deployments must not poison reads.
    async fn get_json<T: DeserializeOwned>(&self, key: &str) -> VitrineResult<Option<T>> {
        match self.get_raw(key).await? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(value) => Ok(Some(value)),
                Err(e) => {
                    tracing::warn!(key, error = %e, "Discarding undeserializable cache entry");
                    Ok(None)
                }
            },
            None => Ok(None),
        }
    }

    /// Serializes a value to JSON and stores it with a TTL.
    async fn set_json<T: Serialize + Sync>(
        &self,
        key: &str,
        value: &T,
        ttl_secs: u64,
    ) -> VitrineResult<()> {
        let raw = serde_json::to_string(value)?;
        self.set_raw(key, &raw, ttl_secs).await
    }
}

#[async_trait]
impl<C: CacheInterface + ?Sized> CacheExt for C {}
