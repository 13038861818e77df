//! Redis read-through cache.

pub mod cache_keys;
mod cache_interface;
mod redis_cache;

pub use cache_interface::{CacheExt, CacheInterface};
pub use redis_cache::RedisCacheService;
