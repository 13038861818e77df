//! Cache key construction.
//!
//! All keys share one prefix so an operator can inspect or flush the
//! application's footprint without touching anything else in Redis.

use vitrine_core::{ListingQuery, UserId};

const CACHE_PREFIX: &str = "vitrine:cache";

/// Key for one cached listing result, derived from the normalized query.
#[must_use]
pub fn product_listing(query: &ListingQuery) -> String {
    format!("{CACHE_PREFIX}:products:list:{}", query.cache_key_suffix())
}

/// Set holding every live listing key, used for bulk invalidation
/// without a KEYS scan.
#[must_use]
pub fn listing_key_set() -> String {
    format!("{CACHE_PREFIX}:products:list-keys")
}

/// Key for a cached resolved user.
#[must_use]
pub fn user_by_id(id: UserId) -> String {
    format!("{CACHE_PREFIX}:users:id:{id}")
}
