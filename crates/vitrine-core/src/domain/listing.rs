//! Listing query normalization.
//!
//! Raw HTTP query parameters are normalized into a canonical [`ListingQuery`]
//! before touching the cache or the store: equal queries must normalize to
//! the same value no matter how the query string was spelled, because the
//! listing cache key is derived from the normalized form.

use super::category::Category;
use crate::{VitrineError, VitrineResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw listing parameters as they arrive on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams))]
pub struct ListingParams {
    /// Category filter (`all` or one of the fixed categories).
    pub category: Option<String>,
    /// Case-insensitive substring match over name and description.
    pub search: Option<String>,
    /// Sort order: `oldest` (default), `latest`, `price_asc`, `price_desc`.
    pub sort: Option<String>,
}

/// Category filter in normalized form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryFilter {
    /// No category restriction.
    All,
    /// Restrict to a single category.
    One(Category),
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::One(category) => f.write_str(category.as_str()),
        }
    }
}

/// Sort order for listing queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Ascending creation time (default).
    #[default]
    Oldest,
    /// Descending creation time.
    Latest,
    /// Ascending price.
    PriceAsc,
    /// Descending price.
    PriceDesc,
}

impl SortOrder {
    /// Parses a sort value, falling back to the default for unknown values.
    #[must_use]
    pub fn parse_or_default(s: Option<&str>) -> Self {
        match s {
            Some("latest") => Self::Latest,
            Some("price_asc") => Self::PriceAsc,
            Some("price_desc") => Self::PriceDesc,
            _ => Self::Oldest,
        }
    }

    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Oldest => "oldest",
            Self::Latest => "latest",
            Self::PriceAsc => "price_asc",
            Self::PriceDesc => "price_desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical form of a listing query.
///
/// Two raw parameter sets that mean the same query always normalize to the
/// same `ListingQuery`; the listing cache key is a stable serialization of
/// this triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingQuery {
    pub category: CategoryFilter,
    /// Trimmed search term; `None` when absent or empty after trimming.
    pub search: Option<String>,
    pub sort: SortOrder,
}

impl ListingQuery {
    /// Normalizes raw parameters.
    ///
    /// Unknown categories are a validation failure (so typos do not cache
    /// permanently-empty listings); unknown sort values fall back to the
    /// default; an empty search after trimming means no search filter.
    pub fn normalize(params: &ListingParams) -> VitrineResult<Self> {
        let category = match params.category.as_deref() {
            None | Some("all") | Some("") => CategoryFilter::All,
            Some(value) => CategoryFilter::One(
                value
                    .parse::<Category>()
                    .map_err(|e| VitrineError::validation(e.to_string()))?,
            ),
        };

        let search = params
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToString::to_string);

        let sort = SortOrder::parse_or_default(params.sort.as_deref());

        Ok(Self {
            category,
            search,
            sort,
        })
    }

    /// Stable serialization used as the listing cache key suffix.
    ///
    /// The search term is lowercased here only: SQL matching uses ILIKE,
    /// so collapsing case in the key is semantically safe.
    #[must_use]
    pub fn cache_key_suffix(&self) -> String {
        format!(
            "category={}&search={}&sort={}",
            self.category,
            self.search.as_deref().unwrap_or("").to_lowercase(),
            self.sort
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(category: Option<&str>, search: Option<&str>, sort: Option<&str>) -> ListingParams {
        ListingParams {
            category: category.map(ToString::to_string),
            search: search.map(ToString::to_string),
            sort: sort.map(ToString::to_string),
        }
    }

    #[test]
    fn test_defaults() {
        let query = ListingQuery::normalize(&ListingParams::default()).unwrap();
        assert_eq!(query.category, CategoryFilter::All);
        assert_eq!(query.search, None);
        assert_eq!(query.sort, SortOrder::Oldest);
    }

    #[test]
    fn test_category_all_and_one() {
        let all = ListingQuery::normalize(&params(Some("all"), None, None)).unwrap();
        assert_eq!(all.category, CategoryFilter::All);

        let one = ListingQuery::normalize(&params(Some("electronics"), None, None)).unwrap();
        assert_eq!(one.category, CategoryFilter::One(Category::Electronics));
    }

    #[test]
    fn test_unknown_category_is_validation_error() {
        let result = ListingQuery::normalize(&params(Some("furniture"), None, None));
        assert!(matches!(result, Err(VitrineError::Validation(_))));
    }

    #[test]
    fn test_unknown_sort_falls_back_to_default() {
        let query = ListingQuery::normalize(&params(None, None, Some("cheapest"))).unwrap();
        assert_eq!(query.sort, SortOrder::Oldest);
    }

    #[test]
    fn test_search_trimmed_and_empty_dropped() {
        let query = ListingQuery::normalize(&params(None, Some("  lamp "), None)).unwrap();
        assert_eq!(query.search.as_deref(), Some("lamp"));

        let empty = ListingQuery::normalize(&params(None, Some("   "), None)).unwrap();
        assert_eq!(empty.search, None);
    }

    #[test]
    fn test_cache_key_deterministic() {
        let a = ListingQuery::normalize(&params(Some("electronics"), Some("Lamp"), Some("price_asc")))
            .unwrap();
        let b = ListingQuery::normalize(&params(Some("electronics"), Some(" lamp"), Some("price_asc")))
            .unwrap();
        // Same normalized query regardless of case/whitespace in search.
        assert_eq!(a.cache_key_suffix(), b.cache_key_suffix());
        assert_eq!(
            a.cache_key_suffix(),
            "category=electronics&search=lamp&sort=price_asc"
        );
    }

    #[test]
    fn test_cache_key_distinct_for_distinct_queries() {
        let base = ListingQuery::normalize(&ListingParams::default()).unwrap();
        let by_cat = ListingQuery::normalize(&params(Some("fashion"), None, None)).unwrap();
        let by_sort = ListingQuery::normalize(&params(None, None, Some("latest"))).unwrap();
        let by_search = ListingQuery::normalize(&params(None, Some("lamp"), None)).unwrap();

        let keys = [
            base.cache_key_suffix(),
            by_cat.cache_key_suffix(),
            by_sort.cache_key_suffix(),
            by_search.cache_key_suffix(),
        ];
        for (i, a) in keys.iter().enumerate() {
            for b in keys.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
