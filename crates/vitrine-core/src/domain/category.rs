//! Product category value object.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed product category enumeration, serialized in kebab-case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Electronics,
    Fashion,
    Wearables,
    HomeAndLiving,
    SportsAndOutdoors,
    ToysAndGames,
    HealthAndBeauty,
    Groceries,
    BooksAndMedia,
    Automotive,
    Jewellery,
}

impl Category {
    /// Returns all available categories.
    #[must_use]
    pub const fn all() -> [Self; 11] {
        [
            Self::Electronics,
            Self::Fashion,
            Self::Wearables,
            Self::HomeAndLiving,
            Self::SportsAndOutdoors,
            Self::ToysAndGames,
            Self::HealthAndBeauty,
            Self::Groceries,
            Self::BooksAndMedia,
            Self::Automotive,
            Self::Jewellery,
        ]
    }

    /// Returns the kebab-case wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Electronics => "electronics",
            Self::Fashion => "fashion",
            Self::Wearables => "wearables",
            Self::HomeAndLiving => "home-and-living",
            Self::SportsAndOutdoors => "sports-and-outdoors",
            Self::ToysAndGames => "toys-and-games",
            Self::HealthAndBeauty => "health-and-beauty",
            Self::Groceries => "groceries",
            Self::BooksAndMedia => "books-and-media",
            Self::Automotive => "automotive",
            Self::Jewellery => "jewellery",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "electronics" => Ok(Self::Electronics),
            "fashion" => Ok(Self::Fashion),
            "wearables" => Ok(Self::Wearables),
            "home-and-living" => Ok(Self::HomeAndLiving),
            "sports-and-outdoors" => Ok(Self::SportsAndOutdoors),
            "toys-and-games" => Ok(Self::ToysAndGames),
            "health-and-beauty" => Ok(Self::HealthAndBeauty),
            "groceries" => Ok(Self::Groceries),
            "books-and-media" => Ok(Self::BooksAndMedia),
            "automotive" => Ok(Self::Automotive),
            "jewellery" => Ok(Self::Jewellery),
            _ => Err(UnknownCategory(s.to_string())),
        }
    }
}

/// Error returned for category strings outside the fixed enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category '{}'", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_all_categories() {
        for category in Category::all() {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_unknown_category() {
        assert!("furniture".parse::<Category>().is_err());
        assert!("Electronics".parse::<Category>().is_err()); // case-sensitive wire format
    }

    #[test]
    fn test_serde_kebab_case() {
        let json = serde_json::to_string(&Category::HomeAndLiving).unwrap();
        assert_eq!(json, "\"home-and-living\"");
        let back: Category = serde_json::from_str("\"sports-and-outdoors\"").unwrap();
        assert_eq!(back, Category::SportsAndOutdoors);
    }
}
