//! Domain entities and value objects for the product manager.

pub mod category;
pub mod listing;
pub mod product;
pub mod slug;
pub mod user;

pub use category::Category;
pub use listing::{CategoryFilter, ListingParams, ListingQuery, SortOrder};
pub use product::{Product, ProductImage};
pub use user::User;
