//! # Vitrine Service
//!
//! Business logic: product listings with a Redis read-through cache,
//! session handling, and the external asset host client.

pub mod assets;
pub mod auth_service;
pub mod best_effort;
pub mod cache;
pub mod dto;
pub mod product_service;

pub use assets::{AssetStore, HttpAssetStore, StoredAsset};
pub use auth_service::{AuthService, AuthServiceImpl};
pub use best_effort::BestEffort;
pub use cache::{CacheExt, CacheInterface, RedisCacheService};
pub use product_service::{ProductService, ProductServiceImpl};
