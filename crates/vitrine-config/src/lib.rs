//! # Vitrine Config
//!
//! Layered configuration for the Vitrine backend: TOML files under
//! `config/` plus `VITRINE__`-prefixed environment variables.

mod app_config;
mod loader;

pub use app_config::{
    AppConfig, AppMetadata, AssetsConfig, DatabaseConfig, LogConfig, RedisConfig, SecurityConfig,
    ServerConfig,
};
pub use loader::ConfigLoader;
