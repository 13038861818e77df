//! Configuration loader with layered sources.

use crate::AppConfig;
use config::{Config, ConfigError, Environment, File};
use std::path::Path;
use tracing::{debug, info, warn};
use vitrine_core::VitrineError;

/// Loads configuration from layered sources.
///
/// Sources are merged in order, later entries winning:
/// 1. `config/default.toml`
/// 2. `config/{environment}.toml`
/// 3. `config/local.toml` (not committed)
/// 4. Environment variables with the `VITRINE` prefix (`__` separator)
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> Result<AppConfig, VitrineError> {
        Self::load("./config")
    }

    /// Loads configuration from the specified directory.
    pub fn load(config_dir: impl AsRef<Path>) -> Result<AppConfig, VitrineError> {
        let config_dir = config_dir.as_ref();

        // Load .env file if present
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment =
            std::env::var("VITRINE_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        for name in ["default".to_string(), environment, "local".to_string()] {
            let path = config_dir.join(format!("{name}.toml"));
            if path.exists() {
                debug!("Loading config from: {}", path.display());
                builder =
                    builder.add_source(File::with_name(&path.display().to_string()).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("VITRINE")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_error)?;
        let app_config: AppConfig = config.try_deserialize().map_err(config_error)?;

        Self::validate(&app_config)?;

        Ok(app_config)
    }

    /// Validates the loaded configuration.
    fn validate(config: &AppConfig) -> Result<(), VitrineError> {
        if config.app.is_production() && config.security.jwt_secret == "change-me-in-production" {
            warn!("Using default JWT secret in production! This is a security risk.");
        }

        if config.database.url.is_empty() {
            return Err(VitrineError::Configuration(
                "Database URL is required".to_string(),
            ));
        }

        if config.assets.enabled && config.assets.api_key.is_empty() {
            warn!("Asset host is enabled but no API key is configured");
        }

        Ok(())
    }
}

fn config_error(err: ConfigError) -> VitrineError {
    VitrineError::Configuration(err.to_string())
}
