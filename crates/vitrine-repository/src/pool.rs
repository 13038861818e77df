//! Postgres connection pool.

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;
use vitrine_config::DatabaseConfig;
use vitrine_core::{VitrineError, VitrineResult};

/// Wrapper around the Postgres pool with lifecycle helpers.
#[derive(Clone)]
pub struct DatabasePool {
    pool: PgPool,
}

impl DatabasePool {
    /// Connects to Postgres using the given configuration.
    pub async fn connect(config: &DatabaseConfig) -> VitrineResult<Self> {
        let pool = PgPoolOptions::new()
            .min_connections(config.min_connections)
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout())
            .idle_timeout(config.idle_timeout())
            .connect(&config.url)
            .await
            .map_err(|e| VitrineError::Configuration(format!("Failed to connect to database: {e}")))?;

        info!(
            min = config.min_connections,
            max = config.max_connections,
            "Database pool established"
        );

        Ok(Self { pool })
    }

    /// Runs pending migrations.
    pub async fn run_migrations(&self) -> VitrineResult<()> {
        sqlx::migrate!("../../migrations")
            .run(&self.pool)
            .await
            .map_err(|e| VitrineError::Configuration(format!("Migration failed: {e}")))?;
        info!("Database migrations applied");
        Ok(())
    }

    /// Verifies the pool can execute a query.
    pub async fn health_check(&self) -> VitrineResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Returns the inner pool.
    #[must_use]
    pub fn inner(&self) -> &PgPool {
        &self.pool
    }

    /// Closes all connections.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database pool closed");
    }
}
