//! Server entry point: configuration, wiring, and lifecycle.

use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use vitrine_config::{AppConfig, ConfigLoader, LogConfig};
use vitrine_repository::{DatabasePool, PostgresProductRepository, PostgresUserRepository};
use vitrine_rest::{build_router, AppState, CookieSettings};
use vitrine_security::TokenProvider;
use vitrine_service::{
    AssetStore, AuthServiceImpl, CacheInterface, HttpAssetStore, ProductServiceImpl,
    RedisCacheService,
};

fn init_tracing(log: &LogConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if log.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn build_cache(config: &AppConfig) -> anyhow::Result<Arc<dyn CacheInterface>> {
    if !config.redis.enabled {
        warn!("Redis disabled; listings are served from the store on every read");
        return Ok(Arc::new(RedisCacheService::disabled()));
    }

    let mut redis_config = deadpool_redis::Config::from_url(&config.redis.url);
    redis_config.pool = Some(deadpool_redis::PoolConfig::new(
        config.redis.pool_size as usize,
    ));
    let pool = redis_config.create_pool(Some(deadpool_redis::Runtime::Tokio1))?;
    info!(pool_size = config.redis.pool_size, "Redis cache enabled");
    Ok(Arc::new(RedisCacheService::new(Arc::new(pool))))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => warn!(error = %e, "Failed to listen for SIGTERM"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ConfigLoader::from_default_location()?;
    init_tracing(&config.log);

    info!(
        app = %config.app.name,
        environment = %config.app.environment,
        "Starting"
    );

    let db = DatabasePool::connect(&config.database).await?;
    db.run_migrations().await?;
    db.health_check().await?;

    let cache = build_cache(&config)?;
    let assets: Arc<dyn AssetStore> = Arc::new(HttpAssetStore::new(&config.assets));
    if !config.assets.enabled {
        warn!("Asset host disabled; image uploads will be rejected");
    }

    let user_repo = Arc::new(PostgresUserRepository::new(db.clone()));
    let product_repo = Arc::new(PostgresProductRepository::new(db.clone()));

    let tokens = TokenProvider::new(&config.security);
    let auth_service = Arc::new(AuthServiceImpl::new(user_repo, cache.clone(), tokens));
    let product_service = Arc::new(ProductServiceImpl::new(product_repo, cache, assets));

    let state = AppState::new(
        product_service,
        auth_service,
        CookieSettings::from(&config.security),
    );
    let router = build_router(state, &config.server.cors_origins);

    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "Listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    info!("Stopped");
    Ok(())
}
