//! Shared application state.

use std::sync::Arc;
use vitrine_config::SecurityConfig;
use vitrine_service::{AuthService, ProductService};

/// Session cookie settings.
#[derive(Clone)]
pub struct CookieSettings {
    /// Cookie name.
    pub name: String,
    /// Mark the cookie `Secure`.
    pub secure: bool,
    /// Cookie lifetime in days, matching the token lifetime.
    pub ttl_days: i64,
}

impl From<&SecurityConfig> for CookieSettings {
    fn from(config: &SecurityConfig) -> Self {
        Self {
            name: config.cookie_name.clone(),
            secure: config.cookie_secure,
            ttl_days: config.token_ttl_days,
        }
    }
}

/// State threaded through every handler.
#[derive(Clone)]
pub struct AppState {
    pub product_service: Arc<dyn ProductService>,
    pub auth_service: Arc<dyn AuthService>,
    pub cookie: CookieSettings,
}

impl AppState {
    #[must_use]
    pub fn new(
        product_service: Arc<dyn ProductService>,
        auth_service: Arc<dyn AuthService>,
        cookie: CookieSettings,
    ) -> Self {
        Self {
            product_service,
            auth_service,
            cookie,
        }
    }
}
