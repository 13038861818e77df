//! Router assembly.

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method};
use axum::routing::{get, post, put};
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::controllers::{auth_controller, health_controller, product_controller};
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Builds the application router.
///
/// CORS allows only the configured origins, with credentials: the
/// session rides an HttpOnly cookie, not a header the SPA controls.
pub fn build_router(state: AppState, cors_origins: &[String]) -> Router {
    let origins: Vec<HeaderValue> = cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true);

    let auth_routes = Router::new()
        .route("/signup", post(auth_controller::signup))
        .route("/login", post(auth_controller::login))
        .route("/logout", post(auth_controller::logout))
        .route("/check", get(auth_controller::check));

    let product_routes = Router::new()
        .route(
            "/",
            get(product_controller::list).post(product_controller::create),
        )
        .route("/my", get(product_controller::my_products))
        .route(
            "/:id",
            put(product_controller::update).delete(product_controller::delete),
        );

    Router::new()
        .route("/health", get(health_controller::health))
        .nest("/api/auth", auth_routes)
        .nest("/api/products", product_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
