//! OpenAPI document.

use utoipa::OpenApi;

use crate::controllers::{auth_controller, health_controller, product_controller};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Vitrine API",
        description = "Product-manager backend: accounts, product CRUD, cached listings."
    ),
    paths(
        health_controller::health,
        auth_controller::signup,
        auth_controller::login,
        auth_controller::logout,
        auth_controller::check,
        product_controller::list,
        product_controller::my_products,
        product_controller::create,
        product_controller::update,
        product_controller::delete,
    ),
    components(schemas(
        health_controller::HealthResponse,
        vitrine_service::dto::SignupRequest,
        vitrine_service::dto::LoginRequest,
        vitrine_service::dto::UserResponse,
        vitrine_service::dto::MessageResponse,
        vitrine_service::dto::CreateProductRequest,
        vitrine_service::dto::UpdateProductRequest,
        vitrine_service::dto::ProductResponse,
        vitrine_service::dto::ProductListResponse,
        vitrine_service::dto::ListingSource,
        vitrine_core::Category,
        vitrine_core::ErrorResponse,
        vitrine_core::FieldError,
    )),
    tags(
        (name = "auth", description = "Accounts and sessions"),
        (name = "products", description = "Product CRUD and listings"),
        (name = "health", description = "Probes"),
    )
)]
pub struct ApiDoc;
