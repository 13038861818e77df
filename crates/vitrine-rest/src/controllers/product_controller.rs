//! Product endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;
use vitrine_core::{ListingParams, ProductId};
use vitrine_service::dto::{
    CreateProductRequest, ProductListResponse, ProductResponse, UpdateProductRequest,
};

use crate::extractors::{CurrentUser, PayloadJson, ValidatedJson};
use crate::responses::ApiResult;
use crate::state::AppState;

/// Public listing with filtering, search, and sorting.
#[utoipa::path(
    get,
    path = "/api/products",
    params(ListingParams),
    responses(
        (status = 200, description = "Listing, tagged with its source", body = ProductListResponse),
        (status = 400, description = "Unknown category"),
    ),
    tag = "products"
)]
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListingParams>,
) -> ApiResult<Json<ProductListResponse>> {
    Ok(Json(state.product_service.list_products(&params).await?))
}

/// The caller's own products, newest first.
#[utoipa::path(
    get,
    path = "/api/products/my",
    responses(
        (status = 200, description = "Own products", body = [ProductResponse]),
        (status = 401, description = "No live session"),
    ),
    tag = "products"
)]
pub async fn my_products(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<Json<Vec<ProductResponse>>> {
    Ok(Json(state.product_service.my_products(user.id).await?))
}

/// Create a product.
#[utoipa::path(
    post,
    path = "/api/products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ProductResponse),
        (status = 401, description = "No live session"),
        (status = 422, description = "Validation failure"),
    ),
    tag = "products"
)]
pub async fn create(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ValidatedJson(request): ValidatedJson<CreateProductRequest>,
) -> ApiResult<(StatusCode, Json<ProductResponse>)> {
    let product = state.product_service.create_product(user.id, request).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Edit a product. Owner only.
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    params(("id" = Uuid, Path, description = "Product id")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated", body = ProductResponse),
        (status = 400, description = "Validation failure"),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "No such product"),
    ),
    tag = "products"
)]
pub async fn update(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
    PayloadJson(request): PayloadJson<UpdateProductRequest>,
) -> ApiResult<Json<ProductResponse>> {
    let product = state
        .product_service
        .edit_product(user.id, ProductId::from_uuid(id), request)
        .await?;
    Ok(Json(product))
}

/// Delete a product. Owner only.
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    params(("id" = Uuid, Path, description = "Product id")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "No such product"),
    ),
    tag = "products"
)]
pub async fn delete(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    state
        .product_service
        .delete_product(user.id, ProductId::from_uuid(id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
