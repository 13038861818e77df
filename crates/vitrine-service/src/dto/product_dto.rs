//! Product request/response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};
use vitrine_core::{Category, Product, ProductId, UserId};

/// Maximum decoded image size accepted for upload.
const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Product creation request.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    /// Display name (immutable after creation).
    #[validate(length(min = 3, message = "Name must be at least 3 characters"))]
    pub name: String,

    /// Non-negative price.
    #[validate(range(min = 0.0, message = "Price must be non-negative"))]
    pub price: f64,

    /// Product description.
    #[validate(length(min = 10, message = "Description must be at least 10 characters"))]
    pub description: String,

    /// Category from the fixed enumeration.
    #[validate(custom(function = validate_category))]
    pub category: String,

    /// Optional image as a base64 data URL.
    #[validate(custom(function = validate_image_data_url))]
    pub image: Option<String>,
}

/// Product edit request. All fields optional; absent means unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    #[validate(range(min = 0.0, message = "Price must be non-negative"))]
    pub price: Option<f64>,

    #[validate(length(min = 10, message = "Description must be at least 10 characters"))]
    pub description: Option<String>,

    #[validate(custom(function = validate_category))]
    pub category: Option<String>,

    /// Replacement image as a base64 data URL.
    #[validate(custom(function = validate_image_data_url))]
    pub image: Option<String>,
}

fn validate_category(value: &str) -> Result<(), ValidationError> {
    value.parse::<Category>().map(|_| ()).map_err(|e| {
        ValidationError::new("category").with_message(Cow::Owned(e.to_string()))
    })
}

fn validate_image_data_url(value: &str) -> Result<(), ValidationError> {
    let Some(rest) = value.strip_prefix("data:image/") else {
        return Err(ValidationError::new("image")
            .with_message(Cow::Borrowed("Image must be a data URL with an image MIME type")));
    };

    let Some((_mime, payload)) = rest.split_once(";base64,") else {
        return Err(ValidationError::new("image")
            .with_message(Cow::Borrowed("Image data URL must be base64-encoded")));
    };

    // Estimate the decoded size from the base64 length.
    if payload.len() / 4 * 3 > MAX_IMAGE_BYTES {
        return Err(ValidationError::new("image")
            .with_message(Cow::Borrowed("Image must be at most 5 MB")));
    }

    Ok(())
}

/// Public view of a product.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    pub id: ProductId,
    pub name: String,
    pub slug: String,
    pub price: f64,
    pub description: String,
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Product> for ProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            slug: product.slug.clone(),
            price: product.price,
            description: product.description.clone(),
            category: product.category,
            image_url: product.image.as_ref().map(|i| i.url.clone()),
            created_by: product.created_by,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// Where a listing result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ListingSource {
    Cache,
    Store,
}

/// Listing result, tagged with its source so clients (and tests) can
/// observe cache behavior.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductListResponse {
    pub source: ListingSource,
    pub products: Vec<ProductResponse>,
}
