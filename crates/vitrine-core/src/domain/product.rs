//! Product entity.

use super::category::Category;
use super::slug::generate_slug;
use crate::{ProductId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reference to an image stored on the external asset host.
///
/// The `asset_id` is kept so the asset can be released when the image is
/// replaced or the product is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ProductImage {
    /// Public URL of the stored image.
    pub url: String,
    /// External asset identifier used for deletion.
    pub asset_id: String,
}

/// Product listing owned by exactly one user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier for the product.
    pub id: ProductId,

    /// Display name (immutable after creation).
    pub name: String,

    /// Generated unique slug, derived from the name plus a random suffix.
    pub slug: String,

    /// Non-negative price.
    pub price: f64,

    /// Product description.
    pub description: String,

    /// Category from the fixed enumeration.
    pub category: Category,

    /// Optional image stored on the asset host.
    pub image: Option<ProductImage>,

    /// Owner: the user that created the product.
    pub created_by: UserId,

    /// Creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Creates a new product owned by `created_by`, generating its slug.
    #[must_use]
    pub fn new(
        name: String,
        price: f64,
        description: String,
        category: Category,
        image: Option<ProductImage>,
        created_by: UserId,
    ) -> Self {
        let now = Utc::now();
        let slug = generate_slug(&name);
        Self {
            id: ProductId::new(),
            name,
            slug,
            price,
            description,
            category,
            image,
            created_by,
            created_at: now,
            updated_at: now,
        }
    }

    /// Checks whether `user` owns this product.
    #[must_use]
    pub fn is_owned_by(&self, user: UserId) -> bool {
        self.created_by == user
    }

    /// Applies the editable fields, bumping `updated_at`.
    ///
    /// Name and slug are immutable after creation; the image is replaced
    /// only when a new one is provided.
    pub fn apply_edit(
        &mut self,
        price: Option<f64>,
        description: Option<String>,
        category: Option<Category>,
        image: Option<ProductImage>,
    ) {
        if let Some(price) = price {
            self.price = price;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(category) = category {
            self.category = category;
        }
        if let Some(image) = image {
            self.image = Some(image);
        }
        self.updated_at = Utc::now();
    }
}
