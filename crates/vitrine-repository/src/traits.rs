//! Repository traits.

use async_trait::async_trait;
use vitrine_core::{ListingQuery, Product, ProductId, User, UserId, VitrineResult};

/// User persistence.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds a user by id.
    async fn find_by_id(&self, id: UserId) -> VitrineResult<Option<User>>;

    /// Finds a user by email (case-insensitive).
    async fn find_by_email(&self, email: &str) -> VitrineResult<Option<User>>;

    /// Checks whether an account with this email exists (case-insensitive).
    async fn exists_by_email(&self, email: &str) -> VitrineResult<bool>;

    /// Persists a new user.
    async fn save(&self, user: &User) -> VitrineResult<()>;
}

/// Product persistence.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Finds a product by id.
    async fn find_by_id(&self, id: ProductId) -> VitrineResult<Option<Product>>;

    /// Runs a normalized listing query against the store.
    async fn find_listing(&self, query: &ListingQuery) -> VitrineResult<Vec<Product>>;

    /// Returns all products owned by a user, newest first.
    async fn find_by_owner(&self, owner: UserId) -> VitrineResult<Vec<Product>>;

    /// Persists a new product.
    async fn save(&self, product: &Product) -> VitrineResult<()>;

    /// Updates an existing product's mutable fields.
    async fn update(&self, product: &Product) -> VitrineResult<()>;

    /// Deletes a product. Returns `false` when it did not exist.
    async fn delete(&self, id: ProductId) -> VitrineResult<bool>;
}
