//! Product service: CRUD with ownership checks and the listing cache.
//!
//! Listings are read-through cached in Redis under a key derived from the
//! normalized query. Every cached listing key is also registered in one
//! Redis set, so any product write can invalidate every cached listing
//! with a single bulk delete before the response is returned. Cache
//! failures never fail a request: reads degrade to the store, writes skip
//! the cache.

use crate::assets::AssetStore;
use crate::best_effort::BestEffort;
use crate::cache::{cache_keys, CacheExt, CacheInterface};
use crate::dto::{
    CreateProductRequest, ListingSource, ProductListResponse, ProductResponse, UpdateProductRequest,
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};
use vitrine_core::{
    Category, ListingParams, ListingQuery, Product, ProductId, ProductImage, UserId, ValidateExt,
    VitrineError, VitrineResult,
};
use vitrine_repository::ProductRepository;

/// How long a cached listing stays valid without invalidation.
const LISTING_TTL_SECS: u64 = 60;

/// Product operations.
#[async_trait]
pub trait ProductService: Send + Sync {
    /// Lists products for a (possibly filtered) public listing query.
    async fn list_products(&self, params: &ListingParams) -> VitrineResult<ProductListResponse>;

    /// Lists the products owned by a user, newest first.
    async fn my_products(&self, owner: UserId) -> VitrineResult<Vec<ProductResponse>>;

    /// Creates a product owned by `owner`.
    async fn create_product(
        &self,
        owner: UserId,
        request: CreateProductRequest,
    ) -> VitrineResult<ProductResponse>;

    /// Edits a product. Only the owner may edit.
    async fn edit_product(
        &self,
        owner: UserId,
        id: ProductId,
        request: UpdateProductRequest,
    ) -> VitrineResult<ProductResponse>;

    /// Deletes a product. Only the owner may delete.
    async fn delete_product(&self, owner: UserId, id: ProductId) -> VitrineResult<()>;
}

/// Default [`ProductService`] implementation.
pub struct ProductServiceImpl<R: ProductRepository> {
    repo: Arc<R>,
    cache: Arc<dyn CacheInterface>,
    assets: Arc<dyn AssetStore>,
}

impl<R: ProductRepository> ProductServiceImpl<R> {
    #[must_use]
    pub fn new(repo: Arc<R>, cache: Arc<dyn CacheInterface>, assets: Arc<dyn AssetStore>) -> Self {
        Self { repo, cache, assets }
    }

    /// Drops every cached listing plus the key-set itself.
    ///
    /// Runs after every product write and before the response, so the
    /// next read is guaranteed to see the new state.
    async fn invalidate_listings(&self) -> BestEffort {
        if !self.cache.is_enabled() {
            return BestEffort::Skipped;
        }

        let set_key = cache_keys::listing_key_set();
        let mut keys = match self.cache.set_members(&set_key).await {
            Ok(members) => members,
            Err(e) => {
                warn!(error = %e, "Failed to read listing key-set; cache left to expire by TTL");
                return BestEffort::Failed;
            }
        };
        keys.push(set_key);

        match self.cache.delete_keys(&keys).await {
            Ok(removed) => {
                debug!(removed, "Invalidated listing cache");
                BestEffort::Completed
            }
            Err(e) => {
                warn!(error = %e, "Failed to invalidate listing cache; entries expire by TTL");
                BestEffort::Failed
            }
        }
    }

    /// Stores a listing result and registers its key for invalidation.
    async fn cache_listing(&self, key: &str, products: &[ProductResponse]) {
        if !self.cache.is_enabled() {
            return;
        }
        if let Err(e) = self.cache.set_json(key, &products, LISTING_TTL_SECS).await {
            warn!(key, error = %e, "Failed to cache listing");
            return;
        }
        if let Err(e) = self
            .cache
            .add_to_set(&cache_keys::listing_key_set(), key)
            .await
        {
            // The entry still expires by TTL, it just cannot be bulk-dropped.
            warn!(key, error = %e, "Failed to register listing key");
        }
    }

    /// Releases an asset that is no longer referenced.
    async fn release_asset(&self, asset_id: &str) -> BestEffort {
        if !self.assets.is_enabled() {
            return BestEffort::Skipped;
        }
        match self.assets.delete(asset_id).await {
            Ok(()) => BestEffort::Completed,
            Err(e) => {
                warn!(asset_id, error = %e, "Failed to release asset");
                BestEffort::Failed
            }
        }
    }

    /// Uploads an image data URL, if one was provided.
    async fn upload_image(&self, data_url: Option<&str>) -> VitrineResult<Option<ProductImage>> {
        match data_url {
            Some(data_url) => {
                let asset = self.assets.upload(data_url).await?;
                Ok(Some(ProductImage {
                    url: asset.url,
                    asset_id: asset.asset_id,
                }))
            }
            None => Ok(None),
        }
    }

    /// Loads a product and verifies `owner` owns it.
    async fn owned_product(&self, owner: UserId, id: ProductId) -> VitrineResult<Product> {
        let product = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| VitrineError::not_found("product", id))?;

        if !product.is_owned_by(owner) {
            return Err(VitrineError::forbidden("You do not own this product"));
        }
        Ok(product)
    }
}

fn parse_category(value: &str) -> VitrineResult<Category> {
    value
        .parse::<Category>()
        .map_err(|e| VitrineError::validation(e.to_string()))
}

#[async_trait]
impl<R: ProductRepository> ProductService for ProductServiceImpl<R> {
    async fn list_products(&self, params: &ListingParams) -> VitrineResult<ProductListResponse> {
        let query = ListingQuery::normalize(params)?;
        let key = cache_keys::product_listing(&query);

        if self.cache.is_enabled() {
            match self.cache.get_json::<Vec<ProductResponse>>(&key).await {
                Ok(Some(products)) => {
                    debug!(key, "Listing served from cache");
                    return Ok(ProductListResponse {
                        source: ListingSource::Cache,
                        products,
                    });
                }
                Ok(None) => {}
                Err(e) => warn!(key, error = %e, "Cache read failed; falling through to store"),
            }
        }

        let products: Vec<ProductResponse> = self
            .repo
            .find_listing(&query)
            .await?
            .iter()
            .map(ProductResponse::from)
            .collect();

        // Empty results are cached too: a popular empty search must not
        // hammer the store.
        self.cache_listing(&key, &products).await;

        Ok(ProductListResponse {
            source: ListingSource::Store,
            products,
        })
    }

    async fn my_products(&self, owner: UserId) -> VitrineResult<Vec<ProductResponse>> {
        let products = self.repo.find_by_owner(owner).await?;
        Ok(products.iter().map(ProductResponse::from).collect())
    }

    async fn create_product(
        &self,
        owner: UserId,
        request: CreateProductRequest,
    ) -> VitrineResult<ProductResponse> {
        request.validate_request()?;
        let category = parse_category(&request.category)?;
        let image = self.upload_image(request.image.as_deref()).await?;

        let product = Product::new(
            request.name,
            request.price,
            request.description,
            category,
            image,
            owner,
        );
        self.repo.save(&product).await?;
        let _ = self.invalidate_listings().await;

        Ok(ProductResponse::from(&product))
    }

    async fn edit_product(
        &self,
        owner: UserId,
        id: ProductId,
        request: UpdateProductRequest,
    ) -> VitrineResult<ProductResponse> {
        // Ownership answers first: a non-owner gets forbidden no matter
        // what the payload contains.
        let mut product = self.owned_product(owner, id).await?;

        request.validate_request()?;
        let category = request.category.as_deref().map(parse_category).transpose()?;

        let previous_image = product.image.clone();

        // Upload before touching the store: a failed upload leaves the
        // product untouched.
        let new_image = self.upload_image(request.image.as_deref()).await?;
        let replacing_image = new_image.is_some();

        product.apply_edit(request.price, request.description, category, new_image);
        self.repo.update(&product).await?;

        if replacing_image {
            if let Some(old) = previous_image {
                let _ = self.release_asset(&old.asset_id).await;
            }
        }
        let _ = self.invalidate_listings().await;

        Ok(ProductResponse::from(&product))
    }

    async fn delete_product(&self, owner: UserId, id: ProductId) -> VitrineResult<()> {
        let product = self.owned_product(owner, id).await?;

        self.repo.delete(id).await?;

        if let Some(image) = &product.image {
            let _ = self.release_asset(&image.asset_id).await;
        }
        let _ = self.invalidate_listings().await;

        Ok(())
    }
}
