//! Postgres product repository.

use crate::pool::DatabasePool;
use crate::traits::ProductRepository;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, Postgres, QueryBuilder};
use uuid::Uuid;
use vitrine_core::{
    Category, CategoryFilter, ListingQuery, Product, ProductId, ProductImage, SortOrder, UserId,
    VitrineError, VitrineResult,
};

const SELECT_COLUMNS: &str = "id, name, slug, price, description, category, image_url, \
     image_asset_id, created_by, created_at, updated_at";

/// Database row for the `products` table.
#[derive(Debug, FromRow)]
struct ProductRow {
    id: Uuid,
    name: String,
    slug: String,
    price: f64,
    description: String,
    category: String,
    image_url: Option<String>,
    image_asset_id: Option<String>,
    created_by: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ProductRow> for Product {
    type Error = VitrineError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let category = row
            .category
            .parse::<Category>()
            .map_err(|e| VitrineError::internal(format!("Corrupt category in store: {e}")))?;

        let image = match (row.image_url, row.image_asset_id) {
            (Some(url), Some(asset_id)) => Some(ProductImage { url, asset_id }),
            _ => None,
        };

        Ok(Self {
            id: ProductId::from_uuid(row.id),
            name: row.name,
            slug: row.slug,
            price: row.price,
            description: row.description,
            category,
            image,
            created_by: UserId::from_uuid(row.created_by),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Postgres-backed [`ProductRepository`].
#[derive(Clone)]
pub struct PostgresProductRepository {
    db: DatabasePool,
}

impl PostgresProductRepository {
    #[must_use]
    pub fn new(db: DatabasePool) -> Self {
        Self { db }
    }
}

/// ORDER BY clause for a sort order. Price sorts add creation time as a
/// tiebreaker so results are stable.
const fn order_clause(sort: SortOrder) -> &'static str {
    match sort {
        SortOrder::Oldest => "created_at ASC",
        SortOrder::Latest => "created_at DESC",
        SortOrder::PriceAsc => "price ASC, created_at ASC",
        SortOrder::PriceDesc => "price DESC, created_at ASC",
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn find_by_id(&self, id: ProductId) -> VitrineResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(self.db.inner())
        .await?;

        row.map(Product::try_from).transpose()
    }

    async fn find_listing(&self, query: &ListingQuery) -> VitrineResult<Vec<Product>> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {SELECT_COLUMNS} FROM products WHERE 1=1"));

        if let CategoryFilter::One(category) = query.category {
            builder.push(" AND category = ");
            builder.push_bind(category.as_str());
        }

        if let Some(search) = &query.search {
            let pattern = format!("%{search}%");
            builder.push(" AND (name ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR description ILIKE ");
            builder.push_bind(pattern);
            builder.push(")");
        }

        builder.push(" ORDER BY ");
        builder.push(order_clause(query.sort));

        let rows = builder
            .build_query_as::<ProductRow>()
            .fetch_all(self.db.inner())
            .await?;

        rows.into_iter().map(Product::try_from).collect()
    }

    async fn find_by_owner(&self, owner: UserId) -> VitrineResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM products WHERE created_by = $1 ORDER BY created_at DESC"
        ))
        .bind(owner.into_inner())
        .fetch_all(self.db.inner())
        .await?;

        rows.into_iter().map(Product::try_from).collect()
    }

    async fn save(&self, product: &Product) -> VitrineResult<()> {
        sqlx::query(
            "INSERT INTO products (id, name, slug, price, description, category, image_url,
                 image_asset_id, created_by, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)",
        )
        .bind(product.id.into_inner())
        .bind(&product.name)
        .bind(&product.slug)
        .bind(product.price)
        .bind(&product.description)
        .bind(product.category.as_str())
        .bind(product.image.as_ref().map(|i| i.url.as_str()))
        .bind(product.image.as_ref().map(|i| i.asset_id.as_str()))
        .bind(product.created_by.into_inner())
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(self.db.inner())
        .await?;

        Ok(())
    }

    async fn update(&self, product: &Product) -> VitrineResult<()> {
        let result = sqlx::query(
            "UPDATE products
             SET price = $2, description = $3, category = $4, image_url = $5,
                 image_asset_id = $6, updated_at = $7
             WHERE id = $1",
        )
        .bind(product.id.into_inner())
        .bind(product.price)
        .bind(&product.description)
        .bind(product.category.as_str())
        .bind(product.image.as_ref().map(|i| i.url.as_str()))
        .bind(product.image.as_ref().map(|i| i.asset_id.as_str()))
        .bind(product.updated_at)
        .execute(self.db.inner())
        .await?;

        if result.rows_affected() == 0 {
            return Err(VitrineError::not_found("product", product.id));
        }
        Ok(())
    }

    async fn delete(&self, id: ProductId) -> VitrineResult<bool> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id.into_inner())
            .execute(self.db.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
