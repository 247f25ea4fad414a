//! Find-or-create seeding against the storefront database.

use std::collections::HashMap;

use sqlx::PgPool;
use thiserror::Error;
use tokio::task::JoinSet;
use tracing::info;

use crate::catalog;
use crate::id;
use crate::models::{Category, Merchant, Product};
use crate::slug::slugify;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("No category resolved for name {0:?}")]
    MissingCategory(String),
    #[error("Product insert task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// What a seeding run resolved or created.
#[derive(Debug)]
pub struct SeedSummary {
    /// The merchant owning all seeded products (reused or created).
    pub merchant: Merchant,
    /// Category id by category name.
    pub categories: HashMap<String, String>,
    /// The products created by this run.
    pub products: Vec<Product>,
}

/// Database seeder for the demo catalog.
///
/// Holds an explicit pool handle; callers own connection setup and teardown.
pub struct Seeder {
    pool: PgPool,
}

impl Seeder {
    /// Creates a new seeder with the given database pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Runs the full seeding sequence.
    ///
    /// The merchant and all categories are resolved before any product insert
    /// begins, since products reference both. Category resolution order
    /// follows [`catalog::CATEGORY_NAMES`], though results are keyed by name
    /// so order does not affect the outcome.
    pub async fn run(&self) -> Result<SeedSummary, SeedError> {
        let merchant = self.ensure_merchant().await?;

        let mut categories = HashMap::new();
        for name in catalog::CATEGORY_NAMES {
            let category_id = self.ensure_category(name).await?;
            info!("Category ready: {name} ({category_id})");
            categories.insert(name.to_string(), category_id);
        }

        let products = self.seed_products(&merchant.id, &categories).await?;

        Ok(SeedSummary {
            merchant,
            categories,
            products,
        })
    }

    /// Resolves the demo merchant, creating it only if no merchant exists.
    ///
    /// The lookup is unfiltered: any existing merchant row is reused, without
    /// matching on name or email.
    pub async fn ensure_merchant(&self) -> Result<Merchant, SeedError> {
        let existing: Option<Merchant> = sqlx::query_as(
            r#"
            SELECT id, name, email, phone, address, status
            FROM merchants
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await?;

        if let Some(merchant) = existing {
            info!("Using existing merchant: {}", merchant.id);
            return Ok(merchant);
        }

        let seed = catalog::merchant();
        let merchant: Merchant = sqlx::query_as(
            r#"
            INSERT INTO merchants (id, name, email, phone, address, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, email, phone, address, status
            "#,
        )
        .bind(id::generate())
        .bind(seed.name)
        .bind(seed.email)
        .bind(seed.phone)
        .bind(seed.address)
        .bind(seed.status.as_str())
        .fetch_one(&self.pool)
        .await?;

        info!("Merchant created: {}", merchant.id);
        Ok(merchant)
    }

    /// Resolves a category by exact name, creating it if absent.
    ///
    /// Check-then-create is not atomic; concurrent seeding runs could create
    /// duplicate names. Single-run execution is assumed.
    pub async fn ensure_category(&self, name: &str) -> Result<String, SeedError> {
        let existing: Option<Category> = sqlx::query_as(
            r#"
            SELECT id, name
            FROM categories
            WHERE name = $1
            LIMIT 1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(category) = existing {
            return Ok(category.id);
        }

        let category: Category = sqlx::query_as(
            r#"
            INSERT INTO categories (id, name)
            VALUES ($1, $2)
            RETURNING id, name
            "#,
        )
        .bind(id::generate())
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(category.id)
    }

    /// Inserts the demo products as one concurrent, unordered batch.
    ///
    /// Every insert always runs; there is no find-before-create for products,
    /// so a second seeding run duplicates them. Inserts already in flight are
    /// left to finish even after one fails (no cancellation, no rollback of
    /// the ones that succeeded); the first failure is reported once the batch
    /// has drained.
    pub async fn seed_products(
        &self,
        merchant_id: &str,
        categories: &HashMap<String, String>,
    ) -> Result<Vec<Product>, SeedError> {
        let rows = product_rows(merchant_id, categories)?;
        info!("Creating {} products...", rows.len());

        let mut tasks = JoinSet::new();
        for row in rows {
            let pool = self.pool.clone();
            tasks.spawn(async move { insert_product(&pool, row).await });
        }

        let mut products = Vec::new();
        let mut first_error: Option<SeedError> = None;
        while let Some(joined) = tasks.join_next().await {
            let result = match joined {
                Ok(result) => result,
                Err(join_error) => Err(SeedError::Join(join_error)),
            };
            match result {
                Ok(product) => products.push(product),
                Err(error) if first_error.is_none() => first_error = Some(error),
                Err(_) => {}
            }
        }

        if let Some(error) = first_error {
            return Err(error);
        }
        Ok(products)
    }

    /// Returns a reference to the pool for advanced usage.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Builds the product rows to insert: fresh ids, slugs derived from titles,
/// category ids resolved by name, merchant id attached.
fn product_rows(
    merchant_id: &str,
    categories: &HashMap<String, String>,
) -> Result<Vec<Product>, SeedError> {
    catalog::products()
        .into_iter()
        .map(|seed| {
            let category_id = categories
                .get(seed.category)
                .ok_or_else(|| SeedError::MissingCategory(seed.category.to_string()))?;

            Ok(Product {
                id: id::generate(),
                title: seed.title.to_string(),
                slug: slugify(seed.title),
                price: seed.price,
                description: seed.description.to_string(),
                manufacturer: seed.manufacturer.to_string(),
                category_id: category_id.clone(),
                in_stock: seed.in_stock,
                main_image: seed.main_image.to_string(),
                rating: seed.rating,
                merchant_id: merchant_id.to_string(),
            })
        })
        .collect()
}

/// Inserts a single product row.
async fn insert_product(pool: &PgPool, row: Product) -> Result<Product, SeedError> {
    let created: Product = sqlx::query_as(
        r#"
        INSERT INTO products (
            id, title, slug, price, description, manufacturer,
            category_id, in_stock, main_image, rating, merchant_id
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        RETURNING id, title, slug, price, description, manufacturer,
                  category_id, in_stock, main_image, rating, merchant_id
        "#,
    )
    .bind(&row.id)
    .bind(&row.title)
    .bind(&row.slug)
    .bind(row.price)
    .bind(&row.description)
    .bind(&row.manufacturer)
    .bind(&row.category_id)
    .bind(row.in_stock)
    .bind(&row.main_image)
    .bind(row.rating)
    .bind(&row.merchant_id)
    .fetch_one(pool)
    .await?;

    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category_map() -> HashMap<String, String> {
        catalog::CATEGORY_NAMES
            .iter()
            .map(|name| (name.to_string(), format!("{}-id", name.to_lowercase())))
            .collect()
    }

    #[test]
    fn test_product_rows_reference_resolved_categories() {
        let categories = category_map();
        let rows = product_rows("merchant-1", &categories).unwrap();

        assert_eq!(rows.len(), 4);
        for row in &rows {
            assert_eq!(row.merchant_id, "merchant-1");
        }

        let by_title: HashMap<_, _> =
            rows.iter().map(|r| (r.title.as_str(), r)).collect();
        assert_eq!(by_title["Samsung Galaxy S24 Ultra"].category_id, "smartphones-id");
        assert_eq!(by_title["iPhone 15 Pro Max"].category_id, "smartphones-id");
        assert_eq!(by_title["MacBook Pro M3"].category_id, "laptops-id");
        assert_eq!(by_title["Sony WH-1000XM5"].category_id, "headphones-id");
    }

    #[test]
    fn test_product_rows_derive_slugs() {
        let rows = product_rows("merchant-1", &category_map()).unwrap();
        let slugs: Vec<_> = rows.iter().map(|r| r.slug.as_str()).collect();

        assert!(slugs.contains(&"samsung-galaxy-s24-ultra"));
        assert!(slugs.contains(&"sony-wh-1000xm5"));
    }

    #[test]
    fn test_product_rows_get_unique_ids() {
        let rows = product_rows("merchant-1", &category_map()).unwrap();
        let ids: std::collections::HashSet<_> = rows.iter().map(|r| &r.id).collect();
        assert_eq!(ids.len(), rows.len());
    }

    #[test]
    fn test_missing_category_is_an_error() {
        let categories = HashMap::new();
        let result = product_rows("merchant-1", &categories);
        assert!(matches!(result, Err(SeedError::MissingCategory(_))));
    }
}
