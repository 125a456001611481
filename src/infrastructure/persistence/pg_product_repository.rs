//! PostgreSQL implementation of the product repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewProduct, Product, ProductSortOrder, ProductUpdate};
use crate::domain::repositories::ProductRepository;
use crate::error::AppError;

/// PostgreSQL repository for product storage and retrieval.
pub struct PgProductRepository {
    pool: Arc<PgPool>,
}

impl PgProductRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn order_column(sort: ProductSortOrder) -> &'static str {
    match sort {
        ProductSortOrder::Id => "id",
        ProductSortOrder::Name => "name",
        ProductSortOrder::Price => "price",
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(&self, new_product: NewProduct) -> Result<Product, AppError> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, price)
            VALUES ($1, $2)
            RETURNING id, name, price
            "#,
        )
        .bind(&new_product.name)
        .bind(new_product.price)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(product)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, AppError> {
        let product =
            sqlx::query_as::<_, Product>("SELECT id, name, price FROM products WHERE id = $1")
                .bind(id)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(product)
    }

    async fn list(&self, sort: ProductSortOrder) -> Result<Vec<Product>, AppError> {
        let query = format!(
            "SELECT id, name, price FROM products ORDER BY {}, id",
            order_column(sort)
        );

        let products = sqlx::query_as::<_, Product>(&query)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(products)
    }

    async fn update(&self, id: i64, update: ProductUpdate) -> Result<Option<Product>, AppError> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET name = $2, price = $3
            WHERE id = $1
            RETURNING id, name, price
            "#,
        )
        .bind(id)
        .bind(&update.name)
        .bind(update.price)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(product)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
