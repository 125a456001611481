//! Product management service.

use std::sync::Arc;

use crate::domain::entities::{NewProduct, Product, ProductSortOrder, ProductUpdate};
use crate::domain::repositories::ProductRepository;
use crate::error::AppError;

/// Service for creating, retrieving, updating, and deleting products.
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
}

impl ProductService {
    /// Creates a new product service.
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    /// Lists all products, ordered by the requested field.
    pub async fn list_products(&self, sort: ProductSortOrder) -> Result<Vec<Product>, AppError> {
        self.repository.list(sort).await
    }

    /// Retrieves a product by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no product matches `id`.
    pub async fn get_product(&self, id: i64) -> Result<Product, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Product not found"))
    }

    /// Creates a new product.
    pub async fn create_product(&self, new_product: NewProduct) -> Result<Product, AppError> {
        self.repository.create(new_product).await
    }

    /// Replaces an existing product's fields.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no product matches `id`.
    pub async fn update_product(
        &self,
        id: i64,
        update: ProductUpdate,
    ) -> Result<Product, AppError> {
        self.repository
            .update(id, update)
            .await?
            .ok_or_else(|| AppError::not_found("Product not found"))
    }

    /// Deletes a product.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no product matches `id`.
    pub async fn delete_product(&self, id: i64) -> Result<(), AppError> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(AppError::not_found("Product not found"));
        }

        Ok(())
    }
}
