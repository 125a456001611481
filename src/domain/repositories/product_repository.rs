//! Repository trait for product data access.

use crate::domain::entities::{NewProduct, Product, ProductSortOrder, ProductUpdate};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing products.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgProductRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryProductRepository`] - in-memory implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Creates a new product and returns it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_product: NewProduct) -> Result<Product, AppError>;

    /// Finds a product by identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Product))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, AppError>;

    /// Lists all products ordered by the requested field.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self, sort: ProductSortOrder) -> Result<Vec<Product>, AppError>;

    /// Replaces a product's fields.
    ///
    /// Returns `Ok(None)` if no product matches `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, update: ProductUpdate) -> Result<Option<Product>, AppError>;

    /// Deletes a product.
    ///
    /// Returns `Ok(true)` if the product was found and removed, `Ok(false)`
    /// if not found.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
