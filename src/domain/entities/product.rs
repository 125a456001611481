//! Product entity and associated input types.

use serde::Deserialize;
use sqlx::FromRow;

/// A catalog product.
///
/// The identifier is assigned by the persistence layer on insert.
#[derive(Debug, Clone, FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
}

impl Product {
    /// Creates a new Product instance.
    pub fn new(id: i64, name: String, price: f64) -> Self {
        Self { id, name, price }
    }
}

/// Input data for creating a product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
}

/// Full replacement for an existing product.
#[derive(Debug, Clone)]
pub struct ProductUpdate {
    pub name: String,
    pub price: f64,
}

/// Field used to order product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductSortOrder {
    /// Insertion order, the default when no ordering is requested.
    #[default]
    Id,
    Name,
    Price,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_creation() {
        let product = Product::new(1, "Widget".to_string(), 9.99);

        assert_eq!(product.id, 1);
        assert_eq!(product.name, "Widget");
        assert_eq!(product.price, 9.99);
    }

    #[test]
    fn test_sort_order_deserializes_lowercase() {
        let order: ProductSortOrder = serde_json::from_str("\"price\"").unwrap();
        assert_eq!(order, ProductSortOrder::Price);
    }
}
