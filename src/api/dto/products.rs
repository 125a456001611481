//! DTOs for product endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{NewProduct, Product, ProductSortOrder, ProductUpdate};

/// Request body for `POST /api/products` and `PUT /api/products/{id}`.
#[derive(Debug, Deserialize, Validate)]
pub struct ProductPayload {
    #[validate(
        required(message = "name is required"),
        length(min = 2, max = 50, message = "name must be between 2 and 50 characters")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "price is required"),
        range(min = 1.0, max = 100.0, message = "price must be between 1 and 100")
    )]
    pub price: Option<f64>,
}

impl ProductPayload {
    /// Converts a validated payload into creation input.
    ///
    /// Must only be called after [`Validate::validate`] has passed.
    pub fn into_new_product(self) -> NewProduct {
        NewProduct {
            // Presence is enforced by the `required` rules.
            name: self.name.unwrap_or_default(),
            price: self.price.unwrap_or_default(),
        }
    }

    /// Converts a validated payload into replacement input.
    pub fn into_update(self) -> ProductUpdate {
        ProductUpdate {
            name: self.name.unwrap_or_default(),
            price: self.price.unwrap_or_default(),
        }
    }
}

/// Query parameters for `GET /api/products`.
#[derive(Debug, Default, Deserialize)]
pub struct ListProductsQuery {
    /// Field to order by; defaults to insertion order.
    #[serde(default)]
    pub sort_order: ProductSortOrder,
}

/// JSON representation of a product.
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub price: f64,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
        }
    }
}
