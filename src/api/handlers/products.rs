//! Handlers for product endpoints.

use axum::{extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::message::MessageResponse;
use crate::api::dto::products::{ListProductsQuery, ProductPayload, ProductResponse};
use crate::api::extract::{Json, Path, Query};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all products.
///
/// # Endpoint
///
/// `GET /api/products`
///
/// # Query Parameters
///
/// - `sort_order` - optional ordering field: `name` or `price`.
///   Absent → insertion order.
pub async fn list_products_handler(
    State(state): State<AppState>,
    Query(query): Query<ListProductsQuery>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let products = state
        .product_service
        .list_products(query.sort_order)
        .await?;

    Ok(Json(
        products.into_iter().map(ProductResponse::from).collect(),
    ))
}

/// Retrieves a single product by identifier.
///
/// # Endpoint
///
/// `GET /api/products/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if no product matches the identifier.
pub async fn get_product_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<ProductResponse>, AppError> {
    let product = state.product_service.get_product(id).await?;

    Ok(Json(ProductResponse::from(product)))
}

/// Creates a new product.
///
/// # Endpoint
///
/// `POST /api/products`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Widget",   // 2-50 characters
///   "price": 9.99       // 1-100 inclusive
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request with a field-error array if validation fails;
/// no repository write occurs.
pub async fn create_product_handler(
    State(state): State<AppState>,
    Json(payload): Json<ProductPayload>,
) -> Result<(StatusCode, Json<ProductResponse>), AppError> {
    payload.validate()?;

    let product = state
        .product_service
        .create_product(payload.into_new_product())
        .await?;

    Ok((StatusCode::CREATED, Json(ProductResponse::from(product))))
}

/// Replaces an existing product.
///
/// # Endpoint
///
/// `PUT /api/products/{id}`
///
/// # Errors
///
/// Returns 400 Bad Request with a field-error array if validation fails.
/// Returns 404 Not Found if no product matches the identifier.
pub async fn update_product_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<ProductPayload>,
) -> Result<Json<ProductResponse>, AppError> {
    payload.validate()?;

    let product = state
        .product_service
        .update_product(id, payload.into_update())
        .await?;

    Ok(Json(ProductResponse::from(product)))
}

/// Deletes a product.
///
/// # Endpoint
///
/// `DELETE /api/products/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if no product matches the identifier.
pub async fn delete_product_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    state.product_service.delete_product(id).await?;

    Ok(Json(MessageResponse::new("Product deleted successfully")))
}
