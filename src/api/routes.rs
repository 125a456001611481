//! API route configuration.

use crate::api::handlers::{
    create_product_handler, create_user_handler, delete_product_handler, delete_user_handler,
    get_product_handler, get_user_handler, list_products_handler, list_users_handler,
    update_product_handler, update_user_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All REST API routes.
///
/// # Endpoints
///
/// - `GET    /users`          - List users (optional `sort_order`)
/// - `POST   /users`          - Create a user
/// - `GET    /users/{id}`     - Fetch a user
/// - `PUT    /users/{id}`     - Replace a user
/// - `DELETE /users/{id}`     - Delete a user
/// - `GET    /products`       - List products (optional `sort_order`)
/// - `POST   /products`       - Create a product
/// - `GET    /products/{id}`  - Fetch a product
/// - `PUT    /products/{id}`  - Replace a product
/// - `DELETE /products/{id}`  - Delete a product
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users",
            get(list_users_handler).post(create_user_handler),
        )
        .route(
            "/users/{id}",
            get(get_user_handler)
                .put(update_user_handler)
                .delete(delete_user_handler),
        )
        .route(
            "/products",
            get(list_products_handler).post(create_product_handler),
        )
        .route(
            "/products/{id}",
            get(get_product_handler)
                .put(update_product_handler)
                .delete(delete_product_handler),
        )
}
