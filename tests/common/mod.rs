#![allow(dead_code)]

use std::sync::Arc;

use axum::{Router, routing::get};
use axum_test::TestServer;
use storefront_api::api::handlers::health_handler;
use storefront_api::api::routes::api_routes;
use storefront_api::application::services::{ProductService, UserService};
use storefront_api::infrastructure::persistence::{
    InMemoryProductRepository, InMemoryUserRepository,
};
use storefront_api::state::AppState;

/// Builds application state backed by in-memory repositories.
pub fn create_test_state() -> AppState {
    let user_repo = Arc::new(InMemoryUserRepository::new());
    let product_repo = Arc::new(InMemoryProductRepository::new());

    AppState::new(
        Arc::new(UserService::new(user_repo)),
        Arc::new(ProductService::new(product_repo)),
    )
}

/// Builds a test server with the health route and the full `/api` surface.
pub fn make_server() -> TestServer {
    let app = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_routes())
        .with_state(create_test_state());
    TestServer::new(app).unwrap()
}

/// Creates a user through the API and returns its assigned id.
pub async fn create_user(server: &TestServer, name: &str, email: Option<&str>) -> i64 {
    let mut body = serde_json::json!({ "name": name });
    if let Some(email) = email {
        body["email"] = serde_json::json!(email);
    }

    let response = server.post("/api/users").json(&body).await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<serde_json::Value>()["id"].as_i64().unwrap()
}

/// Creates a product through the API and returns its assigned id.
pub async fn create_product(server: &TestServer, name: &str, price: f64) -> i64 {
    let response = server
        .post("/api/products")
        .json(&serde_json::json!({ "name": name, "price": price }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<serde_json::Value>()["id"].as_i64().unwrap()
}
