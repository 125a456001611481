mod common;

use axum::http::StatusCode;
use serde_json::json;

// ─── POST (create) ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_product_returns_201_with_assigned_id() {
    let server = common::make_server();

    let response = server
        .post("/api/products")
        .json(&json!({ "name": "Widget", "price": 9.99 }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    assert!(body["id"].as_i64().unwrap() > 0);
    assert_eq!(body["name"], "Widget");
    assert_eq!(body["price"], 9.99);
}

#[tokio::test]
async fn test_create_product_missing_fields_returns_field_errors() {
    let server = common::make_server();

    let response = server.post("/api/products").json(&json!({})).await;

    response.assert_status_bad_request();

    let body = response.json::<serde_json::Value>();
    let errors = body.as_array().expect("body should be an error array");
    assert!(errors.iter().any(|e| e["field"] == "name" && e["message"] == "name is required"));
    assert!(errors.iter().any(|e| e["field"] == "price" && e["message"] == "price is required"));

    // Nothing was persisted.
    let list = server.get("/api/products").await.json::<serde_json::Value>();
    assert_eq!(list.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_create_product_name_too_short() {
    let server = common::make_server();

    let response = server
        .post("/api/products")
        .json(&json!({ "name": "W", "price": 10 }))
        .await;

    response.assert_status_bad_request();

    let body = response.json::<serde_json::Value>();
    assert!(body.as_array().unwrap().iter().any(|e| e["field"] == "name"));
}

#[tokio::test]
async fn test_create_product_price_out_of_range() {
    let server = common::make_server();

    for price in [0.5, 101.0] {
        let response = server
            .post("/api/products")
            .json(&json!({ "name": "Widget", "price": price }))
            .await;

        response.assert_status_bad_request();

        let body = response.json::<serde_json::Value>();
        assert!(body.as_array().unwrap().iter().any(|e| e["field"] == "price"));
    }
}

#[tokio::test]
async fn test_create_product_price_bounds_inclusive() {
    let server = common::make_server();

    for price in [1.0, 100.0] {
        let response = server
            .post("/api/products")
            .json(&json!({ "name": "Widget", "price": price }))
            .await;

        response.assert_status(StatusCode::CREATED);
    }
}

// ─── GET ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_product_success() {
    let server = common::make_server();
    let id = common::create_product(&server, "Widget", 9.99).await;

    let response = server.get(&format!("/api/products/{id}")).await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["id"], id);
    assert_eq!(body["name"], "Widget");
    assert_eq!(body["price"], 9.99);
}

#[tokio::test]
async fn test_get_product_not_found() {
    let server = common::make_server();

    let response = server.get("/api/products/999").await;

    response.assert_status_not_found();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"], "Product not found");
}

#[tokio::test]
async fn test_list_products_sorted_by_price() {
    let server = common::make_server();
    common::create_product(&server, "Expensive", 80.0).await;
    common::create_product(&server, "Cheap", 2.0).await;

    let response = server.get("/api/products?sort_order=price").await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Cheap", "Expensive"]);
}

#[tokio::test]
async fn test_list_products_sorted_by_name() {
    let server = common::make_server();
    common::create_product(&server, "Zither", 30.0).await;
    common::create_product(&server, "Anvil", 60.0).await;

    let response = server.get("/api/products?sort_order=name").await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Anvil", "Zither"]);
}

// ─── PUT (replace) ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_update_product_success() {
    let server = common::make_server();
    let id = common::create_product(&server, "Widget", 9.99).await;

    let response = server
        .put(&format!("/api/products/{id}"))
        .json(&json!({ "name": "Improved Widget", "price": 19.99 }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["id"], id);
    assert_eq!(body["name"], "Improved Widget");
    assert_eq!(body["price"], 19.99);
}

#[tokio::test]
async fn test_update_product_not_found() {
    let server = common::make_server();

    let response = server
        .put("/api/products/999")
        .json(&json!({ "name": "Ghost", "price": 10 }))
        .await;

    response.assert_status_not_found();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"], "Product not found");
}

#[tokio::test]
async fn test_update_product_invalid_payload() {
    let server = common::make_server();
    let id = common::create_product(&server, "Widget", 9.99).await;

    let response = server
        .put(&format!("/api/products/{id}"))
        .json(&json!({ "name": "Widget", "price": 200 }))
        .await;

    response.assert_status_bad_request();

    // The stored record is unchanged.
    let body = server
        .get(&format!("/api/products/{id}"))
        .await
        .json::<serde_json::Value>();
    assert_eq!(body["price"], 9.99);
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_product_success() {
    let server = common::make_server();
    let id = common::create_product(&server, "Widget", 9.99).await;

    let response = server.delete(&format!("/api/products/{id}")).await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["message"], "Product deleted successfully");

    server
        .get(&format!("/api/products/{id}"))
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_delete_product_not_found() {
    let server = common::make_server();

    let response = server.delete("/api/products/999").await;

    response.assert_status_not_found();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"], "Product not found");
}
