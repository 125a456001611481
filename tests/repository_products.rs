//! Exercises the in-memory product repository.

use storefront_api::domain::entities::{NewProduct, ProductSortOrder, ProductUpdate};
use storefront_api::domain::repositories::ProductRepository;
use storefront_api::infrastructure::persistence::InMemoryProductRepository;

fn new_product(name: &str, price: f64) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        price,
    }
}

#[tokio::test]
async fn test_create_assigns_sequential_ids() {
    let repo = InMemoryProductRepository::new();

    let first = repo.create(new_product("Widget", 9.99)).await.unwrap();
    let second = repo.create(new_product("Gadget", 19.99)).await.unwrap();

    assert!(second.id > first.id);
}

#[tokio::test]
async fn test_find_by_id() {
    let repo = InMemoryProductRepository::new();

    let created = repo.create(new_product("Widget", 9.99)).await.unwrap();

    let found = repo.find_by_id(created.id).await.unwrap();
    assert_eq!(found.unwrap().price, 9.99);

    assert!(repo.find_by_id(999).await.unwrap().is_none());
}

#[tokio::test]
async fn test_list_sorted_by_price() {
    let repo = InMemoryProductRepository::new();

    repo.create(new_product("Expensive", 80.0)).await.unwrap();
    repo.create(new_product("Cheap", 2.0)).await.unwrap();

    let products = repo.list(ProductSortOrder::Price).await.unwrap();
    let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Cheap", "Expensive"]);
}

#[tokio::test]
async fn test_list_sorted_by_name() {
    let repo = InMemoryProductRepository::new();

    repo.create(new_product("Zither", 30.0)).await.unwrap();
    repo.create(new_product("Anvil", 60.0)).await.unwrap();

    let products = repo.list(ProductSortOrder::Name).await.unwrap();
    let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Anvil", "Zither"]);
}

#[tokio::test]
async fn test_update_replaces_fields() {
    let repo = InMemoryProductRepository::new();

    let created = repo.create(new_product("Widget", 9.99)).await.unwrap();

    let updated = repo
        .update(
            created.id,
            ProductUpdate {
                name: "Improved Widget".to_string(),
                price: 19.99,
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.name, "Improved Widget");
    assert_eq!(updated.price, 19.99);
}

#[tokio::test]
async fn test_update_missing_returns_none() {
    let repo = InMemoryProductRepository::new();

    let result = repo
        .update(
            999,
            ProductUpdate {
                name: "Ghost".to_string(),
                price: 10.0,
            },
        )
        .await
        .unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn test_delete() {
    let repo = InMemoryProductRepository::new();

    let created = repo.create(new_product("Widget", 9.99)).await.unwrap();

    assert!(repo.delete(created.id).await.unwrap());
    assert!(!repo.delete(created.id).await.unwrap());
    assert!(repo.find_by_id(created.id).await.unwrap().is_none());
}
