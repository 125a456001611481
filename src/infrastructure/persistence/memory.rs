//! In-memory repository implementations.
//!
//! Back the integration test suite and database-less local runs (see
//! `IN_MEMORY` in [`crate::config`]) with the same semantics as the
//! PostgreSQL repositories: server-assigned ids,
//! email uniqueness, deterministic ordering. State lives in a `Mutex`-guarded
//! vector; the lock is never held across an await point.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::entities::{
    NewProduct, NewUser, Product, ProductSortOrder, ProductUpdate, User, UserSortOrder, UserUpdate,
};
use crate::domain::repositories::{ProductRepository, UserRepository};
use crate::error::AppError;

#[derive(Default)]
struct UserStore {
    next_id: i64,
    users: Vec<User>,
}

/// In-memory user repository.
#[derive(Default)]
pub struct InMemoryUserRepository {
    store: Mutex<UserStore>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, UserStore>, AppError> {
        self.store
            .lock()
            .map_err(|_| AppError::internal("User store lock poisoned"))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut store = self.lock()?;

        if let Some(email) = &new_user.email
            && store.users.iter().any(|u| u.email.as_ref() == Some(email))
        {
            return Err(AppError::conflict("Unique constraint violation"));
        }

        store.next_id += 1;
        let user = User::new(store.next_id, new_user.name, new_user.email);
        store.users.push(user.clone());

        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let store = self.lock()?;
        Ok(store.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let store = self.lock()?;
        Ok(store
            .users
            .iter()
            .find(|u| u.email.as_deref() == Some(email))
            .cloned())
    }

    async fn list(&self, sort: UserSortOrder) -> Result<Vec<User>, AppError> {
        let store = self.lock()?;
        let mut users = store.users.clone();

        match sort {
            UserSortOrder::Id => users.sort_by_key(|u| u.id),
            UserSortOrder::Name => users.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id))),
            UserSortOrder::Email => {
                // Absent emails sort last, matching Postgres NULLS LAST.
                users.sort_by(|a, b| match (&a.email, &b.email) {
                    (Some(x), Some(y)) => x.cmp(y).then(a.id.cmp(&b.id)),
                    (Some(_), None) => std::cmp::Ordering::Less,
                    (None, Some(_)) => std::cmp::Ordering::Greater,
                    (None, None) => a.id.cmp(&b.id),
                })
            }
        }

        Ok(users)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let store = self.lock()?;
        Ok(store.users.len() as i64)
    }

    async fn update(&self, id: i64, update: UserUpdate) -> Result<Option<User>, AppError> {
        let mut store = self.lock()?;

        let Some(user) = store.users.iter_mut().find(|u| u.id == id) else {
            return Ok(None);
        };

        user.name = update.name;
        user.email = update.email;

        Ok(Some(user.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut store = self.lock()?;
        let before = store.users.len();
        store.users.retain(|u| u.id != id);
        Ok(store.users.len() < before)
    }
}

#[derive(Default)]
struct ProductStore {
    next_id: i64,
    products: Vec<Product>,
}

/// In-memory product repository.
#[derive(Default)]
pub struct InMemoryProductRepository {
    store: Mutex<ProductStore>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, ProductStore>, AppError> {
        self.store
            .lock()
            .map_err(|_| AppError::internal("Product store lock poisoned"))
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, new_product: NewProduct) -> Result<Product, AppError> {
        let mut store = self.lock()?;

        store.next_id += 1;
        let product = Product::new(store.next_id, new_product.name, new_product.price);
        store.products.push(product.clone());

        Ok(product)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, AppError> {
        let store = self.lock()?;
        Ok(store.products.iter().find(|p| p.id == id).cloned())
    }

    async fn list(&self, sort: ProductSortOrder) -> Result<Vec<Product>, AppError> {
        let store = self.lock()?;
        let mut products = store.products.clone();

        match sort {
            ProductSortOrder::Id => products.sort_by_key(|p| p.id),
            ProductSortOrder::Name => {
                products.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)))
            }
            ProductSortOrder::Price => products.sort_by(|a, b| {
                a.price
                    .total_cmp(&b.price)
                    .then(a.id.cmp(&b.id))
            }),
        }

        Ok(products)
    }

    async fn update(&self, id: i64, update: ProductUpdate) -> Result<Option<Product>, AppError> {
        let mut store = self.lock()?;

        let Some(product) = store.products.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        product.name = update.name;
        product.price = update.price;

        Ok(Some(product.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut store = self.lock()?;
        let before = store.products.len();
        store.products.retain(|p| p.id != id);
        Ok(store.products.len() < before)
    }
}
