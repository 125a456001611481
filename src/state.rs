//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{ProductService, UserService};

/// Process-wide state, built once at startup and cloned into each handler.
///
/// Services hold `Arc`s to the repository implementations, which in turn hold
/// the single long-lived connection pool. Nothing here is re-created per
/// request.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub product_service: Arc<ProductService>,
}

impl AppState {
    /// Creates the application state from constructed services.
    pub fn new(user_service: Arc<UserService>, product_service: Arc<ProductService>) -> Self {
        Self {
            user_service,
            product_service,
        }
    }
}
