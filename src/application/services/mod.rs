//! Application services orchestrating domain operations.

pub mod product_service;
pub mod user_service;

pub use product_service::ProductService;
pub use user_service::UserService;
