//! Repository implementations.
//!
//! Concrete implementations of the domain repository traits:
//!
//! - [`PgUserRepository`] / [`PgProductRepository`] - PostgreSQL via SQLx
//! - [`InMemoryUserRepository`] / [`InMemoryProductRepository`] - in-memory
//!   stores for tests and database-less runs

pub mod memory;
pub mod pg_product_repository;
pub mod pg_user_repository;

pub use memory::{InMemoryProductRepository, InMemoryUserRepository};
pub use pg_product_repository::PgProductRepository;
pub use pg_user_repository::PgUserRepository;
