//! Core domain entities.

pub mod product;
pub mod user;

pub use product::{NewProduct, Product, ProductSortOrder, ProductUpdate};
pub use user::{NewUser, User, UserSortOrder, UserUpdate};
