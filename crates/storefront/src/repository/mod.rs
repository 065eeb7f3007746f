//! Persistence layer.

pub mod entities;
pub mod product_repository;
pub mod user_repository;

pub use product_repository::{ProductRepository, ProductStore};
pub use user_repository::{UserRepository, UserStore};
