//! Database entities for SeaORM.

pub mod product;
pub mod user;
