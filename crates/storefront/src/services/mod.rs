//! Business services.

pub mod auth_service;
pub mod product_service;
pub mod token;

pub use auth_service::{AuthService, AuthenticatedUser, Authenticator};
pub use product_service::{ProductManager, ProductService};
pub use token::{Claims, TokenIssuer};
