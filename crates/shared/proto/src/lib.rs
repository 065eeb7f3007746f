//! gRPC protocol buffer definitions.
//!
//! This crate contains the generated contract for the product service.
//! It carries no hand-written logic and is versioned independently of the
//! services that speak it.

/// Product service definitions.
pub mod product {
    tonic::include_proto!("product");
}

// Re-export commonly used items
pub use product::product_service_client::ProductServiceClient;
pub use product::product_service_server::{ProductService, ProductServiceServer};
