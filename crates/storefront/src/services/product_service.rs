//! Product service - catalog writes behind the gRPC contract.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppError, AppResult};
use domain::{NewProduct, Product};

use crate::repository::ProductRepository;

/// Product service trait for dependency injection.
#[async_trait]
pub trait ProductService: Send + Sync {
    /// Insert a new catalog product
    async fn insert_product(&self, product: NewProduct) -> AppResult<Product>;
}

/// Concrete implementation of ProductService.
pub struct ProductManager {
    repo: Arc<dyn ProductRepository>,
}

impl ProductManager {
    /// Create a new product service instance.
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl ProductService for ProductManager {
    async fn insert_product(&self, product: NewProduct) -> AppResult<Product> {
        if product.sku.trim().is_empty() {
            return Err(AppError::validation("SKU is required"));
        }
        if product.name.trim().is_empty() {
            return Err(AppError::validation("Product name is required"));
        }

        self.repo.insert(product).await
    }
}
