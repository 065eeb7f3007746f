//! Product repository backed by SeaORM.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set, SqlErr};
use uuid::Uuid;

use super::entities::product::ActiveModel;
use common::{AppError, AppResult};
use domain::{NewProduct, Product};

/// Product repository trait for dependency injection.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a new product; fails with a conflict if the SKU is taken
    async fn insert(&self, product: NewProduct) -> AppResult<Product>;
}

/// Concrete implementation of ProductRepository.
pub struct ProductStore {
    db: DatabaseConnection,
}

impl ProductStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for ProductStore {
    async fn insert(&self, product: NewProduct) -> AppResult<Product> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            sku: Set(product.sku),
            name: Set(product.name),
            description: Set(product.description),
            product_status_id: Set(product.product_status_id),
            regular_price: Set(product.regular_price),
            discount_price: Set(product.discount_price),
            quantity: Set(product.quantity),
            taxable: Set(product.taxable),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(|err| {
            match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => AppError::conflict("Product"),
                _ => AppError::from(err),
            }
        })?;

        Ok(Product::from(model))
    }
}
