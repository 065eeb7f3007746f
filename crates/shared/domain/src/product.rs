//! Product domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Catalog product record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    /// Stock keeping unit, unique across the catalog
    pub sku: String,
    pub name: String,
    pub description: String,
    pub product_status_id: String,
    /// Prices are stored in minor currency units
    pub regular_price: i32,
    pub discount_price: i32,
    pub quantity: i32,
    pub taxable: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied fields for inserting a new product.
///
/// The id and timestamps are assigned by the server.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub sku: String,
    pub name: String,
    pub description: String,
    pub product_status_id: String,
    pub regular_price: i32,
    pub discount_price: i32,
    pub quantity: i32,
    pub taxable: bool,
}
