//! Product database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::Product;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub sku: String,
    pub name: String,
    pub description: String,
    pub product_status_id: String,
    pub regular_price: i32,
    pub discount_price: i32,
    pub quantity: i32,
    pub taxable: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Product {
    fn from(model: Model) -> Self {
        Product {
            id: model.id,
            sku: model.sku,
            name: model.name,
            description: model.description,
            product_status_id: model.product_status_id,
            regular_price: model.regular_price,
            discount_price: model.discount_price,
            quantity: model.quantity,
            taxable: model.taxable,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
