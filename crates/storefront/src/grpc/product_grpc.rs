//! gRPC implementation for the product contract.

use std::sync::Arc;

use tonic::{Request, Response, Status};

use crate::services::ProductService;
use proto::product::{
    product_service_server::ProductService as ProductServiceProto, InsertProductRequest,
    InsertProductResponse,
};

/// gRPC service wrapper for ProductService.
pub struct ProductGrpcService {
    service: Arc<dyn ProductService>,
}

impl ProductGrpcService {
    /// Create a new gRPC service wrapper.
    pub fn new(service: Arc<dyn ProductService>) -> Self {
        Self { service }
    }
}

#[tonic::async_trait]
impl ProductServiceProto for ProductGrpcService {
    async fn insert_product(
        &self,
        request: Request<InsertProductRequest>,
    ) -> Result<Response<InsertProductResponse>, Status> {
        let req = request.into_inner();
        let product = req
            .product
            .ok_or_else(|| Status::invalid_argument("product is required"))?;

        let created = self
            .service
            .insert_product(new_product_from_proto(product))
            .await
            .map_err(Status::from)?;

        Ok(Response::new(InsertProductResponse {
            product: Some(product_to_proto(&created)),
        }))
    }
}

/// Convert an incoming proto Product into the domain insert payload.
/// Server-assigned fields (id, timestamps) are ignored.
fn new_product_from_proto(product: proto::product::Product) -> domain::NewProduct {
    domain::NewProduct {
        sku: product.sku,
        name: product.name,
        description: product.description,
        product_status_id: product.product_status_id,
        regular_price: product.regular_price,
        discount_price: product.discount_price,
        quantity: product.quantity,
        taxable: product.taxable,
    }
}

/// Convert a domain Product to its proto representation.
fn product_to_proto(product: &domain::Product) -> proto::product::Product {
    proto::product::Product {
        id: product.id.to_string(),
        sku: product.sku.clone(),
        name: product.name.clone(),
        description: product.description.clone(),
        product_status_id: product.product_status_id.clone(),
        regular_price: product.regular_price,
        discount_price: product.discount_price,
        quantity: product.quantity,
        taxable: product.taxable,
        created_at: product.created_at.to_rfc3339(),
        updated_at: product.updated_at.to_rfc3339(),
    }
}
