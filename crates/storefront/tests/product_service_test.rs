//! Product service and gRPC contract tests.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use mockall::mock;
use tonic::Request;
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::{NewProduct, Product};
use proto::product::{
    product_service_server::ProductService as ProductServiceProto, InsertProductRequest,
    Product as ProtoProduct,
};
use storefront_lib::grpc::ProductGrpcService;
use storefront_lib::repository::ProductRepository;
use storefront_lib::services::{ProductManager, ProductService};

mock! {
    ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn insert(&self, product: NewProduct) -> AppResult<Product>;
    }
}

fn stored_product(new: NewProduct) -> Product {
    let now = Utc::now();
    Product {
        id: Uuid::new_v4(),
        sku: new.sku,
        name: new.name,
        description: new.description,
        product_status_id: new.product_status_id,
        regular_price: new.regular_price,
        discount_price: new.discount_price,
        quantity: new.quantity,
        taxable: new.taxable,
        created_at: now,
        updated_at: now,
    }
}

fn sample_new_product() -> NewProduct {
    NewProduct {
        sku: "SKU-001".to_string(),
        name: "Mechanical Keyboard".to_string(),
        description: "Tenkeyless, brown switches".to_string(),
        product_status_id: "in_stock".to_string(),
        regular_price: 9900,
        discount_price: 7900,
        quantity: 25,
        taxable: true,
    }
}

#[tokio::test]
async fn test_insert_product_persists_and_returns_record() {
    let mut repo = MockProductRepo::new();
    repo.expect_insert().returning(|p| Ok(stored_product(p)));

    let service = ProductManager::new(Arc::new(repo));
    let product = service.insert_product(sample_new_product()).await.unwrap();

    assert_eq!(product.sku, "SKU-001");
    assert_eq!(product.regular_price, 9900);
}

#[tokio::test]
async fn test_insert_product_rejects_blank_sku() {
    // No expectation on the repository: it must not be reached
    let repo = MockProductRepo::new();

    let service = ProductManager::new(Arc::new(repo));
    let mut product = sample_new_product();
    product.sku = "  ".to_string();

    let result = service.insert_product(product).await;
    assert!(matches!(result.unwrap_err(), AppError::Validation(_)));
}

#[tokio::test]
async fn test_insert_product_rejects_blank_name() {
    let repo = MockProductRepo::new();

    let service = ProductManager::new(Arc::new(repo));
    let mut product = sample_new_product();
    product.name = String::new();

    let result = service.insert_product(product).await;
    assert!(matches!(result.unwrap_err(), AppError::Validation(_)));
}

#[tokio::test]
async fn test_insert_product_duplicate_sku_conflicts() {
    let mut repo = MockProductRepo::new();
    repo.expect_insert()
        .returning(|_| Err(AppError::conflict("Product")));

    let service = ProductManager::new(Arc::new(repo));
    let result = service.insert_product(sample_new_product()).await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));
}

fn grpc_service(repo: MockProductRepo) -> ProductGrpcService {
    ProductGrpcService::new(Arc::new(ProductManager::new(Arc::new(repo))))
}

fn proto_request() -> Request<InsertProductRequest> {
    Request::new(InsertProductRequest {
        product: Some(ProtoProduct {
            sku: "SKU-001".to_string(),
            name: "Mechanical Keyboard".to_string(),
            description: "Tenkeyless, brown switches".to_string(),
            product_status_id: "in_stock".to_string(),
            regular_price: 9900,
            discount_price: 7900,
            quantity: 25,
            taxable: true,
            // Server-assigned fields are ignored on input
            ..Default::default()
        }),
    })
}

#[tokio::test]
async fn test_grpc_insert_product_assigns_id_and_timestamps() {
    let mut repo = MockProductRepo::new();
    repo.expect_insert().returning(|p| Ok(stored_product(p)));

    let response = grpc_service(repo)
        .insert_product(proto_request())
        .await
        .unwrap();

    let product = response.into_inner().product.unwrap();
    assert!(Uuid::parse_str(&product.id).is_ok());
    assert_eq!(product.sku, "SKU-001");
    assert!(chrono::DateTime::parse_from_rfc3339(&product.created_at).is_ok());
    assert!(chrono::DateTime::parse_from_rfc3339(&product.updated_at).is_ok());
}

#[tokio::test]
async fn test_grpc_insert_product_missing_payload_is_invalid_argument() {
    let repo = MockProductRepo::new();

    let status = grpc_service(repo)
        .insert_product(Request::new(InsertProductRequest { product: None }))
        .await
        .unwrap_err();

    assert_eq!(status.code(), tonic::Code::InvalidArgument);
}

#[tokio::test]
async fn test_grpc_insert_product_duplicate_sku_is_already_exists() {
    let mut repo = MockProductRepo::new();
    repo.expect_insert()
        .returning(|_| Err(AppError::conflict("Product")));

    let status = grpc_service(repo)
        .insert_product(proto_request())
        .await
        .unwrap_err();

    assert_eq!(status.code(), tonic::Code::AlreadyExists);
}
