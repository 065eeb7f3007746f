//! gRPC service implementations.

pub mod product_grpc;

pub use product_grpc::ProductGrpcService;
