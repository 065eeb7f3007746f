//! Storefront backend library.
//!
//! HTTP surface for user registration and login, plus the gRPC product
//! contract, backed by a SQL store. Dependencies are wired once at startup
//! into an [`state::AppState`]; there is no global mutable state.

pub mod config;
pub mod extractors;
pub mod grpc;
pub mod handlers;
pub mod infra;
pub mod repository;
pub mod routes;
pub mod services;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use chrono::Duration;
use tonic::transport::Server as GrpcServer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::StorefrontConfig;
use crate::grpc::ProductGrpcService;
use crate::infra::Database;
use crate::repository::{ProductStore, UserStore};
use crate::routes::create_router;
use crate::services::{Authenticator, ProductManager, TokenIssuer};
use crate::state::AppState;

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(
    config: &StorefrontConfig,
    action: MigrateAction,
) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Run the HTTP and gRPC servers with the given configuration.
pub async fn run_server_with_config(
    config: StorefrontConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    // Initialize database
    let db = Database::connect(&config.database).await?;
    let conn = db.get_connection();

    // Repositories and services, constructed once
    let user_repo = Arc::new(UserStore::new(conn.clone()));
    let product_repo = Arc::new(ProductStore::new(conn));
    let token_issuer = TokenIssuer::new(
        config.jwt.secret.clone(),
        Duration::hours(config.jwt.expiration_hours),
    )?;
    let auth_service = Arc::new(Authenticator::new(user_repo, token_issuer));
    let product_service = Arc::new(ProductManager::new(product_repo));

    let state = AppState { auth_service, db };

    // Build router
    let app = create_router(state).layer(TraceLayer::new_for_http());

    let http_addr: SocketAddr =
        format!("{}:{}", config.service.host, config.service.port).parse()?;
    let grpc_addr: SocketAddr = format!("{}:{}", config.service.host, config.grpc_port).parse()?;

    let listener = tokio::net::TcpListener::bind(http_addr).await?;
    info!("HTTP server listening on {}", http_addr);
    info!("Product gRPC server listening on {}", grpc_addr);

    let grpc_service = proto::ProductServiceServer::new(ProductGrpcService::new(product_service));

    tokio::try_join!(
        async move {
            axum::serve(listener, app)
                .await
                .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)
        },
        async move {
            GrpcServer::builder()
                .add_service(grpc_service)
                .serve(grpc_addr)
                .await
                .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)
        },
    )
    .map_err(|e| e as Box<dyn std::error::Error>)?;

    Ok(())
}
