//! Route configuration.

use axum::Router;

use crate::handlers::{auth_routes, health_routes};
use crate::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .nest("/health", health_routes())
        // Login and register live at the root
        .merge(auth_routes())
        .with_state(state)
}
