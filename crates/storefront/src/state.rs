//! Application state for dependency injection.

use std::sync::Arc;

use crate::infra::Database;
use crate::services::AuthService;

/// Application state shared across handlers.
///
/// Constructed once at startup and cloned per request; holds only immutable
/// handles.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthService>,
    pub db: Database,
}
