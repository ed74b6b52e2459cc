use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// The pool is an explicitly injected handle so tests can substitute their
/// own database. Cheaply cloneable.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: scoop_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
