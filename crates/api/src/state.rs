use std::sync::Arc;

use crate::config::ServerConfig;
use crate::views::Views;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is reference-counted and the rest sits behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: planboard_db::DbPool,
    /// Server configuration, including upload rules and the placeholder image.
    pub config: Arc<ServerConfig>,
    /// Compiled HTML templates.
    pub views: Arc<Views>,
}
