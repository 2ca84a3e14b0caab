use axum::routing::post;
use axum::Router;

use crate::handlers::hierarchy;
use crate::state::AppState;

/// ```text
/// POST /move   -> move_entity
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/move", post(hierarchy::move_entity))
}
