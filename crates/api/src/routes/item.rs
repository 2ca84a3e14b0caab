//! Route definitions for items.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::item;
use crate::state::AppState;

/// ```text
/// POST /create               -> create
/// POST /edit                 -> edit
/// POST /delete               -> delete
/// GET  /item/{id}/property   -> get_property
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/create", post(item::create))
        .route("/edit", post(item::edit))
        .route("/delete", post(item::delete))
        .route("/item/{id}/property", get(item::get_property))
}
