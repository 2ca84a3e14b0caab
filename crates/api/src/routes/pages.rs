use axum::routing::get;
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// ```text
/// GET /          -> index
/// GET /viewer    -> viewer
/// GET /tb_item   -> item_table
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::index))
        .route("/viewer", get(pages::viewer))
        .route("/tb_item", get(pages::item_table))
}
