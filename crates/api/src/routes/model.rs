use axum::routing::{get, post};
use axum::Router;

use crate::handlers::model;
use crate::state::AppState;

/// ```text
/// POST /save_model_position   -> save_model_position
/// GET  /get_model_data        -> get_model_data
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/save_model_position", post(model::save_model_position))
        .route("/get_model_data", get(model::get_model_data))
}
