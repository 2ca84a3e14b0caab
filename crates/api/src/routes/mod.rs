pub mod health;
pub mod hierarchy;
pub mod item;
pub mod model;
pub mod pages;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// Paths are kept flat at the root because the browser client calls them
/// directly:
///
/// ```text
/// GET    /                           board page
/// GET    /viewer                     3D viewer page
/// GET    /tb_item                    item table page
///
/// POST   /create                     create item (form)
/// POST   /edit                       update item (form)
/// POST   /delete                     delete item (form)
/// GET    /item/{id}/property         item property blob
///
/// POST   /move                       re-parent an entity (JSON)
///
/// POST   /save_model_position        store WP placement (JSON)
/// GET    /get_model_data             WP model paths and placements
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(pages::router())
        .merge(item::router())
        .merge(hierarchy::router())
        .merge(model::router())
}
