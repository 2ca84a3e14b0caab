//! Handlers for the server-rendered pages.

use axum::extract::State;
use axum::response::Html;
use planboard_core::hierarchy::Relation;
use planboard_db::repositories::{
    HierarchyRepo, ItemRepo, ProjectRepo, SubWorkPackageRepo, WorkPackageRepo,
};
use tera::Context;

use crate::board::{self, BoardRows};
use crate::error::AppResult;
use crate::state::AppState;
use crate::views;

/// GET /
///
/// Renders every project, work package, sub work package and item, nested
/// along the relation tables.
pub async fn index(State(state): State<AppState>) -> AppResult<Html<String>> {
    let pool = &state.pool;
    let rows = BoardRows {
        projects: ProjectRepo::list(pool).await?,
        work_packages: WorkPackageRepo::list(pool).await?,
        sub_work_packages: SubWorkPackageRepo::list(pool).await?,
        items: ItemRepo::list(pool).await?,
        project_wp: HierarchyRepo::list_links(pool, Relation::ProjectWorkPackage).await?,
        wp_subwp: HierarchyRepo::list_links(pool, Relation::WorkPackageSubWorkPackage).await?,
        subwp_item: HierarchyRepo::list_links(pool, Relation::SubWorkPackageItem).await?,
    };

    let mut context = Context::new();
    context.insert("projects", &rows.projects);
    context.insert("wps", &rows.work_packages);
    context.insert("subwps", &rows.sub_work_packages);
    context.insert("items", &rows.items);
    context.insert("board", &board::compose(rows));

    state.views.render(views::INDEX, &context)
}

/// GET /viewer
pub async fn viewer(State(state): State<AppState>) -> AppResult<Html<String>> {
    state.views.render(views::VIEWER, &Context::new())
}

/// GET /tb_item
pub async fn item_table(State(state): State<AppState>) -> AppResult<Html<String>> {
    let items = ItemRepo::list(&state.pool).await?;

    let mut context = Context::new();
    context.insert("items", &items);
    state.views.render(views::ITEMS, &context)
}
