//! Handler for drag-and-drop reorganisation of the hierarchy.

use axum::extract::State;
use axum::Json;
use planboard_core::error::CoreError;
use planboard_core::hierarchy::{EntityKind, Relation};
use planboard_core::lenient;
use planboard_core::types::DbId;
use planboard_db::repositories::HierarchyRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::Ack;
use crate::state::AppState;

/// Body of `POST /move`. Ids come from DOM `data-*` attributes and may be strings.
#[derive(Debug, Deserialize)]
pub struct MoveRequest {
    pub source_type: String,
    #[serde(deserialize_with = "lenient::id")]
    pub source_id: DbId,
    pub target_type: String,
    #[serde(deserialize_with = "lenient::id")]
    pub target_id: DbId,
}

async fn ensure_exists(state: &AppState, kind: EntityKind, id: DbId) -> AppResult<()> {
    if HierarchyRepo::exists(&state.pool, kind, id).await? {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: kind.label(),
            id,
        }))
    }
}

/// POST /move
///
/// Re-parents the dragged entity: its link in the matching relation table
/// now points at the drop target, replacing any previous parent.
pub async fn move_entity(
    State(state): State<AppState>,
    AppJson(input): AppJson<MoveRequest>,
) -> AppResult<Json<Ack>> {
    let source: EntityKind = input.source_type.parse()?;
    let target: EntityKind = input.target_type.parse()?;
    let relation = Relation::for_move(source, target)?;

    ensure_exists(&state, source, input.source_id).await?;
    ensure_exists(&state, target, input.target_id).await?;

    HierarchyRepo::assign_parent(&state.pool, relation, input.target_id, input.source_id).await?;
    tracing::info!(
        %source,
        source_id = input.source_id,
        %target,
        target_id = input.target_id,
        table = relation.table(),
        "Entity moved"
    );

    Ok(Json(Ack::ok()))
}
