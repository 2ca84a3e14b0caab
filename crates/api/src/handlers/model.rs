//! Handlers for the 3D viewer: work package model paths and placements.

use axum::extract::{Query, State};
use axum::Json;
use planboard_core::lenient;
use planboard_core::types::DbId;
use planboard_db::models::work_package::{ModelPlacement, WorkPackage};
use planboard_db::repositories::WorkPackageRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::Ack;
use crate::state::AppState;

/// Body of `POST /save_model_position`.
///
/// The viewer posts raw `<input>` values, so every field may be a string.
/// Fields left out are stored as `NULL`.
#[derive(Debug, Deserialize)]
pub struct SavePositionRequest {
    #[serde(default, deserialize_with = "lenient::opt_id")]
    pub id: Option<DbId>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub x: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub y: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub z: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub u: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub v: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub w: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct ModelDataQuery {
    #[serde(default, deserialize_with = "lenient::opt_id")]
    pub id: Option<DbId>,
}

#[derive(Debug, Serialize)]
pub struct Position {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
}

/// Rotation in degrees around the x, y and z axes.
#[derive(Debug, Serialize)]
pub struct Rotation {
    pub u: Option<f64>,
    pub v: Option<f64>,
    pub w: Option<f64>,
}

/// One entry of `GET /get_model_data`.
#[derive(Debug, Serialize)]
pub struct ModelData {
    pub id: DbId,
    pub name: String,
    pub model_path: Option<String>,
    pub position: Position,
    pub rotation: Rotation,
}

impl From<WorkPackage> for ModelData {
    fn from(wp: WorkPackage) -> Self {
        Self {
            id: wp.id,
            name: wp.name,
            model_path: wp.model_path,
            position: Position {
                x: wp.pos_x,
                y: wp.pos_y,
                z: wp.pos_z,
            },
            rotation: Rotation {
                u: wp.rot_u,
                v: wp.rot_v,
                w: wp.rot_w,
            },
        }
    }
}

/// POST /save_model_position
///
/// A missing `id` is rejected before the database is touched. Database
/// failures are reported with their message.
pub async fn save_model_position(
    State(state): State<AppState>,
    AppJson(input): AppJson<SavePositionRequest>,
) -> AppResult<Json<Ack>> {
    let id = input
        .id
        .ok_or_else(|| AppError::BadRequest("Missing model id".into()))?;

    let placement = ModelPlacement {
        x: input.x,
        y: input.y,
        z: input.z,
        u: input.u,
        v: input.v,
        w: input.w,
    };

    let updated = WorkPackageRepo::save_placement(&state.pool, id, &placement)
        .await
        .map_err(|e| AppError::Storage(e.to_string()))?;

    if updated {
        tracing::info!(wp_id = id, ?placement, "Model position saved");
    } else {
        tracing::warn!(wp_id = id, "Model position matched no work package");
    }

    Ok(Json(Ack::ok()))
}

/// GET /get_model_data[?id=]
///
/// Always answers with an array: one entry for `?id=`, every work package otherwise.
pub async fn get_model_data(
    State(state): State<AppState>,
    Query(query): Query<ModelDataQuery>,
) -> AppResult<Json<Vec<ModelData>>> {
    let work_packages: Vec<WorkPackage> = match query.id {
        Some(id) => WorkPackageRepo::find_by_id(&state.pool, id)
            .await?
            .into_iter()
            .collect(),
        None => WorkPackageRepo::list(&state.pool).await?,
    };

    Ok(Json(work_packages.into_iter().map(ModelData::from).collect()))
}
