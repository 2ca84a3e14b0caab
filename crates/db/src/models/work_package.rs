//! Work package entity model and DTOs.
//!
//! A work package may carry a 3D model path plus its placement in the
//! viewer scene: position `(x, y, z)` and rotation `(u, v, w)` in degrees.

use planboard_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `tb_WP` table.
///
/// The model path lives in the `"3d_model"` column, aliased to `model_path`
/// in every query.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WorkPackage {
    pub id: DbId,
    pub name: String,
    pub model_path: Option<String>,
    pub pos_x: Option<f64>,
    pub pos_y: Option<f64>,
    pub pos_z: Option<f64>,
    pub rot_u: Option<f64>,
    pub rot_v: Option<f64>,
    pub rot_w: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateWorkPackage {
    pub name: String,
    pub model_path: Option<String>,
}

/// Placement written by the viewer. Every column is overwritten, so a
/// `None` clears the stored value.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ModelPlacement {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
    pub u: Option<f64>,
    pub v: Option<f64>,
    pub w: Option<f64>,
}
