//! Sub-work-package entity model and DTOs.

use planboard_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `tb_subWP` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SubWorkPackage {
    pub id: DbId,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateSubWorkPackage {
    pub name: String,
}
