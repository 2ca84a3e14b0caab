//! Item entity model and DTOs.

use planboard_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `tb_item` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Item {
    pub id: DbId,
    pub name: String,
    pub image_url: String,
    /// Raw JSON text. `NULL` on rows written before properties existed.
    pub property: Option<String>,
}

/// DTO for inserting an item. `property` must already be validated JSON.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateItem {
    pub name: String,
    pub image_url: String,
    pub property: String,
}

/// DTO for updating an item. Every column is overwritten.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateItem {
    pub name: String,
    pub image_url: String,
    pub property: String,
}
