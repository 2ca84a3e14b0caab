//! Parent/child links stored in the `rel_*` tables.

use planboard_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// One row of a relation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow, Serialize)]
pub struct RelationLink {
    pub parent_id: DbId,
    pub child_id: DbId,
}
