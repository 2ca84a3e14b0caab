//! Repository for the `rel_*` parent/child tables.
//!
//! Table names come from [`EntityKind`] and [`Relation`], never from
//! request input, so they are safe to format into SQL.

use planboard_core::hierarchy::{EntityKind, Relation};
use planboard_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::hierarchy::RelationLink;

pub struct HierarchyRepo;

impl HierarchyRepo {
    /// Whether a row of `kind` with the given `id` exists.
    pub async fn exists(pool: &SqlitePool, kind: EntityKind, id: DbId) -> Result<bool, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM {} WHERE id = ?", kind.table());
        let count = sqlx::query_scalar::<_, i64>(&query)
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(count > 0)
    }

    /// Make `parent_id` the sole parent of `child_id` in `relation`.
    ///
    /// Any existing link for the child is replaced in the same statement.
    pub async fn assign_parent(
        pool: &SqlitePool,
        relation: Relation,
        parent_id: DbId,
        child_id: DbId,
    ) -> Result<(), sqlx::Error> {
        let query = format!(
            "INSERT INTO {} (parent_id, child_id) VALUES (?, ?)
             ON CONFLICT (child_id) DO UPDATE SET parent_id = excluded.parent_id",
            relation.table()
        );
        sqlx::query(&query)
            .bind(parent_id)
            .bind(child_id)
            .execute(pool)
            .await?;
        tracing::debug!(table = relation.table(), parent_id, child_id, "Parent link assigned");
        Ok(())
    }

    /// The current parent of `child_id` in `relation`, if linked.
    pub async fn parent_of(
        pool: &SqlitePool,
        relation: Relation,
        child_id: DbId,
    ) -> Result<Option<DbId>, sqlx::Error> {
        let query = format!("SELECT parent_id FROM {} WHERE child_id = ?", relation.table());
        sqlx::query_scalar::<_, DbId>(&query)
            .bind(child_id)
            .fetch_optional(pool)
            .await
    }

    /// All links of `relation`, ordered by parent then child.
    pub async fn list_links(
        pool: &SqlitePool,
        relation: Relation,
    ) -> Result<Vec<RelationLink>, sqlx::Error> {
        let query = format!(
            "SELECT parent_id, child_id FROM {} ORDER BY parent_id, child_id",
            relation.table()
        );
        sqlx::query_as::<_, RelationLink>(&query)
            .fetch_all(pool)
            .await
    }
}
