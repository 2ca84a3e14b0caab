//! Repository for the `tb_item` table.

use planboard_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::item::{CreateItem, Item, UpdateItem};

const COLUMNS: &str = "id, name, image_url, property";

/// Provides CRUD operations for items.
pub struct ItemRepo;

impl ItemRepo {
    /// Insert a new item, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateItem) -> Result<Item, sqlx::Error> {
        let query = format!(
            "INSERT INTO tb_item (name, image_url, property) VALUES (?, ?, ?) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(&input.name)
            .bind(&input.image_url)
            .bind(&input.property)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Item>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tb_item WHERE id = ?");
        sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// The stored image URL of an item, if the item exists.
    pub async fn find_image_url(pool: &SqlitePool, id: DbId) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>("SELECT image_url FROM tb_item WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all items in insertion order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Item>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tb_item ORDER BY id");
        sqlx::query_as::<_, Item>(&query).fetch_all(pool).await
    }

    /// Overwrite the name, image URL and property of an item.
    ///
    /// Returns `false` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateItem,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE tb_item SET
                name = ?,
                image_url = ?,
                property = ?
             WHERE id = ?",
        )
        .bind(&input.name)
        .bind(&input.image_url)
        .bind(&input.property)
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete an item by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tb_item WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
