//! Repository for the `tb_WP` table.

use planboard_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::work_package::{CreateWorkPackage, ModelPlacement, WorkPackage};

/// Column list shared across queries. `"3d_model"` is not a valid bare
/// identifier, so it is quoted and aliased.
const COLUMNS: &str =
    r#"id, name, "3d_model" AS model_path, pos_x, pos_y, pos_z, rot_u, rot_v, rot_w"#;

/// Provides CRUD operations for work packages and their 3D placement.
pub struct WorkPackageRepo;

impl WorkPackageRepo {
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateWorkPackage,
    ) -> Result<WorkPackage, sqlx::Error> {
        let query =
            format!(r#"INSERT INTO tb_WP (name, "3d_model") VALUES (?, ?) RETURNING {COLUMNS}"#);
        sqlx::query_as::<_, WorkPackage>(&query)
            .bind(&input.name)
            .bind(&input.model_path)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<WorkPackage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tb_WP WHERE id = ?");
        sqlx::query_as::<_, WorkPackage>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &SqlitePool) -> Result<Vec<WorkPackage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tb_WP ORDER BY id");
        sqlx::query_as::<_, WorkPackage>(&query)
            .fetch_all(pool)
            .await
    }

    /// Overwrite all six placement columns of a work package.
    ///
    /// Returns `false` if no row with the given `id` exists.
    pub async fn save_placement(
        pool: &SqlitePool,
        id: DbId,
        placement: &ModelPlacement,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE tb_WP SET
                pos_x = ?, pos_y = ?, pos_z = ?,
                rot_u = ?, rot_v = ?, rot_w = ?
             WHERE id = ?",
        )
        .bind(placement.x)
        .bind(placement.y)
        .bind(placement.z)
        .bind(placement.u)
        .bind(placement.v)
        .bind(placement.w)
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
