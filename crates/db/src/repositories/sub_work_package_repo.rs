//! Repository for the `tb_subWP` table.

use sqlx::SqlitePool;

use crate::models::sub_work_package::{CreateSubWorkPackage, SubWorkPackage};

pub struct SubWorkPackageRepo;

impl SubWorkPackageRepo {
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateSubWorkPackage,
    ) -> Result<SubWorkPackage, sqlx::Error> {
        sqlx::query_as::<_, SubWorkPackage>(
            "INSERT INTO tb_subWP (name) VALUES (?) RETURNING id, name",
        )
        .bind(&input.name)
        .fetch_one(pool)
        .await
    }

    pub async fn list(pool: &SqlitePool) -> Result<Vec<SubWorkPackage>, sqlx::Error> {
        sqlx::query_as::<_, SubWorkPackage>("SELECT id, name FROM tb_subWP ORDER BY id")
            .fetch_all(pool)
            .await
    }
}
