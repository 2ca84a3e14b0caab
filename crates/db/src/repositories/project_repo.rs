//! Repository for the `tb_Project` table.

use sqlx::SqlitePool;

use crate::models::project::{CreateProject, Project};

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        sqlx::query_as::<_, Project>("INSERT INTO tb_Project (name) VALUES (?) RETURNING id, name")
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// List all projects in insertion order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Project>, sqlx::Error> {
        sqlx::query_as::<_, Project>("SELECT id, name FROM tb_Project ORDER BY id")
            .fetch_all(pool)
            .await
    }
}
