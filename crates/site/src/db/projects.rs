//! Project repository for database operations.
//!
//! Projects are addressable by both ID (admin forms) and slug (public
//! detail pages). The slug carries a unique constraint; violations map to
//! `RepositoryError::Conflict`.

use sqlx::PgPool;

use portfolio_core::ProjectId;

use super::RepositoryError;
use crate::models::{NewProject, Project};

const PROJECT_COLUMNS: &str = "id, slug, title, summary, overview, background, \
                               approach, result, image, featured, created_at";

/// Repository for project database operations.
pub struct ProjectRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProjectRepository<'a> {
    /// Create a new project repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List projects, newest first, excluding the given slugs.
    ///
    /// An empty `exclude` slice returns every project. The exclusion set
    /// serves the hybrid listing where some projects have statically
    /// authored pages.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self, exclude: &[String]) -> Result<Vec<Project>, RepositoryError> {
        let query = format!(
            r"
            SELECT {PROJECT_COLUMNS}
            FROM projects
            WHERE slug <> ALL($1)
            ORDER BY created_at DESC, id DESC
            "
        );
        let projects = sqlx::query_as::<_, Project>(&query)
            .bind(exclude)
            .fetch_all(self.pool)
            .await?;

        Ok(projects)
    }

    /// List featured projects, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_featured(&self) -> Result<Vec<Project>, RepositoryError> {
        let query = format!(
            r"
            SELECT {PROJECT_COLUMNS}
            FROM projects
            WHERE featured
            ORDER BY created_at DESC, id DESC
            "
        );
        let projects = sqlx::query_as::<_, Project>(&query)
            .fetch_all(self.pool)
            .await?;

        Ok(projects)
    }

    /// Get a project by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: ProjectId) -> Result<Option<Project>, RepositoryError> {
        let query = format!("SELECT {PROJECT_COLUMNS} FROM projects WHERE id = $1");
        let project = sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        Ok(project)
    }

    /// Get a project by its public slug.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<Project>, RepositoryError> {
        let query = format!("SELECT {PROJECT_COLUMNS} FROM projects WHERE slug = $1");
        let project = sqlx::query_as::<_, Project>(&query)
            .bind(slug)
            .fetch_optional(self.pool)
            .await?;

        Ok(project)
    }

    /// Create a new project.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the slug already exists.
    /// Returns `RepositoryError::Database` for other failures.
    pub async fn create(&self, new: &NewProject) -> Result<Project, RepositoryError> {
        let query = format!(
            r"
            INSERT INTO projects
                (slug, title, summary, overview, background, approach, result,
                 image, featured)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {PROJECT_COLUMNS}
            "
        );
        let project = sqlx::query_as::<_, Project>(&query)
            .bind(&new.slug)
            .bind(&new.title)
            .bind(&new.summary)
            .bind(&new.overview)
            .bind(&new.background)
            .bind(&new.approach)
            .bind(&new.result)
            .bind(&new.image)
            .bind(new.featured)
            .fetch_one(self.pool)
            .await
            .map_err(map_slug_conflict)?;

        Ok(project)
    }

    /// Update a project in place.
    ///
    /// A `None` image leaves the stored value untouched (`COALESCE`);
    /// `created_at` is never modified.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no row matches the id.
    /// Returns `RepositoryError::Conflict` if the new slug already exists.
    /// Returns `RepositoryError::Database` for other failures.
    pub async fn update(
        &self,
        id: ProjectId,
        new: &NewProject,
    ) -> Result<Project, RepositoryError> {
        let query = format!(
            r"
            UPDATE projects
            SET slug = $2, title = $3, summary = $4, overview = $5,
                background = $6, approach = $7, result = $8,
                image = COALESCE($9, image), featured = $10
            WHERE id = $1
            RETURNING {PROJECT_COLUMNS}
            "
        );
        let project = sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&new.slug)
            .bind(&new.title)
            .bind(&new.summary)
            .bind(&new.overview)
            .bind(&new.background)
            .bind(&new.approach)
            .bind(&new.result)
            .bind(&new.image)
            .bind(new.featured)
            .fetch_optional(self.pool)
            .await
            .map_err(map_slug_conflict)?;

        project.ok_or(RepositoryError::NotFound)
    }

    /// Delete a project permanently.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no row matches the id.
    /// Returns `RepositoryError::Database` for other failures.
    pub async fn delete(&self, id: ProjectId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Flip a project's featured flag, returning the new value.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no row matches the id.
    /// Returns `RepositoryError::Database` for other failures.
    pub async fn toggle_featured(&self, id: ProjectId) -> Result<bool, RepositoryError> {
        let featured = sqlx::query_scalar::<_, bool>(
            r"
            UPDATE projects
            SET featured = NOT featured
            WHERE id = $1
            RETURNING featured
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        featured.ok_or(RepositoryError::NotFound)
    }
}

/// Translate a unique-violation on the slug column into `Conflict`.
fn map_slug_conflict(e: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(ref db_err) = e
        && db_err.is_unique_violation()
    {
        return RepositoryError::Conflict("project slug already exists".to_owned());
    }
    RepositoryError::Database(e)
}
