//! Work repository for database operations.
//!
//! All queries use the runtime `query_as` API with `FromRow` models and
//! order listings by creation time descending (newest first).

use sqlx::PgPool;

use portfolio_core::WorkId;

use super::RepositoryError;
use crate::models::{NewWork, Work};

/// Repository for work database operations.
pub struct WorkRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> WorkRepository<'a> {
    /// Create a new work repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List works, newest first, optionally capped at `limit` rows.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self, limit: Option<i64>) -> Result<Vec<Work>, RepositoryError> {
        let works = sqlx::query_as::<_, Work>(
            r"
            SELECT id, title, description, image, created_at
            FROM works
            ORDER BY created_at DESC, id DESC
            LIMIT $1
            ",
        )
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(works)
    }

    /// Get a work by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: WorkId) -> Result<Option<Work>, RepositoryError> {
        let work = sqlx::query_as::<_, Work>(
            r"
            SELECT id, title, description, image, created_at
            FROM works
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(work)
    }

    /// Create a new work.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, new: &NewWork) -> Result<Work, RepositoryError> {
        let work = sqlx::query_as::<_, Work>(
            r"
            INSERT INTO works (title, description, image)
            VALUES ($1, $2, $3)
            RETURNING id, title, description, image, created_at
            ",
        )
        .bind(&new.title)
        .bind(&new.description)
        .bind(&new.image)
        .fetch_one(self.pool)
        .await?;

        Ok(work)
    }

    /// Update a work in place.
    ///
    /// A `None` image leaves the stored value untouched (`COALESCE`);
    /// `created_at` is never modified.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no row matches the id.
    /// Returns `RepositoryError::Database` for other failures.
    pub async fn update(&self, id: WorkId, new: &NewWork) -> Result<Work, RepositoryError> {
        let work = sqlx::query_as::<_, Work>(
            r"
            UPDATE works
            SET title = $2, description = $3, image = COALESCE($4, image)
            WHERE id = $1
            RETURNING id, title, description, image, created_at
            ",
        )
        .bind(id)
        .bind(&new.title)
        .bind(&new.description)
        .bind(&new.image)
        .fetch_optional(self.pool)
        .await?;

        work.ok_or(RepositoryError::NotFound)
    }

    /// Delete a work permanently.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no row matches the id.
    /// Returns `RepositoryError::Database` for other failures.
    pub async fn delete(&self, id: WorkId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM works WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
