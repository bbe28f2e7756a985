//! Work entity: a single portfolio piece.

use chrono::{DateTime, Utc};
use serde::Serialize;

use portfolio_core::WorkId;

/// A portfolio work entry.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Work {
    /// Stable identity, assigned by the database.
    pub id: WorkId,
    /// Display title.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Optional image path or URL, manually entered in the admin form.
    pub image: Option<String>,
    /// Creation timestamp; immutable, orders all listings descending.
    pub created_at: DateTime<Utc>,
}

/// Field set accepted by create and update operations.
///
/// `image: None` means "no value provided": on create the column stays
/// NULL, on update the stored value is left untouched.
#[derive(Debug, Clone)]
pub struct NewWork {
    pub title: String,
    pub description: String,
    pub image: Option<String>,
}
