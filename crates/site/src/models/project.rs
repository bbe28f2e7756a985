//! Project entity: a portfolio entry with narrative sections and a
//! slug-addressable public page.

use chrono::{DateTime, Utc};
use serde::Serialize;

use portfolio_core::ProjectId;

/// A portfolio project entry.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Project {
    /// Stable identity, assigned by the database.
    pub id: ProjectId,
    /// Public URL key for `/project/{slug}`; unique.
    pub slug: String,
    /// Display title.
    pub title: String,
    /// Short summary shown in listings.
    pub summary: String,
    /// Narrative sections shown on the detail page.
    pub overview: String,
    pub background: String,
    pub approach: String,
    pub result: String,
    /// Optional image path or URL, manually entered in the admin form.
    pub image: Option<String>,
    /// Highlighted on the home page when set.
    pub featured: bool,
    /// Creation timestamp; immutable, orders all listings descending.
    pub created_at: DateTime<Utc>,
}

/// Field set accepted by create and update operations.
///
/// `image: None` means "no value provided": on create the column stays
/// NULL, on update the stored value is left untouched.
#[derive(Debug, Clone)]
pub struct NewProject {
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub overview: String,
    pub background: String,
    pub approach: String,
    pub result: String,
    pub image: Option<String>,
    pub featured: bool,
}
