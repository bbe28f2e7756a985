//! Admin project CRUD and featured-toggle handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use tracing::instrument;

use portfolio_core::ProjectId;

use super::blank_to_none;
use crate::db::ProjectRepository;
use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::RequireAdmin;
use crate::models::{NewProject, Project};
use crate::state::AppState;

/// Project create/edit form data. Field names match the admin templates;
/// `featured` follows checkbox semantics (present as "on" when checked).
#[derive(Debug, Deserialize)]
pub struct ProjectForm {
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub overview: String,
    pub background: String,
    pub approach: String,
    pub result: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub featured: Option<String>,
}

impl ProjectForm {
    fn into_new_project(self) -> NewProject {
        NewProject {
            slug: self.slug,
            title: self.title,
            summary: self.summary,
            overview: self.overview,
            background: self.background,
            approach: self.approach,
            result: self.result,
            image: blank_to_none(&self.image),
            featured: self.featured.as_deref() == Some("on"),
        }
    }
}

/// Project edit form template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/project_edit.html")]
pub struct ProjectEditTemplate {
    pub page: &'static str,
    pub project: Project,
}

/// Create a project.
///
/// POST /admin/project
#[instrument(skip(state, form))]
pub async fn create(
    _: RequireAdmin,
    State(state): State<AppState>,
    Form(form): Form<ProjectForm>,
) -> Result<impl IntoResponse> {
    ProjectRepository::new(state.pool())
        .create(&form.into_new_project())
        .await?;

    Ok(Redirect::to("/admin"))
}

/// Display the edit form for a project.
///
/// GET /admin/project/{id}/edit
///
/// # Errors
///
/// Returns a plain-text 404 if the id does not exist.
#[instrument(skip(state))]
pub async fn edit_form(
    _: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let project = ProjectRepository::new(state.pool())
        .get(ProjectId::new(id))
        .await?
        .ok_or_else(|| AppError::NotFound("Project".to_string()))?;

    Ok(ProjectEditTemplate {
        page: "admin",
        project,
    })
}

/// Update a project.
///
/// POST /admin/project/{id}/edit
///
/// A blank image field leaves the stored image untouched. Updating a
/// missing id responds 404.
#[instrument(skip(state, form))]
pub async fn update(
    _: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<ProjectForm>,
) -> Result<impl IntoResponse> {
    ProjectRepository::new(state.pool())
        .update(ProjectId::new(id), &form.into_new_project())
        .await?;

    Ok(Redirect::to("/admin"))
}

/// Delete a project permanently.
///
/// POST /admin/project/{id}/delete
///
/// Deleting a missing id responds 404.
#[instrument(skip(state))]
pub async fn delete(
    _: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    ProjectRepository::new(state.pool())
        .delete(ProjectId::new(id))
        .await?;

    Ok(Redirect::to("/admin"))
}

/// Flip a project's featured flag.
///
/// POST /admin/project/{id}/featured
#[instrument(skip(state))]
pub async fn toggle_featured(
    _: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let featured = ProjectRepository::new(state.pool())
        .toggle_featured(ProjectId::new(id))
        .await?;

    tracing::info!(project_id = id, featured, "Featured flag toggled");
    Ok(Redirect::to("/admin"))
}
