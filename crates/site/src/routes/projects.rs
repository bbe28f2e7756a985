//! Projects listing and detail route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use tracing::instrument;

use crate::db::ProjectRepository;
use crate::error::{AppError, Result};
use crate::filters;
use crate::models::Project;
use crate::state::AppState;

/// Projects listing template.
#[derive(Template, WebTemplate)]
#[template(path = "projects.html")]
pub struct ProjectsTemplate {
    pub page: &'static str,
    /// Projects, newest first, minus the configured excluded slugs.
    pub projects: Vec<Project>,
}

/// Project detail template.
#[derive(Template, WebTemplate)]
#[template(path = "project.html")]
pub struct ProjectTemplate {
    pub page: &'static str,
    pub project: Project,
}

/// Display the projects listing.
///
/// Slugs listed in `EXCLUDED_PROJECT_SLUGS` are hidden here because they
/// have statically authored pages of their own.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let projects = ProjectRepository::new(state.pool())
        .list(&state.config().excluded_project_slugs)
        .await?;

    Ok(ProjectsTemplate {
        page: "projects",
        projects,
    })
}

/// Display a single project by slug.
///
/// # Errors
///
/// Returns a plain-text 404 if no project has the slug.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse> {
    let project = ProjectRepository::new(state.pool())
        .get_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound("Project".to_string()))?;

    Ok(ProjectTemplate {
        page: "projects",
        project,
    })
}
