//! Admin dashboard.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::db::{ProjectRepository, WorkRepository};
use crate::error::Result;
use crate::filters;
use crate::middleware::RequireAdmin;
use crate::models::{Project, Work};
use crate::state::AppState;

/// Dashboard template listing all content.
#[derive(Template, WebTemplate)]
#[template(path = "admin/dashboard.html")]
pub struct DashboardTemplate {
    pub page: &'static str,
    pub works: Vec<Work>,
    pub projects: Vec<Project>,
}

/// Display the dashboard.
///
/// GET /admin
#[instrument(skip(state))]
pub async fn index(_: RequireAdmin, State(state): State<AppState>) -> Result<impl IntoResponse> {
    let works = WorkRepository::new(state.pool()).list(None).await?;
    let projects = ProjectRepository::new(state.pool()).list(&[]).await?;

    Ok(DashboardTemplate {
        page: "admin",
        works,
        projects,
    })
}
