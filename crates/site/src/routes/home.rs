//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::db::{ProjectRepository, WorkRepository};
use crate::error::Result;
use crate::filters;
use crate::models::{Project, Work};
use crate::state::AppState;

/// Number of latest works shown on the home page.
const LATEST_WORKS_COUNT: i64 = 3;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// Active navigation section.
    pub page: &'static str,
    /// Featured projects, newest first.
    pub projects: Vec<Project>,
    /// Latest works, capped at three.
    pub works: Vec<Work>,
}

/// Display the home page.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let projects = ProjectRepository::new(state.pool()).list_featured().await?;
    let works = WorkRepository::new(state.pool())
        .list(Some(LATEST_WORKS_COUNT))
        .await?;

    Ok(HomeTemplate {
        page: "home",
        projects,
        works,
    })
}
