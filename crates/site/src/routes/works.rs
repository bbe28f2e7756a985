//! Works listing route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::db::WorkRepository;
use crate::error::Result;
use crate::filters;
use crate::models::Work;
use crate::state::AppState;

/// Works listing template.
#[derive(Template, WebTemplate)]
#[template(path = "works.html")]
pub struct WorksTemplate {
    pub page: &'static str,
    /// All works, newest first.
    pub works: Vec<Work>,
}

/// Display the works listing.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let works = WorkRepository::new(state.pool()).list(None).await?;

    Ok(WorksTemplate {
        page: "works",
        works,
    })
}
