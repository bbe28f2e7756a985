//! Admin work CRUD handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use tracing::instrument;

use portfolio_core::WorkId;

use super::blank_to_none;
use crate::db::WorkRepository;
use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::RequireAdmin;
use crate::models::{NewWork, Work};
use crate::state::AppState;

/// Work create/edit form data. Field names match the admin templates.
#[derive(Debug, Deserialize)]
pub struct WorkForm {
    pub title: String,
    pub desc: String,
    #[serde(default)]
    pub image: String,
}

impl WorkForm {
    fn into_new_work(self) -> NewWork {
        NewWork {
            title: self.title,
            description: self.desc,
            image: blank_to_none(&self.image),
        }
    }
}

/// Work edit form template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/work_edit.html")]
pub struct WorkEditTemplate {
    pub page: &'static str,
    pub work: Work,
}

/// Create a work.
///
/// POST /admin/work
#[instrument(skip(state, form))]
pub async fn create(
    _: RequireAdmin,
    State(state): State<AppState>,
    Form(form): Form<WorkForm>,
) -> Result<impl IntoResponse> {
    WorkRepository::new(state.pool())
        .create(&form.into_new_work())
        .await?;

    Ok(Redirect::to("/admin"))
}

/// Display the edit form for a work.
///
/// GET /admin/work/{id}/edit
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
    let work = WorkRepository::new(state.pool())
        .get(WorkId::new(id))
        .await?
        .ok_or_else(|| AppError::NotFound("Work".to_string()))?;

    Ok(WorkEditTemplate {
        page: "admin",
        work,
    })
}

/// Update a work.
///
/// POST /admin/work/{id}/edit
///
/// A blank image field leaves the stored image untouched. Updating a
/// missing id responds 404.
#[instrument(skip(state, form))]
pub async fn update(
    _: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<WorkForm>,
) -> Result<impl IntoResponse> {
    WorkRepository::new(state.pool())
        .update(WorkId::new(id), &form.into_new_work())
        .await?;

    Ok(Redirect::to("/admin"))
}

/// Delete a work permanently.
///
/// POST /admin/work/{id}/delete
///
/// Deleting a missing id responds 404.
#[instrument(skip(state))]
pub async fn delete(
    _: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    WorkRepository::new(state.pool()).delete(WorkId::new(id)).await?;

    Ok(Redirect::to("/admin"))
}
