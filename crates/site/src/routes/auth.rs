//! Session lifecycle route handlers.
//!
//! Login compares submitted credentials against the configured operator
//! account; failure re-renders the form with a localized error message
//! instead of redirecting.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::middleware::{authenticate, log_in, log_out};
use crate::state::AppState;

/// Login error shown when credentials do not match.
const LOGIN_ERROR: &str = "ユーザー名またはパスワードが違います";

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub error: Option<&'static str>,
}

/// Render the login page.
///
/// GET /login
#[instrument]
pub async fn login_page() -> impl IntoResponse {
    LoginTemplate { error: None }
}

/// Handle a login attempt.
///
/// POST /login
///
/// Success marks the session authenticated and redirects to the
/// dashboard; failure re-renders the form. No lockout or rate limiting.
#[instrument(skip(state, session, form), fields(username = %form.username))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    axum::Form(form): axum::Form<LoginForm>,
) -> Result<Response> {
    if authenticate(&state.config().admin, &form.username, &form.password) {
        log_in(&session).await?;
        return Ok(Redirect::to("/admin").into_response());
    }

    tracing::debug!("Login attempt rejected");
    Ok(LoginTemplate {
        error: Some(LOGIN_ERROR),
    }
    .into_response())
}

/// Destroy the session and return to the login page.
///
/// GET /logout
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Result<impl IntoResponse> {
    log_out(&session).await?;
    Ok(Redirect::to("/login"))
}
