//! Authentication middleware and session gate.
//!
//! The admin area is guarded by a single session flag set after a
//! credential check against the configured operator account. Credentials
//! are compared as plain configured strings; the comparison is isolated
//! here so a future hashed-credential upgrade only touches this module.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use secrecy::ExposeSecret;
use tower_sessions::Session;

use crate::config::AdminConfig;

/// Session keys for authentication state.
pub mod session_keys {
    /// Key for the logged-in flag.
    pub const LOGGED_IN: &str = "logged_in";
}

/// Extractor that requires admin authentication.
///
/// If the session's logged-in flag is unset, responds with a redirect to
/// the login page and the handler never runs.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(_: RequireAdmin) -> impl IntoResponse {
///     "admin only"
/// }
/// ```
pub struct RequireAdmin;

/// Error returned when admin authentication is required but missing.
pub enum AdminAuthRejection {
    /// Redirect to the login page.
    RedirectToLogin,
    /// No session layer present (server misconfiguration).
    Unauthorized,
}

impl IntoResponse for AdminAuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => Redirect::to("/login").into_response(),
            Self::Unauthorized => StatusCode::UNAUTHORIZED.into_response(),
        }
    }
}

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AdminAuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Get the session from extensions (set by SessionManagerLayer)
        let session = parts
            .extensions
            .get::<Session>()
            .ok_or(AdminAuthRejection::Unauthorized)?;

        let logged_in = session
            .get::<bool>(session_keys::LOGGED_IN)
            .await
            .ok()
            .flatten()
            .unwrap_or(false);

        if logged_in {
            Ok(Self)
        } else {
            Err(AdminAuthRejection::RedirectToLogin)
        }
    }
}

/// Check submitted credentials against the configured operator account.
///
/// Exact string equality of both username and password; true only when
/// both match.
#[must_use]
pub fn authenticate(config: &AdminConfig, username: &str, password: &str) -> bool {
    username == config.username && password == config.password.expose_secret()
}

/// Mark the session as authenticated.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn log_in(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::LOGGED_IN, true).await
}

/// Destroy the session, returning it to the anonymous state.
///
/// # Errors
///
/// Returns an error if the session store cannot delete the record.
pub async fn log_out(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.flush().await
}
