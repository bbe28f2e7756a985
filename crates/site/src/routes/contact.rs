//! Contact form route handlers.
//!
//! Accepted submissions are relayed as two emails via the mailer; the
//! outcome is reported back through `?sent=1` / `?error=1` query flags so
//! a reload never resubmits the form.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use tracing::instrument;

use crate::filters;
use crate::services::mail::ContactMessage;
use crate::state::AppState;

/// Contact form data.
#[derive(Debug, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

/// Outcome flags carried in the query string.
#[derive(Debug, Deserialize)]
pub struct ContactParams {
    pub sent: Option<String>,
    pub error: Option<String>,
}

/// Contact page template.
#[derive(Template, WebTemplate)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub page: &'static str,
    pub sent: bool,
    pub error: bool,
}

/// Display the contact form.
///
/// GET /contact
#[instrument]
pub async fn form(Query(params): Query<ContactParams>) -> impl IntoResponse {
    ContactTemplate {
        page: "contact",
        sent: params.sent.as_deref() == Some("1"),
        error: params.error.as_deref() == Some("1"),
    }
}

/// Handle a contact submission.
///
/// POST /contact
///
/// Validation failure sends nothing and redirects with the error flag.
/// Relay failure is logged and reported the same way; partial sends are
/// not distinguished.
#[instrument(skip(state, form), fields(email = %form.email))]
pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<ContactForm>,
) -> impl IntoResponse {
    let contact =
        match ContactMessage::parse(&form.name, &form.email, &form.subject, &form.message) {
            Ok(contact) => contact,
            Err(e) => {
                tracing::debug!(error = %e, "Contact submission rejected");
                return Redirect::to("/contact?error=1");
            }
        };

    match state.mailer().send_contact(&contact).await {
        Ok(()) => Redirect::to("/contact?sent=1"),
        Err(e) => {
            tracing::error!(error = %e, "Failed to relay contact submission");
            Redirect::to("/contact?error=1")
        }
    }
}
