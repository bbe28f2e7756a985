//! HTTP route handlers for the site.
//!
//! # Route Structure
//!
//! ```text
//! # Public
//! GET  /                       - Home page (featured projects + latest 3 works)
//! GET  /about                  - About page
//! GET  /history                - History page
//! GET  /works                  - Works listing
//! GET  /projects               - Projects listing (minus excluded slugs)
//! GET  /project/{slug}         - Project detail
//! GET  /contact                - Contact form (?sent=1 / ?error=1 flags)
//! POST /contact                - Contact submission
//!
//! # Session
//! GET  /login                  - Login page
//! POST /login                  - Login action
//! GET  /logout                 - Logout action
//!
//! # Admin (requires authenticated session; mutations redirect to /admin)
//! GET  /admin                            - Dashboard
//! POST /admin/work                       - Create work
//! GET  /admin/work/{id}/edit             - Work edit form
//! POST /admin/work/{id}/edit             - Update work
//! POST /admin/work/{id}/delete           - Delete work
//! POST /admin/project                    - Create project
//! GET  /admin/project/{id}/edit          - Project edit form
//! POST /admin/project/{id}/edit          - Update project
//! POST /admin/project/{id}/delete        - Delete project
//! POST /admin/project/{id}/featured      - Toggle featured flag
//! ```

pub mod admin;
pub mod auth;
pub mod contact;
pub mod home;
pub mod pages;
pub mod projects;
pub mod works;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the public routes router.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/about", get(pages::about))
        .route("/history", get(pages::history))
        .route("/works", get(works::index))
        .route("/projects", get(projects::index))
        .route("/project/{slug}", get(projects::show))
        .route("/contact", get(contact::form).post(contact::submit))
}

/// Create the session lifecycle router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", get(auth::logout))
}

/// Create the admin routes router.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin", get(admin::dashboard::index))
        .route("/admin/work", post(admin::works::create))
        .route(
            "/admin/work/{id}/edit",
            get(admin::works::edit_form).post(admin::works::update),
        )
        .route("/admin/work/{id}/delete", post(admin::works::delete))
        .route("/admin/project", post(admin::projects::create))
        .route(
            "/admin/project/{id}/edit",
            get(admin::projects::edit_form).post(admin::projects::update),
        )
        .route("/admin/project/{id}/delete", post(admin::projects::delete))
        .route(
            "/admin/project/{id}/featured",
            post(admin::projects::toggle_featured),
        )
}

/// Create all routes for the site.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(public_routes())
        .merge(auth_routes())
        .merge(admin_routes())
}
