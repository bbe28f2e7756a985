//! Integration tests for the portfolio site.
//!
//! # Running Tests
//!
//! ```bash
//! # Start PostgreSQL, then run migrations
//! cargo run -p portfolio-cli -- migrate
//!
//! # Start the site
//! cargo run -p portfolio-site
//!
//! # Run integration tests (ignored by default)
//! cargo test -p portfolio-integration-tests -- --ignored
//! ```
//!
//! Tests target a running server at `SITE_BASE_URL_TEST` (default
//! `http://localhost:3000`) and authenticate with `ADMIN_USERNAME` /
//! `ADMIN_PASSWORD` from the environment.

#![cfg_attr(not(test), forbid(unsafe_code))]

use reqwest::{Client, StatusCode, redirect};

/// Base URL for the site under test (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    dotenvy::dotenv().ok();
    std::env::var("SITE_BASE_URL_TEST").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// A cookie-holding client that does not follow redirects.
///
/// Redirect targets are part of what the tests assert, so following
/// them automatically would hide the behavior under test.
#[must_use]
pub fn client() -> Client {
    Client::builder()
        .cookie_store(true)
        .redirect(redirect::Policy::none())
        .build()
        .expect("Failed to create HTTP client")
}

/// Log the client in as the configured admin, asserting success.
///
/// # Panics
///
/// Panics if the credentials are missing from the environment or the
/// server rejects them.
pub async fn login(client: &Client) {
    dotenvy::dotenv().ok();
    let username = std::env::var("ADMIN_USERNAME").expect("ADMIN_USERNAME not set");
    let password = std::env::var("ADMIN_PASSWORD").expect("ADMIN_PASSWORD not set");

    let resp = client
        .post(format!("{}/login", base_url()))
        .form(&[("username", username.as_str()), ("password", password.as_str())])
        .send()
        .await
        .expect("Failed to post login form");

    assert_eq!(resp.status(), StatusCode::SEE_OTHER, "login should succeed");
    assert_eq!(location(&resp), "/admin");
}

/// Connect to the site database for direct verification of writes.
///
/// # Panics
///
/// Panics if no database URL is configured or the connection fails.
pub async fn pool() -> sqlx::PgPool {
    dotenvy::dotenv().ok();
    let database_url = std::env::var("SITE_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .expect("SITE_DATABASE_URL not set");
    sqlx::PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to site database")
}

/// Extract the `Location` header from a redirect response.
#[must_use]
pub fn location(resp: &reqwest::Response) -> &str {
    resp.headers()
        .get(reqwest::header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}
