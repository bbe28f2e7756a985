//! Integration tests for the public pages.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The site running (cargo run -p portfolio-site)
//!
//! Run with: cargo test -p portfolio-integration-tests -- --ignored

use portfolio_integration_tests::{base_url, client};
use reqwest::StatusCode;

#[tokio::test]
#[ignore = "Requires running site server and PostgreSQL"]
async fn test_static_pages_render() {
    let client = client();
    let base_url = base_url();

    for path in ["/", "/about", "/history", "/works", "/projects", "/contact"] {
        let resp = client
            .get(format!("{base_url}{path}"))
            .send()
            .await
            .expect("Failed to fetch page");
        assert_eq!(resp.status(), StatusCode::OK, "path: {path}");
    }
}

#[tokio::test]
#[ignore = "Requires running site server and PostgreSQL"]
async fn test_home_shows_at_most_three_works() {
    let client = client();

    let resp = client
        .get(format!("{}/", base_url()))
        .send()
        .await
        .expect("Failed to fetch home");
    assert_eq!(resp.status(), StatusCode::OK);

    let body = resp.text().await.expect("Failed to read response");
    let works_section = body
        .split("class=\"latest-works\"")
        .nth(1)
        .expect("home should have a latest-works section");
    let cards = works_section.matches("<li class=\"card\">").count();
    assert!(cards <= 3, "home shows {cards} works, expected at most 3");
}

#[tokio::test]
#[ignore = "Requires running site server and PostgreSQL"]
async fn test_unknown_project_slug_returns_404() {
    let client = client();

    let resp = client
        .get(format!("{}/project/no-such-slug", base_url()))
        .send()
        .await
        .expect("Failed to fetch project page");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = resp.text().await.expect("Failed to read response");
    assert!(body.contains("Project not found"));
}

#[tokio::test]
#[ignore = "Requires running site server and PostgreSQL"]
async fn test_excluded_slugs_are_hidden_from_listing_but_still_served() {
    // Only meaningful when EXCLUDED_PROJECT_SLUGS is set and the seed
    // data is loaded (portfolio-cli seed)
    let excluded = std::env::var("EXCLUDED_PROJECT_SLUGS").unwrap_or_default();
    let slugs: Vec<&str> = excluded
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    if slugs.is_empty() {
        return;
    }

    let client = client();
    let base_url = base_url();

    let listing = client
        .get(format!("{base_url}/projects"))
        .send()
        .await
        .expect("Failed to fetch projects listing")
        .text()
        .await
        .expect("Failed to read response");

    for slug in slugs {
        assert!(
            !listing.contains(&format!("/project/{slug}\"")),
            "excluded slug {slug} appears in the listing"
        );

        let resp = client
            .get(format!("{base_url}/project/{slug}"))
            .send()
            .await
            .expect("Failed to fetch excluded project");
        assert_eq!(
            resp.status(),
            StatusCode::OK,
            "excluded slug {slug} should still resolve"
        );
    }
}
