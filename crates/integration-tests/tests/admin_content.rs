//! Integration tests for the admin dashboard content management.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The site running (cargo run -p portfolio-site)
//! - `ADMIN_USERNAME` / `ADMIN_PASSWORD` in the environment
//!
//! Run with: cargo test -p portfolio-integration-tests -- --ignored

use portfolio_integration_tests::{base_url, client, location, login, pool};
use reqwest::{Client, StatusCode};

/// Look up a work id by exact title, straight from the database.
async fn work_id_by_title(pool: &sqlx::PgPool, title: &str) -> Option<i32> {
    sqlx::query_scalar("SELECT id FROM works WHERE title = $1")
        .bind(title)
        .fetch_optional(pool)
        .await
        .expect("Failed to query works")
}

async fn project_id_by_slug(pool: &sqlx::PgPool, slug: &str) -> Option<i32> {
    sqlx::query_scalar("SELECT id FROM projects WHERE slug = $1")
        .bind(slug)
        .fetch_optional(pool)
        .await
        .expect("Failed to query projects")
}

async fn delete_work(client: &Client, id: i32) {
    let resp = client
        .post(format!("{}/admin/work/{id}/delete", base_url()))
        .send()
        .await
        .expect("Failed to delete work");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
}

async fn delete_project(client: &Client, id: i32) {
    let resp = client
        .post(format!("{}/admin/project/{id}/delete", base_url()))
        .send()
        .await
        .expect("Failed to delete project");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
#[ignore = "Requires running site server and PostgreSQL"]
async fn test_work_create_update_delete() {
    let client = client();
    let pool = pool().await;
    login(&client).await;

    let title = "integration-test-work";

    // Create with an image
    let resp = client
        .post(format!("{}/admin/work", base_url()))
        .form(&[
            ("title", title),
            ("desc", "created by integration test"),
            ("image", "/static/img/test.png"),
        ])
        .send()
        .await
        .expect("Failed to create work");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/admin");

    let id = work_id_by_title(&pool, title)
        .await
        .expect("created work should exist");

    // Update with a blank image: text changes, image stays
    let resp = client
        .post(format!("{}/admin/work/{id}/edit", base_url()))
        .form(&[("title", title), ("desc", "updated description"), ("image", "")])
        .send()
        .await
        .expect("Failed to update work");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let (description, image): (String, Option<String>) =
        sqlx::query_as("SELECT description, image FROM works WHERE id = $1")
            .bind(id)
            .fetch_one(&pool)
            .await
            .expect("Failed to fetch updated work");
    assert_eq!(description, "updated description");
    assert_eq!(image.as_deref(), Some("/static/img/test.png"));

    // Delete, then verify the row is gone
    delete_work(&client, id).await;
    assert!(work_id_by_title(&pool, title).await.is_none());
}

#[tokio::test]
#[ignore = "Requires running site server and PostgreSQL"]
async fn test_work_edit_missing_id_returns_404() {
    let client = client();
    login(&client).await;

    let resp = client
        .get(format!("{}/admin/work/999999/edit", base_url()))
        .send()
        .await
        .expect("Failed to fetch edit form");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = resp.text().await.expect("Failed to read response");
    assert!(body.contains("Work not found"));
}

#[tokio::test]
#[ignore = "Requires running site server and PostgreSQL"]
async fn test_project_create_toggle_featured_delete() {
    let client = client();
    let pool = pool().await;
    login(&client).await;

    let slug = "integration-test-project";

    // Create without the featured checkbox
    let resp = client
        .post(format!("{}/admin/project", base_url()))
        .form(&[
            ("slug", slug),
            ("title", "Integration Test Project"),
            ("summary", "summary"),
            ("overview", "overview"),
            ("background", "background"),
            ("approach", "approach"),
            ("result", "result"),
            ("image", ""),
        ])
        .send()
        .await
        .expect("Failed to create project");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let id = project_id_by_slug(&pool, slug)
        .await
        .expect("created project should exist");

    let featured: bool = sqlx::query_scalar("SELECT featured FROM projects WHERE id = $1")
        .bind(id)
        .fetch_one(&pool)
        .await
        .expect("Failed to fetch featured flag");
    assert!(!featured, "new project should not be featured");

    // Toggle on, then the detail page is reachable by slug
    let resp = client
        .post(format!("{}/admin/project/{id}/featured", base_url()))
        .send()
        .await
        .expect("Failed to toggle featured");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let featured: bool = sqlx::query_scalar("SELECT featured FROM projects WHERE id = $1")
        .bind(id)
        .fetch_one(&pool)
        .await
        .expect("Failed to fetch featured flag");
    assert!(featured, "toggle should set the featured flag");

    let resp = client
        .get(format!("{}/project/{slug}", base_url()))
        .send()
        .await
        .expect("Failed to fetch project page");
    assert_eq!(resp.status(), StatusCode::OK);

    // Delete, then the public page 404s
    delete_project(&client, id).await;
    let resp = client
        .get(format!("{}/project/{slug}", base_url()))
        .send()
        .await
        .expect("Failed to fetch project page");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "Requires running site server and PostgreSQL"]
async fn test_listings_order_newest_first() {
    let client = client();
    let pool = pool().await;
    login(&client).await;

    // Two works created back to back; the newer must appear first
    for title in ["integration-order-first", "integration-order-second"] {
        let resp = client
            .post(format!("{}/admin/work", base_url()))
            .form(&[("title", title), ("desc", "ordering probe"), ("image", "")])
            .send()
            .await
            .expect("Failed to create work");
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    }

    let body = client
        .get(format!("{}/works", base_url()))
        .send()
        .await
        .expect("Failed to fetch works listing")
        .text()
        .await
        .expect("Failed to read response");

    let first = body
        .find("integration-order-first")
        .expect("first probe work missing from listing");
    let second = body
        .find("integration-order-second")
        .expect("second probe work missing from listing");
    assert!(second < first, "newer work should be listed before older");

    for title in ["integration-order-first", "integration-order-second"] {
        let id = work_id_by_title(&pool, title)
            .await
            .expect("probe work should exist");
        delete_work(&client, id).await;
    }
}

#[tokio::test]
#[ignore = "Requires running site server and PostgreSQL"]
async fn test_logout_revokes_access() {
    let client = client();
    let base_url = base_url();
    login(&client).await;

    let resp = client
        .get(format!("{base_url}/admin"))
        .send()
        .await
        .expect("Failed to fetch dashboard");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .get(format!("{base_url}/logout"))
        .send()
        .await
        .expect("Failed to log out");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/login");

    let resp = client
        .get(format!("{base_url}/admin"))
        .send()
        .await
        .expect("Failed to fetch dashboard");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/login");
}
