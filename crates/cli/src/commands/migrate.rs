//! Database migration command.
//!
//! Runs the site's SQL migrations and creates the session table used by
//! the cookie session store. Migrations are not run on server startup,
//! so this command must be run before the first deploy and after every
//! schema change.

use tower_sessions_sqlx_store::PostgresStore;

use super::{CommandError, connect};

/// Run site database migrations, including the session table.
pub async fn run() -> Result<(), CommandError> {
    let pool = connect().await?;

    tracing::info!("Running site migrations...");
    sqlx::migrate!("../site/migrations").run(&pool).await?;

    tracing::info!("Creating session table...");
    PostgresStore::new(pool).migrate().await?;

    tracing::info!("Migrations complete!");
    Ok(())
}
