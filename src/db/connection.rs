use std::time::{Duration, Instant};

use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::Row;
use tracing::info;

use crate::db::errors::{DatabaseError, Result};

/// Creates the process-wide connection pool. Kept small: each request runs
/// a handful of short queries and the hosted datastore does its own pooling.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Creating database connection pool");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(3))
        .connect(database_url)
        .await
        .map_err(|e| DatabaseError::ConnectionError(format!("Failed to create pool: {}", e)))?;

    info!("Database connection pool created");
    Ok(pool)
}

/// Connectivity probe for /api/test-connection: one round trip, reporting
/// the server version and how long the trip took.
pub async fn probe_connection(pool: &PgPool) -> Result<(String, u128)> {
    let started = Instant::now();

    let row = sqlx::query("SELECT version() AS version")
        .fetch_one(pool)
        .await
        .map_err(DatabaseError::from_sqlx)?;

    let version: String = row.get("version");
    Ok((version, started.elapsed().as_millis()))
}
