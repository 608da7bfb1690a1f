use sqlx::PgPool;
use tracing::{debug, info};

use crate::db::errors::{DatabaseError, Result};
use crate::domain::validate::NewSignup;
use crate::models::rows::SignupRow;

/// Inserts a signup and returns the stored row. `signed_up` is written as
/// TRUE unconditionally, and the legacy icon columns are left untouched:
/// icons are derived at format time, never persisted.
#[tracing::instrument(skip(pool, new), fields(title = %new.title, singer = %new.singer))]
pub async fn insert_signup(pool: &PgPool, new: &NewSignup) -> Result<SignupRow> {
    debug!("Inserting signup");

    let row = sqlx::query_as::<_, SignupRow>(
        r#"
        INSERT INTO bhajan_signups
            (id, created_at, title, position, singer, details,
             signed_up, tempo, diety, offering_on, offering_status)
        VALUES
            (gen_random_uuid()::text, NOW(), $1, $2, $3, $4,
             TRUE, $5, $6, $7, $8)
        RETURNING
            id, created_at, title, position, singer, details,
            signed_up, tempo, diety, offering_on, offering_status
        "#,
    )
    .bind(&new.title)
    .bind(new.position)
    .bind(&new.singer)
    .bind(&new.details)
    .bind(new.tempo.as_str())
    .bind(new.deity.as_str())
    .bind(new.offering_on)
    .bind(new.offering_status.as_str())
    .fetch_one(pool)
    .await
    .map_err(DatabaseError::from_sqlx)?;

    info!(id = %row.id, "Inserted signup");
    Ok(row)
}
