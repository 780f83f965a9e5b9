//! Bootstrap DDL: schema and customers table. Idempotent; no versioned migrations.

use crate::error::AppError;
use crate::sql::{quoted, CustomerQueries};
use sqlx::PgPool;

/// CREATE SCHEMA and CREATE TABLE, both IF NOT EXISTS.
pub async fn apply_migrations(pool: &PgPool, schema: &str) -> Result<(), AppError> {
    sqlx::query(&format!("CREATE SCHEMA IF NOT EXISTS {}", quoted(schema)))
        .execute(pool)
        .await?;
    let ddl = CustomerQueries::new(schema).create_table();
    tracing::debug!(sql = %ddl, "migration");
    sqlx::query(&ddl).execute(pool).await?;
    Ok(())
}
