//! PostgreSQL-backed store. Table `<schema>.customers`, id generated by `BIGSERIAL`.

use super::CustomerStore;
use crate::error::{AppError, ConfigError};
use crate::model::{Customer, NewCustomer};
use crate::sql::{quoted, CustomerQueries};
use async_trait::async_trait;
use sqlx::postgres::PgConnectOptions;
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;

#[derive(Clone)]
pub struct PgCustomerStore {
    pool: PgPool,
    queries: CustomerQueries,
}

impl PgCustomerStore {
    pub fn new(pool: PgPool, schema: &str) -> Self {
        PgCustomerStore {
            pool,
            queries: CustomerQueries::new(schema),
        }
    }
}

#[async_trait]
impl CustomerStore for PgCustomerStore {
    async fn insert(&self, customer: NewCustomer) -> Result<Customer, AppError> {
        let sql = &self.queries.insert;
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, Customer>(sql)
            .bind(customer.name)
            .bind(customer.email)
            .bind(customer.phone)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, AppError> {
        let sql = &self.queries.select_by_id;
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Customer>(sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_all(&self) -> Result<Vec<Customer>, AppError> {
        let sql = &self.queries.select_all;
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Customer>(sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn update(&self, customer: &Customer) -> Result<Option<Customer>, AppError> {
        let sql = &self.queries.update;
        tracing::debug!(sql = %sql, id = customer.id, "query");
        let row = sqlx::query_as::<_, Customer>(sql)
            .bind(customer.id)
            .bind(&customer.name)
            .bind(&customer.email)
            .bind(&customer.phone)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        let sql = &self.queries.delete;
        tracing::debug!(sql = %sql, id, "query");
        let done = sqlx::query(sql).bind(id).execute(&self.pool).await?;
        Ok(done.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}

/// Ensure the database in `database_url` exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin, db_name) = admin_target(database_url)?;
    let Some(db_name) = db_name.filter(|n| n != "postgres") else {
        return Ok(());
    };
    let mut conn: sqlx::PgConnection = admin.connect().await?;
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&db_name)
            .fetch_one(&mut conn)
            .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quoted(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Connect options for the `postgres` maintenance database on the same server,
/// plus the database the URL names (if any).
fn admin_target(database_url: &str) -> Result<(PgConnectOptions, Option<String>), AppError> {
    let opts = PgConnectOptions::from_str(database_url).map_err(|e| ConfigError::Invalid {
        key: "DATABASE_URL",
        reason: e.to_string(),
    })?;
    let db_name = opts
        .get_database()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(String::from);
    Ok((opts.database("postgres"), db_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_target_swaps_database_name() {
        let (admin, name) =
            admin_target("postgres://u:p@db:5432/customers?sslmode=disable").unwrap();
        assert_eq!(admin.get_database(), Some("postgres"));
        assert_eq!(admin.get_host(), "db");
        assert_eq!(admin.get_port(), 5432);
        assert_eq!(admin.get_username(), "u");
        assert_eq!(name.as_deref(), Some("customers"));
    }

    #[test]
    fn host_is_never_taken_for_the_database() {
        let (admin, name) = admin_target("postgres://u@dbhost:5432").unwrap();
        assert_eq!(admin.get_host(), "dbhost");
        assert_ne!(name.as_deref(), Some("dbhost"));
    }

    #[test]
    fn slash_in_query_does_not_move_the_database() {
        let (_, name) =
            admin_target("postgres://u@db/customers?application_name=api/v1").unwrap();
        assert_eq!(name.as_deref(), Some("customers"));
    }

    #[test]
    fn unparseable_url_is_a_config_error() {
        assert!(matches!(
            admin_target("not a url"),
            Err(AppError::Config(ConfigError::Invalid { key: "DATABASE_URL", .. }))
        ));
    }
}
