//! Builds parameterized INSERT, SELECT, UPDATE, DELETE for the customers table.

/// Table holding customer rows inside the configured schema.
pub const CUSTOMERS_TABLE: &str = "customers";

const COLUMNS: &str = "\"id\", \"name\", \"email\", \"phone\"";

/// Quote identifier for PostgreSQL (safe: only from config).
pub fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Full qualified table name.
pub fn qualified_table(schema: &str, table: &str) -> String {
    format!("{}.{}", quoted(schema), quoted(table))
}

/// Statements for one customers table, built once per store.
#[derive(Clone, Debug)]
pub struct CustomerQueries {
    pub table: String,
    pub insert: String,
    pub select_by_id: String,
    pub select_all: String,
    pub update: String,
    pub delete: String,
}

impl CustomerQueries {
    pub fn new(schema: &str) -> Self {
        let table = qualified_table(schema, CUSTOMERS_TABLE);
        CustomerQueries {
            insert: format!(
                "INSERT INTO {} (\"name\", \"email\", \"phone\") VALUES ($1, $2, $3) RETURNING {}",
                table, COLUMNS
            ),
            select_by_id: format!("SELECT {} FROM {} WHERE \"id\" = $1", COLUMNS, table),
            select_all: format!("SELECT {} FROM {} ORDER BY \"id\"", COLUMNS, table),
            update: format!(
                "UPDATE {} SET \"name\" = $2, \"email\" = $3, \"phone\" = $4 \
                 WHERE \"id\" = $1 RETURNING {}",
                table, COLUMNS
            ),
            delete: format!("DELETE FROM {} WHERE \"id\" = $1", table),
            table,
        }
    }

    /// DDL for the table; safe to run repeatedly.
    pub fn create_table(&self) -> String {
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                "id" BIGSERIAL PRIMARY KEY,
                "name" TEXT NOT NULL,
                "email" TEXT NOT NULL,
                "phone" TEXT
            )
            "#,
            self.table
        )
    }
}
