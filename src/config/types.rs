//! Runtime settings.

use std::net::SocketAddr;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/customers";
pub const DEFAULT_SCHEMA: &str = "public";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Which record store backs the service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreKind {
    Postgres,
    /// Process-local; contents are lost on restart.
    Memory,
}

#[derive(Clone, Debug)]
pub struct ServiceConfig {
    pub store: StoreKind,
    pub database_url: String,
    /// Schema holding the customers table.
    pub schema: String,
    pub max_connections: u32,
    pub bind_addr: SocketAddr,
}
