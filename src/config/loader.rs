//! Load settings from environment variables (after `.env`, if any).

use crate::config::types::*;
use crate::config::validate;
use crate::error::ConfigError;
use std::net::SocketAddr;

pub const ENV_STORE: &str = "CUSTOMER_STORE";
pub const ENV_DATABASE_URL: &str = "DATABASE_URL";
pub const ENV_SCHEMA: &str = "CUSTOMER_SCHEMA";
pub const ENV_MAX_CONNECTIONS: &str = "DB_MAX_CONNECTIONS";
pub const ENV_BIND_ADDR: &str = "BIND_ADDR";

/// Read from the process environment. Loads `.env` first when present.
pub fn load_from_env() -> Result<ServiceConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_with(|key| std::env::var(key).ok())
}

/// Build and validate config from an arbitrary key lookup. Blank values count as unset.
pub fn load_with<F>(lookup: F) -> Result<ServiceConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    let store = match get(ENV_STORE).map(|v| v.to_lowercase()).as_deref() {
        None | Some("postgres") => StoreKind::Postgres,
        Some("memory") => StoreKind::Memory,
        Some(other) => {
            return Err(ConfigError::Invalid {
                key: ENV_STORE,
                reason: format!("expected postgres or memory, got {}", other),
            })
        }
    };

    let max_connections = match get(ENV_MAX_CONNECTIONS) {
        None => DEFAULT_MAX_CONNECTIONS,
        Some(v) => v.parse().map_err(|_| ConfigError::Invalid {
            key: ENV_MAX_CONNECTIONS,
            reason: format!("not a number: {}", v),
        })?,
    };

    let bind_raw = get(ENV_BIND_ADDR).unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
    let bind_addr: SocketAddr = bind_raw.parse().map_err(|_| ConfigError::Invalid {
        key: ENV_BIND_ADDR,
        reason: format!("not a socket address: {}", bind_raw),
    })?;

    let config = ServiceConfig {
        store,
        database_url: get(ENV_DATABASE_URL).unwrap_or_else(|| DEFAULT_DATABASE_URL.into()),
        schema: get(ENV_SCHEMA).unwrap_or_else(|| DEFAULT_SCHEMA.into()),
        max_connections,
        bind_addr,
    };
    validate(&config)?;
    Ok(config)
}
