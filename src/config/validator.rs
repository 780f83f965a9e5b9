//! Config validation.

use crate::config::{ServiceConfig, StoreKind};
use crate::error::ConfigError;
use regex::Regex;

const IDENT_PATTERN: &str = r"^[A-Za-z_][A-Za-z0-9_]{0,62}$";

pub fn validate(config: &ServiceConfig) -> Result<(), ConfigError> {
    let ident = Regex::new(IDENT_PATTERN).map_err(|e| ConfigError::Invalid {
        key: "CUSTOMER_SCHEMA",
        reason: e.to_string(),
    })?;
    if !ident.is_match(&config.schema) {
        return Err(ConfigError::Invalid {
            key: "CUSTOMER_SCHEMA",
            reason: format!("not a plain identifier: {}", config.schema),
        });
    }
    if config.max_connections == 0 {
        return Err(ConfigError::Invalid {
            key: "DB_MAX_CONNECTIONS",
            reason: "must be at least 1".into(),
        });
    }
    if config.store == StoreKind::Postgres && config.database_url.is_empty() {
        return Err(ConfigError::Missing("DATABASE_URL"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_BIND_ADDR, DEFAULT_DATABASE_URL};

    fn base() -> ServiceConfig {
        ServiceConfig {
            store: StoreKind::Postgres,
            database_url: DEFAULT_DATABASE_URL.into(),
            schema: "public".into(),
            max_connections: 5,
            bind_addr: DEFAULT_BIND_ADDR.parse().unwrap(),
        }
    }

    #[test]
    fn accepts_defaults() {
        assert!(validate(&base()).is_ok());
    }

    #[test]
    fn rejects_schema_that_needs_quoting() {
        for schema in ["1abc", "with space", "semi;colon", ""] {
            let c = ServiceConfig { schema: schema.into(), ..base() };
            assert!(validate(&c).is_err(), "{:?} should be rejected", schema);
        }
    }

    #[test]
    fn rejects_zero_connections() {
        let c = ServiceConfig { max_connections: 0, ..base() };
        assert!(matches!(
            validate(&c),
            Err(ConfigError::Invalid { key: "DB_MAX_CONNECTIONS", .. })
        ));
    }

    #[test]
    fn memory_store_does_not_need_database_url() {
        let c = ServiceConfig { store: StoreKind::Memory, database_url: String::new(), ..base() };
        assert!(validate(&c).is_ok());
        let c = ServiceConfig { database_url: String::new(), ..base() };
        assert!(matches!(validate(&c), Err(ConfigError::Missing("DATABASE_URL"))));
    }
}
