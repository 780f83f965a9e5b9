//! Customer service: REST CRUD for customer records over a pluggable record store.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{load_from_env, load_with, ServiceConfig, StoreKind};
pub use error::{AppError, ConfigError, ErrorBody, FieldErrors};
pub use migration::apply_migrations;
pub use model::{CreateCustomer, Customer, NewCustomer, UpdateCustomer};
pub use routes::{app, common_routes, customer_routes, openapi_routes, ApiDoc};
pub use service::CustomerService;
pub use state::AppState;
pub use store::{ensure_database_exists, CustomerStore, MemoryCustomerStore, PgCustomerStore};
