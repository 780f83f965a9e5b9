//! Record store: keyed persistence for customer rows.

mod memory;
mod postgres;

pub use memory::MemoryCustomerStore;
pub use postgres::{ensure_database_exists, PgCustomerStore};

use crate::error::AppError;
use crate::model::{Customer, NewCustomer};
use async_trait::async_trait;

/// Storage operations the service relies on. Each call is atomic on its own;
/// nothing spans calls.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// Insert and return the row with its generated id.
    async fn insert(&self, customer: NewCustomer) -> Result<Customer, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, AppError>;

    /// All rows in ascending id order.
    async fn find_all(&self) -> Result<Vec<Customer>, AppError>;

    /// Overwrite every field of the row with `customer.id`. `None` if the row is gone.
    async fn update(&self, customer: &Customer) -> Result<Option<Customer>, AppError>;

    /// Returns whether a row was removed.
    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError>;

    /// Cheap liveness check used by readiness.
    async fn ping(&self) -> Result<(), AppError>;
}
