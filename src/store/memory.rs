//! In-process store backed by an ordered map. Ids start at 1 and are never reused.

use super::CustomerStore;
use crate::error::AppError;
use crate::model::{Customer, NewCustomer};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::Mutex;

#[derive(Default)]
struct Inner {
    last_id: i64,
    rows: BTreeMap<i64, Customer>,
}

#[derive(Default)]
pub struct MemoryCustomerStore {
    inner: Mutex<Inner>,
}

impl MemoryCustomerStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CustomerStore for MemoryCustomerStore {
    async fn insert(&self, customer: NewCustomer) -> Result<Customer, AppError> {
        let mut inner = self.inner.lock().await;
        inner.last_id += 1;
        let row = customer.with_id(inner.last_id);
        inner.rows.insert(row.id, row.clone());
        Ok(row)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, AppError> {
        Ok(self.inner.lock().await.rows.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Customer>, AppError> {
        Ok(self.inner.lock().await.rows.values().cloned().collect())
    }

    async fn update(&self, customer: &Customer) -> Result<Option<Customer>, AppError> {
        let mut inner = self.inner.lock().await;
        match inner.rows.get_mut(&customer.id) {
            Some(row) => {
                *row = customer.clone();
                Ok(Some(row.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.inner.lock().await.rows.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
