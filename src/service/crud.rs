//! Customer CRUD over a record store, with validation on create and reconciliation on update.

use crate::error::AppError;
use crate::model::{CreateCustomer, Customer, UpdateCustomer};
use crate::service::reconcile::reconcile;
use crate::service::validation::RequestValidator;
use crate::store::CustomerStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct CustomerService {
    store: Arc<dyn CustomerStore>,
}

impl CustomerService {
    pub fn new(store: Arc<dyn CustomerStore>) -> Self {
        CustomerService { store }
    }

    /// Validate and insert. The store assigns the id.
    pub async fn create(&self, input: &CreateCustomer) -> Result<Customer, AppError> {
        let customer = RequestValidator::validate_create(input)?;
        let row = self.store.insert(customer).await?;
        tracing::info!(id = row.id, "customer created");
        Ok(row)
    }

    pub async fn get(&self, id: i64) -> Result<Customer, AppError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::customer_not_found(id))
    }

    pub async fn list(&self) -> Result<Vec<Customer>, AppError> {
        self.store.find_all().await
    }

    /// Merge non-blank fields of `input` onto the row `id`. Fails with NotFound
    /// before anything is written when the row does not exist.
    pub async fn update(&self, id: i64, input: &UpdateCustomer) -> Result<Customer, AppError> {
        let existing = self.get(id).await?;
        let merged = reconcile(existing, input);
        let row = self
            .store
            .update(&merged)
            .await?
            .ok_or_else(|| AppError::customer_not_found(id))?;
        tracing::info!(id, "customer updated");
        Ok(row)
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.get(id).await?;
        if !self.store.delete_by_id(id).await? {
            return Err(AppError::customer_not_found(id));
        }
        tracing::info!(id, "customer deleted");
        Ok(())
    }

    pub async fn ping(&self) -> Result<(), AppError> {
        self.store.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NewCustomer;
    use crate::store::{MemoryCustomerStore, MockCustomerStore};
    use mockall::predicate::eq;

    fn john() -> Customer {
        Customer {
            id: 1,
            name: "John Doe".into(),
            email: "john@example.com".into(),
            phone: Some("1234567890".into()),
        }
    }

    fn create_input() -> CreateCustomer {
        CreateCustomer {
            name: Some("John Doe".into()),
            email: Some("john@example.com".into()),
            phone: Some("1234567890".into()),
        }
    }

    fn service(store: MockCustomerStore) -> CustomerService {
        CustomerService::new(Arc::new(store))
    }

    #[tokio::test]
    async fn create_returns_stored_row() {
        let mut store = MockCustomerStore::new();
        store
            .expect_insert()
            .withf(|c: &NewCustomer| c.name == "John Doe" && c.email == "john@example.com")
            .times(1)
            .returning(|c| Ok(c.with_id(1)));

        let created = service(store).create(&create_input()).await.unwrap();
        assert_eq!(created, john());
    }

    #[tokio::test]
    async fn invalid_create_never_reaches_store() {
        let mut store = MockCustomerStore::new();
        store.expect_insert().times(0);

        let input = CreateCustomer {
            name: Some(" ".into()),
            email: Some("nope".into()),
            phone: None,
        };
        match service(store).create(&input).await {
            Err(AppError::Validation(errors)) => {
                assert_eq!(errors.len(), 2);
                assert!(errors.contains_key("name"));
                assert!(errors.contains_key("email"));
            }
            other => panic!("expected validation failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn update_overwrites_all_provided_fields() {
        let mut store = MockCustomerStore::new();
        store
            .expect_find_by_id()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(Some(john())));
        store
            .expect_update()
            .times(1)
            .returning(|c| Ok(Some(c.clone())));

        let input = UpdateCustomer {
            id: Some(1),
            name: Some("Jane Doe".into()),
            email: Some("jane@example.com".into()),
            phone: Some("0987654321".into()),
        };
        let updated = service(store).update(1, &input).await.unwrap();
        assert_eq!(updated.id, 1);
        assert_eq!(updated.name, "Jane Doe");
        assert_eq!(updated.email, "jane@example.com");
        assert_eq!(updated.phone.as_deref(), Some("0987654321"));
    }

    #[tokio::test]
    async fn update_only_touches_provided_fields() {
        let mut store = MockCustomerStore::new();
        store.expect_find_by_id().returning(|_| Ok(Some(john())));
        store
            .expect_update()
            .withf(|c: &Customer| {
                c.name == "Jane Doe"
                    && c.email == "john@example.com"
                    && c.phone.as_deref() == Some("1234567890")
            })
            .times(1)
            .returning(|c| Ok(Some(c.clone())));

        let input = UpdateCustomer {
            id: Some(1),
            name: Some("Jane Doe".into()),
            ..Default::default()
        };
        let updated = service(store).update(1, &input).await.unwrap();
        assert_eq!(updated.name, "Jane Doe");
        assert_eq!(updated.email, "john@example.com");
    }

    #[tokio::test]
    async fn update_of_missing_row_writes_nothing() {
        let mut store = MockCustomerStore::new();
        store.expect_find_by_id().with(eq(1)).times(1).returning(|_| Ok(None));
        store.expect_update().times(0);

        let err = service(store)
            .update(1, &UpdateCustomer { name: Some("Jane".into()), ..Default::default() })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref m) if m == "Customer not found with id: 1"));
    }

    #[tokio::test]
    async fn delete_checks_existence_first() {
        let mut store = MockCustomerStore::new();
        store.expect_find_by_id().returning(|_| Ok(Some(john())));
        store.expect_delete_by_id().with(eq(1)).times(1).returning(|_| Ok(true));
        service(store).delete(1).await.unwrap();

        let mut store = MockCustomerStore::new();
        store.expect_find_by_id().returning(|_| Ok(None));
        store.expect_delete_by_id().times(0);
        let err = service(store).delete(1).await.unwrap_err();
        assert_eq!(err.to_string(), "Customer not found with id: 1");
    }

    #[tokio::test]
    async fn get_maps_missing_row_to_not_found() {
        let mut store = MockCustomerStore::new();
        store.expect_find_by_id().with(eq(1)).returning(|_| Ok(Some(john())));
        store.expect_find_by_id().with(eq(2)).returning(|_| Ok(None));
        let svc = service(store);
        assert_eq!(svc.get(1).await.unwrap(), john());
        assert!(matches!(svc.get(2).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn list_returns_rows_in_store_order() {
        let mut store = MockCustomerStore::new();
        store.expect_find_all().times(1).returning(|| {
            Ok(vec![
                john(),
                Customer {
                    id: 2,
                    name: "Jane Doe".into(),
                    email: "jane@example.com".into(),
                    phone: Some("0987654321".into()),
                },
            ])
        });
        let rows = service(store).list().await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, 1);
        assert_eq!(rows[1].name, "Jane Doe");
    }

    #[tokio::test]
    async fn round_trip_against_memory_store() {
        let svc = CustomerService::new(Arc::new(MemoryCustomerStore::new()));
        assert!(svc.list().await.unwrap().is_empty());

        let created = svc.create(&create_input()).await.unwrap();
        assert_eq!(created.id, 1);

        let partial = UpdateCustomer { phone: Some("555".into()), ..Default::default() };
        let once = svc.update(created.id, &partial).await.unwrap();
        let twice = svc.update(created.id, &partial).await.unwrap();
        assert_eq!(once, twice);
        assert_eq!(twice.name, "John Doe");

        svc.delete(created.id).await.unwrap();
        assert!(matches!(svc.get(created.id).await, Err(AppError::NotFound(_))));
        assert!(matches!(svc.delete(created.id).await, Err(AppError::NotFound(_))));
        assert!(svc.list().await.unwrap().is_empty());
    }
}
