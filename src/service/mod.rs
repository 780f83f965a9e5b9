//! CustomerService: CRUD over the record store.

mod crud;
pub mod reconcile;
pub mod validation;
pub use crud::CustomerService;
pub use reconcile::reconcile;
pub use validation::RequestValidator;
