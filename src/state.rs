//! Shared application state for all routes.

use crate::service::CustomerService;

#[derive(Clone)]
pub struct AppState {
    pub service: CustomerService,
}

impl AppState {
    pub fn new(service: CustomerService) -> Self {
        AppState { service }
    }
}
