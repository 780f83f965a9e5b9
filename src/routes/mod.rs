//! Router assembly.

mod common;
mod customer;
mod openapi;

pub use common::common_routes;
pub use customer::customer_routes;
pub use openapi::{openapi_routes, ApiDoc};

use crate::state::AppState;
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Largest accepted request body.
pub const BODY_LIMIT_BYTES: usize = 64 * 1024;

/// Full application: customer CRUD, operational endpoints and the OpenAPI document.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(customer_routes(state))
        .merge(openapi_routes())
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .layer(TraceLayer::new_for_http())
}
