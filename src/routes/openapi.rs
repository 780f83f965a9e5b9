//! OpenAPI document for the customer routes.

use crate::error::ErrorBody;
use crate::handlers::customer;
use crate::model::{CreateCustomer, Customer, UpdateCustomer};
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "customer-service", description = "Customer CRUD"),
    paths(customer::create, customer::read, customer::list, customer::update, customer::delete),
    components(schemas(Customer, CreateCustomer, UpdateCustomer, ErrorBody))
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// GET /openapi.json
pub fn openapi_routes() -> Router {
    Router::new().route("/openapi.json", get(openapi_json))
}
