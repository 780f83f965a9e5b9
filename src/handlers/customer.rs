//! Customer CRUD handlers: create, read, update, delete, list.

use crate::error::{AppError, ErrorBody};
use crate::extractors::Username;
use crate::model::{CreateCustomer, Customer, UpdateCustomer};
use crate::response::{created, customer_location, no_content, success_ok};
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    response::IntoResponse,
    Json,
};

fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload.map(|Json(v)| v).map_err(|e| AppError::Rejected {
        status: e.status(),
        message: e.body_text(),
    })
}

fn path_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, AppError> {
    path.map(|Path(id)| id)
        .map_err(|e| AppError::BadRequest(e.body_text()))
}

/// The record to update is named by the body `id`; the path segment only
/// fills in when the body leaves it out.
pub fn resolve_update_id(path_id: i64, body_id: Option<i64>) -> i64 {
    body_id.unwrap_or(path_id)
}

#[utoipa::path(
    post,
    path = "/customers",
    request_body = CreateCustomer,
    responses(
        (status = 201, description = "Customer created",
            headers(("Location" = String, description = "Path of the new customer"))),
        (status = 400, description = "Validation failed", body = ErrorBody),
        (status = 413, description = "Body too large", body = ErrorBody),
        (status = 415, description = "Not a JSON body", body = ErrorBody)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateCustomer>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let input = json_body(payload)?;
    let row = state.service.create(&input).await?;
    Ok(created(customer_location(row.id)))
}

#[utoipa::path(
    get,
    path = "/customers/{id}",
    params(("id" = i64, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Customer", body = Customer),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn read(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = path_id(path)?;
    let row = state.service.get(id).await?;
    Ok(success_ok(row))
}

#[utoipa::path(
    get,
    path = "/customers",
    params(("X-Username" = Option<String>, Header, description = "Caller name, logged only")),
    responses((status = 200, description = "All customers", body = [Customer]))
)]
pub async fn list(
    Username(username): Username,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!(username = ?username, "list customers");
    let rows = state.service.list().await?;
    Ok(success_ok(rows))
}

#[utoipa::path(
    put,
    path = "/customers/{id}",
    params(("id" = i64, Path, description = "Customer id")),
    request_body = UpdateCustomer,
    responses(
        (status = 200, description = "Updated customer", body = Customer),
        (status = 400, description = "Malformed request", body = ErrorBody),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateCustomer>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let path_id = path_id(path)?;
    let input = json_body(payload)?;
    let id = resolve_update_id(path_id, input.id);
    let row = state.service.update(id, &input).await?;
    Ok(success_ok(row))
}

#[utoipa::path(
    delete,
    path = "/customers/{id}",
    params(("id" = i64, Path, description = "Customer id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = path_id(path)?;
    state.service.delete(id).await?;
    Ok(no_content())
}
