//! Success response helpers.

use axum::{
    http::{header, StatusCode},
    Json,
};
use serde::Serialize;

/// Path of a single customer resource, used for the `Location` header.
pub fn customer_location(id: i64) -> String {
    format!("/customers/{}", id)
}

/// 201 with an empty body and `Location` pointing at the new resource.
pub fn created(location: String) -> (StatusCode, [(header::HeaderName, String); 1]) {
    (StatusCode::CREATED, [(header::LOCATION, location)])
}

pub fn success_ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn no_content() -> StatusCode {
    StatusCode::NO_CONTENT
}
