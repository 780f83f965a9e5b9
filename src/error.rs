//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;
use utoipa::ToSchema;

/// Field name to message, one entry per violated field.
pub type FieldErrors = BTreeMap<String, String>;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing config: {0}")]
    Missing(&'static str),
    #[error("invalid config {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{0}")]
    NotFound(String),
    #[error("Validation failed")]
    Validation(FieldErrors),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("{0}")]
    BadRequest(String),
    /// Body the JSON extractor refused; carries the extractor's own status (400, 413, 415, ...).
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },
}

impl AppError {
    pub fn customer_not_found(id: i64) -> Self {
        AppError::NotFound(format!("Customer not found with id: {}", id))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Config(_) | AppError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Rejected { status, .. } => *status,
        }
    }
}

#[derive(Serialize, Debug, ToSchema)]
pub struct ErrorBody {
    pub message: String,
    pub status: u16,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub errors: Option<FieldErrors>,
}

impl ErrorBody {
    fn new(status: StatusCode, message: String, errors: Option<FieldErrors>) -> Self {
        ErrorBody {
            message,
            status: status.as_u16(),
            timestamp: timestamp_now(),
            errors,
        }
    }
}

/// Local wall-clock time with microsecond precision, e.g. `2024-05-01T09:30:12.123456`.
pub fn timestamp_now() -> String {
    chrono::Local::now()
        .naive_local()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            AppError::Validation(errors) => {
                ErrorBody::new(status, "Validation failed".into(), Some(errors))
            }
            AppError::NotFound(message)
            | AppError::BadRequest(message)
            | AppError::Rejected { message, .. } => ErrorBody::new(status, message, None),
            AppError::Db(e) => {
                tracing::error!(error = %e, "store failure");
                ErrorBody::new(status, "Internal server error".into(), None)
            }
            AppError::Config(e) => {
                tracing::error!(error = %e, "configuration failure");
                ErrorBody::new(status, "Internal server error".into(), None)
            }
        };
        (status, Json(body)).into_response()
    }
}
