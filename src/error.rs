//! Application error type and HTTP response mapping.
//!
//! Every failure is recovered at the handler boundary and rendered as JSON
//! with the matching status code. Validation failures serialize as an array
//! of field-level descriptors; everything else as an `{"error": …}` object.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

/// A single field-level validation error descriptor.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed or out-of-range payload. Rendered as `400` with the field
    /// error array as the body.
    #[error("validation failed")]
    Validation { errors: Vec<FieldError> },

    /// No record matches the given identifier. Rendered as `404 {"error"}`.
    #[error("{message}")]
    NotFound { message: String },

    /// Uniqueness constraint violated. Rendered as `400 {"error"}`.
    #[error("{message}")]
    Conflict { message: String },

    /// Unexpected failure, typically from the database. Rendered as
    /// `500 {"error"}`; the detailed message is logged, not returned.
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn validation(errors: Vec<FieldError>) -> Self {
        Self::Validation { errors }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation { errors } => {
                (StatusCode::BAD_REQUEST, Json(errors)).into_response()
            }
            AppError::NotFound { message } => {
                (StatusCode::NOT_FOUND, Json(json!({ "error": message }))).into_response()
            }
            AppError::Conflict { message } => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
            AppError::Internal { message } => {
                tracing::error!(%message, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Internal server error" })),
                )
                    .into_response()
            }
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| {
                    let message = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{field} is invalid"));
                    FieldError::new(field.to_string(), message)
                })
            })
            .collect();

        // Stable ordering for clients and tests.
        fields.sort_by(|a, b| a.field.cmp(&b.field));

        Self::Validation { errors: fields }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return Self::conflict("Unique constraint violation");
        }

        tracing::error!(error = %e, "Database error");
        Self::internal("Database error")
    }
}
