use actix_web::{
  HttpResponse,
  error::ResponseError,
  http::{StatusCode, header::ContentType},
};
use serde::Serialize;
use std::fmt;

use crate::domain::errors::DomainError;

use super::dtos::ErrorResponse;

/// API error type that maps domain errors to HTTP responses
#[derive(Debug, Serialize)]
pub enum ApiError {
  /// Validation error (400 Bad Request)
  Validation(String),

  /// Missing or unresolvable requester credentials (401 Unauthorized)
  MissingCredentials,

  /// Requester lacks permission for the operation (401 Unauthorized)
  Unauthorized(String),

  /// Requested or referenced entity does not exist (404 Not Found)
  NotFound(String),

  /// Uniqueness constraint would be violated (409 Conflict)
  Duplicate(String),

  /// Internal server error (500 Internal Server Error)
  Internal(String),
}

impl fmt::Display for ApiError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ApiError::Validation(msg) => write!(f, "Validation error: {}", msg),
      ApiError::MissingCredentials => write!(f, "Missing credentials"),
      ApiError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
      ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
      ApiError::Duplicate(msg) => write!(f, "Duplicate: {}", msg),
      ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
    }
  }
}

impl ResponseError for ApiError {
  fn status_code(&self) -> StatusCode {
    match self {
      ApiError::Validation(_) => StatusCode::BAD_REQUEST,
      ApiError::MissingCredentials => StatusCode::UNAUTHORIZED,
      ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
      ApiError::NotFound(_) => StatusCode::NOT_FOUND,
      ApiError::Duplicate(_) => StatusCode::CONFLICT,
      ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();
    let (error_type, message) = match self {
      ApiError::Validation(msg) => ("validation_error", msg.clone()),
      ApiError::MissingCredentials => (
        "missing_credentials",
        "Missing or invalid Authorization header".to_string(),
      ),
      ApiError::Unauthorized(msg) => ("unauthorized", msg.clone()),
      ApiError::NotFound(msg) => ("not_found", msg.clone()),
      ApiError::Duplicate(msg) => ("duplicate", msg.clone()),
      ApiError::Internal(msg) => {
        // Don't expose internal error details to clients
        tracing::error!("Internal error: {}", msg);
        (
          "internal_error",
          "An internal server error occurred".to_string(),
        )
      }
    };

    let error_response = ErrorResponse {
      error: error_type.to_string(),
      message,
    };

    HttpResponse::build(status)
      .content_type(ContentType::json())
      .json(error_response)
  }
}

/// Convert DomainError to ApiError
impl From<DomainError> for ApiError {
  fn from(error: DomainError) -> Self {
    match error {
      DomainError::NotFound { .. } => ApiError::NotFound(error.to_string()),
      DomainError::Duplicate { .. } => ApiError::Duplicate(error.to_string()),
      DomainError::Unauthorized(msg) => ApiError::Unauthorized(msg),
      DomainError::Repository(err) => ApiError::Internal(err.to_string()),
    }
  }
}

/// Convert validation errors from validator crate
impl From<validator::ValidationErrors> for ApiError {
  fn from(errors: validator::ValidationErrors) -> Self {
    let messages: Vec<String> = errors
      .field_errors()
      .iter()
      .flat_map(|(field, errors)| {
        errors
          .iter()
          .map(|error| {
            error
              .message
              .as_ref()
              .map(|m| m.to_string())
              .unwrap_or_else(|| format!("Invalid field: {}", field))
          })
          .collect::<Vec<_>>()
      })
      .collect();

    ApiError::Validation(messages.join(", "))
  }
}
