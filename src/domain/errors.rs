use thiserror::Error;

/// Errors produced by the domain services.
///
/// All variants are informational: they carry enough detail for the
/// request-handling layer to report the offending field or identifier,
/// and none of them is fatal to the process.
#[derive(Debug, Error)]
pub enum DomainError {
  #[error("{entity} with {field} '{value}' not found")]
  NotFound {
    entity: &'static str,
    field: &'static str,
    value: String,
  },

  #[error("{entity} with {field} '{value}' already exists")]
  Duplicate {
    entity: &'static str,
    field: &'static str,
    value: String,
  },

  #[error("{0}")]
  Unauthorized(String),

  #[error("Repository error: {0}")]
  Repository(#[from] RepositoryError),
}

impl DomainError {
  /// Shorthand for a `NotFound` error.
  pub fn not_found(entity: &'static str, field: &'static str, value: impl Into<String>) -> Self {
    DomainError::NotFound {
      entity,
      field,
      value: value.into(),
    }
  }

  /// Shorthand for a `Duplicate` error.
  pub fn duplicate(entity: &'static str, field: &'static str, value: impl Into<String>) -> Self {
    DomainError::Duplicate {
      entity,
      field,
      value: value.into(),
    }
  }
}

/// Storage-level errors surfaced through the repository ports
#[derive(Debug, Error)]
pub enum RepositoryError {
  #[error("Database connection failed: {0}")]
  ConnectionFailed(String),

  #[error("Query execution failed: {0}")]
  QueryFailed(String),

  #[error("Record not found")]
  NotFound,

  /// Unique constraint violation. Carries the conflicting field when the
  /// constraint name allows it to be recovered, the raw constraint name
  /// otherwise.
  #[error("Duplicate key violation: {0}")]
  DuplicateKey(String),

  #[error("Database error: {0}")]
  DatabaseError(String),
}

// Classification of sqlx failures. A unique violation is reported as
// DuplicateKey so services can turn it into the authoritative Duplicate
// signal; the in-service lookup is only the fast path with the better
// error message.
impl From<sqlx::Error> for RepositoryError {
  fn from(error: sqlx::Error) -> Self {
    match error {
      sqlx::Error::RowNotFound => RepositoryError::NotFound,
      sqlx::Error::Database(db_err) => {
        if db_err.is_unique_violation() {
          let field = db_err
            .constraint()
            .map(constraint_field)
            .unwrap_or_else(|| db_err.message().to_string());
          RepositoryError::DuplicateKey(field)
        } else {
          RepositoryError::DatabaseError(db_err.message().to_string())
        }
      }
      sqlx::Error::PoolTimedOut => RepositoryError::ConnectionFailed("Pool timed out".to_string()),
      sqlx::Error::PoolClosed => RepositoryError::ConnectionFailed("Pool closed".to_string()),
      _ => RepositoryError::QueryFailed(error.to_string()),
    }
  }
}

impl From<sqlx::Error> for DomainError {
  fn from(error: sqlx::Error) -> Self {
    DomainError::Repository(RepositoryError::from(error))
  }
}

/// Maps a Postgres constraint name to the field it protects.
fn constraint_field(constraint: &str) -> String {
  for field in ["email", "username", "name"] {
    if constraint.contains(field) {
      return field.to_string();
    }
  }
  constraint.to_string()
}
