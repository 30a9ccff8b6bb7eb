use actix_web::HttpRequest;
use std::sync::Arc;

use crate::domain::account::entities::User;
use crate::domain::account::services::UserService;
use crate::domain::errors::DomainError;

use super::errors::ApiError;

/// Resolves the acting identity from request credentials.
///
/// The demo-grade scheme carries the requester's username in the
/// `Authorization` header verbatim; an unknown username is rejected the
/// same way as a missing header so the surface does not reveal which
/// accounts exist.
pub struct RequesterResolver {
  user_service: Arc<UserService>,
}

impl RequesterResolver {
  /// Creates a new instance of RequesterResolver
  pub fn new(user_service: Arc<UserService>) -> Self {
    Self { user_service }
  }

  /// Resolves the requester or fails with a 401-mapped error
  pub async fn try_get_requester(&self, req: &HttpRequest) -> Result<User, ApiError> {
    let username = extract_username(req)?;

    match self.user_service.get_by_username(&username).await {
      Ok(user) => Ok(user),
      Err(DomainError::NotFound { .. }) => Err(ApiError::MissingCredentials),
      Err(e) => Err(e.into()),
    }
  }
}

/// Extract the requester's username from the Authorization header
fn extract_username(req: &HttpRequest) -> Result<String, ApiError> {
  req
    .headers()
    .get("Authorization")
    .and_then(|h| h.to_str().ok())
    .map(|s| s.trim().to_string())
    .filter(|s| !s.is_empty())
    .ok_or(ApiError::MissingCredentials)
}

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::test::TestRequest;

  #[test]
  fn test_extract_username_valid() {
    let req = TestRequest::default()
      .insert_header(("Authorization", "alice"))
      .to_http_request();

    let username = extract_username(&req).unwrap();
    assert_eq!(username, "alice");
  }

  #[test]
  fn test_extract_username_trims_whitespace() {
    let req = TestRequest::default()
      .insert_header(("Authorization", " alice "))
      .to_http_request();

    let username = extract_username(&req).unwrap();
    assert_eq!(username, "alice");
  }

  #[test]
  fn test_extract_username_missing_header() {
    let req = TestRequest::default().to_http_request();
    assert!(extract_username(&req).is_err());
  }

  #[test]
  fn test_extract_username_empty_header() {
    let req = TestRequest::default()
      .insert_header(("Authorization", ""))
      .to_http_request();

    assert!(extract_username(&req).is_err());
  }
}
