use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::account::entities::User;
use crate::domain::catalog::entities::{Beer, Style};

/// Request for creating a user account
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
  /// Login name
  #[validate(length(
    min = 2,
    max = 20,
    message = "Username must be between 2 and 20 characters"
  ))]
  pub username: String,

  /// Email address
  #[validate(email(message = "Invalid email format"))]
  pub email: String,

  /// Credential
  #[validate(length(
    min = 4,
    max = 128,
    message = "Password must be between 4 and 128 characters"
  ))]
  pub password: String,

  /// First name
  #[validate(length(
    min = 1,
    max = 64,
    message = "First name must be between 1 and 64 characters"
  ))]
  pub first_name: String,

  /// Last name
  #[validate(length(
    min = 1,
    max = 64,
    message = "Last name must be between 1 and 64 characters"
  ))]
  pub last_name: String,
}

/// Request for replacing an account's mutable fields. The username is not
/// part of the payload: it is fixed at creation time.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateUserRequest {
  /// Email address
  #[validate(email(message = "Invalid email format"))]
  pub email: String,

  /// Credential
  #[validate(length(
    min = 4,
    max = 128,
    message = "Password must be between 4 and 128 characters"
  ))]
  pub password: String,

  /// First name
  #[validate(length(
    min = 1,
    max = 64,
    message = "First name must be between 1 and 64 characters"
  ))]
  pub first_name: String,

  /// Last name
  #[validate(length(
    min = 1,
    max = 64,
    message = "Last name must be between 1 and 64 characters"
  ))]
  pub last_name: String,
}

/// Request for creating or replacing a beer
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BeerRequest {
  /// Beer name
  #[validate(length(
    min = 2,
    max = 64,
    message = "Name must be between 2 and 64 characters"
  ))]
  pub name: String,

  /// Alcohol by volume
  #[validate(range(min = 0.0, message = "Abv must not be negative"))]
  pub abv: f64,

  /// Identifier of an existing style
  pub style_id: Uuid,
}

/// Listing parameters for the beer query pipeline, from the query string
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BeerListParams {
  pub name: Option<String>,
  pub min_abv: Option<f64>,
  pub max_abv: Option<f64>,
  pub style_id: Option<Uuid>,
  pub sort_by: Option<String>,
  pub sort_order: Option<String>,
}

/// User representation returned by the API. The stored credential never
/// leaves the service.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
  pub id: Uuid,
  pub username: String,
  pub email: String,
  pub first_name: String,
  pub last_name: String,
  pub is_admin: bool,
  pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
  fn from(user: User) -> Self {
    Self {
      id: user.id,
      username: user.username,
      email: user.email,
      first_name: user.first_name,
      last_name: user.last_name,
      is_admin: user.is_admin,
      created_at: user.created_at,
    }
  }
}

/// Beer representation returned by the API
#[derive(Debug, Clone, Serialize)]
pub struct BeerResponse {
  pub id: Uuid,
  pub name: String,
  pub abv: f64,
  pub style: StyleResponse,
  pub created_by: Uuid,
}

impl From<Beer> for BeerResponse {
  fn from(beer: Beer) -> Self {
    Self {
      id: beer.id,
      name: beer.name,
      abv: beer.abv,
      style: beer.style.into(),
      created_by: beer.created_by,
    }
  }
}

/// Style representation returned by the API
#[derive(Debug, Clone, Serialize)]
pub struct StyleResponse {
  pub id: Uuid,
  pub name: String,
}

impl From<Style> for StyleResponse {
  fn from(style: Style) -> Self {
    Self {
      id: style.id,
      name: style.name,
    }
  }
}

/// Standard error response
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
  /// Error type/code
  pub error: String,

  /// Human-readable error message
  pub message: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  fn valid_create_request() -> CreateUserRequest {
    CreateUserRequest {
      username: "alice".to_string(),
      email: "a@x.com".to_string(),
      password: "secret".to_string(),
      first_name: "Alice".to_string(),
      last_name: "Archer".to_string(),
    }
  }

  #[test]
  fn test_create_user_request_validation_valid() {
    assert!(valid_create_request().validate().is_ok());
  }

  #[test]
  fn test_create_user_request_validation_invalid_email() {
    let mut request = valid_create_request();
    request.email = "not-an-email".to_string();
    assert!(request.validate().is_err());
  }

  #[test]
  fn test_create_user_request_validation_short_username() {
    let mut request = valid_create_request();
    request.username = "a".to_string();
    assert!(request.validate().is_err());
  }

  #[test]
  fn test_beer_request_rejects_negative_abv() {
    let request = BeerRequest {
      name: "IPA".to_string(),
      abv: -0.5,
      style_id: Uuid::new_v4(),
    };
    assert!(request.validate().is_err());
  }

  #[test]
  fn test_beer_request_accepts_zero_abv() {
    let request = BeerRequest {
      name: "Alcohol-free".to_string(),
      abv: 0.0,
      style_id: Uuid::new_v4(),
    };
    assert!(request.validate().is_ok());
  }

  #[test]
  fn test_beer_list_params_fields_default_to_none() {
    let json = r#"{"name": "ipa"}"#;
    let params: BeerListParams = serde_json::from_str(json).unwrap();

    assert_eq!(params.name.as_deref(), Some("ipa"));
    assert!(params.min_abv.is_none());
    assert!(params.sort_by.is_none());
  }

  #[test]
  fn test_user_response_drops_password() {
    let user = User::new(
      "alice".to_string(),
      "a@x.com".to_string(),
      "secret".to_string(),
      "Alice".to_string(),
      "Archer".to_string(),
      false,
    );

    let response = UserResponse::from(user);
    let json = serde_json::to_value(&response).unwrap();
    assert!(json.get("password").is_none());
    assert_eq!(json["username"], "alice");
  }
}
