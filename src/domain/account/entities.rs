use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity representing an account in the system.
///
/// The wishlist is not carried on the struct: it is a per-user set of beer
/// references owned by the account and fetched fresh from storage on every
/// operation that consults it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
  /// Unique identifier for the user
  pub id: Uuid,
  /// Login name (unique)
  pub username: String,
  /// Email address (unique)
  pub email: String,
  /// Opaque credential, stored as given
  pub password: String,
  /// User's first name
  pub first_name: String,
  /// User's last name
  pub last_name: String,
  /// Whether the user has administrative privileges
  pub is_admin: bool,
  /// Timestamp when the account was created
  pub created_at: DateTime<Utc>,
  /// Timestamp when the account was last updated
  pub updated_at: DateTime<Utc>,
}

impl User {
  /// Creates a new user with the given details
  pub fn new(
    username: String,
    email: String,
    password: String,
    first_name: String,
    last_name: String,
    is_admin: bool,
  ) -> Self {
    let now = Utc::now();
    Self {
      id: Uuid::new_v4(),
      username,
      email,
      password,
      first_name,
      last_name,
      is_admin,
      created_at: now,
      updated_at: now,
    }
  }

  /// Creates a user from database fields (for reconstruction)
  #[allow(clippy::too_many_arguments)]
  pub fn from_db(
    id: Uuid,
    username: String,
    email: String,
    password: String,
    first_name: String,
    last_name: String,
    is_admin: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
  ) -> Self {
    Self {
      id,
      username,
      email,
      password,
      first_name,
      last_name,
      is_admin,
      created_at,
      updated_at,
    }
  }

  /// Replaces the account's mutable fields. The username is fixed at
  /// creation time.
  pub fn replace(&mut self, email: String, password: String, first_name: String, last_name: String) {
    self.email = email;
    self.password = password;
    self.first_name = first_name;
    self.last_name = last_name;
    self.updated_at = Utc::now();
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample_user() -> User {
    User::new(
      "alice".to_string(),
      "a@x.com".to_string(),
      "secret".to_string(),
      "Alice".to_string(),
      "Archer".to_string(),
      false,
    )
  }

  #[test]
  fn test_user_creation() {
    let user = sample_user();

    assert_eq!(user.username, "alice");
    assert_eq!(user.email, "a@x.com");
    assert!(!user.is_admin);
  }

  #[test]
  fn test_replace_keeps_identity_fields() {
    let mut user = sample_user();
    let id = user.id;

    user.replace(
      "alice@beer.org".to_string(),
      "hunter2".to_string(),
      "Alice".to_string(),
      "Brewer".to_string(),
    );

    assert_eq!(user.id, id);
    assert_eq!(user.username, "alice");
    assert_eq!(user.email, "alice@beer.org");
    assert_eq!(user.last_name, "Brewer");
  }
}
