use std::sync::Arc;

use crate::domain::account::entities::User;
use crate::domain::account::services::UserService;
use crate::domain::errors::DomainError;

/// Command for registering a new account
#[derive(Debug, Clone)]
pub struct CreateUserCommand {
  /// Login name, unique across accounts
  pub username: String,
  /// Email address, unique across accounts
  pub email: String,
  /// Credential, stored as given
  pub password: String,
  /// User's first name
  pub first_name: String,
  /// User's last name
  pub last_name: String,
}

/// Use case for creating a user account
pub struct CreateUserUseCase {
  user_service: Arc<UserService>,
}

impl CreateUserUseCase {
  /// Creates a new instance of CreateUserUseCase
  pub fn new(user_service: Arc<UserService>) -> Self {
    Self { user_service }
  }

  /// Executes the account creation use case.
  ///
  /// Accounts created through the public surface are never admins; the
  /// flag can only be granted out of band.
  ///
  /// # Errors
  /// Returns `DomainError::Duplicate` when the email or username is taken
  pub async fn execute(&self, command: CreateUserCommand) -> Result<User, DomainError> {
    let user = User::new(
      command.username,
      command.email,
      command.password,
      command.first_name,
      command.last_name,
      false,
    );

    self.user_service.create(user).await
  }
}
