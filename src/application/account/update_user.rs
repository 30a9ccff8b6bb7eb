use std::sync::Arc;
use uuid::Uuid;

use crate::domain::account::entities::User;
use crate::domain::account::services::UserService;
use crate::domain::errors::DomainError;

/// Command for replacing an account's mutable fields
#[derive(Debug, Clone)]
pub struct UpdateUserCommand {
  /// Identifier of the account being updated
  pub user_id: Uuid,
  /// New email address
  pub email: String,
  /// New credential
  pub password: String,
  /// New first name
  pub first_name: String,
  /// New last name
  pub last_name: String,
}

/// Use case for updating a user account.
///
/// The stored record is re-fetched and replaced wholesale; the username
/// and admin flag are carried over from the stored record, never from the
/// request.
pub struct UpdateUserUseCase {
  user_service: Arc<UserService>,
}

impl UpdateUserUseCase {
  /// Creates a new instance of UpdateUserUseCase
  pub fn new(user_service: Arc<UserService>) -> Self {
    Self { user_service }
  }

  /// Executes the account update use case
  ///
  /// # Errors
  /// Returns `DomainError::NotFound` when the account does not exist and
  /// `DomainError::Duplicate` when another account holds the target email
  pub async fn execute(&self, command: UpdateUserCommand) -> Result<User, DomainError> {
    let mut user = self.user_service.get_by_id(command.user_id).await?;
    user.replace(
      command.email,
      command.password,
      command.first_name,
      command.last_name,
    );

    self.user_service.update(user).await
  }
}
