use std::sync::Arc;
use uuid::Uuid;

use crate::domain::account::entities::User;
use crate::domain::account::services::UserService;
use crate::domain::errors::DomainError;

/// Use case for deleting a user account on behalf of a requester
pub struct DeleteUserUseCase {
  user_service: Arc<UserService>,
}

impl DeleteUserUseCase {
  /// Creates a new instance of DeleteUserUseCase
  pub fn new(user_service: Arc<UserService>) -> Self {
    Self { user_service }
  }

  /// Executes the account deletion use case
  ///
  /// # Errors
  /// Returns `DomainError::Unauthorized` unless the requester is an admin
  /// or the account owner, `DomainError::NotFound` for a missing account
  pub async fn execute(&self, user_id: Uuid, requester: &User) -> Result<(), DomainError> {
    self.user_service.delete(user_id, requester).await
  }
}
