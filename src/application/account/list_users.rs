use std::sync::Arc;

use crate::domain::account::entities::User;
use crate::domain::account::services::UserService;
use crate::domain::errors::DomainError;

/// Use case for listing every user account
pub struct ListUsersUseCase {
  user_service: Arc<UserService>,
}

impl ListUsersUseCase {
  /// Creates a new instance of ListUsersUseCase
  pub fn new(user_service: Arc<UserService>) -> Self {
    Self { user_service }
  }

  /// Returns the unfiltered account list
  pub async fn execute(&self) -> Result<Vec<User>, DomainError> {
    self.user_service.list().await
  }
}
