use std::sync::Arc;
use uuid::Uuid;

use crate::domain::account::entities::User;
use crate::domain::account::services::UserService;
use crate::domain::errors::DomainError;

/// Use case for fetching a single user account
pub struct GetUserUseCase {
  user_service: Arc<UserService>,
}

impl GetUserUseCase {
  /// Creates a new instance of GetUserUseCase
  pub fn new(user_service: Arc<UserService>) -> Self {
    Self { user_service }
  }

  /// Fetches a user by id
  pub async fn execute(&self, user_id: Uuid) -> Result<User, DomainError> {
    self.user_service.get_by_id(user_id).await
  }

  /// Fetches a user by username
  pub async fn execute_by_username(&self, username: &str) -> Result<User, DomainError> {
    self.user_service.get_by_username(username).await
  }
}
