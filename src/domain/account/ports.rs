use async_trait::async_trait;
use uuid::Uuid;

use super::entities::User;
use crate::domain::catalog::entities::Beer;
use crate::domain::errors::DomainError;

/// Repository trait for user persistence operations, including the
/// per-user wishlist membership.
#[async_trait]
pub trait UserRepository: Send + Sync {
  /// Returns every user in storage
  async fn list_all(&self) -> Result<Vec<User>, DomainError>;

  /// Finds a user by their unique identifier
  async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

  /// Finds a user by their username
  async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

  /// Finds a user by their email address
  async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

  /// Creates a new user in the repository
  async fn create(&self, user: User) -> Result<User, DomainError>;

  /// Updates an existing user (full-record replace)
  async fn update(&self, user: User) -> Result<User, DomainError>;

  /// Deletes a user. Fails with `RepositoryError::NotFound` if absent.
  async fn delete(&self, id: Uuid) -> Result<(), DomainError>;

  /// Returns the user's wishlist, beers fully resolved
  async fn get_wishlist(&self, user_id: Uuid) -> Result<Vec<Beer>, DomainError>;

  /// Adds a beer to the user's wishlist. Idempotent at the storage level.
  async fn add_to_wishlist(&self, user_id: Uuid, beer_id: Uuid) -> Result<(), DomainError>;

  /// Removes a beer from the user's wishlist
  async fn remove_from_wishlist(&self, user_id: Uuid, beer_id: Uuid) -> Result<(), DomainError>;
}
