use async_trait::async_trait;
use uuid::Uuid;

use super::entities::{Beer, Style};
use crate::domain::errors::DomainError;

/// Repository trait for beer persistence operations
///
/// `list_all` returns the full unfiltered collection; filtering and sorting
/// happen in the query pipeline, not in storage.
#[async_trait]
pub trait BeerRepository: Send + Sync {
  /// Returns every beer in storage
  async fn list_all(&self) -> Result<Vec<Beer>, DomainError>;

  /// Finds a beer by its unique identifier
  async fn find_by_id(&self, id: Uuid) -> Result<Option<Beer>, DomainError>;

  /// Finds a beer by its name
  async fn find_by_name(&self, name: &str) -> Result<Option<Beer>, DomainError>;

  /// Creates a new beer in the repository
  async fn create(&self, beer: Beer) -> Result<Beer, DomainError>;

  /// Updates an existing beer
  async fn update(&self, beer: Beer) -> Result<Beer, DomainError>;

  /// Deletes a beer. Fails with `RepositoryError::NotFound` if absent.
  async fn delete(&self, id: Uuid) -> Result<(), DomainError>;
}

/// Repository trait for style lookups (read-only)
#[async_trait]
pub trait StyleRepository: Send + Sync {
  /// Returns every style in storage
  async fn list_all(&self) -> Result<Vec<Style>, DomainError>;

  /// Finds a style by its unique identifier
  async fn find_by_id(&self, id: Uuid) -> Result<Option<Style>, DomainError>;
}
