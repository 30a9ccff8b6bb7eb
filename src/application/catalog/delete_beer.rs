use std::sync::Arc;
use uuid::Uuid;

use crate::domain::account::entities::User;
use crate::domain::catalog::services::CatalogService;
use crate::domain::errors::DomainError;

/// Use case for removing a beer from the catalog
pub struct DeleteBeerUseCase {
  catalog_service: Arc<CatalogService>,
}

impl DeleteBeerUseCase {
  /// Creates a new instance of DeleteBeerUseCase
  pub fn new(catalog_service: Arc<CatalogService>) -> Self {
    Self { catalog_service }
  }

  /// Executes the beer deletion use case
  pub async fn execute(&self, beer_id: Uuid, requester: &User) -> Result<(), DomainError> {
    self.catalog_service.delete(beer_id, requester).await
  }
}
