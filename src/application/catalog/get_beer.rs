use std::sync::Arc;
use uuid::Uuid;

use crate::domain::catalog::entities::Beer;
use crate::domain::catalog::services::CatalogService;
use crate::domain::errors::DomainError;

/// Use case for fetching a single beer
pub struct GetBeerUseCase {
  catalog_service: Arc<CatalogService>,
}

impl GetBeerUseCase {
  /// Creates a new instance of GetBeerUseCase
  pub fn new(catalog_service: Arc<CatalogService>) -> Self {
    Self { catalog_service }
  }

  /// Fetches a beer by id
  pub async fn execute(&self, beer_id: Uuid) -> Result<Beer, DomainError> {
    self.catalog_service.get_by_id(beer_id).await
  }
}
