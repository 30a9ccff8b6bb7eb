use std::sync::Arc;
use uuid::Uuid;

use crate::domain::account::entities::User;
use crate::domain::catalog::entities::Beer;
use crate::domain::catalog::services::{BeerData, CatalogService};
use crate::domain::errors::DomainError;

/// Command for adding a beer to the catalog
#[derive(Debug, Clone)]
pub struct CreateBeerCommand {
  /// Beer name, unique across the catalog
  pub name: String,
  /// Alcohol by volume, non-negative
  pub abv: f64,
  /// Identifier of an existing style
  pub style_id: Uuid,
}

/// Use case for creating a beer on behalf of the requester
pub struct CreateBeerUseCase {
  catalog_service: Arc<CatalogService>,
}

impl CreateBeerUseCase {
  /// Creates a new instance of CreateBeerUseCase
  pub fn new(catalog_service: Arc<CatalogService>) -> Self {
    Self { catalog_service }
  }

  /// Executes the beer creation use case
  ///
  /// # Errors
  /// Returns `DomainError::Duplicate` when the name is taken and
  /// `DomainError::NotFound` when the style does not exist
  pub async fn execute(
    &self,
    command: CreateBeerCommand,
    requester: &User,
  ) -> Result<Beer, DomainError> {
    let data = BeerData {
      name: command.name,
      abv: command.abv,
      style_id: command.style_id,
    };

    self.catalog_service.create(data, requester).await
  }
}
