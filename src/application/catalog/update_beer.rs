use std::sync::Arc;
use uuid::Uuid;

use crate::domain::account::entities::User;
use crate::domain::catalog::entities::Beer;
use crate::domain::catalog::services::{BeerData, CatalogService};
use crate::domain::errors::DomainError;

/// Command for replacing a beer's mutable fields
#[derive(Debug, Clone)]
pub struct UpdateBeerCommand {
  /// Identifier of the beer being updated
  pub beer_id: Uuid,
  /// New beer name
  pub name: String,
  /// New alcohol by volume
  pub abv: f64,
  /// Identifier of an existing style
  pub style_id: Uuid,
}

/// Use case for updating a beer on behalf of the requester
pub struct UpdateBeerUseCase {
  catalog_service: Arc<CatalogService>,
}

impl UpdateBeerUseCase {
  /// Creates a new instance of UpdateBeerUseCase
  pub fn new(catalog_service: Arc<CatalogService>) -> Self {
    Self { catalog_service }
  }

  /// Executes the beer update use case
  ///
  /// # Errors
  /// Returns `DomainError::Unauthorized` unless the requester is the
  /// beer's creator or an admin
  pub async fn execute(
    &self,
    command: UpdateBeerCommand,
    requester: &User,
  ) -> Result<Beer, DomainError> {
    let data = BeerData {
      name: command.name,
      abv: command.abv,
      style_id: command.style_id,
    };

    self
      .catalog_service
      .update(command.beer_id, data, requester)
      .await
  }
}
