use std::sync::Arc;
use uuid::Uuid;

use crate::domain::catalog::entities::Beer;
use crate::domain::catalog::query::BeerQuery;
use crate::domain::catalog::services::CatalogService;
use crate::domain::errors::DomainError;

/// Command carrying the raw listing parameters as received from the
/// caller; all optional.
#[derive(Debug, Clone, Default)]
pub struct ListBeersCommand {
  pub name: Option<String>,
  pub min_abv: Option<f64>,
  pub max_abv: Option<f64>,
  pub style_id: Option<Uuid>,
  pub sort_by: Option<String>,
  pub sort_order: Option<String>,
}

impl From<ListBeersCommand> for BeerQuery {
  fn from(command: ListBeersCommand) -> Self {
    BeerQuery {
      name: command.name,
      min_abv: command.min_abv,
      max_abv: command.max_abv,
      style_id: command.style_id,
      sort_by: command.sort_by,
      sort_order: command.sort_order,
    }
  }
}

/// Use case for listing beers through the query pipeline
pub struct ListBeersUseCase {
  catalog_service: Arc<CatalogService>,
}

impl ListBeersUseCase {
  /// Creates a new instance of ListBeersUseCase
  pub fn new(catalog_service: Arc<CatalogService>) -> Self {
    Self { catalog_service }
  }

  /// Returns the beers matching the command, filtered and ordered
  pub async fn execute(&self, command: ListBeersCommand) -> Result<Vec<Beer>, DomainError> {
    let query: BeerQuery = command.into();
    self.catalog_service.list(&query).await
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_command_maps_onto_query() {
    let style_id = Uuid::new_v4();
    let command = ListBeersCommand {
      name: Some("ipa".to_string()),
      min_abv: Some(4.0),
      max_abv: Some(8.0),
      style_id: Some(style_id),
      sort_by: Some("abv".to_string()),
      sort_order: Some("desc".to_string()),
    };

    let query: BeerQuery = command.into();
    assert_eq!(query.name.as_deref(), Some("ipa"));
    assert_eq!(query.min_abv, Some(4.0));
    assert_eq!(query.max_abv, Some(8.0));
    assert_eq!(query.style_id, Some(style_id));
    assert_eq!(query.sort_by.as_deref(), Some("abv"));
    assert_eq!(query.sort_order.as_deref(), Some("desc"));
  }
}
