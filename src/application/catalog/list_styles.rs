use std::sync::Arc;
use uuid::Uuid;

use crate::domain::catalog::entities::Style;
use crate::domain::catalog::services::CatalogService;
use crate::domain::errors::DomainError;

/// Use case for reading the style catalog (read-only)
pub struct ListStylesUseCase {
  catalog_service: Arc<CatalogService>,
}

impl ListStylesUseCase {
  /// Creates a new instance of ListStylesUseCase
  pub fn new(catalog_service: Arc<CatalogService>) -> Self {
    Self { catalog_service }
  }

  /// Returns every style
  pub async fn execute(&self) -> Result<Vec<Style>, DomainError> {
    self.catalog_service.list_styles().await
  }

  /// Fetches a style by id
  pub async fn execute_by_id(&self, style_id: Uuid) -> Result<Style, DomainError> {
    self.catalog_service.get_style(style_id).await
  }
}
