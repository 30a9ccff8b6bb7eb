use std::sync::Arc;
use uuid::Uuid;

use super::entities::{Beer, Style};
use super::ports::{BeerRepository, StyleRepository};
use super::query::{self, BeerQuery};
use crate::domain::account::entities::User;
use crate::domain::account::policy;
use crate::domain::errors::{DomainError, RepositoryError};

/// Mutable beer fields, as accepted by create and update
#[derive(Debug, Clone)]
pub struct BeerData {
  pub name: String,
  pub abv: f64,
  pub style_id: Uuid,
}

/// Catalog service for beers and styles.
///
/// Listing fetches the raw collection from storage and runs the query
/// pipeline in memory. Mutations resolve the style reference fresh on
/// every call and gate on the requester being the beer's creator or an
/// admin.
pub struct CatalogService {
  beer_repo: Arc<dyn BeerRepository>,
  style_repo: Arc<dyn StyleRepository>,
}

impl CatalogService {
  /// Creates a new instance of CatalogService
  pub fn new(beer_repo: Arc<dyn BeerRepository>, style_repo: Arc<dyn StyleRepository>) -> Self {
    Self {
      beer_repo,
      style_repo,
    }
  }

  /// Lists beers matching the query, in query order
  pub async fn list(&self, query: &BeerQuery) -> Result<Vec<Beer>, DomainError> {
    let beers = self.beer_repo.list_all().await?;
    Ok(query::apply(beers, query))
  }

  /// Fetches a beer by id
  ///
  /// # Errors
  /// Returns `DomainError::NotFound` if no such beer exists
  pub async fn get_by_id(&self, id: Uuid) -> Result<Beer, DomainError> {
    self
      .beer_repo
      .find_by_id(id)
      .await?
      .ok_or_else(|| DomainError::not_found("Beer", "id", id.to_string()))
  }

  /// Fetches a beer by name
  pub async fn get_by_name(&self, name: &str) -> Result<Beer, DomainError> {
    self
      .beer_repo
      .find_by_name(name)
      .await?
      .ok_or_else(|| DomainError::not_found("Beer", "name", name))
  }

  /// Creates a beer on behalf of the requester.
  ///
  /// # Errors
  /// Returns `DomainError::Duplicate` if the name is taken and
  /// `DomainError::NotFound` if the style does not exist
  pub async fn create(&self, data: BeerData, requester: &User) -> Result<Beer, DomainError> {
    if self.beer_repo.find_by_name(&data.name).await?.is_some() {
      return Err(DomainError::duplicate("Beer", "name", data.name));
    }

    let style = self.resolve_style(data.style_id).await?;
    let name = data.name.clone();
    let beer = Beer::new(data.name, data.abv, style, requester.id);

    // The lookup above is only the fast path; a concurrent create can
    // still hit the unique index.
    match self.beer_repo.create(beer).await {
      Ok(created) => Ok(created),
      Err(DomainError::Repository(RepositoryError::DuplicateKey(_))) => {
        Err(DomainError::duplicate("Beer", "name", name))
      }
      Err(e) => Err(e),
    }
  }

  /// Replaces a beer's mutable fields.
  ///
  /// Only the creator or an admin may update a beer. The name uniqueness
  /// check excludes the beer itself, so an unchanged name is not a
  /// conflict.
  pub async fn update(
    &self,
    id: Uuid,
    data: BeerData,
    requester: &User,
  ) -> Result<Beer, DomainError> {
    let mut beer = self.get_by_id(id).await?;
    self.authorize_mutation(&beer, requester, "modify")?;

    if let Some(existing) = self.beer_repo.find_by_name(&data.name).await? {
      if existing.id != beer.id {
        return Err(DomainError::duplicate("Beer", "name", data.name));
      }
    }

    let style = self.resolve_style(data.style_id).await?;
    beer.update(data.name, data.abv, style);
    self.beer_repo.update(beer).await
  }

  /// Deletes a beer. Only the creator or an admin may delete it.
  pub async fn delete(&self, id: Uuid, requester: &User) -> Result<(), DomainError> {
    let beer = self.get_by_id(id).await?;
    self.authorize_mutation(&beer, requester, "delete")?;
    self.beer_repo.delete(id).await
  }

  /// Lists every style
  pub async fn list_styles(&self) -> Result<Vec<Style>, DomainError> {
    self.style_repo.list_all().await
  }

  /// Fetches a style by id
  pub async fn get_style(&self, id: Uuid) -> Result<Style, DomainError> {
    self.resolve_style(id).await
  }

  async fn resolve_style(&self, id: Uuid) -> Result<Style, DomainError> {
    self
      .style_repo
      .find_by_id(id)
      .await?
      .ok_or_else(|| DomainError::not_found("Style", "id", id.to_string()))
  }

  fn authorize_mutation(
    &self,
    beer: &Beer,
    requester: &User,
    action: &str,
  ) -> Result<(), DomainError> {
    if !policy::is_authorized(requester, beer.created_by) {
      return Err(DomainError::Unauthorized(format!(
        "You are not authorized to {} this beer.",
        action
      )));
    }
    Ok(())
  }
}
