use std::sync::Arc;
use uuid::Uuid;

use crate::domain::account::entities::User;
use crate::domain::account::services::WishlistService;
use crate::domain::catalog::services::CatalogService;
use crate::domain::errors::DomainError;

/// Use case for removing a beer from a user's wishlist
pub struct RemoveBeerFromWishlistUseCase {
  wishlist_service: Arc<WishlistService>,
  catalog_service: Arc<CatalogService>,
}

impl RemoveBeerFromWishlistUseCase {
  /// Creates a new instance of RemoveBeerFromWishlistUseCase
  pub fn new(
    wishlist_service: Arc<WishlistService>,
    catalog_service: Arc<CatalogService>,
  ) -> Self {
    Self {
      wishlist_service,
      catalog_service,
    }
  }

  /// Executes the wishlist removal
  ///
  /// # Errors
  /// Returns `DomainError::NotFound` when the beer does not exist or is
  /// not a member of the target's wishlist
  pub async fn execute(
    &self,
    requester: &User,
    beer_id: Uuid,
    target_user_id: Uuid,
  ) -> Result<(), DomainError> {
    let beer = self.catalog_service.get_by_id(beer_id).await?;
    self
      .wishlist_service
      .remove_from_wishlist(requester, &beer, target_user_id)
      .await
  }
}
