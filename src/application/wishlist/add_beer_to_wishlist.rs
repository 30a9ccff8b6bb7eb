use std::sync::Arc;
use uuid::Uuid;

use crate::domain::account::entities::User;
use crate::domain::account::services::WishlistService;
use crate::domain::catalog::services::CatalogService;
use crate::domain::errors::DomainError;

/// Use case for adding a beer to a user's wishlist.
///
/// The beer reference is resolved from the catalog before the membership
/// change, so an unknown beer id fails `NotFound` instead of creating a
/// dangling entry.
pub struct AddBeerToWishlistUseCase {
  wishlist_service: Arc<WishlistService>,
  catalog_service: Arc<CatalogService>,
}

impl AddBeerToWishlistUseCase {
  /// Creates a new instance of AddBeerToWishlistUseCase
  pub fn new(
    wishlist_service: Arc<WishlistService>,
    catalog_service: Arc<CatalogService>,
  ) -> Self {
    Self {
      wishlist_service,
      catalog_service,
    }
  }

  /// Executes the wishlist addition. Adding a beer that is already on the
  /// wishlist succeeds as a no-op.
  pub async fn execute(
    &self,
    requester: &User,
    beer_id: Uuid,
    target_user_id: Uuid,
  ) -> Result<(), DomainError> {
    let beer = self.catalog_service.get_by_id(beer_id).await?;
    self
      .wishlist_service
      .add_to_wishlist(requester, &beer, target_user_id)
      .await
  }
}
