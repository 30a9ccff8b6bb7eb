use std::sync::Arc;
use uuid::Uuid;

use crate::domain::account::entities::User;
use crate::domain::account::services::WishlistService;
use crate::domain::catalog::entities::Beer;
use crate::domain::errors::DomainError;

/// Use case for reading a user's wishlist
pub struct GetWishlistUseCase {
  wishlist_service: Arc<WishlistService>,
}

impl GetWishlistUseCase {
  /// Creates a new instance of GetWishlistUseCase
  pub fn new(wishlist_service: Arc<WishlistService>) -> Self {
    Self { wishlist_service }
  }

  /// Returns the target user's wishlist
  ///
  /// # Errors
  /// Returns `DomainError::Unauthorized` unless the requester is an admin
  /// or the target user
  pub async fn execute(
    &self,
    requester: &User,
    target_user_id: Uuid,
  ) -> Result<Vec<Beer>, DomainError> {
    self
      .wishlist_service
      .get_wishlist(requester, target_user_id)
      .await
  }
}
