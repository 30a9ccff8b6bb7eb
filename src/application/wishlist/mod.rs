//! Wishlist use cases

mod add_beer_to_wishlist;
mod get_wishlist;
mod remove_beer_from_wishlist;

pub use add_beer_to_wishlist::AddBeerToWishlistUseCase;
pub use get_wishlist::GetWishlistUseCase;
pub use remove_beer_from_wishlist::RemoveBeerFromWishlistUseCase;
