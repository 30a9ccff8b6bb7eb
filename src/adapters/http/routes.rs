use actix_web::web;
use std::sync::Arc;

use crate::application::account::{
  CreateUserUseCase, DeleteUserUseCase, GetUserUseCase, ListUsersUseCase, UpdateUserUseCase,
};
use crate::application::catalog::{
  CreateBeerUseCase, DeleteBeerUseCase, GetBeerUseCase, ListBeersUseCase, ListStylesUseCase,
  UpdateBeerUseCase,
};
use crate::application::wishlist::{
  AddBeerToWishlistUseCase, GetWishlistUseCase, RemoveBeerFromWishlistUseCase,
};

use super::handlers::beers::{
  create_beer_handler, delete_beer_handler, get_beer_handler, list_beers_handler,
  update_beer_handler,
};
use super::handlers::styles::{get_style_handler, list_styles_handler};
use super::handlers::users::{
  add_to_wishlist_handler, create_user_handler, delete_user_handler, get_user_handler,
  get_wishlist_handler, list_users_handler, remove_from_wishlist_handler, update_user_handler,
};
use super::identity::RequesterResolver;

/// Use cases wired into the user routes
pub struct UserRouteDependencies {
  pub list_users_use_case: Arc<ListUsersUseCase>,
  pub get_user_use_case: Arc<GetUserUseCase>,
  pub create_user_use_case: Arc<CreateUserUseCase>,
  pub update_user_use_case: Arc<UpdateUserUseCase>,
  pub delete_user_use_case: Arc<DeleteUserUseCase>,
  pub get_wishlist_use_case: Arc<GetWishlistUseCase>,
  pub add_to_wishlist_use_case: Arc<AddBeerToWishlistUseCase>,
  pub remove_from_wishlist_use_case: Arc<RemoveBeerFromWishlistUseCase>,
  pub resolver: Arc<RequesterResolver>,
}

/// Configure user and wishlist routes
///
/// Mounts all account endpoints under the provided scope (e.g. /api/users).
///
/// # Routes
///
/// - GET / - List every user
/// - POST / - Create an account
/// - GET /{user_id} - Fetch an account
/// - PUT /{user_id} - Replace an account's mutable fields
/// - DELETE /{user_id} - Delete an account (requester gated)
/// - GET /{user_id}/wishlist - Read the wishlist (requester gated)
/// - POST /{user_id}/wishlist/{beer_id} - Add a beer (requester gated)
/// - DELETE /{user_id}/wishlist/{beer_id} - Remove a beer (requester gated)
pub fn configure_user_routes(cfg: &mut web::ServiceConfig, deps: UserRouteDependencies) {
  cfg
    .app_data(web::Data::new(deps.list_users_use_case))
    .app_data(web::Data::new(deps.get_user_use_case))
    .app_data(web::Data::new(deps.create_user_use_case))
    .app_data(web::Data::new(deps.update_user_use_case))
    .app_data(web::Data::new(deps.delete_user_use_case))
    .app_data(web::Data::new(deps.get_wishlist_use_case))
    .app_data(web::Data::new(deps.add_to_wishlist_use_case))
    .app_data(web::Data::new(deps.remove_from_wishlist_use_case))
    .app_data(web::Data::new(deps.resolver))
    .route("", web::get().to(list_users_handler))
    .route("", web::post().to(create_user_handler))
    .route("/{user_id}", web::get().to(get_user_handler))
    .route("/{user_id}", web::put().to(update_user_handler))
    .route("/{user_id}", web::delete().to(delete_user_handler))
    .route("/{user_id}/wishlist", web::get().to(get_wishlist_handler))
    .route(
      "/{user_id}/wishlist/{beer_id}",
      web::post().to(add_to_wishlist_handler),
    )
    .route(
      "/{user_id}/wishlist/{beer_id}",
      web::delete().to(remove_from_wishlist_handler),
    );
}

/// Use cases wired into the beer routes
pub struct BeerRouteDependencies {
  pub list_beers_use_case: Arc<ListBeersUseCase>,
  pub get_beer_use_case: Arc<GetBeerUseCase>,
  pub create_beer_use_case: Arc<CreateBeerUseCase>,
  pub update_beer_use_case: Arc<UpdateBeerUseCase>,
  pub delete_beer_use_case: Arc<DeleteBeerUseCase>,
  pub resolver: Arc<RequesterResolver>,
}

/// Configure beer catalog routes
///
/// Mounts all catalog endpoints under the provided scope (e.g. /api/beers).
///
/// # Routes
///
/// - GET / - List beers, filtered/sorted by query parameters
/// - POST / - Create a beer (requester gated)
/// - GET /{beer_id} - Fetch a beer
/// - PUT /{beer_id} - Replace a beer (creator or admin)
/// - DELETE /{beer_id} - Delete a beer (creator or admin)
pub fn configure_beer_routes(cfg: &mut web::ServiceConfig, deps: BeerRouteDependencies) {
  cfg
    .app_data(web::Data::new(deps.list_beers_use_case))
    .app_data(web::Data::new(deps.get_beer_use_case))
    .app_data(web::Data::new(deps.create_beer_use_case))
    .app_data(web::Data::new(deps.update_beer_use_case))
    .app_data(web::Data::new(deps.delete_beer_use_case))
    .app_data(web::Data::new(deps.resolver))
    .route("", web::get().to(list_beers_handler))
    .route("", web::post().to(create_beer_handler))
    .route("/{beer_id}", web::get().to(get_beer_handler))
    .route("/{beer_id}", web::put().to(update_beer_handler))
    .route("/{beer_id}", web::delete().to(delete_beer_handler));
}

/// Configure style routes (read-only)
///
/// # Routes
///
/// - GET / - List every style
/// - GET /{style_id} - Fetch a style
pub fn configure_style_routes(cfg: &mut web::ServiceConfig, use_case: Arc<ListStylesUseCase>) {
  cfg
    .app_data(web::Data::new(use_case))
    .route("", web::get().to(list_styles_handler))
    .route("/{style_id}", web::get().to(get_style_handler));
}
