use actix_web::{HttpRequest, HttpResponse, web};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::adapters::http::{
  dtos::{BeerResponse, CreateUserRequest, UpdateUserRequest, UserResponse},
  errors::ApiError,
  identity::RequesterResolver,
};
use crate::application::account::{
  CreateUserCommand, CreateUserUseCase, DeleteUserUseCase, GetUserUseCase, ListUsersUseCase,
  UpdateUserCommand, UpdateUserUseCase,
};
use crate::application::wishlist::{
  AddBeerToWishlistUseCase, GetWishlistUseCase, RemoveBeerFromWishlistUseCase,
};

/// Handler for listing users
///
/// GET /api/users
pub async fn list_users_handler(
  use_case: web::Data<Arc<ListUsersUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let users = use_case.execute().await?;
  let response: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();

  Ok(HttpResponse::Ok().json(response))
}

/// Handler for fetching a single user
///
/// GET /api/users/{user_id}
pub async fn get_user_handler(
  path: web::Path<Uuid>,
  use_case: web::Data<Arc<GetUserUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let user = use_case.execute(path.into_inner()).await?;

  Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// Handler for account creation
///
/// POST /api/users
/// Body: CreateUserRequest (JSON)
/// Response: UserResponse (JSON) with status 201
pub async fn create_user_handler(
  request: web::Json<CreateUserRequest>,
  use_case: web::Data<Arc<CreateUserUseCase>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;

  let command = CreateUserCommand {
    username: request.username.clone(),
    email: request.email.clone(),
    password: request.password.clone(),
    first_name: request.first_name.clone(),
    last_name: request.last_name.clone(),
  };

  let user = use_case.execute(command).await?;

  Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

/// Handler for account update (full-record replace)
///
/// PUT /api/users/{user_id}
pub async fn update_user_handler(
  path: web::Path<Uuid>,
  request: web::Json<UpdateUserRequest>,
  use_case: web::Data<Arc<UpdateUserUseCase>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;

  let command = UpdateUserCommand {
    user_id: path.into_inner(),
    email: request.email.clone(),
    password: request.password.clone(),
    first_name: request.first_name.clone(),
    last_name: request.last_name.clone(),
  };

  let user = use_case.execute(command).await?;

  Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// Handler for account deletion
///
/// DELETE /api/users/{user_id}
/// Headers: Authorization: <username>
pub async fn delete_user_handler(
  path: web::Path<Uuid>,
  use_case: web::Data<Arc<DeleteUserUseCase>>,
  resolver: web::Data<Arc<RequesterResolver>>,
  http_req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
  let requester = resolver.try_get_requester(&http_req).await?;
  use_case.execute(path.into_inner(), &requester).await?;

  Ok(HttpResponse::NoContent().finish())
}

/// Handler for reading a user's wishlist
///
/// GET /api/users/{user_id}/wishlist
/// Headers: Authorization: <username>
pub async fn get_wishlist_handler(
  path: web::Path<Uuid>,
  use_case: web::Data<Arc<GetWishlistUseCase>>,
  resolver: web::Data<Arc<RequesterResolver>>,
  http_req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
  let requester = resolver.try_get_requester(&http_req).await?;
  let wishlist = use_case.execute(&requester, path.into_inner()).await?;
  let response: Vec<BeerResponse> = wishlist.into_iter().map(BeerResponse::from).collect();

  Ok(HttpResponse::Ok().json(response))
}

/// Handler for adding a beer to a user's wishlist
///
/// POST /api/users/{user_id}/wishlist/{beer_id}
/// Headers: Authorization: <username>
pub async fn add_to_wishlist_handler(
  path: web::Path<(Uuid, Uuid)>,
  use_case: web::Data<Arc<AddBeerToWishlistUseCase>>,
  resolver: web::Data<Arc<RequesterResolver>>,
  http_req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
  let (user_id, beer_id) = path.into_inner();
  let requester = resolver.try_get_requester(&http_req).await?;
  use_case.execute(&requester, beer_id, user_id).await?;

  Ok(HttpResponse::NoContent().finish())
}

/// Handler for removing a beer from a user's wishlist
///
/// DELETE /api/users/{user_id}/wishlist/{beer_id}
/// Headers: Authorization: <username>
pub async fn remove_from_wishlist_handler(
  path: web::Path<(Uuid, Uuid)>,
  use_case: web::Data<Arc<RemoveBeerFromWishlistUseCase>>,
  resolver: web::Data<Arc<RequesterResolver>>,
  http_req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
  let (user_id, beer_id) = path.into_inner();
  let requester = resolver.try_get_requester(&http_req).await?;
  use_case.execute(&requester, beer_id, user_id).await?;

  Ok(HttpResponse::NoContent().finish())
}
