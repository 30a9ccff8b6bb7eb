use actix_web::{HttpRequest, HttpResponse, web};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::adapters::http::{
  dtos::{BeerListParams, BeerRequest, BeerResponse},
  errors::ApiError,
  identity::RequesterResolver,
};
use crate::application::catalog::{
  CreateBeerCommand, CreateBeerUseCase, DeleteBeerUseCase, GetBeerUseCase, ListBeersCommand,
  ListBeersUseCase, UpdateBeerCommand, UpdateBeerUseCase,
};

/// Handler for listing beers through the query pipeline
///
/// GET /api/beers?name=&min_abv=&max_abv=&style_id=&sort_by=&sort_order=
pub async fn list_beers_handler(
  params: web::Query<BeerListParams>,
  use_case: web::Data<Arc<ListBeersUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let params = params.into_inner();
  let command = ListBeersCommand {
    name: params.name,
    min_abv: params.min_abv,
    max_abv: params.max_abv,
    style_id: params.style_id,
    sort_by: params.sort_by,
    sort_order: params.sort_order,
  };

  let beers = use_case.execute(command).await?;
  let response: Vec<BeerResponse> = beers.into_iter().map(BeerResponse::from).collect();

  Ok(HttpResponse::Ok().json(response))
}

/// Handler for fetching a single beer
///
/// GET /api/beers/{beer_id}
pub async fn get_beer_handler(
  path: web::Path<Uuid>,
  use_case: web::Data<Arc<GetBeerUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let beer = use_case.execute(path.into_inner()).await?;

  Ok(HttpResponse::Ok().json(BeerResponse::from(beer)))
}

/// Handler for beer creation
///
/// POST /api/beers
/// Headers: Authorization: <username>
/// Body: BeerRequest (JSON)
/// Response: BeerResponse (JSON) with status 201
pub async fn create_beer_handler(
  request: web::Json<BeerRequest>,
  use_case: web::Data<Arc<CreateBeerUseCase>>,
  resolver: web::Data<Arc<RequesterResolver>>,
  http_req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;

  let requester = resolver.try_get_requester(&http_req).await?;
  let command = CreateBeerCommand {
    name: request.name.clone(),
    abv: request.abv,
    style_id: request.style_id,
  };

  let beer = use_case.execute(command, &requester).await?;

  Ok(HttpResponse::Created().json(BeerResponse::from(beer)))
}

/// Handler for beer update
///
/// PUT /api/beers/{beer_id}
/// Headers: Authorization: <username>
pub async fn update_beer_handler(
  path: web::Path<Uuid>,
  request: web::Json<BeerRequest>,
  use_case: web::Data<Arc<UpdateBeerUseCase>>,
  resolver: web::Data<Arc<RequesterResolver>>,
  http_req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;

  let requester = resolver.try_get_requester(&http_req).await?;
  let command = UpdateBeerCommand {
    beer_id: path.into_inner(),
    name: request.name.clone(),
    abv: request.abv,
    style_id: request.style_id,
  };

  let beer = use_case.execute(command, &requester).await?;

  Ok(HttpResponse::Ok().json(BeerResponse::from(beer)))
}

/// Handler for beer deletion
///
/// DELETE /api/beers/{beer_id}
/// Headers: Authorization: <username>
pub async fn delete_beer_handler(
  path: web::Path<Uuid>,
  use_case: web::Data<Arc<DeleteBeerUseCase>>,
  resolver: web::Data<Arc<RequesterResolver>>,
  http_req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
  let requester = resolver.try_get_requester(&http_req).await?;
  use_case.execute(path.into_inner(), &requester).await?;

  Ok(HttpResponse::NoContent().finish())
}
