use actix_web::{HttpResponse, web};
use std::sync::Arc;
use uuid::Uuid;

use crate::adapters::http::{dtos::StyleResponse, errors::ApiError};
use crate::application::catalog::ListStylesUseCase;

/// Handler for listing styles
///
/// GET /api/styles
pub async fn list_styles_handler(
  use_case: web::Data<Arc<ListStylesUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let styles = use_case.execute().await?;
  let response: Vec<StyleResponse> = styles.into_iter().map(StyleResponse::from).collect();

  Ok(HttpResponse::Ok().json(response))
}

/// Handler for fetching a single style
///
/// GET /api/styles/{style_id}
pub async fn get_style_handler(
  path: web::Path<Uuid>,
  use_case: web::Data<Arc<ListStylesUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let style = use_case.execute_by_id(path.into_inner()).await?;

  Ok(HttpResponse::Ok().json(StyleResponse::from(style)))
}
