pub mod dtos;
pub mod errors;
pub mod handlers;
pub mod identity;
pub mod routes;

// Re-export commonly used types
pub use dtos::{
  BeerListParams, BeerRequest, BeerResponse, CreateUserRequest, ErrorResponse, StyleResponse,
  UpdateUserRequest, UserResponse,
};
pub use errors::ApiError;
pub use identity::RequesterResolver;
pub use routes::{
  BeerRouteDependencies, UserRouteDependencies, configure_beer_routes, configure_style_routes,
  configure_user_routes,
};
