//! Catalog use cases
//!
//! Listing goes through the in-memory query pipeline; mutations are gated
//! on the requester owning the beer or being an admin.

mod create_beer;
mod delete_beer;
mod get_beer;
mod list_beers;
mod list_styles;
mod update_beer;

pub use create_beer::{CreateBeerCommand, CreateBeerUseCase};
pub use delete_beer::DeleteBeerUseCase;
pub use get_beer::GetBeerUseCase;
pub use list_beers::{ListBeersCommand, ListBeersUseCase};
pub use list_styles::ListStylesUseCase;
pub use update_beer::{UpdateBeerCommand, UpdateBeerUseCase};
