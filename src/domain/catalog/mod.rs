pub mod entities;
pub mod ports;
pub mod query;
pub mod services;

// Re-export commonly used types
pub use entities::{Beer, Style};
pub use query::BeerQuery;
pub use services::{BeerData, CatalogService};
