pub mod entities;
pub mod policy;
pub mod ports;
pub mod services;

// Re-export commonly used types
pub use entities::User;
pub use services::{UserService, WishlistService};
