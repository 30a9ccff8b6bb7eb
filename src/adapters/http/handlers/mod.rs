pub mod beers;
pub mod styles;
pub mod users;
