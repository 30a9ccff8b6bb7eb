pub mod beer_repository;
pub mod style_repository;
pub mod user_repository;

pub use beer_repository::PostgresBeerRepository;
pub use style_repository::PostgresStyleRepository;
pub use user_repository::PostgresUserRepository;
