use actix_web::{App, HttpServer, middleware::Logger, web};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use taproom::{
  adapters::http::{
    BeerRouteDependencies, RequesterResolver, UserRouteDependencies, configure_beer_routes,
    configure_style_routes, configure_user_routes,
  },
  application::account::{
    CreateUserUseCase, DeleteUserUseCase, GetUserUseCase, ListUsersUseCase, UpdateUserUseCase,
  },
  application::catalog::{
    CreateBeerUseCase, DeleteBeerUseCase, GetBeerUseCase, ListBeersUseCase, ListStylesUseCase,
    UpdateBeerUseCase,
  },
  application::wishlist::{
    AddBeerToWishlistUseCase, GetWishlistUseCase, RemoveBeerFromWishlistUseCase,
  },
  domain::account::services::{UserService, WishlistService},
  domain::catalog::services::CatalogService,
  infrastructure::{
    config::Config,
    persistence::postgres::{
      PostgresBeerRepository, PostgresStyleRepository, PostgresUserRepository,
    },
  },
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize environment variables from .env file
  dotenvy::dotenv().ok();

  // Initialize tracing subscriber for logging
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "taproom=debug,actix_web=info".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  tracing::info!("Starting Taproom application");

  // Load configuration
  let config = Config::load().expect("Failed to load configuration");
  tracing::info!("Configuration loaded successfully");

  // Set up database connection pool with timeout
  tracing::info!("Connecting to database: {}", config.database.url);

  let db_pool = tokio::time::timeout(
    Duration::from_secs(config.database.connect_timeout_seconds),
    PgPoolOptions::new()
      .max_connections(config.database.max_connections)
      .acquire_timeout(Duration::from_secs(config.database.acquire_timeout_seconds))
      .connect(&config.database.url),
  )
  .await
  .map_err(|_| {
    tracing::error!(
      "Database connection timed out after {} seconds. Is PostgreSQL running?",
      config.database.connect_timeout_seconds
    );
    std::io::Error::new(
      std::io::ErrorKind::TimedOut,
      format!(
        "Database connection timed out after {} seconds",
        config.database.connect_timeout_seconds
      ),
    )
  })?
  .map_err(|e| {
    tracing::error!("Failed to connect to database: {}", e);
    match e {
      sqlx::Error::Io(_) => std::io::Error::new(
        std::io::ErrorKind::ConnectionRefused,
        format!(
          "Could not connect to database. Is PostgreSQL running at {}?",
          config.database.url
        ),
      ),
      _ => std::io::Error::other(format!("Database error: {}", e)),
    }
  })?;

  tracing::info!("Database connection pool created");

  // Run database migrations
  tracing::info!("Running database migrations");
  sqlx::migrate!("./migrations")
    .run(&db_pool)
    .await
    .expect("Failed to run database migrations");
  tracing::info!("Database migrations completed");

  // Initialize repositories
  let user_repo = Arc::new(PostgresUserRepository::new(db_pool.clone()));
  let beer_repo = Arc::new(PostgresBeerRepository::new(db_pool.clone()));
  let style_repo = Arc::new(PostgresStyleRepository::new(db_pool.clone()));

  // Initialize domain services
  let user_service = Arc::new(UserService::new(user_repo.clone()));
  let wishlist_service = Arc::new(WishlistService::new(user_repo.clone()));
  let catalog_service = Arc::new(CatalogService::new(beer_repo.clone(), style_repo.clone()));

  // Initialize account use cases
  let list_users_use_case = Arc::new(ListUsersUseCase::new(user_service.clone()));
  let get_user_use_case = Arc::new(GetUserUseCase::new(user_service.clone()));
  let create_user_use_case = Arc::new(CreateUserUseCase::new(user_service.clone()));
  let update_user_use_case = Arc::new(UpdateUserUseCase::new(user_service.clone()));
  let delete_user_use_case = Arc::new(DeleteUserUseCase::new(user_service.clone()));

  // Initialize wishlist use cases
  let get_wishlist_use_case = Arc::new(GetWishlistUseCase::new(wishlist_service.clone()));
  let add_to_wishlist_use_case = Arc::new(AddBeerToWishlistUseCase::new(
    wishlist_service.clone(),
    catalog_service.clone(),
  ));
  let remove_from_wishlist_use_case = Arc::new(RemoveBeerFromWishlistUseCase::new(
    wishlist_service.clone(),
    catalog_service.clone(),
  ));

  // Initialize catalog use cases
  let list_beers_use_case = Arc::new(ListBeersUseCase::new(catalog_service.clone()));
  let get_beer_use_case = Arc::new(GetBeerUseCase::new(catalog_service.clone()));
  let create_beer_use_case = Arc::new(CreateBeerUseCase::new(catalog_service.clone()));
  let update_beer_use_case = Arc::new(UpdateBeerUseCase::new(catalog_service.clone()));
  let delete_beer_use_case = Arc::new(DeleteBeerUseCase::new(catalog_service.clone()));
  let list_styles_use_case = Arc::new(ListStylesUseCase::new(catalog_service.clone()));

  // Requester resolution from the Authorization header
  let resolver = Arc::new(RequesterResolver::new(user_service.clone()));

  let server_host = config.server.host.clone();
  let server_port = config.server.port;

  tracing::info!("Starting HTTP server on {}:{}", server_host, server_port);

  // Create and start the HTTP server
  HttpServer::new(move || {
    App::new()
      // Add logging middleware
      .wrap(Logger::default())
      // Configure account and wishlist routes
      .service(web::scope("/api/users").configure(|cfg| {
        configure_user_routes(
          cfg,
          UserRouteDependencies {
            list_users_use_case: list_users_use_case.clone(),
            get_user_use_case: get_user_use_case.clone(),
            create_user_use_case: create_user_use_case.clone(),
            update_user_use_case: update_user_use_case.clone(),
            delete_user_use_case: delete_user_use_case.clone(),
            get_wishlist_use_case: get_wishlist_use_case.clone(),
            add_to_wishlist_use_case: add_to_wishlist_use_case.clone(),
            remove_from_wishlist_use_case: remove_from_wishlist_use_case.clone(),
            resolver: resolver.clone(),
          },
        )
      }))
      // Configure beer catalog routes
      .service(web::scope("/api/beers").configure(|cfg| {
        configure_beer_routes(
          cfg,
          BeerRouteDependencies {
            list_beers_use_case: list_beers_use_case.clone(),
            get_beer_use_case: get_beer_use_case.clone(),
            create_beer_use_case: create_beer_use_case.clone(),
            update_beer_use_case: update_beer_use_case.clone(),
            delete_beer_use_case: delete_beer_use_case.clone(),
            resolver: resolver.clone(),
          },
        )
      }))
      // Configure style routes
      .service(
        web::scope("/api/styles")
          .configure(|cfg| configure_style_routes(cfg, list_styles_use_case.clone())),
      )
      // Health check endpoint
      .route("/health", web::get().to(health_check))
  })
  .bind((server_host.as_str(), server_port))?
  .run()
  .await
}

/// Health check endpoint
async fn health_check() -> &'static str {
  "OK"
}
