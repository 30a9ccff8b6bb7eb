use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::account::{entities::User, ports::UserRepository};
use crate::domain::catalog::entities::Beer;
use crate::domain::errors::{DomainError, RepositoryError};

use super::beer_repository::BeerRow;

/// PostgreSQL implementation of the UserRepository trait
pub struct PostgresUserRepository {
  pool: PgPool,
}

impl PostgresUserRepository {
  /// Creates a new instance of PostgresUserRepository
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

/// Database row structure for the users table
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
  id: Uuid,
  username: String,
  email: String,
  password: String,
  first_name: String,
  last_name: String,
  is_admin: bool,
  created_at: DateTime<Utc>,
  updated_at: DateTime<Utc>,
}

impl From<UserRow> for User {
  fn from(row: UserRow) -> Self {
    User::from_db(
      row.id,
      row.username,
      row.email,
      row.password,
      row.first_name,
      row.last_name,
      row.is_admin,
      row.created_at,
      row.updated_at,
    )
  }
}

const SELECT_USER: &str = r#"
    SELECT
        user_id AS id,
        username,
        email,
        password,
        first_name,
        last_name,
        is_admin,
        created_at,
        updated_at
    FROM users
    "#;

#[async_trait]
impl UserRepository for PostgresUserRepository {
  async fn list_all(&self) -> Result<Vec<User>, DomainError> {
    let rows = sqlx::query_as::<_, UserRow>(SELECT_USER)
      .fetch_all(&self.pool)
      .await
      .map_err(RepositoryError::from)?;

    Ok(rows.into_iter().map(User::from).collect())
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
    let sql = format!("{} WHERE user_id = $1", SELECT_USER);
    let row = sqlx::query_as::<_, UserRow>(&sql)
      .bind(id)
      .fetch_optional(&self.pool)
      .await
      .map_err(RepositoryError::from)?;

    Ok(row.map(User::from))
  }

  async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
    let sql = format!("{} WHERE username = $1", SELECT_USER);
    let row = sqlx::query_as::<_, UserRow>(&sql)
      .bind(username)
      .fetch_optional(&self.pool)
      .await
      .map_err(RepositoryError::from)?;

    Ok(row.map(User::from))
  }

  async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
    let sql = format!("{} WHERE email = $1", SELECT_USER);
    let row = sqlx::query_as::<_, UserRow>(&sql)
      .bind(email)
      .fetch_optional(&self.pool)
      .await
      .map_err(RepositoryError::from)?;

    Ok(row.map(User::from))
  }

  async fn create(&self, user: User) -> Result<User, DomainError> {
    let row = sqlx::query_as::<_, UserRow>(
      r#"
            INSERT INTO users (
                user_id,
                username,
                email,
                password,
                first_name,
                last_name,
                is_admin,
                created_at,
                updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING
                user_id AS id,
                username,
                email,
                password,
                first_name,
                last_name,
                is_admin,
                created_at,
                updated_at
            "#,
    )
    .bind(user.id)
    .bind(&user.username)
    .bind(&user.email)
    .bind(&user.password)
    .bind(&user.first_name)
    .bind(&user.last_name)
    .bind(user.is_admin)
    .bind(user.created_at)
    .bind(user.updated_at)
    .fetch_one(&self.pool)
    .await
    .map_err(RepositoryError::from)?;

    Ok(row.into())
  }

  async fn update(&self, user: User) -> Result<User, DomainError> {
    let row = sqlx::query_as::<_, UserRow>(
      r#"
            UPDATE users
            SET
                username = $2,
                email = $3,
                password = $4,
                first_name = $5,
                last_name = $6,
                is_admin = $7,
                updated_at = $8
            WHERE user_id = $1
            RETURNING
                user_id AS id,
                username,
                email,
                password,
                first_name,
                last_name,
                is_admin,
                created_at,
                updated_at
            "#,
    )
    .bind(user.id)
    .bind(&user.username)
    .bind(&user.email)
    .bind(&user.password)
    .bind(&user.first_name)
    .bind(&user.last_name)
    .bind(user.is_admin)
    .bind(user.updated_at)
    .fetch_one(&self.pool)
    .await
    .map_err(RepositoryError::from)?;

    Ok(row.into())
  }

  async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
    let result = sqlx::query("DELETE FROM users WHERE user_id = $1")
      .bind(id)
      .execute(&self.pool)
      .await
      .map_err(RepositoryError::from)?;

    if result.rows_affected() == 0 {
      return Err(DomainError::Repository(RepositoryError::NotFound));
    }
    Ok(())
  }

  async fn get_wishlist(&self, user_id: Uuid) -> Result<Vec<Beer>, DomainError> {
    let rows = sqlx::query_as::<_, BeerRow>(
      r#"
            SELECT
                b.beer_id AS id,
                b.name,
                b.abv,
                b.style_id,
                s.name AS style_name,
                b.created_by,
                b.created_at,
                b.updated_at
            FROM wishlist_items w
            JOIN beers b ON b.beer_id = w.beer_id
            JOIN styles s ON s.style_id = b.style_id
            WHERE w.user_id = $1
            ORDER BY w.added_at
            "#,
    )
    .bind(user_id)
    .fetch_all(&self.pool)
    .await
    .map_err(RepositoryError::from)?;

    Ok(rows.into_iter().map(Beer::from).collect())
  }

  async fn add_to_wishlist(&self, user_id: Uuid, beer_id: Uuid) -> Result<(), DomainError> {
    // ON CONFLICT keeps the operation idempotent even when two adds race.
    sqlx::query(
      r#"
            INSERT INTO wishlist_items (user_id, beer_id)
            VALUES ($1, $2)
            ON CONFLICT (user_id, beer_id) DO NOTHING
            "#,
    )
    .bind(user_id)
    .bind(beer_id)
    .execute(&self.pool)
    .await
    .map_err(RepositoryError::from)?;

    Ok(())
  }

  async fn remove_from_wishlist(&self, user_id: Uuid, beer_id: Uuid) -> Result<(), DomainError> {
    let result =
      sqlx::query("DELETE FROM wishlist_items WHERE user_id = $1 AND beer_id = $2")
        .bind(user_id)
        .bind(beer_id)
        .execute(&self.pool)
        .await
        .map_err(RepositoryError::from)?;

    if result.rows_affected() == 0 {
      return Err(DomainError::Repository(RepositoryError::NotFound));
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::catalog::entities::Style;
  use sqlx::postgres::PgPoolOptions;
  use testcontainers::ImageExt;
  use testcontainers_modules::postgres::Postgres;
  use testcontainers_modules::testcontainers::{ContainerAsync, runners::AsyncRunner};

  async fn setup_test_db() -> (PgPool, ContainerAsync<Postgres>) {
    // Start a PostgreSQL container
    let container = Postgres::default()
      .with_tag("16-alpine")
      .start()
      .await
      .expect("Failed to start postgres container");

    // Build connection string
    let host = container.get_host().await.expect("Failed to get host");
    let port = container
      .get_host_port_ipv4(5432)
      .await
      .expect("Failed to get port");
    let database_url = format!("postgres://postgres:postgres@{}:{}/postgres", host, port);

    // Connect to the database
    let pool = PgPoolOptions::new()
      .max_connections(5)
      .connect(&database_url)
      .await
      .expect("Failed to connect to test database");

    // Run migrations
    sqlx::migrate!("./migrations")
      .run(&pool)
      .await
      .expect("Failed to run migrations");

    (pool, container)
  }

  fn sample_user(username: &str, email: &str) -> User {
    User::new(
      username.to_string(),
      email.to_string(),
      "secret".to_string(),
      "Test".to_string(),
      "User".to_string(),
      false,
    )
  }

  async fn seed_style(pool: &PgPool, name: &str) -> Style {
    let style = Style::from_db(Uuid::new_v4(), name.to_string());
    sqlx::query("INSERT INTO styles (style_id, name) VALUES ($1, $2)")
      .bind(style.id)
      .bind(&style.name)
      .execute(pool)
      .await
      .expect("Failed to seed style");
    style
  }

  async fn seed_beer(pool: &PgPool, beer: &Beer) {
    sqlx::query(
      r#"
            INSERT INTO beers (beer_id, name, abv, style_id, created_by, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
    )
    .bind(beer.id)
    .bind(&beer.name)
    .bind(beer.abv)
    .bind(beer.style.id)
    .bind(beer.created_by)
    .bind(beer.created_at)
    .bind(beer.updated_at)
    .execute(pool)
    .await
    .expect("Failed to seed beer");
  }

  #[tokio::test]
  async fn test_create_and_find_user() {
    let (pool, _container) = setup_test_db().await;
    let repo = PostgresUserRepository::new(pool);

    let user = sample_user("alice", "alice@example.com");
    let created = repo.create(user.clone()).await.unwrap();
    assert_eq!(created.id, user.id);
    assert_eq!(created.username, "alice");

    let by_email = repo.find_by_email("alice@example.com").await.unwrap();
    assert!(by_email.is_some());

    let by_username = repo.find_by_username("alice").await.unwrap();
    assert_eq!(by_username.unwrap().id, user.id);
  }

  #[tokio::test]
  async fn test_duplicate_email_is_reported_by_field() {
    let (pool, _container) = setup_test_db().await;
    let repo = PostgresUserRepository::new(pool);

    repo
      .create(sample_user("alice", "duplicate@example.com"))
      .await
      .unwrap();
    let result = repo
      .create(sample_user("bob", "duplicate@example.com"))
      .await;

    match result.unwrap_err() {
      DomainError::Repository(RepositoryError::DuplicateKey(field)) => {
        assert_eq!(field, "email");
      }
      other => panic!("Expected DuplicateKey, got {:?}", other),
    }
  }

  #[tokio::test]
  async fn test_duplicate_username_is_reported_by_field() {
    let (pool, _container) = setup_test_db().await;
    let repo = PostgresUserRepository::new(pool);

    repo
      .create(sample_user("carol", "carol@example.com"))
      .await
      .unwrap();
    let result = repo.create(sample_user("carol", "other@example.com")).await;

    match result.unwrap_err() {
      DomainError::Repository(RepositoryError::DuplicateKey(field)) => {
        assert_eq!(field, "username");
      }
      other => panic!("Expected DuplicateKey, got {:?}", other),
    }
  }

  #[tokio::test]
  async fn test_update_user() {
    let (pool, _container) = setup_test_db().await;
    let repo = PostgresUserRepository::new(pool);

    let mut user = repo
      .create(sample_user("dave", "dave@example.com"))
      .await
      .unwrap();
    user.replace(
      "dave@taproom.dev".to_string(),
      "hunter2".to_string(),
      "Dave".to_string(),
      "Brewer".to_string(),
    );

    let updated = repo.update(user).await.unwrap();
    assert_eq!(updated.email, "dave@taproom.dev");
    assert_eq!(updated.last_name, "Brewer");
  }

  #[tokio::test]
  async fn test_delete_missing_user_reports_not_found() {
    let (pool, _container) = setup_test_db().await;
    let repo = PostgresUserRepository::new(pool);

    let result = repo.delete(Uuid::new_v4()).await;
    assert!(matches!(
      result.unwrap_err(),
      DomainError::Repository(RepositoryError::NotFound)
    ));
  }

  #[tokio::test]
  async fn test_wishlist_round_trip() {
    let (pool, _container) = setup_test_db().await;
    let repo = PostgresUserRepository::new(pool.clone());

    let user = repo
      .create(sample_user("erin", "erin@example.com"))
      .await
      .unwrap();
    let style = seed_style(&pool, "Ale").await;
    let beer = Beer::new("IPA".to_string(), 6.5, style, user.id);
    seed_beer(&pool, &beer).await;

    // Adding twice leaves a single membership.
    repo.add_to_wishlist(user.id, beer.id).await.unwrap();
    repo.add_to_wishlist(user.id, beer.id).await.unwrap();

    let wishlist = repo.get_wishlist(user.id).await.unwrap();
    assert_eq!(wishlist.len(), 1);
    assert_eq!(wishlist[0].id, beer.id);
    assert_eq!(wishlist[0].style.name, "Ale");

    repo.remove_from_wishlist(user.id, beer.id).await.unwrap();
    assert!(repo.get_wishlist(user.id).await.unwrap().is_empty());

    let result = repo.remove_from_wishlist(user.id, beer.id).await;
    assert!(matches!(
      result.unwrap_err(),
      DomainError::Repository(RepositoryError::NotFound)
    ));
  }
}
