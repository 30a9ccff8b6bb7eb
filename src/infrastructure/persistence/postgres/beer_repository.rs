use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::catalog::{
  entities::{Beer, Style},
  ports::BeerRepository,
};
use crate::domain::errors::{DomainError, RepositoryError};

/// PostgreSQL implementation of the BeerRepository trait
pub struct PostgresBeerRepository {
  pool: PgPool,
}

impl PostgresBeerRepository {
  /// Creates a new instance of PostgresBeerRepository
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

/// Database row structure for beers joined with their style.
///
/// Shared with the wishlist queries, which return the same projection.
#[derive(Debug, sqlx::FromRow)]
pub(super) struct BeerRow {
  pub id: Uuid,
  pub name: String,
  pub abv: f64,
  pub style_id: Uuid,
  pub style_name: String,
  pub created_by: Uuid,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl From<BeerRow> for Beer {
  fn from(row: BeerRow) -> Self {
    Beer::from_db(
      row.id,
      row.name,
      row.abv,
      Style::from_db(row.style_id, row.style_name),
      row.created_by,
      row.created_at,
      row.updated_at,
    )
  }
}

const SELECT_BEER: &str = r#"
    SELECT
        b.beer_id AS id,
        b.name,
        b.abv,
        b.style_id,
        s.name AS style_name,
        b.created_by,
        b.created_at,
        b.updated_at
    FROM beers b
    JOIN styles s ON s.style_id = b.style_id
    "#;

#[async_trait]
impl BeerRepository for PostgresBeerRepository {
  async fn list_all(&self) -> Result<Vec<Beer>, DomainError> {
    let rows = sqlx::query_as::<_, BeerRow>(SELECT_BEER)
      .fetch_all(&self.pool)
      .await
      .map_err(RepositoryError::from)?;

    Ok(rows.into_iter().map(Beer::from).collect())
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<Beer>, DomainError> {
    let sql = format!("{} WHERE b.beer_id = $1", SELECT_BEER);
    let row = sqlx::query_as::<_, BeerRow>(&sql)
      .bind(id)
      .fetch_optional(&self.pool)
      .await
      .map_err(RepositoryError::from)?;

    Ok(row.map(Beer::from))
  }

  async fn find_by_name(&self, name: &str) -> Result<Option<Beer>, DomainError> {
    let sql = format!("{} WHERE b.name = $1", SELECT_BEER);
    let row = sqlx::query_as::<_, BeerRow>(&sql)
      .bind(name)
      .fetch_optional(&self.pool)
      .await
      .map_err(RepositoryError::from)?;

    Ok(row.map(Beer::from))
  }

  async fn create(&self, beer: Beer) -> Result<Beer, DomainError> {
    // The style reference was resolved by the caller, so the stored row is
    // fully determined by the input and can be returned as-is.
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
    .execute(&self.pool)
    .await
    .map_err(RepositoryError::from)?;

    Ok(beer)
  }

  async fn update(&self, beer: Beer) -> Result<Beer, DomainError> {
    let result = sqlx::query(
      r#"
            UPDATE beers
            SET
                name = $2,
                abv = $3,
                style_id = $4,
                updated_at = $5
            WHERE beer_id = $1
            "#,
    )
    .bind(beer.id)
    .bind(&beer.name)
    .bind(beer.abv)
    .bind(beer.style.id)
    .bind(beer.updated_at)
    .execute(&self.pool)
    .await
    .map_err(RepositoryError::from)?;

    if result.rows_affected() == 0 {
      return Err(DomainError::Repository(RepositoryError::NotFound));
    }
    Ok(beer)
  }

  async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
    let result = sqlx::query("DELETE FROM beers WHERE beer_id = $1")
      .bind(id)
      .execute(&self.pool)
      .await
      .map_err(RepositoryError::from)?;

    if result.rows_affected() == 0 {
      return Err(DomainError::Repository(RepositoryError::NotFound));
    }
    Ok(())
  }
}
