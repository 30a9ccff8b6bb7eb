use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::catalog::{entities::Style, ports::StyleRepository};
use crate::domain::errors::{DomainError, RepositoryError};

/// PostgreSQL implementation of the StyleRepository trait (read-only)
pub struct PostgresStyleRepository {
  pool: PgPool,
}

impl PostgresStyleRepository {
  /// Creates a new instance of PostgresStyleRepository
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

/// Database row structure for the styles table
#[derive(Debug, sqlx::FromRow)]
struct StyleRow {
  id: Uuid,
  name: String,
}

impl From<StyleRow> for Style {
  fn from(row: StyleRow) -> Self {
    Style::from_db(row.id, row.name)
  }
}

#[async_trait]
impl StyleRepository for PostgresStyleRepository {
  async fn list_all(&self) -> Result<Vec<Style>, DomainError> {
    let rows = sqlx::query_as::<_, StyleRow>(
      "SELECT style_id AS id, name FROM styles ORDER BY name",
    )
    .fetch_all(&self.pool)
    .await
    .map_err(RepositoryError::from)?;

    Ok(rows.into_iter().map(Style::from).collect())
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<Style>, DomainError> {
    let row = sqlx::query_as::<_, StyleRow>(
      "SELECT style_id AS id, name FROM styles WHERE style_id = $1",
    )
    .bind(id)
    .fetch_optional(&self.pool)
    .await
    .map_err(RepositoryError::from)?;

    Ok(row.map(Style::from))
  }
}
