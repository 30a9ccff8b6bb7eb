use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Beer style (e.g. "Ale", "Stout"). Read-only: styles are seeded into
/// storage and never created or mutated through this service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Style {
  /// Unique identifier for the style
  pub id: Uuid,
  /// Style name
  pub name: String,
}

impl Style {
  /// Creates a style from database fields (for reconstruction)
  pub fn from_db(id: Uuid, name: String) -> Self {
    Self { id, name }
  }
}

/// Beer entity.
///
/// The style and the creator are non-owning references: both are resolved
/// fresh from storage on every fetch, and a beer cannot mutate either
/// through itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Beer {
  /// Unique identifier for the beer
  pub id: Uuid,
  /// Beer name (unique)
  pub name: String,
  /// Alcohol by volume, non-negative
  pub abv: f64,
  /// Style of this beer, resolved from storage
  pub style: Style,
  /// User who created this beer
  pub created_by: Uuid,
  /// Timestamp when the beer was created
  pub created_at: DateTime<Utc>,
  /// Timestamp when the beer was last updated
  pub updated_at: DateTime<Utc>,
}

impl Beer {
  /// Creates a new beer with the given details
  pub fn new(name: String, abv: f64, style: Style, created_by: Uuid) -> Self {
    let now = Utc::now();
    Self {
      id: Uuid::new_v4(),
      name,
      abv,
      style,
      created_by,
      created_at: now,
      updated_at: now,
    }
  }

  /// Creates a beer from database fields (for reconstruction)
  pub fn from_db(
    id: Uuid,
    name: String,
    abv: f64,
    style: Style,
    created_by: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
  ) -> Self {
    Self {
      id,
      name,
      abv,
      style,
      created_by,
      created_at,
      updated_at,
    }
  }

  /// Replaces the mutable fields of the beer
  pub fn update(&mut self, name: String, abv: f64, style: Style) {
    self.name = name;
    self.abv = abv;
    self.style = style;
    self.updated_at = Utc::now();
  }
}
