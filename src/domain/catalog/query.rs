use uuid::Uuid;

use super::entities::Beer;

/// Filter, sort and order parameters for a beer listing.
///
/// Every field is optional; a stage of the pipeline only runs when its
/// parameter is present (and, for strings, non-empty).
#[derive(Debug, Clone, Default)]
pub struct BeerQuery {
  /// Case-insensitive substring match against the beer name
  pub name: Option<String>,
  /// Keep beers with abv >= min_abv
  pub min_abv: Option<f64>,
  /// Keep beers with abv <= max_abv
  pub max_abv: Option<f64>,
  /// Exact match on style identifier
  pub style_id: Option<Uuid>,
  /// One of "name", "abv", "style" (case-insensitive); anything else
  /// leaves the order unchanged
  pub sort_by: Option<String>,
  /// "desc" (case-insensitive) reverses the sequence; any other value
  /// leaves ascending order
  pub sort_order: Option<String>,
}

/// Applies the query to an already-fetched collection.
///
/// Stages run in fixed order: name filter, abv range, style filter, sort,
/// order. The sort is stable, and a descending order is produced by
/// reversing the ascending result afterwards — not by inverting the
/// comparator, which would break tie ordering. The reversal runs whether
/// or not a sort key was given.
pub fn apply(mut beers: Vec<Beer>, query: &BeerQuery) -> Vec<Beer> {
  if let Some(name) = query.name.as_deref().filter(|n| !n.is_empty()) {
    let needle = name.to_lowercase();
    beers.retain(|beer| beer.name.to_lowercase().contains(&needle));
  }

  if let Some(min_abv) = query.min_abv {
    beers.retain(|beer| beer.abv >= min_abv);
  }

  if let Some(max_abv) = query.max_abv {
    beers.retain(|beer| beer.abv <= max_abv);
  }

  if let Some(style_id) = query.style_id {
    beers.retain(|beer| beer.style.id == style_id);
  }

  if let Some(sort_by) = query.sort_by.as_deref() {
    match sort_by.to_lowercase().as_str() {
      "name" => beers.sort_by(|a, b| a.name.cmp(&b.name)),
      "abv" => beers.sort_by(|a, b| a.abv.total_cmp(&b.abv)),
      "style" => beers.sort_by(|a, b| a.style.name.cmp(&b.style.name)),
      _ => {}
    }
  }

  if let Some(sort_order) = query.sort_order.as_deref() {
    if sort_order.eq_ignore_ascii_case("desc") {
      beers.reverse();
    }
  }

  beers
}
