// src/catalog/filter.rs

//! Builds the product-listing queries out of the two optional filters.

const PRODUCT_PROJECTION: &str = "SELECT id, name, category, url_name FROM products";

/// Optional category / branch membership filters for product listings.
///
/// `None` means the query parameter was absent. `Some` with an empty-string
/// entry means the parameter was supplied without a value; that still selects
/// the filtered query shape and matches no rows.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
  pub categories: Option<Vec<String>>,
  pub branches: Option<Vec<String>>,
}

impl ProductFilter {
  /// Collects repeated `c` / `b` query parameters in the order they appear.
  /// A key that appears at all makes the corresponding filter present.
  pub fn from_query_pairs(pairs: &[(String, String)]) -> Self {
    let mut categories: Option<Vec<String>> = None;
    let mut branches: Option<Vec<String>> = None;
    for (key, value) in pairs {
      match key.as_str() {
        "c" => categories.get_or_insert_with(Vec::new).push(value.clone()),
        "b" => branches.get_or_insert_with(Vec::new).push(value.clone()),
        _ => {}
      }
    }
    Self { categories, branches }
  }

  /// Picks one of the four listing shapes: unfiltered, category membership,
  /// branch-tag overlap, or the AND of both. Bind order is categories first,
  /// then branches.
  pub fn listing_sql(&self) -> String {
    let mut sql = String::from(PRODUCT_PROJECTION);
    let mut next_bind = 1;
    if self.categories.is_some() {
      sql.push_str(&format!(" WHERE category = ANY(${})", next_bind));
      next_bind += 1;
    }
    if self.branches.is_some() {
      let keyword = if next_bind == 1 { "WHERE" } else { "AND" };
      sql.push_str(&format!(" {} branches && ${}", keyword, next_bind));
    }
    sql.push_str(" ORDER BY name ASC");
    sql
  }

  /// Query for the branch-in-path listing: a single branch name matched
  /// case-insensitively against the tag array, optionally AND-ed with the
  /// category membership test. The branch name binds as `$1`, the category
  /// list as `$2`.
  ///
  /// Unlike the other listings this sorts by category descending; the
  /// storefront pages consuming it depend on that order.
  pub fn branch_listing_sql(with_categories: bool) -> String {
    let mut sql = format!(
      "{} WHERE EXISTS (SELECT 1 FROM unnest(branches) AS tag WHERE lower(tag) = lower($1))",
      PRODUCT_PROJECTION
    );
    if with_categories {
      sql.push_str(" AND category = ANY($2)");
    }
    sql.push_str(" ORDER BY category DESC");
    sql
  }
}
