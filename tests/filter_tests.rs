// tests/filter_tests.rs

use weiss_catalog_api::catalog::ProductFilter;

fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
  raw.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

#[test]
fn no_filters_selects_every_product_sorted_by_name() {
  let filter = ProductFilter::default();
  assert_eq!(
    filter.listing_sql(),
    "SELECT id, name, category, url_name FROM products ORDER BY name ASC"
  );
}

#[test]
fn category_only_uses_the_membership_test() {
  let filter = ProductFilter::from_query_pairs(&pairs(&[("c", "Orthopedic")]));
  assert_eq!(
    filter.listing_sql(),
    "SELECT id, name, category, url_name FROM products WHERE category = ANY($1) ORDER BY name ASC"
  );
}

#[test]
fn branch_only_uses_the_array_overlap_test() {
  let filter = ProductFilter::from_query_pairs(&pairs(&[("b", "Istanbul")]));
  assert_eq!(
    filter.listing_sql(),
    "SELECT id, name, category, url_name FROM products WHERE branches && $1 ORDER BY name ASC"
  );
}

#[test]
fn both_filters_are_combined_with_and() {
  let filter = ProductFilter::from_query_pairs(&pairs(&[("c", "Orthopedic"), ("b", "Istanbul")]));
  assert_eq!(
    filter.listing_sql(),
    "SELECT id, name, category, url_name FROM products \
     WHERE category = ANY($1) AND branches && $2 ORDER BY name ASC"
  );
}

#[test]
fn repeated_parameters_accumulate_in_order() {
  let filter = ProductFilter::from_query_pairs(&pairs(&[("c", "Orthopedic"), ("b", "Istanbul"), ("c", "Imaging")]));
  assert_eq!(
    filter.categories.as_deref(),
    Some(["Orthopedic".to_string(), "Imaging".to_string()].as_slice())
  );
  assert_eq!(filter.branches.as_deref(), Some(["Istanbul".to_string()].as_slice()));
}

#[test]
fn empty_parameter_value_still_counts_as_a_filter() {
  let filter = ProductFilter::from_query_pairs(&pairs(&[("c", "")]));
  assert_eq!(filter.categories.as_deref(), Some([String::new()].as_slice()));
  assert!(filter.listing_sql().contains("WHERE category = ANY($1)"));
}

#[test]
fn unknown_parameters_are_ignored() {
  let filter = ProductFilter::from_query_pairs(&pairs(&[("page", "2"), ("b", "Ankara")]));
  assert!(filter.categories.is_none());
  assert_eq!(filter.branches.as_deref(), Some(["Ankara".to_string()].as_slice()));
}

#[test]
fn branch_listing_compares_tags_case_insensitively() {
  let sql = ProductFilter::branch_listing_sql(false);
  assert!(sql.contains("lower(tag) = lower($1)"));
  assert!(sql.ends_with("ORDER BY category DESC"));
}

#[test]
fn branch_listing_with_categories_adds_the_membership_test() {
  let sql = ProductFilter::branch_listing_sql(true);
  assert!(sql.contains("lower(tag) = lower($1)"));
  assert!(sql.contains("AND category = ANY($2)"));
  assert!(sql.ends_with("ORDER BY category DESC"));
}
