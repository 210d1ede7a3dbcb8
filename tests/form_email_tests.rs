// tests/form_email_tests.rs

use serde_json::json;
use weiss_catalog_api::services::form_email::{build_email_html, form_fields, render_fields};

fn fields(raw: &[(&str, &str)]) -> Vec<(String, String)> {
  raw.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

#[test]
fn renders_one_paragraph_per_field_in_submission_order() {
  let html = render_fields(&fields(&[("name", "Ada"), ("phone", "555")]));
  assert_eq!(html, "<p><strong>Name</strong>: Ada</p><p><strong>Phone</strong>: 555</p>");
}

#[test]
fn only_the_first_character_of_the_key_is_uppercased() {
  let html = render_fields(&fields(&[("company name", "Weiss")]));
  assert_eq!(html, "<p><strong>Company name</strong>: Weiss</p>");
}

#[test]
fn capitalization_is_unicode_aware() {
  let html = render_fields(&fields(&[("ürün", "cihaz")]));
  assert_eq!(html, "<p><strong>Ürün</strong>: cihaz</p>");
}

#[test]
fn values_pass_through_verbatim() {
  let html = render_fields(&fields(&[("note", "<b>5 > 3</b>")]));
  assert_eq!(html, "<p><strong>Note</strong>: <b>5 > 3</b></p>");
}

#[test]
fn empty_key_renders_an_empty_label() {
  let html = render_fields(&fields(&[("", "x")]));
  assert_eq!(html, "<p><strong></strong>: x</p>");
}

#[test]
fn submitted_object_flattens_in_order_with_coerced_values() {
  let body = json!({ "name": "Ada", "count": 2, "urgent": true });
  let flattened = form_fields(body.as_object().unwrap());
  assert_eq!(
    flattened,
    vec![
      ("name".to_string(), "Ada".to_string()),
      ("count".to_string(), "2".to_string()),
      ("urgent".to_string(), "true".to_string()),
    ]
  );
}

#[test]
fn the_document_wraps_the_fields_under_the_heading() {
  let html = build_email_html("A new offer request was submitted:", &fields(&[("name", "Ada")]));
  assert!(html.starts_with("<h2>A new offer request was submitted:</h2>"));
  assert!(html.ends_with("<p><strong>Name</strong>: Ada</p>"));
}

#[test]
fn an_empty_submission_renders_only_the_heading() {
  let html = build_email_html("A new offer request was submitted:", &[]);
  assert_eq!(html, "<h2>A new offer request was submitted:</h2>");
}
