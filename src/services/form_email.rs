// src/services/form_email.rs

//! Renders a submitted contact form into the HTML body of the notification
//! email. Forms have no fixed schema; whatever fields arrive are rendered.

use serde_json::{Map, Value};

/// Flattens the submitted JSON object into ordered (field, value) pairs.
/// String values are taken as-is; anything else keeps its JSON rendering.
pub fn form_fields(body: &Map<String, Value>) -> Vec<(String, String)> {
  body
    .iter()
    .map(|(key, value)| {
      let rendered = match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
      };
      (key.clone(), rendered)
    })
    .collect()
}

/// One paragraph per field, in the order the fields were submitted. Only the
/// first character of the field name is uppercased. Values pass through
/// verbatim, markup included.
pub fn render_fields(fields: &[(String, String)]) -> String {
  let mut html = String::new();
  for (key, value) in fields {
    html.push_str(&format!("<p><strong>{}</strong>: {}</p>", capitalize(key), value));
  }
  html
}

/// Full email document: the fixed heading line above the field listing.
pub fn build_email_html(heading: &str, fields: &[(String, String)]) -> String {
  format!("<h2>{}</h2>{}", heading, render_fields(fields))
}

fn capitalize(field: &str) -> String {
  let mut chars = field.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    None => String::new(),
  }
}
