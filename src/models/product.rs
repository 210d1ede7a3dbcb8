// src/models/product.rs

use serde::Serialize;
use sqlx::FromRow;

/// Full product row, returned by the single-item detail lookup.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Product {
  pub id: i32,
  pub name: String,
  pub name_en: Option<String>, // Not every product has a translated name
  pub category: String,
  pub url_name: String,
  pub branches: Vec<String>,
}

/// Projection used by every product-listing endpoint.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ProductSummary {
  pub id: i32,
  pub name: String,
  pub category: String,
  pub url_name: String,
}
