// src/catalog/repository.rs

//! Read-only queries against the catalog relations. Every method is one
//! parameterized statement against the shared pool; concurrent use is
//! delegated to the pool itself.

use sqlx::PgPool;

use crate::catalog::filter::ProductFilter;
use crate::catalog::locale::Lang;
use crate::errors::Result;
use crate::models::{Product, ProductSummary};

#[derive(Clone)]
pub struct CatalogRepository {
  pool: PgPool,
}

impl CatalogRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }

  /// Every product name, in insertion order.
  pub async fn product_names(&self) -> Result<Vec<String>> {
    let names = sqlx::query_scalar("SELECT name FROM products ORDER BY id ASC")
      .fetch_all(&self.pool)
      .await?;
    Ok(names)
  }

  pub async fn category_names(&self, lang: Lang) -> Result<Vec<String>> {
    let sql = format!("SELECT {} FROM categories ORDER BY id ASC", lang.name_column());
    let names = sqlx::query_scalar(&sql).fetch_all(&self.pool).await?;
    Ok(names)
  }

  pub async fn branch_names(&self, lang: Lang) -> Result<Vec<String>> {
    let sql = format!("SELECT {} FROM branches ORDER BY id ASC", lang.name_column());
    let names = sqlx::query_scalar(&sql).fetch_all(&self.pool).await?;
    Ok(names)
  }

  /// Product listing under zero, one, or two membership filters.
  pub async fn filtered_products(&self, filter: &ProductFilter) -> Result<Vec<ProductSummary>> {
    let sql = filter.listing_sql();
    let mut query = sqlx::query_as::<_, ProductSummary>(&sql);
    if let Some(categories) = &filter.categories {
      query = query.bind(categories);
    }
    if let Some(branches) = &filter.branches {
      query = query.bind(branches);
    }
    let products = query.fetch_all(&self.pool).await?;
    Ok(products)
  }

  /// Products available in one branch (case-insensitive tag match),
  /// optionally narrowed to a category set.
  pub async fn products_in_branch(
    &self,
    branch: &str,
    categories: Option<&Vec<String>>,
  ) -> Result<Vec<ProductSummary>> {
    let sql = ProductFilter::branch_listing_sql(categories.is_some());
    let mut query = sqlx::query_as::<_, ProductSummary>(&sql).bind(branch);
    if let Some(categories) = categories {
      query = query.bind(categories);
    }
    let products = query.fetch_all(&self.pool).await?;
    Ok(products)
  }

  /// Single-item lookup by url slug. `url_name` is assumed unique; only the
  /// first match is returned either way.
  pub async fn product_by_slug(&self, url_name: &str) -> Result<Option<Product>> {
    let product =
      sqlx::query_as("SELECT id, name, name_en, category, url_name, branches FROM products WHERE url_name = $1")
        .bind(url_name)
        .fetch_optional(&self.pool)
        .await?;
    Ok(product)
  }

  /// News rows have no shape contract; each row is forwarded as the JSON
  /// object the database builds for it.
  pub async fn news(&self) -> Result<Vec<serde_json::Value>> {
    let items = sqlx::query_scalar("SELECT row_to_json(news) FROM news ORDER BY id DESC")
      .fetch_all(&self.pool)
      .await?;
    Ok(items)
  }
}
