// src/web/handlers/catalog_handlers.rs

use actix_web::{web, HttpResponse};
use tracing::{info, instrument, warn};

use crate::catalog::{Lang, ProductFilter};
use crate::errors::AppError;
use crate::state::AppState;

#[instrument(name = "handler::product_names", skip(app_state))]
pub async fn product_names_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let names = app_state.catalog.product_names().await?;
  info!("Fetched {} product names.", names.len());
  Ok(HttpResponse::Ok().json(names))
}

#[instrument(name = "handler::localized_categories", skip(app_state, path), fields(lang = %path.as_ref()))]
pub async fn categories_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let lang = Lang::from_tag(&path.into_inner());
  let names = app_state.catalog.category_names(lang).await?;
  Ok(HttpResponse::Ok().json(names))
}

#[instrument(name = "handler::localized_branches", skip(app_state, path), fields(lang = %path.as_ref()))]
pub async fn branches_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let lang = Lang::from_tag(&path.into_inner());
  let names = app_state.catalog.branch_names(lang).await?;
  Ok(HttpResponse::Ok().json(names))
}

#[instrument(name = "handler::list_products", skip(app_state, query))]
pub async fn products_handler(
  app_state: web::Data<AppState>,
  query: web::Query<Vec<(String, String)>>,
) -> Result<HttpResponse, AppError> {
  let filter = ProductFilter::from_query_pairs(query.as_slice());
  info!(?filter, "Listing products.");
  let products = app_state.catalog.filtered_products(&filter).await?;
  info!("Successfully fetched {} products.", products.len());
  Ok(HttpResponse::Ok().json(products))
}

#[instrument(name = "handler::branch_products", skip(app_state, path, query), fields(branch = %path.as_ref()))]
pub async fn branch_products_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  query: web::Query<Vec<(String, String)>>,
) -> Result<HttpResponse, AppError> {
  // Branch names arrive slugified in the path ("izmir-bayi" for "izmir bayi")
  let branch = path.into_inner().replace('-', " ");
  let filter = ProductFilter::from_query_pairs(query.as_slice());
  let products = app_state
    .catalog
    .products_in_branch(&branch, filter.categories.as_ref())
    .await?;
  info!("Fetched {} products for branch '{}'.", products.len(), branch);
  Ok(HttpResponse::Ok().json(products))
}

#[instrument(name = "handler::product_detail", skip(app_state, path), fields(url_name = %path.as_ref()))]
pub async fn product_detail_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let url_name = path.into_inner();
  match app_state.catalog.product_by_slug(&url_name).await? {
    Some(product) => Ok(HttpResponse::Ok().json(product)),
    None => {
      // Clients treat an empty 200 body as "no such product"
      warn!("No product with url_name '{}'.", url_name);
      Ok(HttpResponse::Ok().finish())
    }
  }
}

#[instrument(name = "handler::news", skip(app_state))]
pub async fn news_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let items = app_state.catalog.news().await?;
  Ok(HttpResponse::Ok().json(items))
}
