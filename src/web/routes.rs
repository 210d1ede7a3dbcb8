// src/web/routes.rs

use actix_web::web;

use crate::web::handlers::{catalog_handlers, contact_handlers};

async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

// This function is called in `main.rs` to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api")
      .route("/health", web::get().to(health_check_handler))
      .route("/product-names", web::get().to(catalog_handlers::product_names_handler))
      .route("/products", web::get().to(catalog_handlers::products_handler))
      .route(
        "/products/{branch}",
        web::get().to(catalog_handlers::branch_products_handler),
      )
      .route("/product/{item}", web::get().to(catalog_handlers::product_detail_handler))
      .route("/news", web::get().to(catalog_handlers::news_handler))
      .route("/offer-form", web::post().to(contact_handlers::offer_form_handler))
      .route(
        "/technical-form",
        web::post().to(contact_handlers::technical_form_handler),
      )
      // Language-prefixed reference data; registered last so the literal
      // routes above win when a path could match both.
      .route("/{lang}/categories", web::get().to(catalog_handlers::categories_handler))
      .route("/{lang}/branches", web::get().to(catalog_handlers::branches_handler)),
  );
}
