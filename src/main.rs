// src/main.rs

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use sqlx::PgPool;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

use weiss_catalog_api::catalog::CatalogRepository;
use weiss_catalog_api::config::AppConfig;
use weiss_catalog_api::services::Mailer;
use weiss_catalog_api::state::AppState;
use weiss_catalog_api::web::configure_app_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize tracing subscriber for logging
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO) // Default level
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE) // Log when spans close, showing duration
    .init();

  tracing::info!("Starting catalog API server...");

  // Load application configuration
  let app_config = match AppConfig::from_env() {
    Ok(cfg) => Arc::new(cfg), // Arc the config for sharing
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      panic!("Configuration error: {}", e);
    }
  };

  // Initialize Database Pool
  let db_pool = match PgPool::connect(&app_config.database_url).await {
    Ok(pool) => {
      tracing::info!("Successfully connected to the database.");
      pool
    }
    Err(e) => {
      tracing::error!(error = %e, "Failed to connect to the database.");
      panic!("Database connection error: {}", e);
    }
  };

  // One mail client shared across all requests, like the pool
  let mailer = Arc::new(Mailer::new(&app_config));

  // Create AppState
  let app_state = AppState {
    catalog: CatalogRepository::new(db_pool),
    mailer,
    config: app_config.clone(),
  };

  // Configure and Start Actix Web Server
  let server_address = format!("{}:{}", app_config.server_host, app_config.server_port);
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    // The storefront is the only allowed browser origin
    let cors = Cors::default()
      .allowed_origin(&app_state.config.allowed_origin)
      .allow_any_method()
      .allow_any_header();

    App::new()
      .app_data(web::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(cors)
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await
}
