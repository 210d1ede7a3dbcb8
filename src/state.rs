// src/state.rs
use crate::catalog::CatalogRepository;
use crate::config::AppConfig;
use crate::services::Mailer;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub catalog: CatalogRepository,
  pub mailer: Arc<Mailer>,
  pub config: Arc<AppConfig>, // Share loaded config
}
