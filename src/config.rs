// src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub database_url: String,
  pub allowed_origin: String,

  pub brevo_api_url: String,
  pub brevo_api_key: String,
  pub mail_from: String,
  pub mail_to: String,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| {
      env::var(var_name).map_err(|e| AppError::Config(format!("Missing environment variable '{}': {}", var_name, e)))
    };

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let server_port = get_env("SERVER_PORT")
      .unwrap_or_else(|_| "3000".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;
    let database_url = get_env("DATABASE_URL")?;
    let allowed_origin = get_env("ALLOWED_ORIGIN").unwrap_or_else(|_| "http://localhost:5173".to_string());

    let brevo_api_url =
      get_env("BREVO_API_URL").unwrap_or_else(|_| "https://api.brevo.com/v3/smtp/email".to_string());
    let brevo_api_key = get_env("BREVO_API_KEY")?;
    let mail_from = get_env("MAIL_FROM")?;
    let mail_to = get_env("MAIL_TO")?;

    tracing::info!("Application configuration loaded successfully.");

    Ok(Self {
      server_host,
      server_port,
      database_url,
      allowed_origin,
      brevo_api_url,
      brevo_api_key,
      mail_from,
      mail_to,
    })
  }
}
