// src/services/mailer.rs

//! Thin client for the Brevo transactional-email HTTP API.

use serde_json::json;
use tracing::{info, instrument};

use crate::config::AppConfig;
use crate::errors::{AppError, Result};

pub struct Mailer {
  http: reqwest::Client,
  api_url: String,
  api_key: String,
  from: String,
  to: String,
}

impl Mailer {
  pub fn new(config: &AppConfig) -> Self {
    Self {
      http: reqwest::Client::new(),
      api_url: config.brevo_api_url.clone(),
      api_key: config.brevo_api_key.clone(),
      from: config.mail_from.clone(),
      to: config.mail_to.clone(),
    }
  }

  /// Sends one HTML email to the configured recipient. A non-success status
  /// from the provider is an error; there is no retry.
  #[instrument(name = "mailer::send_html", skip(self, subject, html_body), fields(subject = %subject))]
  pub async fn send_html(&self, subject: &str, html_body: &str) -> Result<()> {
    let payload = json!({
      "sender": { "email": self.from },
      "to": [{ "email": self.to }],
      "subject": subject,
      "htmlContent": html_body,
    });

    let response = self
      .http
      .post(&self.api_url)
      .header("api-key", &self.api_key)
      .json(&payload)
      .send()
      .await
      .map_err(|e| AppError::Mail(format!("Failed to reach email provider: {}", e)))?;

    if !response.status().is_success() {
      let status = response.status();
      let detail = response.text().await.unwrap_or_default();
      return Err(AppError::Mail(format!("Email provider returned {}: {}", status, detail)));
    }

    info!("Notification email accepted by provider.");
    Ok(())
  }
}
