// src/web/handlers/contact_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::{json, Map, Value};
use tracing::{error, info, instrument};

use crate::errors::AppError;
use crate::services::form_email;
use crate::state::AppState;

const OFFER_SUBJECT: &str = "New Offer Form Submission";
const OFFER_HEADING: &str = "A new offer request was submitted:";
const TECHNICAL_SUBJECT: &str = "New Technical Service Form Submission";
const TECHNICAL_HEADING: &str = "A new technical service request was submitted:";

#[instrument(name = "handler::offer_form", skip(app_state, body))]
pub async fn offer_form_handler(
  app_state: web::Data<AppState>,
  body: web::Json<Map<String, Value>>,
) -> Result<HttpResponse, AppError> {
  relay_form(&app_state, OFFER_SUBJECT, OFFER_HEADING, body.into_inner()).await
}

#[instrument(name = "handler::technical_form", skip(app_state, body))]
pub async fn technical_form_handler(
  app_state: web::Data<AppState>,
  body: web::Json<Map<String, Value>>,
) -> Result<HttpResponse, AppError> {
  relay_form(&app_state, TECHNICAL_SUBJECT, TECHNICAL_HEADING, body.into_inner()).await
}

/// Shared path for both contact forms: render whatever fields arrived into
/// the notification email and report only whether the relay succeeded.
async fn relay_form(
  app_state: &AppState,
  subject: &str,
  heading: &str,
  body: Map<String, Value>,
) -> Result<HttpResponse, AppError> {
  let fields = form_email::form_fields(&body);
  info!("Relaying form with {} fields.", fields.len());
  let html = form_email::build_email_html(heading, &fields);

  match app_state.mailer.send_html(subject, &html).await {
    Ok(()) => Ok(HttpResponse::Ok().json(json!({"message": true}))),
    Err(e) => {
      error!("Failed to relay form email: {}", e);
      Ok(HttpResponse::InternalServerError().json(json!({"message": false})))
    }
  }
}
