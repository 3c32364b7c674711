use actix_web::{get, web, HttpResponse};

use crate::{app_state::AppState, errors::AppError};

const INDEX_HTML: &str = include_str!("../../static/index.html");

#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(INDEX_HTML)
}

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[get("/api/status")]
pub async fn status(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "ready": true,
        "model": state.config.openai_model
    }))
}

/// Answers every route while the API key is missing.
pub async fn missing_credential() -> Result<HttpResponse, AppError> {
    Err(AppError::MissingCredential)
}
