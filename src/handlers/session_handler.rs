use actix_web::{delete, get, post, put, web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::{
        domain::StudyProfile,
        dto::{
            request::{AnswerRequest, NavigateRequest, QuizRequest, SummaryRequest, TipsRequest},
            response::SessionResponse,
        },
    },
    repositories::require_session,
    services::http_helpers::{success_json, text_attachment, SUMMARY_FILE_NAME, TIPS_FILE_NAME},
};

#[post("/api/sessions")]
pub async fn create_session(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let evicted = state
        .sessions
        .evict_idle(state.config.session_idle_ttl())
        .await?;
    if evicted > 0 {
        log::info!("Evicted {} idle sessions", evicted);
    }

    let id = state.sessions.create().await?;
    let handle = require_session(state.sessions.as_ref(), &id).await?;
    let session = handle.lock().await;
    log::info!(
        "Started session {} ({} active)",
        id,
        state.sessions.count().await?
    );
    Ok(HttpResponse::Created().json(SessionResponse::render(id, &session)))
}

#[get("/api/sessions/{id}")]
pub async fn get_session(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    let handle = require_session(state.sessions.as_ref(), &id).await?;
    let session = handle.lock().await;
    Ok(success_json(SessionResponse::render(id, &session)))
}

#[delete("/api/sessions/{id}")]
pub async fn end_session(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    if !state.sessions.delete(&id).await? {
        return Err(AppError::NotFound(format!("Session '{}' not found", id)));
    }
    Ok(HttpResponse::NoContent().finish())
}

#[put("/api/sessions/{id}/view")]
pub async fn navigate(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    request: web::Json<NavigateRequest>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    let handle = require_session(state.sessions.as_ref(), &id).await?;
    let mut session = handle.lock().await;
    state.controller.navigate(&mut session, request.view);
    Ok(success_json(SessionResponse::render(id, &session)))
}

#[post("/api/sessions/{id}/summary")]
pub async fn submit_summary(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    request: web::Json<SummaryRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let id = id.into_inner();
    let handle = require_session(state.sessions.as_ref(), &id).await?;
    let mut session = handle.lock().await;
    state
        .controller
        .submit_summary_request(&mut session, &request.text, request.length)
        .await?;
    Ok(success_json(SessionResponse::render(id, &session)))
}

#[get("/api/sessions/{id}/summary.txt")]
pub async fn download_summary(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let handle = require_session(state.sessions.as_ref(), &id).await?;
    let session = handle.lock().await;
    let body = state.controller.summary_text(&session)?;
    Ok(text_attachment(SUMMARY_FILE_NAME, body))
}

#[post("/api/sessions/{id}/quiz")]
pub async fn submit_quiz(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    request: web::Json<QuizRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let id = id.into_inner();
    let handle = require_session(state.sessions.as_ref(), &id).await?;
    let mut session = handle.lock().await;
    state
        .controller
        .submit_quiz_request(
            &mut session,
            &request.text,
            request.use_last_summary,
            request.count,
            request.question_type,
        )
        .await?;
    Ok(success_json(SessionResponse::render(id, &session)))
}

#[put("/api/sessions/{id}/quiz/answers/{index}")]
pub async fn record_answer(
    state: web::Data<AppState>,
    path: web::Path<(Uuid, usize)>,
    request: web::Json<AnswerRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let (id, index) = path.into_inner();
    let handle = require_session(state.sessions.as_ref(), &id).await?;
    let mut session = handle.lock().await;
    state
        .controller
        .record_answer(&mut session, index, request.value)?;
    Ok(success_json(SessionResponse::render(id, &session)))
}

#[post("/api/sessions/{id}/quiz/grade")]
pub async fn grade_quiz(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    let handle = require_session(state.sessions.as_ref(), &id).await?;
    let mut session = handle.lock().await;
    state.controller.grade_quiz(&mut session)?;
    Ok(success_json(SessionResponse::render(id, &session)))
}

#[delete("/api/sessions/{id}/quiz")]
pub async fn reset_quiz(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    let handle = require_session(state.sessions.as_ref(), &id).await?;
    let mut session = handle.lock().await;
    state.controller.reset_quiz(&mut session);
    Ok(success_json(SessionResponse::render(id, &session)))
}

#[post("/api/sessions/{id}/tips")]
pub async fn submit_tips(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    request: web::Json<TipsRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;
    let profile = StudyProfile::from(request);

    let id = id.into_inner();
    let handle = require_session(state.sessions.as_ref(), &id).await?;
    let mut session = handle.lock().await;
    state
        .controller
        .submit_tips_request(&mut session, &profile)
        .await?;
    Ok(success_json(SessionResponse::render(id, &session)))
}

#[get("/api/sessions/{id}/tips.txt")]
pub async fn download_tips(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let handle = require_session(state.sessions.as_ref(), &id).await?;
    let session = handle.lock().await;
    let body = state.controller.tips_text(&session)?;
    Ok(text_attachment(TIPS_FILE_NAME, body))
}
