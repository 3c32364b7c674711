use std::sync::{Arc, Mutex};

use actix_web::{http::StatusCode, test, web, App};
use async_trait::async_trait;
use serde_json::{json, Value};

use study_buddy::{
    app_state::AppState,
    config::Config,
    errors::{AppError, AppResult},
    handlers,
    models::domain::{QuizTypeOption, SessionState, View},
    services::{
        content_service::ContentService,
        session_controller::SessionController,
        text_generation::{CompletionOptions, TextGenerationClient},
    },
};

/// Replays fixed replies and records every prompt it was sent.
struct CannedClient {
    text: String,
    structured: Value,
    prompts: Mutex<Vec<String>>,
}

impl CannedClient {
    fn new(text: &str, structured: Value) -> Self {
        Self {
            text: text.to_string(),
            structured,
            prompts: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl TextGenerationClient for CannedClient {
    async fn complete(&self, prompt: &str, _options: CompletionOptions) -> AppResult<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(self.text.clone())
    }

    async fn complete_structured(
        &self,
        prompt: &str,
        _options: CompletionOptions,
    ) -> AppResult<Value> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(self.structured.clone())
    }
}

fn test_config(api_key: Option<&str>) -> Config {
    Config {
        openai_api_key: api_key.map(|key| key.to_string().into()),
        openai_api_base: None,
        openai_model: "gpt-4o".to_string(),
        openai_timeout_secs: 5,
        web_server_host: "127.0.0.1".to_string(),
        web_server_port: 0,
        session_idle_minutes: 120,
    }
}

fn controller(client: Arc<CannedClient>) -> SessionController {
    SessionController::new(Arc::new(ContentService::new(client)))
}

#[tokio::test]
async fn long_notes_produce_a_verbatim_summary() {
    let summary = "Forty words about cells. ".repeat(8);
    let client = Arc::new(CannedClient::new(&summary, json!({})));
    let controller = controller(client.clone());
    let mut state = SessionState::default();
    let notes = "Cells divide by mitosis. ".repeat(125);

    controller
        .submit_summary_request(&mut state, &notes, Default::default())
        .await
        .unwrap();

    assert_eq!(state.last_summary, summary);
    assert_eq!(client.calls(), 1);
    assert!(client.prompts.lock().unwrap()[0].contains("Cells divide by mitosis."));
}

#[tokio::test]
async fn true_false_quiz_is_stored_with_fresh_answers() {
    let reply = json!({
        "questions": [
            { "question": "The sun is a star.", "type": "true_false", "answer": "True" },
            { "question": "Water boils at 50C at sea level.", "type": "true_false", "answer": "False" },
            { "question": "Mars has two moons.", "type": "true_false", "answer": "True" }
        ]
    });
    let client = Arc::new(CannedClient::new("", reply));
    let controller = controller(client.clone());
    let mut state = SessionState::default();
    state.navigate(View::Quiz);

    controller
        .submit_quiz_request(&mut state, "astronomy notes", false, 3, QuizTypeOption::TrueFalse)
        .await
        .unwrap();

    assert_eq!(state.quiz.len(), 3);
    assert!(state.answers.is_empty());
    assert!(!state.submitted);
    assert_eq!(state.score, 0);
    assert_eq!(state.active_view, View::Quiz);

    for (index, value) in ["true", "False", "False"].into_iter().enumerate() {
        controller
            .record_answer(&mut state, index, value.to_string())
            .unwrap();
    }
    assert_eq!(controller.grade_quiz(&mut state).unwrap(), 2);
    assert!(state.submitted);
}

#[tokio::test]
async fn blank_input_never_reaches_the_client() {
    let client = Arc::new(CannedClient::new("unused", json!({})));
    let controller = controller(client.clone());
    let mut state = SessionState::default();

    let err = controller
        .submit_summary_request(&mut state, "   \n", Default::default())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::EmptyInput(_)));

    let err = controller
        .submit_quiz_request(&mut state, "", true, 5, QuizTypeOption::Mixed)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::EmptyInput(_)));

    assert_eq!(client.calls(), 0);
}

#[actix_web::test]
async fn app_without_credential_is_locked() {
    let config = test_config(None);
    assert!(matches!(
        AppState::new(config),
        Err(AppError::MissingCredential)
    ));

    let app = test::init_service(App::new().configure(handlers::configure_locked)).await;
    let resp = test::call_service(&app, test::TestRequest::post().uri("/api/sessions").to_request()).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[actix_web::test]
async fn tips_flow_over_http() {
    let reply = json!({
        "categories": [
            { "title": "Study Techniques", "tips": ["Draw diagrams", "Use flashcards"] },
            { "title": "Time Management", "tips": ["Study in 25 minute blocks"] }
        ]
    });
    let client = Arc::new(CannedClient::new("", reply));
    let state = AppState::with_client(test_config(Some("sk-test")), client.clone());
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(handlers::configure),
    )
    .await;

    let created: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post().uri("/api/sessions").to_request(),
    )
    .await;
    let id = created["session_id"].as_str().unwrap().to_string();

    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&format!("/api/sessions/{}/view", id))
            .set_json(json!({ "view": "tips" }))
            .to_request(),
    )
    .await;
    assert!(resp.status().is_success());

    let tips: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri(&format!("/api/sessions/{}/tips", id))
            .set_json(json!({
                "subject": "Science",
                "learning_style": "Visual",
                "challenges": ["Test anxiety"],
                "study_time": "1-2 hours",
                "study_environment": "Library",
                "additional_info": "  Exam soon  "
            }))
            .to_request(),
    )
    .await;
    assert_eq!(tips["view"], "tips");
    assert_eq!(tips["categories"].as_array().unwrap().len(), 2);
    assert_eq!(tips["can_download"], true);

    let prompt = client.prompts.lock().unwrap()[0].clone();
    assert!(prompt.contains("Test anxiety"));
    assert!(prompt.contains("Exam soon"));

    let body = test::call_and_read_body(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/sessions/{}/tips.txt", id))
            .to_request(),
    )
    .await;
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.starts_with("# Study Techniques\n\n- Draw diagrams\n"));
}
