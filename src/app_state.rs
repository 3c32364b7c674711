use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    repositories::{InMemorySessionRepository, SessionRepository},
    services::{
        content_service::ContentService,
        session_controller::SessionController,
        text_generation::{OpenAiClient, TextGenerationClient},
    },
};

#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<dyn SessionRepository>,
    pub controller: Arc<SessionController>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Fails with `MissingCredential` when no API key is configured.
    pub fn new(config: Config) -> AppResult<Self> {
        let api_key = config.api_key()?;
        let client: Arc<dyn TextGenerationClient> = Arc::new(OpenAiClient::new(api_key, &config));
        Ok(Self::with_client(config, client))
    }

    pub fn with_client(config: Config, client: Arc<dyn TextGenerationClient>) -> Self {
        let content = Arc::new(ContentService::new(client));
        let controller = Arc::new(SessionController::new(content));

        Self {
            sessions: Arc::new(InMemorySessionRepository::new()),
            controller,
            config: Arc::new(config),
        }
    }
}
