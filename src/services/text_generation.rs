use std::time::Duration;

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessage, CreateChatCompletionRequest,
        CreateChatCompletionRequestArgs, ResponseFormat,
    },
    Client,
};
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::config::Config;
use crate::errors::{AppError, AppResult};

const SUMMARY_MAX_TOKENS: u32 = 1000;
const STRUCTURED_MAX_TOKENS: u32 = 2000;
const DEFAULT_TEMPERATURE: f32 = 0.7;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CompletionOptions {
    pub temperature: f32,
    pub max_tokens: u32,
}

impl CompletionOptions {
    pub fn summary() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: SUMMARY_MAX_TOKENS,
        }
    }

    pub fn structured() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: STRUCTURED_MAX_TOKENS,
        }
    }
}

/// The remote text-generation endpoint, reduced to the two calls the app makes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerationClient: Send + Sync {
    /// Free-form text completion.
    async fn complete(&self, prompt: &str, options: CompletionOptions) -> AppResult<String>;

    /// Completion in structured-JSON mode, parsed into a JSON document.
    async fn complete_structured(
        &self,
        prompt: &str,
        options: CompletionOptions,
    ) -> AppResult<serde_json::Value>;
}

pub struct OpenAiClient {
    client: Client<OpenAIConfig>,
    model: String,
    timeout: Duration,
}

impl OpenAiClient {
    pub fn new(api_key: &SecretString, config: &Config) -> Self {
        let mut openai_config = OpenAIConfig::new().with_api_key(api_key.expose_secret());
        if let Some(base) = &config.openai_api_base {
            openai_config = openai_config.with_api_base(base);
        }

        Self {
            client: Client::with_config(openai_config),
            model: config.openai_model.clone(),
            timeout: config.request_timeout(),
        }
    }

    fn build_request(
        &self,
        prompt: &str,
        options: CompletionOptions,
        json: bool,
    ) -> AppResult<CreateChatCompletionRequest> {
        let message: ChatCompletionRequestMessage = ChatCompletionRequestUserMessage::from(prompt).into();
        let mut args = CreateChatCompletionRequestArgs::default();
        args.model(&self.model)
            .messages(vec![message])
            .temperature(options.temperature)
            .max_completion_tokens(options.max_tokens);
        if json {
            args.response_format(ResponseFormat::JsonObject);
        }

        Ok(args.build()?)
    }

    async fn send(&self, request: CreateChatCompletionRequest) -> AppResult<String> {
        log::debug!(
            "Sending chat completion to model {} (max_tokens={:?}, json={})",
            request.model,
            request.max_completion_tokens,
            request.response_format.is_some()
        );

        let chat = self.client.chat();
        let response = tokio::time::timeout(self.timeout, chat.create(request))
            .await
            .map_err(|_| {
                AppError::generation(format!(
                    "request timed out after {}s",
                    self.timeout.as_secs()
                ))
            })??;

        response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| AppError::generation("the model returned an empty response"))
    }
}

#[async_trait]
impl TextGenerationClient for OpenAiClient {
    async fn complete(&self, prompt: &str, options: CompletionOptions) -> AppResult<String> {
        let request = self.build_request(prompt, options, false)?;
        self.send(request).await
    }

    async fn complete_structured(
        &self,
        prompt: &str,
        options: CompletionOptions,
    ) -> AppResult<serde_json::Value> {
        let request = self.build_request(prompt, options, true)?;
        let content = self.send(request).await?;
        parse_json_reply(&content)
    }
}

pub fn parse_json_reply(content: &str) -> AppResult<serde_json::Value> {
    serde_json::from_str(content.trim())
        .map_err(|e| AppError::MalformedResponse(format!("reply is not valid JSON: {}", e)))
}
