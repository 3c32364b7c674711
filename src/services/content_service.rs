use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::Validate;

use crate::{
    constants::prompts,
    errors::{AppError, AppResult},
    models::domain::{LengthOption, QuizItem, QuizTypeOption, StudyProfile, TipCategory},
    services::text_generation::{CompletionOptions, TextGenerationClient},
};

pub const QUESTIONS_FIELD: &str = "questions";
pub const CATEGORIES_FIELD: &str = "categories";

/// Builds prompts, calls the remote model and decodes its replies.
/// Never touches session state.
pub struct ContentService {
    client: Arc<dyn TextGenerationClient>,
}

impl ContentService {
    pub fn new(client: Arc<dyn TextGenerationClient>) -> Self {
        Self { client }
    }

    pub async fn summarize(&self, text: &str, length: LengthOption) -> AppResult<String> {
        log::info!(
            "Generating {} summary for {} characters of text",
            length.label(),
            text.len()
        );
        let prompt = prompts::summary_prompt(text, length);

        self.client
            .complete(&prompt, CompletionOptions::summary())
            .await
            .map_err(|e| e.during("summary"))
            .inspect_err(|e| log::warn!("{}", e))
    }

    pub async fn generate_quiz(
        &self,
        text: &str,
        count: u8,
        kind: QuizTypeOption,
    ) -> AppResult<Vec<QuizItem>> {
        log::info!("Generating {} {} questions", count, kind.label());
        let prompt = prompts::quiz_prompt(text, count, kind);

        let reply = self
            .client
            .complete_structured(&prompt, CompletionOptions::structured())
            .await
            .map_err(|e| e.during("quiz"))
            .inspect_err(|e| log::warn!("{}", e))?;

        let items = decode_list(reply, QUESTIONS_FIELD, QuizItem::normalized)?;
        if items.len() != count as usize {
            log::warn!(
                "Requested {} questions but the model returned {}",
                count,
                items.len()
            );
        }
        Ok(items)
    }

    pub async fn generate_tips(&self, profile: &StudyProfile) -> AppResult<Vec<TipCategory>> {
        log::info!(
            "Generating study tips for a {} student",
            profile.subject.label()
        );
        let prompt = prompts::tips_prompt(profile);

        let reply = self
            .client
            .complete_structured(&prompt, CompletionOptions::structured())
            .await
            .map_err(|e| e.during("study tips"))
            .inspect_err(|e| log::warn!("{}", e))?;

        decode_list(reply, CATEGORIES_FIELD, TipCategory::normalized)
    }
}

/// The two shapes the model is allowed to answer with.
#[derive(Debug, PartialEq)]
pub enum ListPayload {
    /// A top-level JSON array.
    Bare(Vec<Value>),
    /// An object holding the array under a known field.
    Wrapped(Vec<Value>),
}

impl ListPayload {
    pub fn classify(value: Value, field: &str) -> AppResult<Self> {
        match value {
            Value::Array(items) => Ok(ListPayload::Bare(items)),
            Value::Object(mut map) => match map.remove(field) {
                Some(Value::Array(items)) => Ok(ListPayload::Wrapped(items)),
                Some(_) => Err(AppError::MalformedResponse(format!(
                    "the `{}` field is not an array",
                    field
                ))),
                None => Err(AppError::MalformedResponse(format!(
                    "expected an array or an object with a `{}` field",
                    field
                ))),
            },
            other => Err(AppError::MalformedResponse(format!(
                "expected an array or an object with a `{}` field, got {}",
                field,
                json_kind(&other)
            ))),
        }
    }

    pub fn into_items(self) -> Vec<Value> {
        match self {
            ListPayload::Bare(items) | ListPayload::Wrapped(items) => items,
        }
    }
}

/// Decodes, normalizes and validates every element, rejecting the whole reply
/// if one does not fit.
pub fn decode_list<T>(value: Value, field: &str, normalize: fn(T) -> T) -> AppResult<Vec<T>>
where
    T: DeserializeOwned + Validate,
{
    let items = ListPayload::classify(value, field)?.into_items();
    if items.is_empty() {
        return Err(AppError::MalformedResponse(
            "the model returned an empty list".to_string(),
        ));
    }

    items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| {
            let invalid = |reason: String| {
                AppError::MalformedResponse(format!("item {} is invalid: {}", idx + 1, reason))
            };
            let item = normalize(serde_json::from_value(item).map_err(|e| invalid(e.to_string()))?);
            item.validate().map_err(|e| invalid(e.to_string()))?;
            Ok(item)
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
