use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("OpenAI API key not found. Please set the OPENAI_API_KEY environment variable.")]
    MissingCredential,

    #[error("{0}")]
    EmptyInput(String),

    #[error("Error generating {operation}: {message}")]
    Generation {
        operation: &'static str,
        message: String,
    },

    #[error("Invalid response format from API: {0}")]
    MalformedResponse(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    /// A failed remote call, before it is known which operation made it.
    pub fn generation(message: impl Into<String>) -> Self {
        AppError::Generation {
            operation: "content",
            message: message.into(),
        }
    }

    /// Names the operation a generation failure belongs to. Other errors pass through.
    pub fn during(self, operation: &'static str) -> Self {
        match self {
            AppError::Generation { message, .. } => AppError::Generation { operation, message },
            other => other,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::MissingCredential => "MISSING_CREDENTIAL",
            AppError::EmptyInput(_) => "EMPTY_INPUT",
            AppError::Generation { .. } => "GENERATION_ERROR",
            AppError::MalformedResponse(_) => "MALFORMED_RESPONSE",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
        }
    }

    /// Warnings are recoverable local problems, everything else is shown as an error.
    pub fn severity(&self) -> Severity {
        match self {
            AppError::EmptyInput(_) | AppError::ValidationError(_) => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    pub kind: &'static str,
    pub severity: Severity,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingCredential => StatusCode::SERVICE_UNAVAILABLE,
            AppError::EmptyInput(_) => StatusCode::BAD_REQUEST,
            AppError::Generation { .. } => StatusCode::BAD_GATEWAY,
            AppError::MalformedResponse(_) => StatusCode::BAD_GATEWAY,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.status_code().as_u16(),
            kind: self.error_code(),
            severity: self.severity(),
        })
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<async_openai::error::OpenAIError> for AppError {
    fn from(err: async_openai::error::OpenAIError) -> Self {
        AppError::generation(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
