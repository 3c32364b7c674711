use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate)]
#[validate(schema(function = "validate_options"))]
pub struct QuizItem {
    #[validate(length(min = 1, message = "question text is empty"))]
    pub question: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[validate(length(min = 1, message = "question has no answer"))]
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    MultipleChoice,
    TrueFalse,
    FillBlank,
}

pub const TRUE_FALSE_OPTIONS: [&str; 2] = ["True", "False"];

/// Options belong to multiple choice questions only, and must include the answer.
fn validate_options(item: &QuizItem) -> Result<(), ValidationError> {
    match item.kind {
        QuestionKind::MultipleChoice if item.options.is_empty() => {
            rejected("missing_options", "multiple choice question has no options")
        }
        QuestionKind::MultipleChoice if !item.options.contains(&item.answer) => {
            rejected("answer_not_an_option", "answer is not one of the options")
        }
        QuestionKind::MultipleChoice => Ok(()),
        _ if !item.options.is_empty() => {
            rejected("unexpected_options", "only multiple choice questions carry options")
        }
        _ => Ok(()),
    }
}

fn rejected(code: &'static str, message: &'static str) -> Result<(), ValidationError> {
    Err(ValidationError::new(code).with_message(message.into()))
}

impl QuizItem {
    /// Trims the text fields and drops options the question kind does not use.
    pub fn normalized(mut self) -> Self {
        self.question = self.question.trim().to_string();
        self.answer = self.answer.trim().to_string();
        if self.kind == QuestionKind::MultipleChoice {
            self.options = self.options.iter().map(|o| o.trim().to_string()).collect();
        } else {
            self.options.clear();
        }
        self
    }

    /// Choices offered to the user, if the question is answered with a radio group.
    pub fn choices(&self) -> Option<Vec<String>> {
        match self.kind {
            QuestionKind::MultipleChoice => Some(self.options.clone()),
            QuestionKind::TrueFalse => Some(TRUE_FALSE_OPTIONS.iter().map(|s| s.to_string()).collect()),
            QuestionKind::FillBlank => None,
        }
    }

    /// Multiple choice answers match exactly, the other kinds ignore case.
    pub fn is_correct(&self, submitted: &str) -> bool {
        match self.kind {
            QuestionKind::MultipleChoice => submitted == self.answer,
            QuestionKind::TrueFalse | QuestionKind::FillBlank => {
                submitted.to_lowercase() == self.answer.to_lowercase()
            }
        }
    }
}
