use std::collections::BTreeSet;

use serde::Deserialize;
use validator::Validate;

use crate::models::domain::study_profile::{
    Challenge, LearningStyle, StudyEnvironment, StudyTime, Subject,
};
use crate::models::domain::{LengthOption, QuizTypeOption, StudyProfile, View};

pub const MIN_QUESTIONS: u8 = 1;
pub const MAX_QUESTIONS: u8 = 10;

fn default_question_count() -> u8 {
    5
}

#[derive(Debug, Clone, Deserialize)]
pub struct NavigateRequest {
    pub view: View,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SummaryRequest {
    #[serde(default)]
    #[validate(length(max = 100000))]
    pub text: String,

    #[serde(default)]
    pub length: LengthOption,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct QuizRequest {
    #[serde(default)]
    #[validate(length(max = 100000))]
    pub text: String,

    /// Quiz on the last generated summary instead of `text`.
    #[serde(default)]
    pub use_last_summary: bool,

    #[serde(default = "default_question_count")]
    #[validate(range(min = 1, max = 10))]
    pub count: u8,

    #[serde(default)]
    pub question_type: QuizTypeOption,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AnswerRequest {
    #[validate(length(max = 1000))]
    pub value: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TipsRequest {
    pub subject: Subject,
    pub learning_style: LearningStyle,
    #[serde(default)]
    pub challenges: BTreeSet<Challenge>,
    pub study_time: StudyTime,
    pub study_environment: StudyEnvironment,
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub additional_info: String,
}

impl From<TipsRequest> for StudyProfile {
    fn from(request: TipsRequest) -> Self {
        StudyProfile {
            subject: request.subject,
            learning_style: request.learning_style,
            challenges: request.challenges,
            study_time: request.study_time,
            study_environment: request.study_environment,
            additional_info: request.additional_info.trim().to_string(),
        }
    }
}
