use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{LengthOption, QuizTypeOption, SessionState, StudyProfile, View},
    models::domain::tip_category::tips_as_text,
    models::dto::request::{MAX_QUESTIONS, MIN_QUESTIONS},
    services::content_service::ContentService,
};

pub const EMPTY_SUMMARY_INPUT: &str = "Please enter some text to summarize.";
pub const EMPTY_QUIZ_INPUT: &str = "Please enter some text to generate questions from.";

/// Entry points that move a session from one state to the next. Generation
/// calls happen before any mutation, so a failed call leaves `state` as it was.
pub struct SessionController {
    content: Arc<ContentService>,
}

impl SessionController {
    pub fn new(content: Arc<ContentService>) -> Self {
        Self { content }
    }

    pub fn navigate(&self, state: &mut SessionState, view: View) {
        log::debug!("Navigating from {:?} to {:?}", state.active_view, view);
        state.navigate(view);
    }

    pub async fn submit_summary_request(
        &self,
        state: &mut SessionState,
        text: &str,
        length: LengthOption,
    ) -> AppResult<()> {
        if text.trim().is_empty() {
            return Err(AppError::EmptyInput(EMPTY_SUMMARY_INPUT.to_string()));
        }

        let summary = self.content.summarize(text, length).await?;
        state.store_summary(summary);
        Ok(())
    }

    pub async fn submit_quiz_request(
        &self,
        state: &mut SessionState,
        text: &str,
        use_last_summary: bool,
        count: u8,
        kind: QuizTypeOption,
    ) -> AppResult<()> {
        let source = if use_last_summary && state.has_summary() {
            state.last_summary.clone()
        } else {
            text.to_string()
        };
        if source.trim().is_empty() {
            return Err(AppError::EmptyInput(EMPTY_QUIZ_INPUT.to_string()));
        }
        if !(MIN_QUESTIONS..=MAX_QUESTIONS).contains(&count) {
            return Err(AppError::ValidationError(format!(
                "number of questions must be between {} and {}, got {}",
                MIN_QUESTIONS, MAX_QUESTIONS, count
            )));
        }

        let quiz = self.content.generate_quiz(&source, count, kind).await?;
        state.store_quiz(quiz);
        Ok(())
    }

    pub fn record_answer(
        &self,
        state: &mut SessionState,
        index: usize,
        value: String,
    ) -> AppResult<()> {
        state.record_answer(index, value)
    }

    pub fn grade_quiz(&self, state: &mut SessionState) -> AppResult<usize> {
        let score = state.grade_quiz()?;
        log::info!("Quiz graded: {} of {} correct", score, state.quiz.len());
        Ok(score)
    }

    pub fn reset_quiz(&self, state: &mut SessionState) {
        state.reset_quiz();
    }

    pub async fn submit_tips_request(
        &self,
        state: &mut SessionState,
        profile: &StudyProfile,
    ) -> AppResult<()> {
        let tips = self.content.generate_tips(profile).await?;
        state.store_tips(tips);
        Ok(())
    }

    pub fn summary_text(&self, state: &SessionState) -> AppResult<String> {
        if !state.has_summary() {
            return Err(AppError::NotFound("no summary has been generated yet".to_string()));
        }
        Ok(state.last_summary.clone())
    }

    pub fn tips_text(&self, state: &SessionState) -> AppResult<String> {
        if state.tips.is_empty() {
            return Err(AppError::NotFound("no study tips have been generated yet".to_string()));
        }
        Ok(tips_as_text(&state.tips))
    }
}
