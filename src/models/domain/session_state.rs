use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};
use crate::models::domain::quiz_item::QuizItem;
use crate::models::domain::tip_category::TipCategory;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Home,
    Summarizer,
    Quiz,
    Tips,
}

/// Everything one user's session remembers between actions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub active_view: View,
    pub last_summary: String,
    pub quiz: Vec<QuizItem>,
    pub answers: BTreeMap<usize, String>,
    pub score: usize,
    pub submitted: bool,
    pub tips: Vec<TipCategory>,
}

impl SessionState {
    pub fn navigate(&mut self, view: View) {
        self.active_view = view;
    }

    pub fn has_summary(&self) -> bool {
        !self.last_summary.is_empty()
    }

    pub fn store_summary(&mut self, summary: String) {
        self.last_summary = summary;
    }

    /// Replaces the quiz and forgets everything about the previous attempt.
    pub fn store_quiz(&mut self, quiz: Vec<QuizItem>) {
        self.quiz = quiz;
        self.answers.clear();
        self.score = 0;
        self.submitted = false;
    }

    pub fn store_tips(&mut self, tips: Vec<TipCategory>) {
        self.tips = tips;
    }

    /// Answers are frozen once the quiz is graded, until it is reset or replaced.
    pub fn record_answer(&mut self, index: usize, value: String) -> AppResult<()> {
        if self.submitted {
            return Err(AppError::ValidationError(
                "the quiz has already been submitted".to_string(),
            ));
        }
        if index >= self.quiz.len() {
            return Err(AppError::ValidationError(format!(
                "question {} does not exist, the quiz has {} questions",
                index + 1,
                self.quiz.len()
            )));
        }
        self.answers.insert(index, value);
        Ok(())
    }

    /// Scores the recorded answers. Unanswered questions count as wrong.
    pub fn grade_quiz(&mut self) -> AppResult<usize> {
        if self.quiz.is_empty() {
            return Err(AppError::ValidationError(
                "there is no quiz to grade".to_string(),
            ));
        }
        self.score = self
            .quiz
            .iter()
            .enumerate()
            .filter(|(idx, item)| {
                self.answers
                    .get(idx)
                    .is_some_and(|answer| item.is_correct(answer))
            })
            .count();
        self.submitted = true;
        Ok(self.score)
    }

    pub fn reset_quiz(&mut self) {
        self.quiz.clear();
        self.answers.clear();
        self.score = 0;
        self.submitted = false;
    }
}
