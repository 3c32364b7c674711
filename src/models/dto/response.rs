//! View models rendered from a session's state. The page draws whatever
//! view the session is on from exactly one of these.

use serde::Serialize;
use uuid::Uuid;

use crate::models::domain::study_profile::{
    Challenge, LearningStyle, StudyEnvironment, StudyTime, Subject,
};
use crate::models::domain::{
    LengthOption, QuizItem, QuizTypeOption, SessionState, TipCategory, View,
};
use crate::models::dto::request::{MAX_QUESTIONS, MIN_QUESTIONS};

#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub session_id: Uuid,
    #[serde(flatten)]
    pub view: ViewModel,
}

impl SessionResponse {
    pub fn render(session_id: Uuid, state: &SessionState) -> Self {
        Self {
            session_id,
            view: ViewModel::from(state),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "lowercase")]
pub enum ViewModel {
    Home(HomeView),
    Summarizer(SummarizerView),
    Quiz(QuizView),
    Tips(TipsView),
}

impl From<&SessionState> for ViewModel {
    fn from(state: &SessionState) -> Self {
        match state.active_view {
            View::Home => ViewModel::Home(HomeView::default()),
            View::Summarizer => ViewModel::Summarizer(SummarizerView::from(state)),
            View::Quiz => ViewModel::Quiz(QuizView::from(state)),
            View::Tips => ViewModel::Tips(TipsView::from(state)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureCard {
    pub title: &'static str,
    pub description: &'static str,
    pub button: &'static str,
    pub target: View,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeView {
    pub features: Vec<FeatureCard>,
}

impl Default for HomeView {
    fn default() -> Self {
        Self {
            features: vec![
                FeatureCard {
                    title: "Text Summarizer",
                    description: "Paste your notes or textbook content to get a concise summary.",
                    button: "Try Summarizer",
                    target: View::Summarizer,
                },
                FeatureCard {
                    title: "Quiz Generator",
                    description: "Generate practice questions from your study material.",
                    button: "Try Quiz Generator",
                    target: View::Quiz,
                },
                FeatureCard {
                    title: "Study Tips",
                    description: "Get personalized study recommendations based on your preferences.",
                    button: "Try Study Tips",
                    target: View::Tips,
                },
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummarizerView {
    pub length_options: Vec<&'static str>,
    pub default_length: &'static str,
    pub summary: Option<String>,
    /// Download and "generate quiz from summary" are offered once a summary exists.
    pub can_download: bool,
    pub can_generate_quiz: bool,
}

impl From<&SessionState> for SummarizerView {
    fn from(state: &SessionState) -> Self {
        let summary = state.has_summary().then(|| state.last_summary.clone());
        Self {
            length_options: LengthOption::ALL.iter().map(|o| o.label()).collect(),
            default_length: LengthOption::default().label(),
            can_download: summary.is_some(),
            can_generate_quiz: summary.is_some(),
            summary,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AnswerWidget {
    Radio { options: Vec<String> },
    Text,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionView {
    pub number: usize,
    pub question: String,
    pub widget: AnswerWidget,
    pub answer: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionResult {
    pub number: usize,
    pub question: String,
    pub your_answer: Option<String>,
    pub correct_answer: String,
    pub correct: bool,
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizResults {
    pub score: usize,
    pub total: usize,
    pub questions: Vec<QuestionResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizView {
    pub question_type_options: Vec<&'static str>,
    pub min_count: u8,
    pub max_count: u8,
    pub can_use_last_summary: bool,
    pub questions: Vec<QuestionView>,
    pub submitted: bool,
    pub results: Option<QuizResults>,
}

impl From<&SessionState> for QuizView {
    fn from(state: &SessionState) -> Self {
        let questions = state
            .quiz
            .iter()
            .enumerate()
            .map(|(idx, item)| QuestionView {
                number: idx + 1,
                question: item.question.clone(),
                widget: widget_for(item),
                answer: state.answers.get(&idx).cloned(),
            })
            .collect();

        let results = state.submitted.then(|| QuizResults {
            score: state.score,
            total: state.quiz.len(),
            questions: state
                .quiz
                .iter()
                .enumerate()
                .map(|(idx, item)| {
                    let your_answer = state.answers.get(&idx).cloned();
                    QuestionResult {
                        number: idx + 1,
                        question: item.question.clone(),
                        correct: your_answer.as_deref().is_some_and(|a| item.is_correct(a)),
                        your_answer,
                        correct_answer: item.answer.clone(),
                        explanation: item.explanation.clone(),
                    }
                })
                .collect(),
        });

        Self {
            question_type_options: QuizTypeOption::ALL.iter().map(|o| o.label()).collect(),
            min_count: MIN_QUESTIONS,
            max_count: MAX_QUESTIONS,
            can_use_last_summary: state.has_summary(),
            questions,
            submitted: state.submitted,
            results,
        }
    }
}

fn widget_for(item: &QuizItem) -> AnswerWidget {
    match item.choices() {
        Some(options) => AnswerWidget::Radio { options },
        None => AnswerWidget::Text,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TipsForm {
    pub subjects: Vec<&'static str>,
    pub learning_styles: Vec<&'static str>,
    pub challenges: Vec<&'static str>,
    pub study_times: Vec<&'static str>,
    pub study_environments: Vec<&'static str>,
}

impl Default for TipsForm {
    fn default() -> Self {
        Self {
            subjects: Subject::ALL.iter().map(|o| o.label()).collect(),
            learning_styles: LearningStyle::ALL.iter().map(|o| o.label()).collect(),
            challenges: Challenge::ALL.iter().map(|o| o.label()).collect(),
            study_times: StudyTime::ALL.iter().map(|o| o.label()).collect(),
            study_environments: StudyEnvironment::ALL.iter().map(|o| o.label()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TipsView {
    pub form: TipsForm,
    pub categories: Vec<TipCategory>,
    pub can_download: bool,
}

impl From<&SessionState> for TipsView {
    fn from(state: &SessionState) -> Self {
        Self {
            form: TipsForm::default(),
            categories: state.tips.clone(),
            can_download: !state.tips.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::QuestionKind;

    fn quiz_state() -> SessionState {
        let mut state = SessionState::default();
        state.navigate(View::Quiz);
        state.store_quiz(vec![
            QuizItem {
                question: "Pick one".to_string(),
                kind: QuestionKind::MultipleChoice,
                options: vec!["A".to_string(), "B".to_string()],
                answer: "A".to_string(),
                explanation: Some("A is right".to_string()),
            },
            QuizItem {
                question: "Water is wet.".to_string(),
                kind: QuestionKind::TrueFalse,
                options: vec![],
                answer: "True".to_string(),
                explanation: None,
            },
            QuizItem {
                question: "_____ is red.".to_string(),
                kind: QuestionKind::FillBlank,
                options: vec![],
                answer: "Mars".to_string(),
                explanation: None,
            },
        ]);
        state
    }

    #[test]
    fn home_is_the_default_view() {
        let view = ViewModel::from(&SessionState::default());
        match view {
            ViewModel::Home(home) => {
                let targets: Vec<View> = home.features.iter().map(|f| f.target).collect();
                assert_eq!(targets, vec![View::Summarizer, View::Quiz, View::Tips]);
            }
            other => panic!("expected home view, got {:?}", other),
        }
    }

    #[test]
    fn summarizer_offers_shortcuts_only_with_a_summary() {
        let mut state = SessionState::default();
        state.navigate(View::Summarizer);

        let empty = SummarizerView::from(&state);
        assert!(empty.summary.is_none());
        assert!(!empty.can_download);
        assert_eq!(empty.length_options.len(), 4);
        assert_eq!(empty.default_length, "Medium");

        state.store_summary("Short text.".to_string());
        let filled = SummarizerView::from(&state);
        assert_eq!(filled.summary.as_deref(), Some("Short text."));
        assert!(filled.can_download && filled.can_generate_quiz);
    }

    #[test]
    fn quiz_widgets_follow_question_kind() {
        let view = QuizView::from(&quiz_state());

        assert_eq!(
            view.questions[0].widget,
            AnswerWidget::Radio {
                options: vec!["A".to_string(), "B".to_string()]
            }
        );
        assert_eq!(
            view.questions[1].widget,
            AnswerWidget::Radio {
                options: vec!["True".to_string(), "False".to_string()]
            }
        );
        assert_eq!(view.questions[2].widget, AnswerWidget::Text);
        assert!(view.results.is_none());
    }

    #[test]
    fn results_appear_after_grading() {
        let mut state = quiz_state();
        state.record_answer(0, "A".to_string()).unwrap();
        state.record_answer(2, "venus".to_string()).unwrap();
        state.grade_quiz().unwrap();

        let results = QuizView::from(&state).results.unwrap();
        assert_eq!(results.score, 1);
        assert_eq!(results.total, 3);
        assert!(results.questions[0].correct);
        assert_eq!(results.questions[0].explanation.as_deref(), Some("A is right"));
        assert_eq!(results.questions[1].your_answer, None);
        assert_eq!(results.questions[2].correct_answer, "Mars");
    }

    #[test]
    fn graded_results_match_the_score() {
        let mut state = quiz_state();
        state.record_answer(2, "Venus".to_string()).unwrap();
        state.grade_quiz().unwrap();
        assert!(state.record_answer(2, "Mars".to_string()).is_err());

        let results = QuizView::from(&state).results.unwrap();
        let correct = results.questions.iter().filter(|q| q.correct).count();
        assert_eq!(results.score, correct);
        assert_eq!(results.questions[2].your_answer.as_deref(), Some("Venus"));
    }

    #[test]
    fn view_model_is_tagged_by_view_name() {
        let mut state = SessionState::default();
        state.navigate(View::Tips);

        let json = serde_json::to_value(SessionResponse::render(Uuid::nil(), &state)).unwrap();
        assert_eq!(json["view"], "tips");
        assert_eq!(json["can_download"], false);
        assert_eq!(json["form"]["subjects"][5], "Computer Science");
    }
}
