use crate::models::domain::StudyProfile;

#[cfg(test)]
pub mod fixtures {
    use super::*;
    use crate::models::domain::study_profile::{
        Challenge, LearningStyle, StudyEnvironment, StudyTime, Subject,
    };
    use crate::models::domain::{QuestionKind, QuizItem};

    /// A filled-in study preferences form
    pub fn test_profile() -> StudyProfile {
        StudyProfile {
            subject: Subject::Science,
            learning_style: LearningStyle::Visual,
            challenges: [Challenge::TestAnxiety, Challenge::StayingFocused]
                .into_iter()
                .collect(),
            study_time: StudyTime::OneToTwoHours,
            study_environment: StudyEnvironment::Library,
            additional_info: "Exam in two weeks".to_string(),
        }
    }

    /// One question of each kind
    pub fn test_quiz() -> Vec<QuizItem> {
        vec![
            QuizItem {
                question: "Which gas do plants absorb?".to_string(),
                kind: QuestionKind::MultipleChoice,
                options: vec![
                    "Oxygen".to_string(),
                    "Carbon dioxide".to_string(),
                    "Nitrogen".to_string(),
                    "Helium".to_string(),
                ],
                answer: "Carbon dioxide".to_string(),
                explanation: Some("Plants fix CO2 during photosynthesis".to_string()),
            },
            QuizItem {
                question: "Photosynthesis happens in chloroplasts.".to_string(),
                kind: QuestionKind::TrueFalse,
                options: vec![],
                answer: "True".to_string(),
                explanation: None,
            },
            QuizItem {
                question: "Plants release _____ as a by-product.".to_string(),
                kind: QuestionKind::FillBlank,
                options: vec![],
                answer: "Oxygen".to_string(),
                explanation: None,
            },
        ]
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use validator::Validate;

    #[test]
    fn test_fixtures_test_profile() {
        let profile = test_profile();
        assert_eq!(profile.challenges.len(), 2);
        assert_eq!(profile.additional_info, "Exam in two weeks");
    }

    #[test]
    fn test_fixtures_test_quiz_is_valid() {
        let quiz = test_quiz();
        assert_eq!(quiz.len(), 3);
        assert!(quiz.iter().all(|item| item.validate().is_ok()));
    }
}
