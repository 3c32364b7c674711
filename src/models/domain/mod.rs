pub mod options;
pub mod quiz_item;
pub mod session_state;
pub mod study_profile;
pub mod tip_category;
pub use options::{LengthOption, QuizTypeOption};
pub use quiz_item::{QuestionKind, QuizItem};
pub use session_state::{SessionState, View};
pub use study_profile::StudyProfile;
pub use tip_category::TipCategory;
