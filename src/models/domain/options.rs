use serde::{Deserialize, Serialize};

/// Target length of a generated summary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum LengthOption {
    #[serde(rename = "Very Short")]
    VeryShort,
    #[serde(rename = "Short")]
    Short,
    #[default]
    #[serde(rename = "Medium")]
    Medium,
    #[serde(rename = "Detailed")]
    Detailed,
}

impl LengthOption {
    pub const ALL: [LengthOption; 4] = [
        LengthOption::VeryShort,
        LengthOption::Short,
        LengthOption::Medium,
        LengthOption::Detailed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LengthOption::VeryShort => "Very Short",
            LengthOption::Short => "Short",
            LengthOption::Medium => "Medium",
            LengthOption::Detailed => "Detailed",
        }
    }

    /// Descriptor embedded into the summary prompt.
    pub fn descriptor(self) -> &'static str {
        match self {
            LengthOption::VeryShort => "extremely concise (around 100 words)",
            LengthOption::Short => "brief (around 200 words)",
            LengthOption::Medium => "moderately detailed (around 350 words)",
            LengthOption::Detailed => "comprehensive but still summarized (around 500 words)",
        }
    }
}

/// Which kinds of questions a generated quiz should contain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum QuizTypeOption {
    #[serde(rename = "Multiple Choice")]
    MultipleChoice,
    #[serde(rename = "True/False")]
    TrueFalse,
    #[serde(rename = "Fill in the Blank")]
    FillInTheBlank,
    #[default]
    #[serde(rename = "Mixed")]
    Mixed,
}

impl QuizTypeOption {
    pub const ALL: [QuizTypeOption; 4] = [
        QuizTypeOption::MultipleChoice,
        QuizTypeOption::TrueFalse,
        QuizTypeOption::FillInTheBlank,
        QuizTypeOption::Mixed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            QuizTypeOption::MultipleChoice => "Multiple Choice",
            QuizTypeOption::TrueFalse => "True/False",
            QuizTypeOption::FillInTheBlank => "Fill in the Blank",
            QuizTypeOption::Mixed => "Mixed",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            QuizTypeOption::MultipleChoice => "multiple-choice questions with 4 options each",
            QuizTypeOption::TrueFalse => "true/false questions",
            QuizTypeOption::FillInTheBlank => "fill-in-the-blank questions",
            QuizTypeOption::Mixed => {
                "a mix of multiple-choice, true/false, and fill-in-the-blank questions"
            }
        }
    }
}
