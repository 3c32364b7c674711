use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Answers from the study preferences form. Built fresh for every submission.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct StudyProfile {
    pub subject: Subject,
    pub learning_style: LearningStyle,
    #[serde(default)]
    pub challenges: BTreeSet<Challenge>,
    pub study_time: StudyTime,
    pub study_environment: StudyEnvironment,
    #[serde(default)]
    pub additional_info: String,
}

impl StudyProfile {
    /// Challenges joined in form order, as they appear in the prompt.
    pub fn challenge_list(&self) -> String {
        self.challenges
            .iter()
            .map(|c| c.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum Subject {
    Math,
    Science,
    History,
    Literature,
    Languages,
    #[serde(rename = "Computer Science")]
    ComputerScience,
    Other,
}

impl Subject {
    pub const ALL: [Subject; 7] = [
        Subject::Math,
        Subject::Science,
        Subject::History,
        Subject::Literature,
        Subject::Languages,
        Subject::ComputerScience,
        Subject::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Subject::Math => "Math",
            Subject::Science => "Science",
            Subject::History => "History",
            Subject::Literature => "Literature",
            Subject::Languages => "Languages",
            Subject::ComputerScience => "Computer Science",
            Subject::Other => "Other",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum LearningStyle {
    Visual,
    Auditory,
    #[serde(rename = "Reading/Writing")]
    ReadingWriting,
    Kinesthetic,
    #[serde(rename = "I'm not sure")]
    NotSure,
}

impl LearningStyle {
    pub const ALL: [LearningStyle; 5] = [
        LearningStyle::Visual,
        LearningStyle::Auditory,
        LearningStyle::ReadingWriting,
        LearningStyle::Kinesthetic,
        LearningStyle::NotSure,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LearningStyle::Visual => "Visual",
            LearningStyle::Auditory => "Auditory",
            LearningStyle::ReadingWriting => "Reading/Writing",
            LearningStyle::Kinesthetic => "Kinesthetic",
            LearningStyle::NotSure => "I'm not sure",
        }
    }
}

// Ord follows declaration order, which is the order the form lists them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Deserialize, Serialize)]
pub enum Challenge {
    #[serde(rename = "Staying focused")]
    StayingFocused,
    #[serde(rename = "Remembering information")]
    RememberingInformation,
    #[serde(rename = "Understanding complex concepts")]
    UnderstandingComplexConcepts,
    #[serde(rename = "Finding motivation")]
    FindingMotivation,
    #[serde(rename = "Managing study time")]
    ManagingStudyTime,
    #[serde(rename = "Test anxiety")]
    TestAnxiety,
    #[serde(rename = "Information overload")]
    InformationOverload,
}

impl Challenge {
    pub const ALL: [Challenge; 7] = [
        Challenge::StayingFocused,
        Challenge::RememberingInformation,
        Challenge::UnderstandingComplexConcepts,
        Challenge::FindingMotivation,
        Challenge::ManagingStudyTime,
        Challenge::TestAnxiety,
        Challenge::InformationOverload,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Challenge::StayingFocused => "Staying focused",
            Challenge::RememberingInformation => "Remembering information",
            Challenge::UnderstandingComplexConcepts => "Understanding complex concepts",
            Challenge::FindingMotivation => "Finding motivation",
            Challenge::ManagingStudyTime => "Managing study time",
            Challenge::TestAnxiety => "Test anxiety",
            Challenge::InformationOverload => "Information overload",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum StudyTime {
    #[serde(rename = "Less than 1 hour")]
    LessThanOneHour,
    #[serde(rename = "1-2 hours")]
    OneToTwoHours,
    #[serde(rename = "2-3 hours")]
    TwoToThreeHours,
    #[serde(rename = "3-4 hours")]
    ThreeToFourHours,
    #[serde(rename = "4+ hours")]
    FourPlusHours,
}

impl StudyTime {
    pub const ALL: [StudyTime; 5] = [
        StudyTime::LessThanOneHour,
        StudyTime::OneToTwoHours,
        StudyTime::TwoToThreeHours,
        StudyTime::ThreeToFourHours,
        StudyTime::FourPlusHours,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StudyTime::LessThanOneHour => "Less than 1 hour",
            StudyTime::OneToTwoHours => "1-2 hours",
            StudyTime::TwoToThreeHours => "2-3 hours",
            StudyTime::ThreeToFourHours => "3-4 hours",
            StudyTime::FourPlusHours => "4+ hours",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum StudyEnvironment {
    #[serde(rename = "At home")]
    AtHome,
    Library,
    #[serde(rename = "Coffee shop")]
    CoffeeShop,
    #[serde(rename = "School/Campus")]
    SchoolCampus,
    #[serde(rename = "Different places")]
    DifferentPlaces,
}

impl StudyEnvironment {
    pub const ALL: [StudyEnvironment; 5] = [
        StudyEnvironment::AtHome,
        StudyEnvironment::Library,
        StudyEnvironment::CoffeeShop,
        StudyEnvironment::SchoolCampus,
        StudyEnvironment::DifferentPlaces,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StudyEnvironment::AtHome => "At home",
            StudyEnvironment::Library => "Library",
            StudyEnvironment::CoffeeShop => "Coffee shop",
            StudyEnvironment::SchoolCampus => "School/Campus",
            StudyEnvironment::DifferentPlaces => "Different places",
        }
    }
}
