use crate::models::domain::{LengthOption, QuizTypeOption, StudyProfile};

pub const QUIZ_RESPONSE_SHAPE: &str = r#"[
    {
        "question": "Question text",
        "type": "multiple_choice",
        "options": ["Option A", "Option B", "Option C", "Option D"],
        "answer": "Option A",
        "explanation": "Brief explanation of why this is correct"
    },
    {
        "question": "True/False question text",
        "type": "true_false",
        "answer": "True",
        "explanation": "Brief explanation of why this is correct"
    },
    {
        "question": "Fill in the blank: _____ is a key concept.",
        "type": "fill_blank",
        "answer": "Answer",
        "explanation": "Brief explanation of why this is correct"
    }
]"#;

pub const TIPS_RESPONSE_SHAPE: &str = r#"[
    {
        "title": "Category Name",
        "tips": ["Specific tip 1", "Specific tip 2", "Specific tip 3"]
    },
    {
        "title": "Another Category",
        "tips": ["Specific tip 1", "Specific tip 2", "Specific tip 3"]
    }
]"#;

pub const TIP_CATEGORIES: [&str; 5] = [
    "Study Environment Optimization",
    "Learning Techniques specific to their subject and learning style",
    "Memory and Retention Strategies",
    "Focus and Motivation Tips",
    "Time Management Strategies",
];

pub fn summary_prompt(text: &str, length: LengthOption) -> String {
    format!(
        "Summarize the following text in a {descriptor} summary.
Focus on the key concepts, main ideas, and important details.
Use clear, straightforward language suitable for a student.

TEXT TO SUMMARIZE:
{text}",
        descriptor = length.descriptor(),
    )
}

pub fn quiz_prompt(text: &str, count: u8, kind: QuizTypeOption) -> String {
    format!(
        "Create exactly {count} educational {description} based on the following text.
Make sure the questions test understanding of key concepts rather than trivial details.
For each question, provide the correct answer and a brief explanation.

Response should be in valid JSON format with this structure:
{QUIZ_RESPONSE_SHAPE}

Note: The structure for each question should match its type, and only include relevant fields.
If you must return a JSON object, put the array under a \"questions\" key.

TEXT FOR QUIZ:
{text}",
        description = kind.description(),
    )
}

pub fn tips_prompt(profile: &StudyProfile) -> String {
    let categories = TIP_CATEGORIES
        .iter()
        .enumerate()
        .map(|(idx, title)| format!("{}. {}", idx + 1, title))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Generate personalized study tips and strategies for a student with the following profile:

Subject: {subject}
Learning Style: {style}
Challenges: {challenges}
Study Time Available: {time}
Study Environment: {environment}
Additional Information: {info}

Provide tips in the following categories:
{categories}

Response should be in valid JSON format with this structure:
{TIPS_RESPONSE_SHAPE}

If you must return a JSON object, put the array under a \"categories\" key.
Make sure all tips are practical, specific, and tailored to this student's profile.
Each category should have 3-5 actionable tips.",
        subject = profile.subject.label(),
        style = profile.learning_style.label(),
        challenges = profile.challenge_list(),
        time = profile.study_time.label(),
        environment = profile.study_environment.label(),
        info = profile.additional_info,
    )
}
