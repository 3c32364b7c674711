use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate)]
pub struct TipCategory {
    #[validate(length(min = 1, message = "tip category without a title"))]
    pub title: String,
    #[serde(default)]
    pub tips: Vec<String>,
}

impl TipCategory {
    /// Trims the title and drops blank tips.
    pub fn normalized(mut self) -> Self {
        self.title = self.title.trim().to_string();
        self.tips = self
            .tips
            .into_iter()
            .map(|tip| tip.trim().to_string())
            .filter(|tip| !tip.is_empty())
            .collect();
        self
    }
}

/// Plain text export: a heading per category followed by a bullet per tip.
pub fn tips_as_text(categories: &[TipCategory]) -> String {
    let mut text = String::new();
    for category in categories {
        text.push_str(&format!("# {}\n\n", category.title));
        for tip in &category.tips {
            text.push_str(&format!("- {}\n", tip));
        }
        text.push('\n');
    }
    text
}
