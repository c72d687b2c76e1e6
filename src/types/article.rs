use serde::{Deserialize, Serialize};

use super::faq::FaqEntry;
use super::quiz::QuizQuestion;

/// An article as registered in the catalog.
///
/// `slug` is the URL-derived identifier used as the natural key for the
/// article's bookmark state. `date` is an ISO-ish display string, not a
/// parsed timestamp — it is carried verbatim into bookmark records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Article {
    pub slug: String,
    pub title: String,
    pub date: String,
    pub category: String,
    pub subtopic: Option<String>,
    pub summary: String,
    #[serde(default)]
    pub faq: Vec<FaqEntry>,
    #[serde(default)]
    pub quiz: Vec<QuizQuestion>,
}

impl Article {
    /// Whether the article page carries a FAQ accordion.
    pub fn has_faq(&self) -> bool {
        !self.faq.is_empty()
    }

    /// Whether the article page carries a quiz.
    pub fn has_quiz(&self) -> bool {
        !self.quiz.is_empty()
    }
}
