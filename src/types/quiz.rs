use serde::{Deserialize, Serialize};

/// A single multiple-choice question.
///
/// `options` is a fixed, non-empty list of display strings; `correct` is the
/// index of the single correct choice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct: usize,
}

impl QuizQuestion {
    pub fn new(question: &str, options: &[&str], correct: usize) -> Self {
        Self {
            question: question.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct,
        }
    }
}
