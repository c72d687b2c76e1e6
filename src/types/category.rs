use serde::{Deserialize, Serialize};

/// A top-level topic in the category browser.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub subtopics: Vec<Subtopic>,
}

/// A subtopic nested under a category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Subtopic {
    pub id: String,
    pub name: String,
}

impl Category {
    /// Looks up a subtopic by id.
    pub fn subtopic(&self, id: &str) -> Option<&Subtopic> {
        self.subtopics.iter().find(|s| s.id == id)
    }
}
