//! Module model definition.

use serde::{Deserialize, Serialize};

use super::{Lesson, ModuleCategory};

/// A curriculum module: an ordered group of lessons.
///
/// The order of `lessons` is the unlock order within the module.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    /// Identifier, unique across the catalog
    pub id: String,

    /// Title of the module
    pub title: String,

    /// One-line summary
    pub description: String,

    /// Curriculum category
    pub category: ModuleCategory,

    /// Difficulty level shown in the library
    pub level: u32,

    /// Lessons in unlock order
    pub lessons: Vec<Lesson>,
}

impl Module {
    /// Number of completed lessons in this module.
    pub fn completed_count(&self) -> usize {
        self.lessons.iter().filter(|l| l.is_completed).count()
    }

    /// Fraction of lessons completed, in `[0.0, 1.0]`.
    pub fn completion_ratio(&self) -> f64 {
        if self.lessons.is_empty() {
            0.0
        } else {
            self.completed_count() as f64 / self.lessons.len() as f64
        }
    }

    /// Case-insensitive match against the module title or any lesson title.
    pub fn matches_term(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.title.to_lowercase().contains(&term)
            || self
                .lessons
                .iter()
                .any(|l| l.title.to_lowercase().contains(&term))
    }
}
