//! Lesson model definition and its progression state.

use serde::{Deserialize, Serialize};

use super::ModuleCategory;

/// A single lesson inside a curriculum module.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    /// Identifier, unique across the whole catalog
    pub id: String,

    /// Title of the lesson
    pub title: String,

    /// One-line summary
    pub description: String,

    /// Category inherited from the owning module
    pub category: ModuleCategory,

    /// Expected reading time in minutes
    pub estimated_minutes: u32,

    /// Whether the learner may open the lesson
    pub is_unlocked: bool,

    /// Whether the learner finished the lesson
    pub is_completed: bool,
}

/// Progression state of a lesson.
///
/// Transitions only move forward: `Locked → Unlocked → Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LessonState {
    Locked,
    Unlocked,
    Completed,
}

impl LessonState {
    /// Get state with an icon for list display.
    pub fn with_icon(&self) -> &'static str {
        match self {
            LessonState::Completed => "✓ Completed",
            LessonState::Unlocked => "○ Available",
            LessonState::Locked => "🔒 Locked",
        }
    }
}

impl Lesson {
    /// Current progression state derived from the two flags.
    pub fn state(&self) -> LessonState {
        if self.is_completed {
            LessonState::Completed
        } else if self.is_unlocked {
            LessonState::Unlocked
        } else {
            LessonState::Locked
        }
    }

    /// Whether the lesson is open and not yet finished.
    pub fn is_available(&self) -> bool {
        self.state() == LessonState::Unlocked
    }

    /// Unlocks the lesson. Returns `true` when the state changed.
    pub(crate) fn unlock(&mut self) -> bool {
        let changed = !self.is_unlocked;
        self.is_unlocked = true;
        changed
    }

    /// Marks the lesson completed, keeping `is_completed ⇒ is_unlocked`.
    pub(crate) fn complete(&mut self) {
        self.is_unlocked = true;
        self.is_completed = true;
    }
}
