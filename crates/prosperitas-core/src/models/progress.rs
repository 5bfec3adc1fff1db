//! Learner progress record.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Points awarded for each newly completed lesson.
pub const POINTS_PER_LESSON: u64 = 100;

/// Points needed to advance one learner level.
pub const POINTS_PER_LEVEL: u64 = 1000;

/// Completion, favorites and points of a learner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    /// Lessons completed so far; ids are never removed
    #[serde(default)]
    pub completed_lesson_ids: BTreeSet<String>,

    /// Lessons bookmarked by the learner; may reference stale ids
    #[serde(default)]
    pub favorite_lesson_ids: BTreeSet<String>,

    /// Accumulated reward points
    #[serde(default)]
    pub total_points: u64,

    /// Learner level derived from points
    #[serde(default = "first_level")]
    pub current_level: u64,
}

fn first_level() -> u64 {
    1
}

/// Learner level reached with the given amount of points.
pub fn level_for_points(points: u64) -> u64 {
    points / POINTS_PER_LEVEL + 1
}

impl Default for Progress {
    fn default() -> Self {
        Self {
            completed_lesson_ids: BTreeSet::new(),
            favorite_lesson_ids: BTreeSet::new(),
            total_points: 0,
            current_level: first_level(),
        }
    }
}

impl Progress {
    /// Whether the lesson id has been completed.
    pub fn is_completed(&self, lesson_id: &str) -> bool {
        self.completed_lesson_ids.contains(lesson_id)
    }

    /// Whether the lesson id is bookmarked.
    pub fn is_favorite(&self, lesson_id: &str) -> bool {
        self.favorite_lesson_ids.contains(lesson_id)
    }

    /// Records a completion and awards points.
    ///
    /// Returns `false` without touching anything when the id was already
    /// completed.
    pub(crate) fn record_completion(&mut self, lesson_id: &str) -> bool {
        if !self.completed_lesson_ids.insert(lesson_id.to_string()) {
            return false;
        }
        self.total_points += POINTS_PER_LESSON;
        self.current_level = level_for_points(self.total_points);
        true
    }

    /// Flips the favorite flag of an id. Returns the new flag.
    pub(crate) fn toggle_favorite(&mut self, lesson_id: &str) -> bool {
        if self.favorite_lesson_ids.remove(lesson_id) {
            false
        } else {
            self.favorite_lesson_ids.insert(lesson_id.to_string());
            true
        }
    }
}
