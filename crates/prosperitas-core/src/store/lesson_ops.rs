//! Lesson completion and favorite operations.

use log::{debug, info, warn};

use super::ProgressStore;
use crate::models::POINTS_PER_LESSON;

/// What a call to [`ProgressStore::complete_lesson`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// The id was completed before; nothing changed
    AlreadyCompleted,

    /// The lesson was completed and points awarded
    Completed {
        points_awarded: u64,
        /// Lesson newly unlocked by the progression rule
        unlocked: Option<String>,
    },

    /// The id is not in the catalog; points were still awarded and the id
    /// recorded, but no lesson changed state
    UnknownLesson { points_awarded: u64 },
}

impl ProgressStore {
    /// Completes a lesson and unlocks its successor.
    ///
    /// Repeating the call with the same id is a no-op. An id missing from
    /// the catalog is still recorded as completed and rewarded, but leaves
    /// the catalog untouched; this is logged as a data-integrity anomaly.
    pub fn complete_lesson(&mut self, lesson_id: &str) -> CompletionOutcome {
        if !self.progress.record_completion(lesson_id) {
            debug!("Lesson {lesson_id} already completed");
            return CompletionOutcome::AlreadyCompleted;
        }

        let outcome = match self.catalog.complete(lesson_id) {
            Some(effect) => {
                info!(
                    "Completed lesson {lesson_id} (module {}, lesson {})",
                    effect.position.module, effect.position.lesson
                );
                match &effect.unlocked {
                    Some(next) => info!("Unlocked lesson {next}"),
                    None => debug!("No lesson unlocked by {lesson_id}"),
                }
                CompletionOutcome::Completed {
                    points_awarded: POINTS_PER_LESSON,
                    unlocked: effect.unlocked,
                }
            }
            None => {
                warn!("Completed lesson id {lesson_id} is not in the catalog; no lesson unlocked");
                CompletionOutcome::UnknownLesson {
                    points_awarded: POINTS_PER_LESSON,
                }
            }
        };

        self.persist_best_effort();
        outcome
    }

    /// Adds a lesson id to favorites, or removes it if already present.
    ///
    /// The id is not checked against the catalog. Returns whether the id is
    /// a favorite afterwards.
    pub fn toggle_favorite(&mut self, lesson_id: &str) -> bool {
        let favorite = self.progress.toggle_favorite(lesson_id);
        if self.catalog.lesson(lesson_id).is_none() {
            debug!("Favorite toggled for lesson id {lesson_id} outside the catalog");
        }
        debug!("Lesson {lesson_id} favorite: {favorite}");
        self.persist_best_effort();
        favorite
    }
}
