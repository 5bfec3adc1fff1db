//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::store::CompletionOutcome;

/// Outcome of completing a lesson, with the resulting point total.
pub struct CompletionResult<'a> {
    pub lesson_id: &'a str,
    pub outcome: CompletionOutcome,
    pub total_points: u64,
}

impl fmt::Display for CompletionResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            CompletionOutcome::AlreadyCompleted => {
                writeln!(f, "Lesson {} was already completed.", self.lesson_id)?;
            }
            CompletionOutcome::Completed {
                points_awarded,
                unlocked,
            } => {
                writeln!(
                    f,
                    "Completed lesson {} (+{} points).",
                    self.lesson_id, points_awarded
                )?;
                match unlocked {
                    Some(next) => writeln!(f, "Unlocked lesson {next}.")?,
                    None => writeln!(f, "No new lesson unlocked.")?,
                }
            }
            CompletionOutcome::UnknownLesson { points_awarded } => {
                writeln!(
                    f,
                    "Recorded lesson {} (+{} points), but it is not in the catalog.",
                    self.lesson_id, points_awarded
                )?;
            }
        }
        writeln!(f, "Total points: {}", self.total_points)
    }
}

/// Outcome of toggling a favorite.
pub struct FavoriteResult<'a> {
    pub lesson_id: &'a str,
    pub is_favorite: bool,
}

impl fmt::Display for FavoriteResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_favorite {
            writeln!(f, "Added lesson {} to favorites.", self.lesson_id)
        } else {
            writeln!(f, "Removed lesson {} from favorites.", self.lesson_id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_result_with_unlock() {
        let output = CompletionResult {
            lesson_id: "m1-l1",
            outcome: CompletionOutcome::Completed {
                points_awarded: 100,
                unlocked: Some("m1-l2".to_string()),
            },
            total_points: 100,
        }
        .to_string();
        assert!(output.contains("Completed lesson m1-l1 (+100 points)."));
        assert!(output.contains("Unlocked lesson m1-l2."));
        assert!(output.contains("Total points: 100"));
    }

    #[test]
    fn test_completion_result_repeat() {
        let output = CompletionResult {
            lesson_id: "m1-l1",
            outcome: CompletionOutcome::AlreadyCompleted,
            total_points: 100,
        }
        .to_string();
        assert!(output.contains("already completed"));
    }

    #[test]
    fn test_favorite_result() {
        let added = FavoriteResult {
            lesson_id: "m2-l1",
            is_favorite: true,
        };
        let removed = FavoriteResult {
            lesson_id: "m2-l1",
            is_favorite: false,
        };
        assert!(added.to_string().contains("Added lesson m2-l1"));
        assert!(removed.to_string().contains("Removed lesson m2-l1"));
    }
}
