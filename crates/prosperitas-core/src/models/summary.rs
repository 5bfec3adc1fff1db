//! Dashboard summary derived from the catalog and progress.

use serde::Serialize;

use super::{level_for_points, Catalog, Lesson, Progress};

/// How many open lessons the dashboard recommends.
pub const RECOMMENDATION_LIMIT: usize = 3;

/// A lesson together with the module it belongs to.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LessonRef {
    pub module_id: String,
    pub module_title: String,
    pub lesson: Lesson,
}

/// Overview of a learner's standing.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DashboardSummary {
    /// Lessons in the catalog
    pub total_lessons: usize,

    /// Catalog lessons marked completed
    pub completed_lessons: usize,

    /// `completed_lessons / total_lessons` as a rounded percentage
    pub completion_percentage: u32,

    /// Accumulated reward points
    pub total_points: u64,

    /// Level derived from the points
    pub level: u64,

    /// First open lesson in unlock order
    pub next_lesson: Option<LessonRef>,

    /// Open lessons to suggest, in unlock order
    pub recommended: Vec<LessonRef>,
}

impl DashboardSummary {
    /// Computes the summary for a catalog and progress pair.
    pub fn build(catalog: &Catalog, progress: &Progress) -> Self {
        let total_lessons = catalog.total_lessons();
        let completed_lessons = catalog.lessons().filter(|(_, l)| l.is_completed).count();
        let completion_percentage = if total_lessons > 0 {
            (completed_lessons as f64 / total_lessons as f64 * 100.0).round() as u32
        } else {
            0
        };

        let recommended: Vec<LessonRef> = catalog
            .lessons()
            .filter(|(_, l)| l.is_available())
            .take(RECOMMENDATION_LIMIT)
            .map(|(m, l)| LessonRef {
                module_id: m.id.clone(),
                module_title: m.title.clone(),
                lesson: l.clone(),
            })
            .collect();

        Self {
            total_lessons,
            completed_lessons,
            completion_percentage,
            total_points: progress.total_points,
            level: level_for_points(progress.total_points),
            next_lesson: recommended.first().cloned(),
            recommended,
        }
    }
}
