//! Read-only views over the store for front-ends.

use super::ProgressStore;
use crate::models::{DashboardSummary, Lesson, LessonRef, LibraryFilter, Module};

impl ProgressStore {
    /// Learner overview: completion, points, level and open lessons.
    pub fn dashboard(&self) -> DashboardSummary {
        DashboardSummary::build(&self.catalog, &self.progress)
    }

    /// Modules passing the filter, in catalog order.
    pub fn library(&self, filter: &LibraryFilter) -> Vec<&Module> {
        self.catalog
            .modules()
            .iter()
            .filter(|m| filter.matches(m))
            .collect()
    }

    /// Favorite lessons that exist in the catalog, in catalog order.
    ///
    /// Stale favorite ids are skipped.
    pub fn favorites(&self) -> Vec<LessonRef> {
        self.catalog
            .lessons()
            .filter(|(_, l)| self.progress.is_favorite(&l.id))
            .map(|(m, l)| LessonRef {
                module_id: m.id.clone(),
                module_title: m.title.clone(),
                lesson: l.clone(),
            })
            .collect()
    }

    /// A lesson with its module.
    pub fn lesson(&self, lesson_id: &str) -> Option<(&Module, &Lesson)> {
        self.catalog.lesson_with_module(lesson_id)
    }
}
