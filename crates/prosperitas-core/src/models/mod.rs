//! Data models for the curriculum and learner progress.
//!
//! The catalog is a flat ordered list of [`Module`]s, each holding an ordered
//! list of [`Lesson`]s. Order is significant: it is the unlock sequence.
//! Display implementations for these models live in [`crate::display`].
//!
//! # Persisted Shape
//!
//! Models serialize with camelCase field names:
//!
//! ```text
//! modules:  [{ id, title, description, category, level,
//!              lessons: [{ id, title, description, category,
//!                          estimatedMinutes, isUnlocked, isCompleted }] }]
//! progress: { completedLessonIds, favoriteLessonIds, totalPoints, currentLevel }
//! ```
//!
//! # Examples
//!
//! ```rust
//! use prosperitas_core::{models::Catalog, seed};
//!
//! let catalog: Catalog = seed::default_catalog();
//! let first = catalog.lesson("m1-l1").expect("seed lesson");
//! assert!(first.is_unlocked);
//! assert!(!first.is_completed);
//! ```

pub mod catalog;
pub mod category;
pub mod filters;
pub mod lesson;
pub mod module;
pub mod progress;
pub mod snapshot;
pub mod summary;


pub use catalog::{Catalog, CompletionEffect, LessonPosition};
pub use category::ModuleCategory;
pub use filters::LibraryFilter;
pub use lesson::{Lesson, LessonState};
pub use module::Module;
pub use progress::{level_for_points, Progress, POINTS_PER_LESSON, POINTS_PER_LEVEL};
pub use snapshot::{GrowthSnapshot, GrowthSummary};
pub use summary::{DashboardSummary, LessonRef, RECOMMENDATION_LIMIT};
