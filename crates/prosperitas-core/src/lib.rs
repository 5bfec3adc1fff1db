//! Prosperitas core library
//!
//! Lesson progression and compound-growth simulation for a financial
//! education tracker.
//!
//! - [`ProgressStore`] owns the module catalog and the learner progress,
//!   unlocks lessons in catalog order as they are completed, and persists
//!   both to SQLite.
//! - [`simulator::simulate`] projects a compound-growth series year by year.
//! - [`content::ContentProvider`] supplies generated lesson text and daily
//!   quotes, never failing.

pub mod content;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod seed;
pub mod simulator;
pub mod store;

pub use db::Database;
pub use error::{Result, TrackerError};
pub use models::{
    Catalog, DashboardSummary, GrowthSnapshot, GrowthSummary, Lesson, LessonState,
    LibraryFilter, Module, ModuleCategory, Progress,
};
pub use store::{CompletionOutcome, ProgressStore, ProgressStoreBuilder};
