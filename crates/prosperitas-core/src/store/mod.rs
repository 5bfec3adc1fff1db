//! Learner state store: catalog unlock state plus progress records.
//!
//! [`ProgressStore`] exclusively owns the [`Catalog`] and the [`Progress`]
//! and is the only place either is mutated. Every mutating operation ends
//! with an explicit [`ProgressStore::persist`] call whose failure is logged
//! but never rolls back the in-memory state: for the running session memory
//! is the source of truth.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Front-end     │    │  ProgressStore  │    │    Database     │
//! │ (CLI commands)  │───▶│ (lesson_ops,    │───▶│ (records table) │
//! │                 │    │  views)         │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Mutating operations take `&mut self`, so `complete_lesson`'s
//! read-modify-write can never interleave with another writer. Sharing a
//! store across threads requires wrapping it in a mutex.
//!
//! # Usage
//!
//! ```rust,no_run
//! use prosperitas_core::{CompletionOutcome, ProgressStoreBuilder};
//!
//! # fn example() -> Result<(), prosperitas_core::TrackerError> {
//! let mut store = ProgressStoreBuilder::new()
//!     .with_database_path(Some("/tmp/prosperitas.db"))
//!     .build()?;
//!
//! let outcome = store.complete_lesson("m1-l1");
//! assert!(matches!(outcome, CompletionOutcome::Completed { .. }));
//! assert!(store.catalog().lesson("m1-l2").is_some_and(|l| l.is_unlocked));
//! # Ok(())
//! # }
//! ```

use jiff::Timestamp;

use crate::{
    db::Database,
    models::{Catalog, Progress},
};

pub mod builder;
pub mod lesson_ops;
pub mod persistence;
pub mod views;


pub use builder::ProgressStoreBuilder;
pub use lesson_ops::CompletionOutcome;

/// Owner of the catalog and the learner progress.
pub struct ProgressStore {
    db: Database,
    catalog: Catalog,
    progress: Progress,
    last_saved: Option<Timestamp>,
}

impl ProgressStore {
    /// Current catalog with unlock state.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current learner progress.
    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    /// Both structures at once, for rendering.
    pub fn state(&self) -> (&Catalog, &Progress) {
        (&self.catalog, &self.progress)
    }

    /// When the state was last written, if ever.
    pub fn last_saved(&self) -> Option<Timestamp> {
        self.last_saved
    }
}
