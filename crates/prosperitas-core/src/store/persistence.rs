//! Loading and saving the catalog and progress records.

use jiff::Timestamp;
use log::{debug, info, warn};
use serde::de::DeserializeOwned;

use super::ProgressStore;
use crate::{
    db::{Database, MODULES_KEY, PROGRESS_KEY},
    error::Result,
    models::{Catalog, Progress},
    seed,
};

impl ProgressStore {
    /// Loads persisted state, falling back to defaults record by record.
    ///
    /// A record that is missing, unreadable, or fails to deserialize into a
    /// valid structure is replaced by its default: the seed catalog for
    /// `modules`, an empty progress for `progress`. When only one record is
    /// replaced it is reconciled with the other: recorded completions are
    /// replayed onto the seed catalog, or progress is rebuilt from the
    /// completed lessons of the loaded catalog.
    pub(crate) fn initialize(db: Database) -> Self {
        let (mut catalog, catalog_saved) = load_record(&db, MODULES_KEY, seed::default_catalog);
        let (mut progress, progress_saved) = load_record(&db, PROGRESS_KEY, Progress::default);

        // A record that fell back alone is rebuilt from the surviving one so
        // the two never disagree on which lessons are completed
        match (catalog_saved, progress_saved) {
            (None, Some(_)) => replay_completions(&mut catalog, &progress),
            (Some(_), None) => progress = progress_from_catalog(&catalog),
            _ => {}
        }

        info!(
            "Loaded {} modules and {} completed lessons",
            catalog.modules().len(),
            progress.completed_lesson_ids.len()
        );

        Self {
            db,
            catalog,
            progress,
            last_saved: catalog_saved.max(progress_saved),
        }
    }

    /// Writes both records in one transaction.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::Serialization` or `TrackerError::Database` when
    /// the write fails. In-memory state is left untouched either way.
    pub fn persist(&mut self) -> Result<()> {
        let modules = serde_json::to_string(&self.catalog)?;
        let progress = serde_json::to_string(&self.progress)?;

        let saved_at = self
            .db
            .put_records(&[(MODULES_KEY, modules.as_str()), (PROGRESS_KEY, progress.as_str())])?;
        debug!("Persisted progress at {saved_at}");
        self.last_saved = Some(saved_at);
        Ok(())
    }

    /// Persists, logging instead of propagating a failure.
    pub(crate) fn persist_best_effort(&mut self) {
        if let Err(e) = self.persist() {
            warn!("Failed to persist progress, keeping in-memory state: {e}");
        }
    }

    /// Restores the seed catalog and an empty progress, then persists.
    pub fn reset(&mut self) {
        info!("Resetting progress to the seed catalog");
        self.catalog = seed::default_catalog();
        self.progress = Progress::default();
        self.persist_best_effort();
    }
}

/// Re-applies recorded completions to a fresh catalog in unlock order.
fn replay_completions(catalog: &mut Catalog, progress: &Progress) {
    let completed: Vec<String> = catalog
        .lessons()
        .filter(|(_, l)| progress.is_completed(&l.id))
        .map(|(_, l)| l.id.clone())
        .collect();

    if !completed.is_empty() {
        warn!(
            "Restoring {} completed lessons onto the default catalog",
            completed.len()
        );
    }
    for id in &completed {
        catalog.complete(id);
    }
}

/// Derives progress from the lessons a catalog marks completed.
///
/// Favorites cannot be recovered and start empty.
fn progress_from_catalog(catalog: &Catalog) -> Progress {
    let mut progress = Progress::default();
    for (_, lesson) in catalog.lessons().filter(|(_, l)| l.is_completed) {
        progress.record_completion(&lesson.id);
    }
    if !progress.completed_lesson_ids.is_empty() {
        warn!(
            "Rebuilt progress from {} completed lessons in the catalog",
            progress.completed_lesson_ids.len()
        );
    }
    progress
}

fn load_record<T, F>(db: &Database, key: &str, default: F) -> (T, Option<Timestamp>)
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    match db.get_record(key) {
        Ok(Some(record)) => match serde_json::from_str::<T>(&record.value) {
            Ok(value) => (value, Some(record.updated_at)),
            Err(e) => {
                warn!("Persisted '{key}' record is malformed, using defaults: {e}");
                (default(), None)
            }
        },
        Ok(None) => {
            debug!("No persisted '{key}' record, using defaults");
            (default(), None)
        }
        Err(e) => {
            warn!("Could not read persisted '{key}' record, using defaults: {e}");
            (default(), None)
        }
    }
}
