use prosperitas_core::{ProgressStore, ProgressStoreBuilder};
use tempfile::TempDir;

/// Helper function to create a store in a fresh temporary directory
pub fn create_test_store() -> (TempDir, ProgressStore) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = open_store(&temp_dir);
    (temp_dir, store)
}

/// Opens (or reopens) the store living in `temp_dir`
pub fn open_store(temp_dir: &TempDir) -> ProgressStore {
    ProgressStoreBuilder::new()
        .with_database_path(Some(temp_dir.path().join("test.db")))
        .build()
        .expect("Failed to create store")
}
