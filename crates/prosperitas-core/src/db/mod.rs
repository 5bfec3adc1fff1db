//! Database operations and SQLite management for persisted records.
//!
//! The tracker stores two independently keyed JSON documents, the catalog
//! under [`MODULES_KEY`] and the learner progress under [`PROGRESS_KEY`], in
//! a single key/value table.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod migrations;
pub mod record_queries;

pub use record_queries::StoredRecord;

/// Record key of the serialized catalog.
pub const MODULES_KEY: &str = "modules";

/// Record key of the serialized progress.
pub const PROGRESS_KEY: &str = "progress";

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
