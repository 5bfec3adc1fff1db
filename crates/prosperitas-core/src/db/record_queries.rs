//! Key/value record reads and writes.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension};

use crate::error::{DatabaseResultExt, Result};

const SELECT_RECORD_SQL: &str = "SELECT key, value, updated_at FROM records WHERE key = ?1";
const UPSERT_RECORD_SQL: &str = "INSERT INTO records (key, value, updated_at) VALUES (?1, ?2, ?3) \
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";

/// A persisted record as stored in the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredRecord {
    pub key: String,
    pub value: String,
    pub updated_at: Timestamp,
}

impl super::Database {
    /// Retrieves a record by key.
    pub fn get_record(&self, key: &str) -> Result<Option<StoredRecord>> {
        self.connection
            .query_row(SELECT_RECORD_SQL, params![key], |row| {
                Ok(StoredRecord {
                    key: row.get(0)?,
                    value: row.get(1)?,
                    updated_at: row.get::<_, String>(2)?.parse::<Timestamp>().map_err(|e| {
                        rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e))
                    })?,
                })
            })
            .optional()
            .db_context("Failed to query record")
    }

    /// Writes several records in one transaction.
    ///
    /// Either every record is written or none is.
    pub fn put_records(&mut self, records: &[(&str, &str)]) -> Result<Timestamp> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();
        let now_str = now.to_string();
        for (key, value) in records {
            tx.execute(UPSERT_RECORD_SQL, params![key, value, &now_str])
                .db_context("Failed to write record")?;
        }

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(now)
    }

    /// Writes a single record.
    pub fn put_record(&mut self, key: &str, value: &str) -> Result<Timestamp> {
        self.put_records(&[(key, value)])
    }
}
