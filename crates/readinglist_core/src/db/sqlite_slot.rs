//! Persistent selection slot stored in the `scene_storage` table.
//!
//! # Invariants
//! - One row per scope key; an absent slot has no row.
//! - Medium errors are logged and surface as an absent value on read.

use super::DbResult;
use crate::selection::slot::{SelectionSlot, SELECTION_SCOPE_KEY};
use log::error;
use rusqlite::{params, Connection, OptionalExtension};

/// `SelectionSlot` persisted in a migrated SQLite connection.
pub struct SqliteSlot<'conn> {
    conn: &'conn Connection,
    key: String,
}

impl<'conn> SqliteSlot<'conn> {
    /// Slot for an arbitrary scope key.
    pub fn new(conn: &'conn Connection, key: impl Into<String>) -> Self {
        Self {
            conn,
            key: key.into(),
        }
    }

    /// Slot holding the reading list selection.
    pub fn for_selection(conn: &'conn Connection) -> Self {
        Self::new(conn, SELECTION_SCOPE_KEY)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Fallible read, for hosts that want to surface medium errors.
    pub fn read(&self) -> DbResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM scene_storage WHERE key = ?1;",
                [self.key.as_str()],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    /// Fallible write; `None` deletes the row.
    pub fn write(&self, value: Option<&str>) -> DbResult<()> {
        match value {
            Some(value) => {
                self.conn.execute(
                    "INSERT INTO scene_storage (key, value) VALUES (?1, ?2)
                     ON CONFLICT(key) DO UPDATE SET
                        value = excluded.value,
                        updated_at = (strftime('%s', 'now') * 1000);",
                    params![self.key.as_str(), value],
                )?;
            }
            None => {
                self.conn.execute(
                    "DELETE FROM scene_storage WHERE key = ?1;",
                    [self.key.as_str()],
                )?;
            }
        }
        Ok(())
    }
}

impl SelectionSlot for SqliteSlot<'_> {
    fn get(&self) -> Option<String> {
        match self.read() {
            Ok(value) => value,
            Err(err) => {
                error!(
                    "event=slot_read module=db status=error key={} error={err}",
                    self.key
                );
                None
            }
        }
    }

    fn set(&mut self, value: Option<String>) {
        if let Err(err) = self.write(value.as_deref()) {
            error!(
                "event=slot_write module=db status=error key={} error={err}",
                self.key
            );
        }
    }
}
