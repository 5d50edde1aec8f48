//! SQLite-backed host storage for the selection slot.
//!
//! # Responsibility
//! - Open and configure SQLite connections.
//! - Apply schema migrations before any slot access.
//! - Provide [`SqliteSlot`], a persistent `SelectionSlot`.
//!
//! # Invariants
//! - Schema version is tracked via `PRAGMA user_version`.
//! - A database newer than this binary is refused, never downgraded.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;
mod sqlite_slot;

pub use open::{open_db, open_db_in_memory};
pub use sqlite_slot::SqliteSlot;

pub type DbResult<T> = Result<T, DbError>;

/// Failures opening or migrating the selection database.
#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    /// The file was written by a newer build; it is left untouched.
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "selection database error: {err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "selection database uses schema v{db_version}; this build reads up to v{latest_supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
