//! Reading list record model.
//!
//! # Responsibility
//! - Define the user-visible list item and its stable identity.
//! - Validate records before they enter a store.
//!
//! # Invariants
//! - `id` is assigned once and cannot be changed through the public API.
//! - `id` is never the nil UUID.
//! - `title` is never blank for a stored record.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of a reading list record.
pub type RecordId = Uuid;

/// Validation failures for [`Record`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValidationError {
    /// The nil UUID is reserved and never identifies a record.
    NilId,
    /// Title is empty or whitespace only.
    EmptyTitle(RecordId),
}

impl Display for RecordValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "record id must not be the nil uuid"),
            Self::EmptyTitle(id) => write!(f, "record {id} has an empty title"),
        }
    }
}

impl Error for RecordValidationError {}

/// One item of the reading list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RecordWire")]
pub struct Record {
    id: RecordId,
    title: String,
    subtitle: String,
}

/// Unvalidated wire shape; deserialization goes through [`Record::validate`].
#[derive(Deserialize)]
struct RecordWire {
    id: RecordId,
    title: String,
    subtitle: String,
}

impl TryFrom<RecordWire> for Record {
    type Error = RecordValidationError;

    fn try_from(wire: RecordWire) -> Result<Self, Self::Error> {
        let record = Self::from_parts(wire.id, wire.title, wire.subtitle);
        record.validate()?;
        Ok(record)
    }
}

impl Record {
    /// Creates a record with a freshly generated v4 id.
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self::from_parts(Uuid::new_v4(), title.into(), subtitle.into())
    }

    /// Creates a record with an id that already exists elsewhere
    /// (seed data, imports).
    ///
    /// # Errors
    /// - [`RecordValidationError::NilId`] for `Uuid::nil()`.
    pub fn with_id(
        id: RecordId,
        title: impl Into<String>,
        subtitle: impl Into<String>,
    ) -> Result<Self, RecordValidationError> {
        if id.is_nil() {
            return Err(RecordValidationError::NilId);
        }
        Ok(Self::from_parts(id, title.into(), subtitle.into()))
    }

    pub(crate) fn from_parts(id: RecordId, title: String, subtitle: String) -> Self {
        Self {
            id,
            title,
            subtitle,
        }
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_subtitle(&mut self, subtitle: impl Into<String>) {
        self.subtitle = subtitle.into();
    }

    /// Checks the invariants a store relies on.
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        if self.id.is_nil() {
            return Err(RecordValidationError::NilId);
        }
        if self.title.trim().is_empty() {
            return Err(RecordValidationError::EmptyTitle(self.id));
        }
        Ok(())
    }
}
