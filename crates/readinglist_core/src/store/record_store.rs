//! In-memory record store.
//!
//! # Responsibility
//! - Own the ordered reading list shown by the presentation layer.
//! - Enforce identity rules on insert and notify observers of changes.
//!
//! # Invariants
//! - Insertion order is display order.
//! - Ids are unique among live records.
//! - An id removed from the store is retired and rejected on re-insert.

use crate::model::record::{Record, RecordId, RecordValidationError};
use crate::observe::{ChangeNotifier, Subscription};
use log::{debug, info};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type StoreResult<T> = Result<T, StoreError>;

/// Mutation failures reported by [`RecordStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    Validation(RecordValidationError),
    /// A live record already uses this id.
    DuplicateId(RecordId),
    /// The id belonged to a removed record and cannot be reused.
    RetiredId(RecordId),
    NotFound(RecordId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateId(id) => write!(f, "record id already in store: {id}"),
            Self::RetiredId(id) => write!(f, "record id was retired and cannot be reused: {id}"),
            Self::NotFound(id) => write!(f, "record not found: {id}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RecordValidationError> for StoreError {
    fn from(value: RecordValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Change published after a successful store mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    Inserted(RecordId),
    Removed(RecordId),
}

const SEED_RECORDS: [(u128, &str, &str); 3] = [
    (
        0x3f2a_9c1e_5b7d_4e8a_9c0b_1d2e_3f4a_5b6c,
        "The Pragmatic Programmer",
        "Andrew Hunt & David Thomas",
    ),
    (
        0x7c4e_1a2b_3d5f_4a6b_8c9d_0e1f_2a3b_4c5d,
        "Structure and Interpretation of Computer Programs",
        "Harold Abelson & Gerald Jay Sussman",
    ),
    (
        0xa1b2_c3d4_e5f6_4789_8abc_def0_1234_5678,
        "Designing Data-Intensive Applications",
        "Martin Kleppmann",
    ),
];

/// Ordered, identity-checked collection of records.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<Record>,
    retired: HashSet<RecordId>,
    notifier: ChangeNotifier<StoreEvent>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from `records`, keeping their order.
    ///
    /// # Errors
    /// - First validation or duplicate-id failure encountered.
    pub fn from_records(records: impl IntoIterator<Item = Record>) -> StoreResult<Self> {
        let mut store = Self::new();
        for record in records {
            store.insert(record)?;
        }
        Ok(store)
    }

    /// The fixed seed reading list.
    ///
    /// Seed ids are constants so a selection restored after a restart still
    /// resolves to the same book.
    pub fn seeded() -> Self {
        let records = SEED_RECORDS
            .iter()
            .map(|(id, title, subtitle)| {
                Record::from_parts(
                    Uuid::from_u128(*id),
                    (*title).to_string(),
                    (*subtitle).to_string(),
                )
            })
            .collect::<Vec<_>>();
        debug!(
            "event=store_seed module=store status=ok count={}",
            records.len()
        );
        Self {
            records,
            ..Self::default()
        }
    }

    /// All live records in display order.
    pub fn all_records(&self) -> &[Record] {
        &self.records
    }

    /// Looks up a record by id; `None` when nothing matches.
    pub fn find(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Display index of `id`, if present.
    pub fn position(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|record| record.id() == id)
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.position(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Appends `record` to the end of the list.
    ///
    /// # Errors
    /// - [`StoreError::Validation`] when `record` fails validation.
    /// - [`StoreError::DuplicateId`] when a live record has the same id.
    /// - [`StoreError::RetiredId`] when the id belonged to a removed record.
    pub fn insert(&mut self, record: Record) -> StoreResult<RecordId> {
        record.validate()?;
        let id = record.id();
        if self.retired.contains(&id) {
            return Err(StoreError::RetiredId(id));
        }
        if self.contains(id) {
            return Err(StoreError::DuplicateId(id));
        }

        self.records.push(record);
        info!(
            "event=record_insert module=store status=ok record_id={id} count={}",
            self.records.len()
        );
        self.notifier.publish(&StoreEvent::Inserted(id));
        Ok(id)
    }

    /// Removes the record with `id` and retires the id.
    pub fn remove(&mut self, id: RecordId) -> StoreResult<Record> {
        let index = self.position(id).ok_or(StoreError::NotFound(id))?;
        let record = self.records.remove(index);
        self.retired.insert(id);
        info!(
            "event=record_remove module=store status=ok record_id={id} count={}",
            self.records.len()
        );
        self.notifier.publish(&StoreEvent::Removed(id));
        Ok(record)
    }

    /// Observes inserts and removals.
    pub fn subscribe(&self, listener: impl Fn(&StoreEvent) + 'static) -> Subscription {
        self.notifier.subscribe(listener)
    }
}
