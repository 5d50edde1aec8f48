//! Master/detail session over the reading list.
//!
//! # Responsibility
//! - Give the list view its records and the detail view its record.
//! - Route "selection changed" events to the selection controller.
//!
//! # Invariants
//! - Selecting never checks the store; resolving a dangling id yields `None`
//!   without touching the persisted slot.

use crate::model::record::{Record, RecordId};
use crate::selection::controller::SelectionController;
use crate::selection::slot::SelectionSlot;
use crate::selection::TypedSelection;
use crate::store::record_store::RecordStore;
use log::debug;

pub struct ReadingList<S: SelectionSlot> {
    store: RecordStore,
    selection: SelectionController<S>,
}

impl<S: SelectionSlot> ReadingList<S> {
    pub fn new(store: RecordStore, slot: S) -> Self {
        Self {
            store,
            selection: SelectionController::new(slot),
        }
    }

    /// Session over the seed list with a host-restored `slot`.
    pub fn seeded(slot: S) -> Self {
        Self::new(RecordStore::seeded(), slot)
    }

    /// Records for the list view, in display order.
    pub fn records(&self) -> &[Record] {
        self.store.all_records()
    }

    pub fn selection(&self) -> TypedSelection {
        self.selection.current_selection()
    }

    pub fn set_selection(&mut self, selection: TypedSelection) {
        self.selection.set_selection(selection);
    }

    pub fn select(&mut self, id: RecordId) {
        self.set_selection(Some(id));
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Record for the detail view.
    ///
    /// `None` when nothing is selected or the selected id is not in the store.
    pub fn selected_record(&self) -> Option<&Record> {
        let id = self.selection()?;
        let record = self.store.find(id);
        if record.is_none() {
            debug!("event=selection_resolve module=service status=dangling record_id={id}");
        }
        record
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut RecordStore {
        &mut self.store
    }

    pub fn controller(&self) -> &SelectionController<S> {
        &self.selection
    }

    pub fn controller_mut(&mut self) -> &mut SelectionController<S> {
        &mut self.selection
    }

    pub fn into_parts(self) -> (RecordStore, S) {
        (self.store, self.selection.into_slot())
    }
}
