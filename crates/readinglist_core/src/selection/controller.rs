//! Selection controller over an injected slot.
//!
//! # Responsibility
//! - Expose the persisted slot as a `TypedSelection`.
//! - Write canonical text back and notify observers on change.
//!
//! # Invariants
//! - `current_selection` never fails and never writes.
//! - `set_selection` is the only mutator of the slot.
//! - Dangling ids (not present in any store) round-trip unchanged.

use super::codec::{decode_selection, encode_selection};
use super::slot::SelectionSlot;
use super::TypedSelection;
use crate::observe::{ChangeNotifier, Subscription};
use log::{debug, warn};

/// Change published when the typed selection moves to a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionEvent {
    Changed(TypedSelection),
}

pub struct SelectionController<S: SelectionSlot> {
    slot: S,
    notifier: ChangeNotifier<SelectionEvent>,
}

impl<S: SelectionSlot> SelectionController<S> {
    pub fn new(slot: S) -> Self {
        Self {
            slot,
            notifier: ChangeNotifier::new(),
        }
    }

    /// Reads the slot and parses it.
    ///
    /// Absent or malformed text yields `None`.
    pub fn current_selection(&self) -> TypedSelection {
        decode_selection(self.slot.get().as_deref())
    }

    /// Persists `selection` in canonical form.
    ///
    /// The slot is rewritten whenever its text differs from the canonical
    /// encoding, which also normalizes malformed or non-canonical text.
    /// Observers see the value read back from the slot, and only when it
    /// differs from the value before the call; a write the medium dropped
    /// publishes nothing.
    pub fn set_selection(&mut self, selection: TypedSelection) {
        let previous = self.current_selection();
        let encoded = encode_selection(selection);

        if self.slot.get() != encoded {
            self.slot.set(encoded);
        }

        let stored = self.current_selection();
        if stored != selection {
            warn!(
                "event=selection_write module=selection status=error reason=slot_write_not_persisted"
            );
        }
        if stored == previous {
            return;
        }

        match stored {
            Some(id) => debug!(
                "event=selection_write module=selection status=ok state=present record_id={id}"
            ),
            None => debug!("event=selection_write module=selection status=ok state=absent"),
        }
        self.notifier.publish(&SelectionEvent::Changed(stored));
    }

    /// Shorthand for `set_selection(None)`.
    pub fn clear(&mut self) {
        self.set_selection(None);
    }

    pub fn subscribe(&self, listener: impl Fn(&SelectionEvent) + 'static) -> Subscription {
        self.notifier.subscribe(listener)
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    /// Direct slot access, for hosts restoring or resetting the medium.
    ///
    /// Writes made here bypass change notification.
    pub fn slot_mut(&mut self) -> &mut S {
        &mut self.slot
    }

    pub fn into_slot(self) -> S {
        self.slot
    }
}
