//! Host-owned text slot holding the persisted selection.
//!
//! # Invariants
//! - `get` reflects the last `set` on the same slot instance or medium.
//! - `set(None)` leaves the slot absent, not an empty string.

/// Scope key under which the reading list's selection is stored.
pub const SELECTION_SCOPE_KEY: &str = "reading_list.selection";

/// Get/set capability over one persisted text value.
///
/// Implementations own the storage medium. Medium failures are handled
/// (and logged) inside the implementation; callers always see a value.
pub trait SelectionSlot {
    fn get(&self) -> Option<String>;
    fn set(&mut self, value: Option<String>);
}

impl<S: SelectionSlot + ?Sized> SelectionSlot for &mut S {
    fn get(&self) -> Option<String> {
        (**self).get()
    }

    fn set(&mut self, value: Option<String>) {
        (**self).set(value);
    }
}

impl<S: SelectionSlot + ?Sized> SelectionSlot for Box<S> {
    fn get(&self) -> Option<String> {
        (**self).get()
    }

    fn set(&mut self, value: Option<String>) {
        (**self).set(value);
    }
}

/// Process-local slot, used by tests and hosts without persistence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemorySlot {
    value: Option<String>,
}

impl InMemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot pre-filled with `value`, as if restored by the host.
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }
}

impl SelectionSlot for InMemorySlot {
    fn get(&self) -> Option<String> {
        self.value.clone()
    }

    fn set(&mut self, value: Option<String>) {
        self.value = value;
    }
}
