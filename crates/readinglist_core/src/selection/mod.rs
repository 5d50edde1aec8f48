//! Persisted selection.
//!
//! # Responsibility
//! - Bridge the host's text slot and the typed optional record id.
//! - Keep the lossy parse policy in one place (`codec`).
//!
//! # Invariants
//! - Reading the selection never fails; malformed text reads as no selection.
//! - The controller never checks ids against the record store.

pub mod codec;
pub mod controller;
pub mod slot;

use crate::model::record::RecordId;

/// Typed view of the persisted selection slot.
pub type TypedSelection = Option<RecordId>;
