//! Presentation-facing use cases.
//!
//! # Responsibility
//! - Compose the record store and the selection controller for a host UI.
//! - Keep UI/FFI layers decoupled from storage details.

pub mod reading_list;
