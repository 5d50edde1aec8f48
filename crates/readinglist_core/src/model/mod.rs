//! Reading list domain model.
//!
//! # Invariants
//! - Every record is identified by a stable, non-nil `RecordId`.

pub mod record;
