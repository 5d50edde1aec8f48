//! Record ownership.
//!
//! # Responsibility
//! - Hold the single in-memory reading list for a session.
//! - Keep identity rules next to the collection they protect.

pub mod record_store;
