//! Core domain logic for the reading list.
//! Records, their store, and the persisted selection live here; rendering
//! belongs to the host UI.

pub mod db;
pub mod logging;
pub mod model;
pub mod observe;
pub mod selection;
pub mod service;
pub mod store;

pub use db::{open_db, open_db_in_memory, DbError, DbResult, SqliteSlot};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::record::{Record, RecordId, RecordValidationError};
pub use observe::{ChangeNotifier, Subscription};
pub use selection::codec::{decode_selection, encode_selection};
pub use selection::controller::{SelectionController, SelectionEvent};
pub use selection::slot::{InMemorySlot, SelectionSlot, SELECTION_SCOPE_KEY};
pub use selection::TypedSelection;
pub use service::reading_list::ReadingList;
pub use store::record_store::{RecordStore, StoreError, StoreEvent, StoreResult};

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
