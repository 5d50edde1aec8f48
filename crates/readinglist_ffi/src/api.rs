//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose list/detail routing functions to Dart via FRB.
//! - Translate typed selections to plain strings at the boundary.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - An empty string always means "no selection".

use log::warn;
use readinglist_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, open_db,
    ping as ping_inner, ReadingList, Record, SelectionSlot, SqliteSlot, TypedSelection,
};
use std::path::PathBuf;
use std::sync::OnceLock;
use uuid::Uuid;

const DB_FILE_NAME: &str = "readinglist.sqlite3";
const DB_PATH_ENV: &str = "READINGLIST_DB_PATH";
static DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Core crate version.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - `level`: `trace|debug|info|warn|error`, case-insensitive.
/// - `log_dir`: absolute directory for rolling logs.
/// - Returns empty string on success, error message otherwise.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// List row as seen by Dart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordItem {
    /// Lowercase hyphenated record id.
    pub id: String,
    pub title: String,
    pub subtitle: String,
}

/// Outcome of a selection change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionResponse {
    pub ok: bool,
    /// Selection after the call; empty when nothing is selected.
    pub selection: String,
    pub message: String,
}

/// Records for the list view, in display order.
#[flutter_rust_bridge::frb(sync)]
pub fn list_records() -> Vec<RecordItem> {
    let items = with_reading_list(|list| {
        list.records()
            .iter()
            .map(to_record_item)
            .collect::<Vec<_>>()
    });
    match items {
        Ok(items) => items,
        Err(err) => {
            warn!("event=ffi_call module=ffi status=error call=list_records error={err}");
            Vec::new()
        }
    }
}

/// Persisted selection as text; empty when absent, malformed or unreadable.
#[flutter_rust_bridge::frb(sync)]
pub fn current_selection() -> String {
    with_reading_list(|list| selection_text(list.selection())).unwrap_or_default()
}

/// Detail record for the current selection, if it exists in the list.
#[flutter_rust_bridge::frb(sync)]
pub fn selected_record() -> Option<RecordItem> {
    with_reading_list(|list| list.selected_record().map(to_record_item))
        .ok()
        .flatten()
}

/// Routes a "selection changed" event from the list view.
///
/// # FFI contract
/// - Blank `record_id` clears the selection.
/// - Text that is not a UUID is rejected and leaves the selection unchanged.
/// - Ids missing from the list are accepted.
/// - `ok` is true only when the slot reads back the requested selection.
#[flutter_rust_bridge::frb(sync)]
pub fn set_selection(record_id: String) -> SelectionResponse {
    let trimmed = record_id.trim();
    let selection = if trimmed.is_empty() {
        None
    } else {
        match Uuid::parse_str(trimmed) {
            Ok(id) => Some(id),
            Err(err) => {
                return SelectionResponse {
                    ok: false,
                    selection: current_selection(),
                    message: format!("set_selection failed: invalid record id: {err}"),
                };
            }
        }
    };

    match with_reading_list(|list| apply_selection(list, selection)) {
        Ok(response) => response,
        Err(err) => SelectionResponse {
            ok: false,
            selection: String::new(),
            message: format!("set_selection failed: {err}"),
        },
    }
}

/// Clears the persisted selection.
#[flutter_rust_bridge::frb(sync)]
pub fn clear_selection() -> SelectionResponse {
    set_selection(String::new())
}

fn resolve_db_path() -> PathBuf {
    DB_PATH
        .get_or_init(|| db_path_from_env(std::env::var(DB_PATH_ENV).ok()))
        .clone()
}

fn db_path_from_env(raw: Option<String>) -> PathBuf {
    raw.as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join(DB_FILE_NAME))
}

/// Writes `selection` and reports what the slot actually holds afterwards.
fn apply_selection<S: SelectionSlot>(
    list: &mut ReadingList<S>,
    selection: TypedSelection,
) -> SelectionResponse {
    list.set_selection(selection);
    let stored = list.selection();

    if stored != selection {
        warn!("event=ffi_call module=ffi status=error call=set_selection error=not_persisted");
        return SelectionResponse {
            ok: false,
            selection: selection_text(stored),
            message: "set_selection failed: selection was not persisted".to_string(),
        };
    }

    SelectionResponse {
        ok: true,
        selection: selection_text(stored),
        message: match stored {
            Some(_) => "Selection saved.".to_string(),
            None => "Selection cleared.".to_string(),
        },
    }
}

fn with_reading_list<T>(
    f: impl FnOnce(&mut ReadingList<SqliteSlot<'_>>) -> T,
) -> Result<T, String> {
    let conn = open_db(resolve_db_path()).map_err(|err| format!("DB open failed: {err}"))?;
    let mut list = ReadingList::seeded(SqliteSlot::for_selection(&conn));
    Ok(f(&mut list))
}

fn selection_text(selection: TypedSelection) -> String {
    selection
        .map(|id| id.hyphenated().to_string())
        .unwrap_or_default()
}

fn to_record_item(record: &Record) -> RecordItem {
    RecordItem {
        id: record.id().hyphenated().to_string(),
        title: record.title().to_string(),
        subtitle: record.subtitle().to_string(),
    }
}
