use readinglist_core::db::migrations::latest_version;
use readinglist_core::{
    open_db, open_db_in_memory, DbError, ReadingList, RecordStore, SelectionController,
    SelectionEvent, SelectionSlot, SqliteSlot, SELECTION_SCOPE_KEY,
};
use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "scene_storage");
}

#[test]
fn opening_same_database_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("readinglist.sqlite3");

    drop(open_db(&path).unwrap());
    let conn = open_db(&path).unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "scene_storage");
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    assert_eq!(
        err.to_string(),
        format!(
            "selection database uses schema v999; this build reads up to v{}",
            latest_version()
        )
    );
    match err {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn absent_slot_has_no_row() {
    let conn = open_db_in_memory().unwrap();
    let mut slot = SqliteSlot::for_selection(&conn);
    assert_eq!(slot.key(), SELECTION_SCOPE_KEY);
    assert_eq!(slot.get(), None);

    slot.set(Some("value".to_string()));
    assert_eq!(row_count(&conn), 1);

    slot.set(None);
    assert_eq!(slot.get(), None);
    assert_eq!(row_count(&conn), 0);
}

#[test]
fn overwrite_keeps_single_row() {
    let conn = open_db_in_memory().unwrap();
    let mut slot = SqliteSlot::for_selection(&conn);

    slot.set(Some("first".to_string()));
    slot.set(Some("second".to_string()));

    assert_eq!(slot.get().as_deref(), Some("second"));
    assert_eq!(row_count(&conn), 1);
}

#[test]
fn scope_keys_are_isolated() {
    let conn = open_db_in_memory().unwrap();
    let mut list_slot = SqliteSlot::for_selection(&conn);
    let mut other_slot = SqliteSlot::new(&conn, "settings.selection");

    list_slot.set(Some("list".to_string()));
    other_slot.set(Some("other".to_string()));
    other_slot.set(None);

    assert_eq!(list_slot.get().as_deref(), Some("list"));
    assert_eq!(other_slot.get(), None);
}

#[test]
fn medium_failure_reads_as_absent() {
    let conn = open_db_in_memory().unwrap();
    conn.execute_batch("DROP TABLE scene_storage;").unwrap();
    let mut slot = SqliteSlot::for_selection(&conn);

    slot.set(Some("lost".to_string()));

    assert!(slot.read().is_err());
    assert_eq!(slot.get(), None);
}

#[test]
fn failed_write_publishes_nothing() {
    let conn = open_db_in_memory().unwrap();
    conn.execute_batch("DROP TABLE scene_storage;").unwrap();
    let mut controller = SelectionController::new(SqliteSlot::for_selection(&conn));
    let events = Rc::new(RefCell::new(Vec::new()));
    let _subscription = {
        let events = events.clone();
        controller.subscribe(move |event: &SelectionEvent| events.borrow_mut().push(*event))
    };

    controller.set_selection(Some(uuid::Uuid::new_v4()));

    assert_eq!(controller.current_selection(), None);
    assert!(events.borrow().is_empty());
}

#[test]
fn rejected_overwrite_keeps_previous_selection_silent() {
    let conn = open_db_in_memory().unwrap();
    let first = RecordStore::seeded().all_records()[0].id();
    let mut controller = SelectionController::new(SqliteSlot::for_selection(&conn));
    controller.set_selection(Some(first));
    reject_slot_updates(&conn);

    let events = Rc::new(RefCell::new(Vec::new()));
    let _subscription = {
        let events = events.clone();
        controller.subscribe(move |event: &SelectionEvent| events.borrow_mut().push(*event))
    };
    controller.set_selection(Some(uuid::Uuid::new_v4()));
    controller.clear();

    assert_eq!(controller.current_selection(), Some(first));
    assert!(events.borrow().is_empty());
}

#[test]
fn selection_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("readinglist.sqlite3");
    let second = RecordStore::seeded().all_records()[1].clone();

    {
        let conn = open_db(&path).unwrap();
        let mut list = ReadingList::seeded(SqliteSlot::for_selection(&conn));
        list.select(second.id());
    }

    let conn = open_db(&path).unwrap();
    let list = ReadingList::seeded(SqliteSlot::for_selection(&conn));
    assert_eq!(list.selection(), Some(second.id()));
    assert_eq!(list.selected_record(), Some(&second));
    assert_eq!(list.store().find(second.id()), Some(&second));
}

#[test]
fn corrupted_persisted_value_reads_as_no_selection_after_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("readinglist.sqlite3");

    {
        let conn = open_db(&path).unwrap();
        conn.execute(
            "INSERT INTO scene_storage (key, value) VALUES (?1, 'not-a-uuid');",
            [SELECTION_SCOPE_KEY],
        )
        .unwrap();
    }

    let conn = open_db(&path).unwrap();
    let controller = SelectionController::new(SqliteSlot::for_selection(&conn));
    assert_eq!(controller.current_selection(), None);
}

fn reject_slot_updates(conn: &Connection) {
    conn.execute_batch(
        "CREATE TRIGGER scene_storage_no_update BEFORE UPDATE ON scene_storage
         BEGIN SELECT RAISE(ABORT, 'slot is read-only'); END;
         CREATE TRIGGER scene_storage_no_delete BEFORE DELETE ON scene_storage
         BEGIN SELECT RAISE(ABORT, 'slot is read-only'); END;",
    )
    .unwrap();
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn row_count(conn: &Connection) -> i64 {
    conn.query_row("SELECT COUNT(*) FROM scene_storage;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
