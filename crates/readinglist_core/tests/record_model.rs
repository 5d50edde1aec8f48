use readinglist_core::{Record, RecordValidationError};
use uuid::Uuid;

#[test]
fn record_new_generates_v4_id() {
    let record = Record::new("Dune", "Frank Herbert");

    assert!(!record.id().is_nil());
    assert_eq!(record.id().get_version_num(), 4);
    assert_eq!(record.title(), "Dune");
    assert_eq!(record.subtitle(), "Frank Herbert");
    assert!(record.validate().is_ok());
}

#[test]
fn fresh_records_never_share_ids() {
    let a = Record::new("A", "");
    let b = Record::new("A", "");
    assert_ne!(a.id(), b.id());
}

#[test]
fn with_id_rejects_nil_uuid() {
    let err = Record::with_id(Uuid::nil(), "title", "subtitle").unwrap_err();
    assert_eq!(err, RecordValidationError::NilId);
}

#[test]
fn editing_text_keeps_identity() {
    let mut record = Record::new("Draft", "");
    let id = record.id();

    record.set_title("Final");
    record.set_subtitle("Second edition");

    assert_eq!(record.id(), id);
    assert_eq!(record.title(), "Final");
    assert_eq!(record.subtitle(), "Second edition");
}

#[test]
fn validate_rejects_blank_title() {
    let record = Record::new("   ", "subtitle");
    assert_eq!(
        record.validate().unwrap_err(),
        RecordValidationError::EmptyTitle(record.id())
    );
}

#[test]
fn serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let record = Record::with_id(id, "Snow Crash", "Neal Stephenson").unwrap();

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["title"], "Snow Crash");
    assert_eq!(json["subtitle"], "Neal Stephenson");

    let decoded: Record = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, record);
}

#[test]
fn deserialize_rejects_nil_id() {
    let value = serde_json::json!({
        "id": "00000000-0000-0000-0000-000000000000",
        "title": "ghost",
        "subtitle": ""
    });

    let err = serde_json::from_value::<Record>(value).unwrap_err();
    assert!(
        err.to_string().contains("nil uuid"),
        "unexpected error: {err}"
    );
}
