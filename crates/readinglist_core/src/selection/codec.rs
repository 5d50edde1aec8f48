//! Text encoding of a selection.
//!
//! The slot stores the lowercase hyphenated form of the record id, or
//! nothing at all for "no selection".

use super::TypedSelection;
use crate::model::record::RecordId;
use log::warn;
use uuid::Uuid;

/// Canonical slot text for `selection`.
pub fn encode_selection(selection: TypedSelection) -> Option<String> {
    selection.map(|id| id.hyphenated().to_string())
}

/// Parses slot text as a record id.
///
/// Accepts every textual UUID form `uuid` understands (hyphenated, simple,
/// braced, urn) after trimming surrounding whitespace.
pub fn parse_selection(raw: &str) -> Result<RecordId, uuid::Error> {
    Uuid::parse_str(raw.trim())
}

/// Lossy decode: absent or malformed text both yield no selection.
///
/// Malformed text is logged by length only.
pub fn decode_selection(raw: Option<&str>) -> TypedSelection {
    let text = raw?;
    match parse_selection(text) {
        Ok(id) => Some(id),
        Err(_) => {
            warn!(
                "event=selection_read module=selection status=degraded reason=malformed_slot_value value_len={}",
                text.len()
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{decode_selection, encode_selection, parse_selection};
    use uuid::Uuid;

    const SAMPLE: &str = "7c4e1a2b-3d5f-4a6b-8c9d-0e1f2a3b4c5d";

    #[test]
    fn encode_uses_lowercase_hyphenated_form() {
        let id = Uuid::parse_str(&SAMPLE.to_uppercase()).unwrap();
        assert_eq!(encode_selection(Some(id)).as_deref(), Some(SAMPLE));
        assert_eq!(encode_selection(None), None);
    }

    #[test]
    fn decode_accepts_alternate_uuid_forms() {
        let expected = Uuid::parse_str(SAMPLE).unwrap();
        let simple = expected.simple().to_string();
        let braced = format!("{{{SAMPLE}}}");
        let padded = format!("  {SAMPLE}\n");

        assert_eq!(decode_selection(Some(&simple)), Some(expected));
        assert_eq!(decode_selection(Some(&braced)), Some(expected));
        assert_eq!(decode_selection(Some(&padded)), Some(expected));
    }

    #[test]
    fn decode_degrades_malformed_text_to_none() {
        assert_eq!(decode_selection(Some("not-a-uuid")), None);
        assert_eq!(decode_selection(Some("")), None);
        assert_eq!(decode_selection(Some("7c4e1a2b-3d5f-4a6b-8c9d")), None);
        assert_eq!(decode_selection(None), None);
        assert!(parse_selection("not-a-uuid").is_err());
    }
}
