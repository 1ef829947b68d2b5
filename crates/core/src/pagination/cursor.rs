//! Opaque cursor codec.
//!
//! A cursor is the compact JSON form of a [`CursorPayload`]
//! (`{"pk":"..","sk":".."}`) encoded as unpadded URL-safe base64.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Decoded contents of a pagination cursor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CursorPayload {
    /// Partition the cursor was issued under.
    #[serde(rename = "pk")]
    pub partition_key: String,
    /// `<createdAt>#<id>` of the item the cursor points at.
    #[serde(rename = "sk")]
    pub sort_key: String,
}

impl CursorPayload {
    pub fn new(partition_key: impl Into<String>, sort_key: impl Into<String>) -> Self {
        Self {
            partition_key: partition_key.into(),
            sort_key: sort_key.into(),
        }
    }
}

/// Encode a payload into an opaque, URL-safe token.
pub fn encode_cursor(payload: &CursorPayload) -> String {
    let json = serde_json::json!({
        "pk": payload.partition_key,
        "sk": payload.sort_key,
    });
    URL_SAFE_NO_PAD.encode(json.to_string())
}

/// Decode a token produced by [`encode_cursor`].
///
/// Any structural problem is an [`DomainError::InvalidCursor`].
pub fn decode_cursor(token: &str) -> DomainResult<CursorPayload> {
    if token.is_empty() {
        return Err(DomainError::InvalidCursor("empty cursor".into()));
    }

    let bytes = URL_SAFE_NO_PAD
        .decode(token)
        .map_err(|e| DomainError::InvalidCursor(format!("not base64url: {e}")))?;

    let payload: CursorPayload = serde_json::from_slice(&bytes)
        .map_err(|e| DomainError::InvalidCursor(format!("malformed payload: {e}")))?;

    if payload.partition_key.is_empty() || payload.sort_key.is_empty() {
        return Err(DomainError::InvalidCursor(
            "partition and sort keys must be non-empty".into(),
        ));
    }

    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(json: &str) -> String {
        URL_SAFE_NO_PAD.encode(json.as_bytes())
    }

    fn assert_invalid(token: &str) {
        match decode_cursor(token) {
            Err(DomainError::InvalidCursor(_)) => {}
            other => panic!("expected InvalidCursor for {token:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_roundtrip_preserves_payload() {
        let payloads = [
            CursorPayload::new("customers", "2024-01-01T00:00:00.000Z#cust_1"),
            CursorPayload::new("cust_1", "2024-01-01T00:00:00.000Z#proj_2"),
            CursorPayload::new("proj_ü", "2024-01-01T00:00:00.000Z#asset/+=?"),
        ];
        for p in payloads {
            assert_eq!(decode_cursor(&encode_cursor(&p)).unwrap(), p);
        }
    }

    // Le token doit être utilisable tel quel dans une URL
    #[test]
    fn test_encoding_is_url_safe_and_deterministic() {
        let p = CursorPayload::new("proj_1", "2024-01-01T00:00:00.000Z#asset_??>>");
        let a = encode_cursor(&p);
        let b = encode_cursor(&p);
        assert_eq!(a, b);
        assert!(
            a.chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
    }

    #[test]
    fn test_rejects_empty_and_garbage() {
        assert_invalid("");
        assert_invalid("!!!not-base64!!!");
        // base64 valide mais pas de l'UTF-8 / JSON
        assert_invalid(&URL_SAFE_NO_PAD.encode([0xff, 0xfe, 0x00]));
        assert_invalid(&raw("not json"));
        assert_invalid(&raw("[1,2]"));
        assert_invalid(&raw("null"));
    }

    #[test]
    fn test_rejects_missing_or_empty_fields() {
        assert_invalid(&raw(r#"{"pk":"cust_1"}"#));
        assert_invalid(&raw(r#"{"sk":"x#y"}"#));
        assert_invalid(&raw(r#"{"pk":"","sk":"x#y"}"#));
        assert_invalid(&raw(r#"{"pk":"cust_1","sk":""}"#));
        assert_invalid(&raw(r#"{"pk":null,"sk":"x#y"}"#));
        assert_invalid(&raw(r#"{"pk":1,"sk":"x#y"}"#));
    }

    #[test]
    fn test_rejects_unknown_fields() {
        assert_invalid(&raw(r#"{"pk":"a","sk":"b","extra":true}"#));
    }

    #[test]
    fn test_encodes_compact_json() {
        let token = encode_cursor(&CursorPayload::new("cust_1", "T1#p1"));
        let bytes = URL_SAFE_NO_PAD.decode(&token).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            r#"{"pk":"cust_1","sk":"T1#p1"}"#
        );
    }

    #[test]
    fn test_decodes_wire_format() {
        let token = raw(r#"{"pk":"cust_1","sk":"T1#p1"}"#);
        assert_eq!(
            decode_cursor(&token).unwrap(),
            CursorPayload::new("cust_1", "T1#p1")
        );
    }
}
