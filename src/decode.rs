use serde_json::Value;

use crate::error::ClientError;

/// Decode a contract response payload: UTF-8 text holding one JSON value.
///
/// An empty payload is a legitimate "nothing to report" response (most write
/// operations return one) and decodes to `None`. Anything non-empty that is
/// not UTF-8 JSON fails with `MalformedResponse` carrying the lossy text so
/// the caller can still show the operator what came back.
pub fn decode_payload(payload: &[u8]) -> Result<Option<Value>, ClientError> {
    if payload.is_empty() {
        return Ok(None);
    }
    let text = std::str::from_utf8(payload).map_err(|_| ClientError::MalformedResponse {
        raw: String::from_utf8_lossy(payload).into_owned(),
    })?;
    serde_json::from_str(text)
        .map(Some)
        .map_err(|_| ClientError::MalformedResponse {
            raw: text.to_owned(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_exactly_what_serde_json_would() {
        let payload = br#"[{"ID":"asset1","Color":"red","Owner":"owner1"}]"#;
        let decoded = decode_payload(payload).unwrap().unwrap();
        let direct: Value = serde_json::from_slice(payload).unwrap();
        assert_eq!(decoded, direct);
    }

    #[test]
    fn scalar_payloads_are_valid_json_too() {
        assert_eq!(decode_payload(b"\"owner1\"").unwrap(), Some(json!("owner1")));
        assert_eq!(decode_payload(b"42").unwrap(), Some(json!(42)));
    }

    #[test]
    fn empty_payload_is_not_an_error() {
        assert_eq!(decode_payload(b"").unwrap(), None);
    }

    #[test]
    fn non_json_payload_carries_the_raw_text() {
        let err = decode_payload(b"committed OK").unwrap_err();
        match err {
            ClientError::MalformedResponse { raw } => assert_eq!(raw, "committed OK"),
            other => panic!("expected MalformedResponse, got {other:?}"),
        }
    }

    #[test]
    fn non_utf8_payload_is_malformed_not_a_panic() {
        let err = decode_payload(&[0xff, 0xfe, 0x00]).unwrap_err();
        assert!(matches!(err, ClientError::MalformedResponse { .. }));
    }
}
