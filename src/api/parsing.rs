use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;

use crate::core::models::CommentRequest;
use crate::errors::HandlerError;

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

/// Unwraps an API Gateway event into the request mapping.
///
/// A non-empty `body` string is parsed as JSON (base64-decoded first when
/// `isBase64Encoded` is set), an object `body` is used as-is, and anything
/// else means the event already is the mapping.
pub fn normalize_payload(event: &Value) -> Result<Value, HandlerError> {
    match event.get("body") {
        Some(Value::String(body)) if !body.is_empty() => {
            let is_base64 = event
                .get("isBase64Encoded")
                .and_then(Value::as_bool)
                .unwrap_or(false);

            let text = if is_base64 {
                let bytes = STANDARD.decode(body.trim()).map_err(|e| {
                    HandlerError::InvalidPayload(format!("Failed to decode base64 body: {}", e))
                })?;
                String::from_utf8(bytes).map_err(|e| {
                    HandlerError::InvalidPayload(format!("Body is not valid UTF-8: {}", e))
                })?
            } else {
                body.clone()
            };

            Ok(serde_json::from_str(&text)?)
        }
        Some(body) if body.is_object() => Ok(body.clone()),
        _ => Ok(event.clone()),
    }
}

fn required_str(data: &Value, field: &'static str) -> Result<String, HandlerError> {
    v_str(data, &[field])
        .filter(|s| !s.trim().is_empty())
        .map(ToString::to_string)
        .ok_or(HandlerError::MissingField(field))
}

/// Pulls `issueKey` then `transcriptField` out of a normalized payload.
pub fn extract_request(data: &Value) -> Result<CommentRequest, HandlerError> {
    let issue_key = required_str(data, "issueKey")?;
    let transcript_field = required_str(data, "transcriptField")?;

    Ok(CommentRequest {
        issue_key: issue_key.trim().to_string(),
        transcript_field,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn string_body_is_parsed() {
        let event = json!({ "body": "{\"issueKey\":\"ABC-1\"}" });
        let data = normalize_payload(&event).unwrap();
        assert_eq!(v_str(&data, &["issueKey"]), Some("ABC-1"));
    }

    #[test]
    fn base64_body_is_decoded() {
        let encoded = STANDARD.encode("{\"issueKey\":\"ABC-2\"}");
        let event = json!({ "body": encoded, "isBase64Encoded": true });
        let data = normalize_payload(&event).unwrap();
        assert_eq!(v_str(&data, &["issueKey"]), Some("ABC-2"));
    }

    #[test]
    fn empty_body_falls_back_to_event() {
        let event = json!({ "body": "", "issueKey": "ABC-3" });
        let data = normalize_payload(&event).unwrap();
        assert_eq!(v_str(&data, &["issueKey"]), Some("ABC-3"));
    }

    #[test]
    fn malformed_body_is_invalid_payload() {
        let event = json!({ "body": "{not json" });
        let err = normalize_payload(&event).unwrap_err();
        assert!(matches!(err, HandlerError::InvalidPayload(_)));
    }

    #[test]
    fn non_string_field_counts_as_missing() {
        let data = json!({ "issueKey": 42, "transcriptField": "words" });
        let err = extract_request(&data).unwrap_err();
        assert!(matches!(err, HandlerError::MissingField("issueKey")));
    }

    #[test]
    fn v_path_walks_nested_objects() {
        let v = json!({ "a": { "b": { "c": "d" } } });
        assert_eq!(v_str(&v, &["a", "b", "c"]), Some("d"));
        assert!(v_path(&v, &["a", "x"]).is_none());
    }
}
