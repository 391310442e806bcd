//! Response classification
//!
//! EXX reports failure in three ways: a non-2xx status, an `error` field, or
//! a `code` field other than `100`. They are checked in that order.

use crate::error::{RestError, RestResult};
use serde_json::Value;

/// `code` value of a successful response
pub const SUCCESS_CODE: i64 = 100;

/// Classify a response as a success payload or an error
///
/// Successful payloads are returned unchanged.
pub fn validate_response(status: u16, body: &str) -> RestResult<Value> {
    if !(200..300).contains(&status) {
        let parsed = serde_json::from_str::<Value>(body).ok();
        return Err(api_error(status, parsed.as_ref(), body));
    }

    let value: Value = serde_json::from_str(body).map_err(|_| RestError::InvalidResponse {
        body: body.to_string(),
    })?;

    if value.get("error").is_some() {
        return Err(api_error(status, Some(&value), body));
    }

    if let Some(code) = value.get("code") {
        if !is_success_code(code) {
            return Err(api_error(status, Some(&value), body));
        }
    }

    Ok(value)
}

/// Only the JSON number `100` is a success; `"100"` is not
fn is_success_code(code: &Value) -> bool {
    code.as_i64() == Some(SUCCESS_CODE)
}

fn api_error(status: u16, parsed: Option<&Value>, body: &str) -> RestError {
    let field = |name: &str| parsed.and_then(|value| value.get(name)).map(text_of);

    let message = field("error")
        .or_else(|| field("message"))
        .unwrap_or_else(|| {
            if body.trim().is_empty() {
                "Unknown error".to_string()
            } else {
                body.to_string()
            }
        });

    RestError::Api {
        status,
        code: field("code"),
        message,
        body: body.to_string(),
    }
}

fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_payload_returned_unchanged() {
        let value = validate_response(200, r#"{"code": 100, "id": "13877"}"#).unwrap();
        assert_eq!(value, json!({"code": 100, "id": "13877"}));
    }

    #[test]
    fn test_success_without_code() {
        let value = validate_response(200, r#"[{"tid": 1}]"#).unwrap();
        assert_eq!(value, json!([{"tid": 1}]));
    }

    #[test]
    fn test_string_code_is_not_success() {
        for body in [r#"{"code": "100", "message": "ok"}"#, r#"{"code": " 100 "}"#] {
            match validate_response(200, body).unwrap_err() {
                RestError::Api { status, code, .. } => {
                    assert_eq!(status, 200);
                    assert_eq!(code.as_deref().map(str::trim), Some("100"));
                }
                other => panic!("Expected Api error, got {:?}", other),
            }
        }
        assert!(validate_response(200, r#"{"code": 100.5}"#).is_err());
    }

    #[test]
    fn test_error_field() {
        let err = validate_response(200, r#"{"error": "bad"}"#).unwrap_err();
        match err {
            RestError::Api {
                status, message, ..
            } => {
                assert_eq!(status, 200);
                assert_eq!(message, "bad");
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_failure_code_uses_message() {
        let err = validate_response(200, r#"{"code": 103, "message": "no funds"}"#).unwrap_err();
        match err {
            RestError::Api { code, message, .. } => {
                assert_eq!(code.as_deref(), Some("103"));
                assert_eq!(message, "no funds");
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_json() {
        let err = validate_response(200, "<head></html>").unwrap_err();
        assert!(err.is_invalid_response());
        assert_eq!(err.raw_response(), Some("<head></html>"));
    }

    #[test]
    fn test_non_2xx_regardless_of_body() {
        for body in ["", "not json", r#"{"code": 100}"#] {
            let err = validate_response(404, body).unwrap_err();
            assert!(err.is_api_error());
            assert_eq!(err.status_code(), Some(404));
        }
    }

    #[test]
    fn test_non_2xx_message_extraction() {
        let err = validate_response(500, r#"{"message": "maintenance"}"#).unwrap_err();
        assert!(matches!(err, RestError::Api { ref message, .. } if message == "maintenance"));

        let err = validate_response(502, "Bad Gateway").unwrap_err();
        assert!(matches!(err, RestError::Api { ref message, .. } if message == "Bad Gateway"));

        let err = validate_response(503, "").unwrap_err();
        assert!(matches!(err, RestError::Api { ref message, .. } if message == "Unknown error"));
    }

    #[test]
    fn test_error_field_wins_over_success_code() {
        let err = validate_response(200, r#"{"code": 100, "error": "bad"}"#).unwrap_err();
        assert!(err.is_api_error());
    }
}
