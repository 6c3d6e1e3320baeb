//! Response envelope normalization
//!
//! The backend wraps responses in a loosely consistent `{ success, data }`
//! envelope, but not every endpoint agrees on the shape: some return
//! `{ success, data }`, some `{ data }`, some the bare payload, and the
//! login endpoint flattens the payload next to the `success` flag.
//!
//! Everything is normalized here, once, so consumers never branch per call
//! site. `success: false` is rejected at this boundary.

use kernel::error::app_error::{AppError, AppResult};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Normalize a raw response body into its canonical payload.
///
/// Accepted shapes, in order:
/// 1. `{ "success": bool, "data": ..., "message"?: ... }`
/// 2. `{ "success": bool, ...payload }` (flattened, login-style)
/// 3. `{ "data": ... }`
/// 4. bare payload
pub fn normalize(body: Value) -> AppResult<Value> {
    let Value::Object(mut obj) = body else {
        return Ok(body);
    };

    match obj.get("success") {
        Some(Value::Bool(false)) => {
            let message = obj
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("Request rejected by backend")
                .to_string();
            Err(AppError::bad_request(message))
        }
        Some(_) => {
            if let Some(data) = obj.remove("data") {
                return Ok(data);
            }
            // Flattened payload: drop the envelope keys, keep the rest
            obj.remove("success");
            obj.remove("message");
            Ok(Value::Object(obj))
        }
        None => {
            if let Some(data) = obj.remove("data") {
                return Ok(data);
            }
            Ok(Value::Object(obj))
        }
    }
}

/// Decode a normalized payload into a typed value.
pub fn decode<T: DeserializeOwned>(payload: Value) -> AppResult<T> {
    serde_json::from_value(payload).map_err(AppError::from)
}

/// Decode a list payload that may arrive either as a bare array or
/// wrapped under a named key (`{ "roles": [...] }`, `{ "menus": [...] }`).
pub fn decode_list<T: DeserializeOwned>(payload: Value, key: &str) -> AppResult<Vec<T>> {
    match payload {
        Value::Array(_) => decode(payload),
        Value::Object(mut obj) => {
            let inner = obj
                .remove(key)
                .ok_or_else(|| AppError::bad_request(format!("Missing '{key}' in response")))?;
            decode(inner)
        }
        other => Err(AppError::bad_request(format!(
            "Expected a list, got {}",
            type_name(&other)
        ))),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_data_shape() {
        let body = json!({ "success": true, "data": { "alias": "crm" } });
        let payload = normalize(body).unwrap();
        assert_eq!(payload, json!({ "alias": "crm" }));
    }

    #[test]
    fn test_data_only_shape() {
        let body = json!({ "data": [1, 2, 3] });
        assert_eq!(normalize(body).unwrap(), json!([1, 2, 3]));
    }

    #[test]
    fn test_bare_payload() {
        let body = json!([{ "alias": "erp" }]);
        assert_eq!(normalize(body).unwrap(), json!([{ "alias": "erp" }]));
    }

    #[test]
    fn test_flattened_login_shape() {
        let body = json!({ "success": true, "token": "t", "user": { "username": "admin" } });
        let payload = normalize(body).unwrap();
        assert_eq!(
            payload,
            json!({ "token": "t", "user": { "username": "admin" } })
        );
    }

    #[test]
    fn test_success_false_rejected() {
        let body = json!({ "success": false, "message": "Aplicación no encontrada" });
        let err = normalize(body).unwrap_err();
        assert_eq!(err.message(), "Aplicación no encontrada");
    }

    #[test]
    fn test_success_false_without_message() {
        let body = json!({ "success": false });
        let err = normalize(body).unwrap_err();
        assert_eq!(err.message(), "Request rejected by backend");
    }

    #[test]
    fn test_decode_list_bare_and_keyed() {
        let bare = json!([{ "x": 1 }]);
        let keyed = json!({ "roles": [{ "x": 1 }] });

        let a: Vec<Value> = decode_list(bare, "roles").unwrap();
        let b: Vec<Value> = decode_list(keyed, "roles").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_decode_list_missing_key() {
        let keyed = json!({ "menus": [] });
        let err = decode_list::<Value>(keyed, "roles").unwrap_err();
        assert!(err.message().contains("roles"));
    }

    #[test]
    fn test_envelope_round_trip() {
        let wrapped = json!({ "success": true, "data": { "id": "1" } });
        assert_eq!(normalize(wrapped).unwrap(), json!({ "id": "1" }));
    }
}
