//! Response envelopes.
//!
//! The backend is inconsistent about wrapping: some endpoints answer with the
//! payload itself, others with `{ "message": ..., "data": <payload> }`. List
//! endpoints may return either a bare array or `{ "data": [...] }`.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

/// Unwrap a list response. Any shape other than an array or a `data` array is
/// an empty list.
pub fn list<T: DeserializeOwned>(value: Value) -> Result<Vec<T>, ApiError> {
    let items = match value {
        Value::Array(_) => value,
        Value::Object(mut map) => match map.remove("data") {
            Some(data @ Value::Array(_)) => data,
            _ => return Ok(Vec::new()),
        },
        _ => return Ok(Vec::new()),
    };
    Ok(serde_json::from_value(items)?)
}

/// Unwrap a single payload, from `data` when present.
pub fn payload<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    let inner = match value {
        Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    };
    Ok(serde_json::from_value(inner)?)
}

/// Like [`payload`], for calls whose body is informational only: an
/// unreadable payload is logged and dropped rather than failing the call.
pub fn optional_payload<T: DeserializeOwned>(value: Value) -> Option<T> {
    match payload(value) {
        Ok(item) => Some(item),
        Err(e) => {
            tracing::debug!(error = %e, "Ignoring unreadable response payload");
            None
        }
    }
}
