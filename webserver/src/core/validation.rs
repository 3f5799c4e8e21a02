//! Request body parsing and required-field validation

use serde_json::{Map, Value};

use crate::error::{WebServerError, WebServerResult};

/// Fields every submission must carry, checked in this order
pub const REQUIRED_FIELDS: [&str; 4] = ["firstName", "lastName", "email", "company"];

/// Parse a raw request body into a JSON object.
///
/// An empty body, malformed JSON, a non-object value and an empty object are
/// all treated as "no data".
pub fn parse_payload(body: &[u8]) -> WebServerResult<Map<String, Value>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(WebServerError::NoData);
    }

    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) if !map.is_empty() => Ok(map),
        _ => Err(WebServerError::NoData),
    }
}

/// Reject the payload naming the first required field that is missing.
pub fn validate(payload: &Map<String, Value>) -> WebServerResult<()> {
    match REQUIRED_FIELDS
        .iter()
        .find(|field| !is_present(payload.get(**field)))
    {
        Some(field) => Err(WebServerError::MissingField {
            field: field.to_string(),
        }),
        None => Ok(()),
    }
}

/// Empty values do not count as present: null, `false`, zero, `""`, `[]` and `{}`
fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => false,
        Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(items)) => !items.is_empty(),
        Some(Value::Object(map)) => !map.is_empty(),
        Some(Value::Bool(true)) => true,
    }
}
