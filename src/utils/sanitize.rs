use crate::constants::limits::SANITIZED_STRING_MAX_CHARS;
use crate::utils::text::{strip_nul, truncate_chars};
use serde_json::Value;

/// Bounds text that flows back to the agent from tools whose results may
/// carry user- or attacker-controlled strings (logs, command output, env vars).
///
/// Every string loses its NUL characters and is cut to
/// [`SANITIZED_STRING_MAX_CHARS`]; arrays and objects are walked recursively
/// with key order preserved; numbers, booleans and null pass through.
pub fn sanitize_output(value: Value) -> Value {
    match value {
        Value::String(text) => Value::String(sanitize_text(&text)),
        Value::Array(items) => Value::Array(items.into_iter().map(sanitize_output).collect()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, val)| (key, sanitize_output(val)))
                .collect(),
        ),
        other => other,
    }
}

pub fn sanitize_text(text: &str) -> String {
    truncate_chars(&strip_nul(text), SANITIZED_STRING_MAX_CHARS)
}
