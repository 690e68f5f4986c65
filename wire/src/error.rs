//! Backend error-body extraction.
//!
//! The backend reports failures as `{ "detail": ... }` where `detail` is either
//! a plain string or a list of validation entries carrying `msg`. Whatever the
//! shape, callers only need one display string.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

/// Extract the human-readable message from an error body, or return `fallback`.
#[must_use]
pub fn error_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .as_ref()
        .and_then(|v| v.get("detail"))
        .and_then(detail_text)
        .unwrap_or_else(|| fallback.to_owned())
}

fn detail_text(detail: &Value) -> Option<String> {
    match detail {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Array(items) => {
            let msgs: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if msgs.is_empty() { None } else { Some(msgs.join("; ")) }
        }
        _ => None,
    }
}
