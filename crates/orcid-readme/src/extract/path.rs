//! Null-safe traversal of loosely structured JSON.
//!
//! Every step of a path may be missing, `null`, or the wrong type in real
//! ORCID records; all of those collapse to "nothing here".

use serde_json::Value;

/// Value at `path` below `doc`, or `None` if any step is missing, `null`,
/// or not an object. A `null` leaf is also `None`.
#[must_use]
pub fn lookup<'a>(doc: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter()
        .try_fold(doc, |current, key| current.as_object()?.get(*key))
        .filter(|value| !value.is_null())
}

/// Scalar at `path` rendered as a trimmed string. Numbers and booleans are
/// stringified; blank strings, objects and arrays yield `None`.
#[must_use]
pub fn lookup_text(doc: &Value, path: &[&str]) -> Option<String> {
    lookup(doc, path).and_then(scalar_text)
}

/// Array at `path`, or an empty slice.
#[must_use]
pub fn lookup_array<'a>(doc: &'a Value, path: &[&str]) -> &'a [Value] {
    lookup(doc, path).and_then(Value::as_array).map(Vec::as_slice).unwrap_or_default()
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
