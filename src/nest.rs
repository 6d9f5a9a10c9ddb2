//! Conversion of flat field errors into the nested shape form managers store.
//!
//! A flat key such as `users.0.email` becomes
//! `{"users": [{"email": {...}}]}`: numeric segments open arrays, every other
//! segment opens an object.

use serde_json::{Map, Value};

use crate::field_error::ErrorMap;

/// Nests every entry of `errors` at the location its dotted key describes.
///
/// Entries are written in map order. Existing objects and arrays along a
/// key are reused, so `user` and `user.name` may both be present; any other
/// value in the way is replaced by a fresh container. Arrays are padded
/// with `null` up to the written index; an array that also receives a
/// named child is rewritten as an object keyed by index. The empty key is
/// stored as `""`.
///
/// # Example
///
/// ```rust
/// use form_resolver::{to_nest_errors, ErrorMap, FieldError};
/// use serde_json::{json, Value};
///
/// let mut errors = ErrorMap::new();
/// errors.insert("items.1.qty".to_string(), FieldError::new("too_small", "At least 1"));
///
/// let nested = Value::Object(to_nest_errors(&errors));
/// assert_eq!(nested, json!({
///     "items": [null, { "qty": { "type": "too_small", "message": "At least 1" } }]
/// }));
/// ```
pub fn to_nest_errors(errors: &ErrorMap) -> Map<String, Value> {
    let mut root = Value::Object(Map::new());
    for (key, error) in errors {
        set_path(&mut root, key, error.to_json());
    }
    match root {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// Writes `value` into `target` at the dotted `key`.
pub(crate) fn set_path(target: &mut Value, key: &str, value: Value) {
    let segments = split_key(key);
    let mut current = target;

    for (i, segment) in segments.iter().enumerate() {
        let is_last = i + 1 == segments.len();
        let slot = match child_slot(current, segment) {
            Some(slot) => slot,
            None => return,
        };

        if is_last {
            *slot = value;
            return;
        }

        if !(slot.is_object() || slot.is_array()) {
            *slot = if as_index(segments[i + 1]).is_some() {
                Value::Array(Vec::new())
            } else {
                Value::Object(Map::new())
            };
        }
        current = slot;
    }
}

fn split_key(key: &str) -> Vec<&str> {
    if key.is_empty() {
        vec![""]
    } else {
        key.split('.').collect()
    }
}

fn as_index(segment: &str) -> Option<usize> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

/// Returns the child of `container` named by `segment`, creating it as `null`.
///
/// An array addressed by a non-numeric segment becomes an object keyed by
/// the indices of its non-null items, so nothing already written is lost.
fn child_slot<'a>(container: &'a mut Value, segment: &str) -> Option<&'a mut Value> {
    if container.is_array() && as_index(segment).is_none() {
        if let Value::Array(items) = std::mem::take(container) {
            *container = Value::Object(index_keyed(items));
        }
    }

    match container {
        Value::Object(map) => Some(map.entry(segment.to_string()).or_insert(Value::Null)),
        Value::Array(items) => {
            let index = as_index(segment)?;
            if items.len() <= index {
                items.resize(index + 1, Value::Null);
            }
            items.get_mut(index)
        }
        _ => None,
    }
}

fn index_keyed(items: Vec<Value>) -> Map<String, Value> {
    items
        .into_iter()
        .enumerate()
        .filter(|(_, item)| !item.is_null())
        .map(|(index, item)| (index.to_string(), item))
        .collect()
}
