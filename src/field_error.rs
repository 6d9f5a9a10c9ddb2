//! Normalized per-field errors.
//!
//! This module provides [`FieldError`], the record a form manager renders
//! next to a field, and [`ErrorMap`], the flat field-key index of them.

use indexmap::IndexMap;
use serde_json::{json, Map, Value};

/// Flat mapping from field key to that field's error, in discovery order.
pub type ErrorMap = IndexMap<String, FieldError>;

/// One or more messages recorded for a single failure code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages(Vec<String>);

impl Messages {
    /// Creates a collection holding one message.
    pub fn one(message: impl Into<String>) -> Self {
        Self(vec![message.into()])
    }

    /// Appends a message. Identical messages are kept.
    pub fn push(&mut self, message: impl Into<String>) {
        self.0.push(message.into());
    }

    /// Returns the number of messages.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no message has been recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the messages in the order they were recorded.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Renders the messages the way form managers store criteria results.
    ///
    /// A single message becomes a string, several become an array. A single
    /// empty message becomes `true`, marking the criterion as failed
    /// without text.
    pub fn to_json(&self) -> Value {
        match self.0.as_slice() {
            [only] if only.is_empty() => Value::Bool(true),
            [only] => Value::String(only.clone()),
            many => Value::Array(many.iter().cloned().map(Value::String).collect()),
        }
    }
}

/// The normalized error for one form field.
///
/// `error_type` and `message` come from the first issue raised for the
/// field. `types` is only populated when every failure per field is being
/// collected, and then maps each failure code to its messages.
///
/// # Example
///
/// ```rust
/// use form_resolver::FieldError;
/// use serde_json::json;
///
/// let error = FieldError::new("too_small", "Required")
///     .with_type_message("too_small", "Required")
///     .with_type_message("invalid_string", "Must be an email");
///
/// assert_eq!(error.to_json(), json!({
///     "type": "too_small",
///     "message": "Required",
///     "types": { "too_small": "Required", "invalid_string": "Must be an email" }
/// }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Failure code of the governing issue.
    pub error_type: String,
    /// Message of the governing issue.
    pub message: String,
    /// Every failure code seen for the field, with its messages.
    pub types: Option<IndexMap<String, Messages>>,
}

impl FieldError {
    /// Creates a field error with no collected types.
    pub fn new(error_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_type: error_type.into(),
            message: message.into(),
            types: None,
        }
    }

    /// Records `message` under `code` in `types`, creating the map on first use.
    pub fn append_type_message(&mut self, code: &str, message: impl Into<String>) {
        let types = self.types.get_or_insert_with(IndexMap::new);
        match types.get_mut(code) {
            Some(messages) => messages.push(message),
            None => {
                types.insert(code.to_string(), Messages::one(message));
            }
        }
    }

    /// Builder form of [`FieldError::append_type_message`].
    pub fn with_type_message(mut self, code: &str, message: impl Into<String>) -> Self {
        self.append_type_message(code, message);
        self
    }

    /// Returns the messages recorded for `code`, if any.
    pub fn messages_for(&self, code: &str) -> Option<&Messages> {
        self.types.as_ref().and_then(|types| types.get(code))
    }

    /// Renders the error in the form manager's JSON shape.
    pub fn to_json(&self) -> Value {
        let mut object = Map::new();
        object.insert("type".to_string(), json!(self.error_type));
        object.insert("message".to_string(), json!(self.message));
        if let Some(types) = &self.types {
            let rendered: Map<String, Value> = types
                .iter()
                .map(|(code, messages)| (code.clone(), messages.to_json()))
                .collect();
            object.insert("types".to_string(), Value::Object(rendered));
        }
        Value::Object(object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_no_types() {
        let error = FieldError::new("invalid_string", "Invalid email");
        assert!(error.types.is_none());
        assert_eq!(
            error.to_json(),
            json!({"type": "invalid_string", "message": "Invalid email"})
        );
    }

    #[test]
    fn test_append_accumulates_per_code() {
        let mut error = FieldError::new("too_small", "short");
        error.append_type_message("too_small", "short");
        error.append_type_message("too_small", "short");
        error.append_type_message("too_big", "long");

        assert_eq!(error.messages_for("too_small").map(Messages::len), Some(2));
        assert_eq!(error.messages_for("too_big").map(Messages::len), Some(1));
        assert!(error.messages_for("custom").is_none());
        assert_eq!(error.error_type, "too_small");
    }

    #[test]
    fn test_messages_json_shapes() {
        assert_eq!(Messages::one("a").to_json(), json!("a"));
        assert_eq!(Messages::one("").to_json(), json!(true));

        let mut many = Messages::one("a");
        many.push("b");
        assert_eq!(many.to_json(), json!(["a", "b"]));
    }

    #[test]
    fn test_types_keep_insertion_order() {
        let error = FieldError::new("z", "first")
            .with_type_message("z", "first")
            .with_type_message("a", "second");

        let order: Vec<_> = error.types.unwrap().keys().cloned().collect();
        assert_eq!(order, vec!["z", "a"]);
    }
}
