//! In-memory native validity registry.
//!
//! This module provides [`ValidityRegistry`], a thread-safe
//! [`NativeValidation`] implementation that records each field's current
//! custom validity message. It backs headless form state and tests.

use indexmap::IndexMap;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::native::NativeValidation;

/// Recorded validity state for one field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValidity {
    /// Current custom validity message; empty when the field is valid.
    pub message: String,
    /// How many times the field's validity has been reported.
    pub reports: usize,
}

type ValidityMap = Arc<RwLock<IndexMap<String, FieldValidity>>>;

/// A thread-safe registry of native field validity.
///
/// Clones share the same underlying state, so one registry can be handed to
/// several resolvers and inspected afterwards.
///
/// # Example
///
/// ```rust
/// use form_resolver::{NativeValidation, ValidityRegistry};
///
/// let registry = ValidityRegistry::new();
/// registry.set_custom_validity("email", "Invalid email");
/// registry.report_validity("email");
///
/// assert_eq!(registry.message("email").as_deref(), Some("Invalid email"));
/// assert_eq!(registry.invalid_fields(), vec!["email".to_string()]);
///
/// registry.set_custom_validity("email", "");
/// assert!(registry.invalid_fields().is_empty());
/// ```
pub struct ValidityRegistry {
    fields: ValidityMap,
}

impl ValidityRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            fields: Arc::new(RwLock::new(IndexMap::new())),
        }
    }

    /// Returns the current message for `field`, or `None` if it was never set.
    pub fn message(&self, field: &str) -> Option<String> {
        self.fields.read().get(field).map(|v| v.message.clone())
    }

    /// Returns how many times `field`'s validity has been reported.
    pub fn report_count(&self, field: &str) -> usize {
        self.fields.read().get(field).map_or(0, |v| v.reports)
    }

    /// Returns the recorded state of `field`.
    pub fn get(&self, field: &str) -> Option<FieldValidity> {
        self.fields.read().get(field).cloned()
    }

    /// Returns every field currently carrying a non-empty message, in
    /// first-seen order.
    pub fn invalid_fields(&self) -> Vec<String> {
        self.fields
            .read()
            .iter()
            .filter(|(_, v)| !v.message.is_empty())
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Forgets all recorded state.
    pub fn clear(&self) {
        self.fields.write().clear();
    }
}

impl NativeValidation for ValidityRegistry {
    fn set_custom_validity(&self, field: &str, message: &str) {
        let mut fields = self.fields.write();
        fields.entry(field.to_string()).or_default().message = message.to_string();
    }

    fn report_validity(&self, field: &str) {
        let mut fields = self.fields.write();
        fields.entry(field.to_string()).or_default().reports += 1;
    }
}

impl Default for ValidityRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ValidityRegistry {
    fn clone(&self) -> Self {
        Self {
            fields: Arc::clone(&self.fields),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_unknown_field() {
        let registry = ValidityRegistry::new();
        assert!(registry.message("nope").is_none());
        assert_eq!(registry.report_count("nope"), 0);
        assert!(registry.get("nope").is_none());
    }

    #[test]
    fn test_clones_share_state() {
        let registry = ValidityRegistry::new();
        let clone = registry.clone();

        clone.set_custom_validity("name", "Required");
        assert_eq!(registry.message("name").as_deref(), Some("Required"));

        registry.clear();
        assert!(clone.message("name").is_none());
    }

    #[test]
    fn test_concurrent_reports() {
        let registry = ValidityRegistry::new();
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = registry.clone();
                thread::spawn(move || {
                    for _ in 0..100 {
                        registry.report_validity("email");
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(registry.report_count("email"), 800);
    }
}
