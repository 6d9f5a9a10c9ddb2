//! Resolver entry point.
//!
//! A [`Resolver`] runs a [`SchemaValidator`] over form values and turns the
//! outcome into a [`ResolverResult`]: the values on success, nested field
//! errors on a validation failure. Failures that carry no issue list are
//! handed back to the caller untouched.
//!
//! # Example
//!
//! ```rust
//! use form_resolver::{
//!     Issue, IssuePath, Issues, ParseError, ParseParams, Resolver, ResolverConfig,
//!     ResolverOptions,
//! };
//! use serde_json::{json, Value};
//!
//! let validator = |value: &Value, _: &ParseParams| -> Result<Value, ParseError> {
//!     if value["email"].as_str().map_or(false, |e| e.contains('@')) {
//!         Ok(value.clone())
//!     } else {
//!         Err(Issues::single(Issue::new(
//!             IssuePath::from_field("email"),
//!             "invalid_string",
//!             "Invalid email",
//!         ))
//!         .into())
//!     }
//! };
//!
//! let resolver = Resolver::new(validator, ResolverConfig::new());
//! let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! let result = runtime
//!     .block_on(resolver.resolve(json!({"email": "nope"}), &ResolverOptions::new()))
//!     .unwrap();
//!
//! assert_eq!(
//!     result.errors()["email"],
//!     json!({"type": "invalid_string", "message": "Invalid email"})
//! );
//! ```

mod options;
mod traits;

pub use options::{CriteriaMode, Mode, ResolverConfig, ResolverOptions};
pub use traits::{ParseParams, SchemaValidator};

use serde_json::{json, Map, Value};
use tracing::debug;

use crate::error::{ParseError, ResolveError};
use crate::field_error::ErrorMap;
use crate::flatten::flatten_issues;
use crate::native::validate_fields_natively;
use crate::nest::to_nest_errors;

/// The outcome of resolving form values.
///
/// Success and failure are exclusive: a valid result has no errors and an
/// invalid one has no values.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolverResult {
    /// Validation passed.
    Valid {
        /// Parsed values, or the raw input when the resolver is configured raw.
        values: Value,
    },
    /// Validation failed.
    Invalid {
        /// Field errors nested by path.
        errors: Map<String, Value>,
    },
}

impl ResolverResult {
    /// Returns true if validation passed.
    pub fn is_valid(&self) -> bool {
        matches!(self, ResolverResult::Valid { .. })
    }

    /// Returns the values, or an empty object for a failed validation.
    pub fn values(&self) -> Value {
        match self {
            ResolverResult::Valid { values } => values.clone(),
            ResolverResult::Invalid { .. } => json!({}),
        }
    }

    /// Returns the nested field errors, or an empty object for a passed validation.
    pub fn errors(&self) -> Value {
        match self {
            ResolverResult::Valid { .. } => json!({}),
            ResolverResult::Invalid { errors } => Value::Object(errors.clone()),
        }
    }

    /// Renders the result as `{"values": ..., "errors": ...}`.
    pub fn to_json(&self) -> Value {
        json!({
            "values": self.values(),
            "errors": self.errors(),
        })
    }
}

/// Adapts a [`SchemaValidator`] to the form manager's resolver contract.
///
/// Each call owns its own issue queue and error map; a resolver holds no
/// per-call state and may be shared between concurrent calls.
pub struct Resolver<V> {
    validator: V,
    config: ResolverConfig,
}

impl<V: SchemaValidator> Resolver<V> {
    /// Creates a resolver around `validator`.
    pub fn new(validator: V, config: ResolverConfig) -> Self {
        Self { validator, config }
    }

    /// Returns the resolver's configuration.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Validates `values` and maps the outcome for the form manager.
    ///
    /// On success the native channel, if enabled, is cleared for every
    /// registered field. On a validation failure the raised issues are
    /// flattened (collecting every failure per field when
    /// [`ResolverOptions::collect_all`] holds) and nested by path; the
    /// native channel is left alone.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::Foreign`] carrying the validator's own error
    /// when it fails without an issue list, and
    /// [`ResolveError::MalformedUnion`] when a raised union cannot be
    /// resolved.
    pub async fn resolve(
        &self,
        values: Value,
        options: &ResolverOptions,
    ) -> Result<ResolverResult, ResolveError> {
        debug!(mode = ?self.config.mode, raw = self.config.raw, "resolving form values");

        let parsed = match self.config.mode {
            Mode::Sync => self.validator.parse(&values, &self.config.parse_params),
            Mode::Async => {
                self.validator
                    .parse_async(&values, &self.config.parse_params)
                    .await
            }
        };

        match parsed {
            Ok(data) => {
                if options.should_use_native_validation {
                    validate_fields_natively(&ErrorMap::new(), options);
                }
                debug!("validation passed");
                Ok(ResolverResult::Valid {
                    values: if self.config.raw { values } else { data },
                })
            }
            Err(ParseError::Invalid(issues)) => {
                let flat = flatten_issues(&issues, options.collect_all())?;
                debug!(fields = flat.len(), "validation failed");
                Ok(ResolverResult::Invalid {
                    errors: to_nest_errors(&flat),
                })
            }
            Err(ParseError::Foreign(error)) => {
                debug!(error = %error, "validator failed without issues");
                Err(ResolveError::Foreign(error))
            }
        }
    }
}
