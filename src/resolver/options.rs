//! Resolver configuration.
//!
//! [`ResolverConfig`] is fixed when a resolver is built; [`ResolverOptions`]
//! is supplied by the form manager on every call.

use std::fmt;
use std::sync::Arc;

use crate::native::NativeValidation;
use crate::resolver::traits::ParseParams;

/// Which validator entry point a resolver calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Call [`SchemaValidator::parse`](crate::SchemaValidator::parse).
    Sync,
    /// Call [`SchemaValidator::parse_async`](crate::SchemaValidator::parse_async).
    #[default]
    Async,
}

/// How many failures a field reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CriteriaMode {
    /// Only the first failure per field.
    #[default]
    FirstError,
    /// Every failure per field, grouped by code under `types`.
    All,
}

/// Build-time resolver settings.
///
/// # Example
///
/// ```rust
/// use form_resolver::{Mode, ResolverConfig};
///
/// let config = ResolverConfig::new().with_mode(Mode::Sync).with_raw(true);
/// assert_eq!(config.mode, Mode::Sync);
/// assert!(config.raw);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Validator entry point; asynchronous by default.
    pub mode: Mode,
    /// Return the input values instead of the parsed ones on success.
    pub raw: bool,
    /// Forwarded to the validator unchanged.
    pub parse_params: ParseParams,
}

impl ResolverConfig {
    /// Creates the default configuration: async mode, parsed values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the validator entry point.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets whether successful results carry the raw input.
    pub fn with_raw(mut self, raw: bool) -> Self {
        self.raw = raw;
        self
    }

    /// Sets the parameters forwarded to the validator.
    pub fn with_parse_params(mut self, params: ParseParams) -> Self {
        self.parse_params = params;
        self
    }
}

/// Per-call options supplied by the form manager.
#[derive(Clone, Default)]
pub struct ResolverOptions {
    /// Whether fields report one failure or all of them.
    pub criteria_mode: CriteriaMode,
    /// Whether errors are mirrored into the native validity channel.
    pub should_use_native_validation: bool,
    /// Names of the fields registered with the form manager.
    pub fields: Vec<String>,
    /// The native validity channel, if the form manager provides one.
    pub native: Option<Arc<dyn NativeValidation>>,
}

impl ResolverOptions {
    /// Creates options with first-error criteria and native validation off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the criteria mode.
    pub fn with_criteria_mode(mut self, criteria_mode: CriteriaMode) -> Self {
        self.criteria_mode = criteria_mode;
        self
    }

    /// Registers field names.
    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Enables native validation through `channel`.
    pub fn with_native_validation(mut self, channel: Arc<dyn NativeValidation>) -> Self {
        self.should_use_native_validation = true;
        self.native = Some(channel);
        self
    }

    /// Whether every failure per field should be collected.
    ///
    /// Native validation only shows one message per field, so collecting is
    /// off whenever it is enabled.
    pub fn collect_all(&self) -> bool {
        !self.should_use_native_validation && self.criteria_mode == CriteriaMode::All
    }
}

impl fmt::Debug for ResolverOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolverOptions")
            .field("criteria_mode", &self.criteria_mode)
            .field(
                "should_use_native_validation",
                &self.should_use_native_validation,
            )
            .field("fields", &self.fields)
            .field("native", &self.native.is_some())
            .finish()
    }
}
