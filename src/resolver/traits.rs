//! The schema validator seam.
//!
//! This module provides the [`SchemaValidator`] trait a resolver drives. Any
//! validator that can report failures as an [`Issues`](crate::Issues) list
//! can be plugged in.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ParseError;
use crate::path::IssuePath;

/// Parameters forwarded to a validator on every parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseParams {
    /// Prefix the validator should prepend to the paths of raised issues.
    pub path: IssuePath,
}

impl ParseParams {
    /// Creates parameters with a root path prefix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the issue path prefix.
    pub fn with_path(mut self, path: IssuePath) -> Self {
        self.path = path;
        self
    }
}

/// A schema validator with a synchronous and an asynchronous parse.
///
/// `parse` returns the parsed (possibly transformed) data, or a
/// [`ParseError`] distinguishing validation failures from anything else.
/// `parse_async` defaults to `parse`; validators with asynchronous
/// refinements override it.
///
/// Plain closures implement this trait:
///
/// ```rust
/// use form_resolver::{Issue, IssuePath, Issues, ParseError, ParseParams, SchemaValidator};
/// use serde_json::{json, Value};
///
/// let non_empty = |value: &Value, _: &ParseParams| -> Result<Value, ParseError> {
///     match value["name"].as_str() {
///         Some(name) if !name.is_empty() => Ok(value.clone()),
///         _ => Err(Issues::single(Issue::new(
///             IssuePath::from_field("name"),
///             "too_small",
///             "Required",
///         ))
///         .into()),
///     }
/// };
///
/// assert!(non_empty.parse(&json!({"name": "Ada"}), &ParseParams::new()).is_ok());
/// assert!(non_empty.parse(&json!({"name": ""}), &ParseParams::new()).is_err());
/// ```
#[async_trait]
pub trait SchemaValidator: Send + Sync {
    /// Parses `values` synchronously.
    fn parse(&self, values: &Value, params: &ParseParams) -> Result<Value, ParseError>;

    /// Parses `values`, possibly suspending.
    async fn parse_async(&self, values: &Value, params: &ParseParams) -> Result<Value, ParseError> {
        self.parse(values, params)
    }
}

#[async_trait]
impl<F> SchemaValidator for F
where
    F: Fn(&Value, &ParseParams) -> Result<Value, ParseError> + Send + Sync,
{
    fn parse(&self, values: &Value, params: &ParseParams) -> Result<Value, ParseError> {
        self(values, params)
    }
}
