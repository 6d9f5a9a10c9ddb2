//! Parse and resolve error types.

use thiserror::Error;

use super::issue::Issues;

/// A boxed error raised by a validator that is not a structured validation failure.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The failure side of a schema validator's parse.
///
/// Validators separate expected validation failures, which carry the raised
/// [`Issues`], from anything else that went wrong while parsing.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The value did not satisfy the schema.
    #[error(transparent)]
    Invalid(Issues),
    /// Parsing failed for a reason unrelated to the value's validity.
    #[error(transparent)]
    Foreign(BoxError),
}

impl ParseError {
    /// Wraps an arbitrary error as a foreign parse failure.
    pub fn foreign<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        ParseError::Foreign(Box::new(error))
    }

    /// Returns the raised issues if this is a validation failure.
    pub fn issues(&self) -> Option<&Issues> {
        match self {
            ParseError::Invalid(issues) => Some(issues),
            ParseError::Foreign(_) => None,
        }
    }
}

impl From<Issues> for ParseError {
    fn from(issues: Issues) -> Self {
        ParseError::Invalid(issues)
    }
}

/// Errors returned by a resolver.
///
/// Validation failures are never reported here; they become field errors in
/// the resolver's result.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The validator failed with an error that carries no issue list.
    ///
    /// The validator's error is passed through untouched.
    #[error(transparent)]
    Foreign(BoxError),

    /// A union issue's branches could not be resolved to a field error.
    #[error("malformed union issue at '{key}': {reason}")]
    MalformedUnion {
        /// Field key of the union issue.
        key: String,
        /// What was wrong with its branches.
        reason: String,
    },
}

impl ResolveError {
    /// Returns the validator's original error if this is a foreign failure.
    pub fn into_foreign(self) -> Option<BoxError> {
        match self {
            ResolveError::Foreign(error) => Some(error),
            ResolveError::MalformedUnion { .. } => None,
        }
    }
}
