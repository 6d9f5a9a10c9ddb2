//! # Form Resolver
//!
//! Adapts the issues a schema validator raises into the field-keyed errors a
//! form-state manager renders.
//!
//! ## Overview
//!
//! A validator reports failures as an ordered list of [`Issue`]s. Some of
//! them are union failures, raised when none of several alternative schemas
//! matched, and carry one nested issue-set per alternative. This crate
//! flattens that tree into one error per field: the first issue raised for a
//! field decides what it shows, union failures resolve to their first
//! alternative, and every issue nested in a union is still visited so that
//! fields failing only inside an alternative are reported too. When every
//! failure per field is wanted, each field also collects its messages by
//! failure code.
//!
//! ## Core Types
//!
//! - [`IssuePath`]: Location of an offending value; renders the dotted field key
//! - [`Issue`] / [`Issues`]: Raised failures, as leaves or unions
//! - [`FieldError`] / [`ErrorMap`]: Normalized per-field errors
//! - [`Resolver`]: Runs a [`SchemaValidator`] and produces a [`ResolverResult`]
//!
//! ## Example
//!
//! ```rust
//! use form_resolver::{flatten_issues, Issue, IssuePath, Issues};
//!
//! let age = IssuePath::from_field("age");
//! let union = Issue::union(
//!     age.clone(),
//!     "Invalid input",
//!     vec![
//!         vec![Issue::new(age.clone(), "invalid_type", "Expected number")],
//!         vec![Issue::new(age.push_field("min"), "too_small", "Too small")],
//!     ],
//! );
//!
//! let errors = flatten_issues(&Issues::single(union), false).unwrap();
//! assert_eq!(errors["age"].error_type, "invalid_type");
//! assert_eq!(errors["age.min"].message, "Too small");
//! ```

pub mod error;
pub mod field_error;
pub mod flatten;
pub mod native;
pub mod nest;
pub mod path;
pub mod registry;
pub mod resolver;

pub use error::{BoxError, Issue, Issues, ParseError, ResolveError, INVALID_UNION};
pub use field_error::{ErrorMap, FieldError, Messages};
pub use flatten::{flatten_issues, normalize_issue};
pub use native::{validate_fields_natively, NativeValidation};
pub use nest::to_nest_errors;
pub use path::{IssuePath, PathSegment};
pub use registry::{FieldValidity, ValidityRegistry};
pub use resolver::{
    CriteriaMode, Mode, ParseParams, Resolver, ResolverConfig, ResolverOptions, ResolverResult,
    SchemaValidator,
};

/// Type alias for issue-accumulating validation results.
///
/// Validators built on stillwater can return this and convert it with
/// [`into_parse_result`].
pub type IssueValidation<T> = stillwater::Validation<T, Issues>;

/// Converts an accumulated validation into a parse result.
///
/// ```rust
/// use form_resolver::{into_parse_result, Issue, IssuePath, IssueValidation, Issues};
/// use stillwater::Validation;
///
/// let failed: IssueValidation<u32> = Validation::Failure(Issues::single(
///     Issue::new(IssuePath::from_field("qty"), "too_small", "At least 1"),
/// ));
/// assert!(into_parse_result(failed).unwrap_err().issues().is_some());
/// ```
pub fn into_parse_result<T>(validation: IssueValidation<T>) -> Result<T, ParseError> {
    match validation {
        stillwater::Validation::Success(value) => Ok(value),
        stillwater::Validation::Failure(issues) => Err(ParseError::Invalid(issues)),
    }
}
