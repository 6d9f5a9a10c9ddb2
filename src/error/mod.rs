//! Error types.
//!
//! This module provides the issue types a schema validator raises and the
//! [`ResolveError`] a resolver returns when a failure cannot be mapped onto
//! form fields.

mod issue;
mod resolve_error;

pub use issue::{Issue, Issues, INVALID_UNION};
pub use resolve_error::{BoxError, ParseError, ResolveError};
