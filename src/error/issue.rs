//! Validation issue types.
//!
//! This module provides [`Issue`] for a single failure raised by a schema
//! validator and [`Issues`] for the non-empty list a failed parse carries.

use std::fmt::{self, Display};

use stillwater::prelude::*;

use crate::path::IssuePath;

/// Code carried by union issues unless another one is supplied.
pub const INVALID_UNION: &str = "invalid_union";

/// A single validation failure raised by a schema validator.
///
/// An issue is either a plain [`Issue::Leaf`] failure or an
/// [`Issue::Union`] failure, raised when none of several alternative
/// schemas matched. A union carries one candidate issue-set per
/// alternative, and each of those issues may itself be a union.
///
/// # Example
///
/// ```rust
/// use form_resolver::{Issue, IssuePath};
///
/// let too_young = Issue::new(IssuePath::from_field("age"), "too_small", "Must be 18 or older");
/// let not_a_number = Issue::new(IssuePath::from_field("age"), "invalid_type", "Expected number");
///
/// let union = Issue::union(
///     IssuePath::from_field("age"),
///     "Invalid input",
///     vec![vec![too_young], vec![not_a_number]],
/// );
///
/// assert!(union.is_union());
/// assert_eq!(union.code(), "invalid_union");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Issue {
    /// A plain failure at `path`.
    Leaf {
        /// The location of the offending value.
        path: IssuePath,
        /// Machine-readable failure category (e.g. `too_small`).
        code: String,
        /// Human-readable description of the failure.
        message: String,
    },
    /// None of several alternative schemas matched the value at `path`.
    Union {
        /// The location of the offending value.
        path: IssuePath,
        /// Machine-readable failure category, `invalid_union` by default.
        code: String,
        /// Human-readable description of the failure.
        message: String,
        /// One issue-set per alternative, in schema order.
        branches: Vec<Vec<Issue>>,
    },
}

impl Issue {
    /// Creates a plain (non-union) issue.
    pub fn new(path: IssuePath, code: impl Into<String>, message: impl Into<String>) -> Self {
        Issue::Leaf {
            path,
            code: code.into(),
            message: message.into(),
        }
    }

    /// Creates a union issue with the `invalid_union` code.
    ///
    /// Use [`Issue::with_code`] to set a different code.
    pub fn union(path: IssuePath, message: impl Into<String>, branches: Vec<Vec<Issue>>) -> Self {
        Issue::Union {
            path,
            code: INVALID_UNION.to_string(),
            message: message.into(),
            branches,
        }
    }

    /// Sets the issue code and returns self for chaining.
    pub fn with_code(mut self, new_code: impl Into<String>) -> Self {
        match &mut self {
            Issue::Leaf { code, .. } | Issue::Union { code, .. } => *code = new_code.into(),
        }
        self
    }

    /// Returns a copy of this issue with `prefix` prepended to its path and
    /// to the paths of every issue nested in its branches.
    pub fn prefixed(&self, prefix: &IssuePath) -> Self {
        match self {
            Issue::Leaf {
                path,
                code,
                message,
            } => Issue::Leaf {
                path: prefix.join(path),
                code: code.clone(),
                message: message.clone(),
            },
            Issue::Union {
                path,
                code,
                message,
                branches,
            } => Issue::Union {
                path: prefix.join(path),
                code: code.clone(),
                message: message.clone(),
                branches: branches
                    .iter()
                    .map(|branch| branch.iter().map(|issue| issue.prefixed(prefix)).collect())
                    .collect(),
            },
        }
    }

    /// The location of the offending value.
    pub fn path(&self) -> &IssuePath {
        match self {
            Issue::Leaf { path, .. } | Issue::Union { path, .. } => path,
        }
    }

    /// The failure category.
    pub fn code(&self) -> &str {
        match self {
            Issue::Leaf { code, .. } | Issue::Union { code, .. } => code,
        }
    }

    /// The human-readable message.
    pub fn message(&self) -> &str {
        match self {
            Issue::Leaf { message, .. } | Issue::Union { message, .. } => message,
        }
    }

    /// The alternative issue-sets of a union, or `None` for a leaf.
    pub fn branches(&self) -> Option<&[Vec<Issue>]> {
        match self {
            Issue::Leaf { .. } => None,
            Issue::Union { branches, .. } => Some(branches),
        }
    }

    /// Returns true if this issue is a union failure.
    pub fn is_union(&self) -> bool {
        matches!(self, Issue::Union { .. })
    }
}

impl Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self.path();
        if path.is_root() {
            write!(f, "(root)")?;
        } else {
            write!(f, "{}", path)?;
        }
        write!(f, ": {} [{}]", self.message(), self.code())?;

        if let Some(branches) = self.branches() {
            write!(f, " ({} alternatives)", branches.len())?;
        }
        Ok(())
    }
}

/// A non-empty, ordered list of issues raised by one failed parse.
///
/// `Issues` wraps a `NonEmptyVec<Issue>`: a structured validation failure
/// always has at least one issue. Lists raised by separate validators can
/// be merged through `Semigroup`.
///
/// ```rust
/// use form_resolver::{Issue, IssuePath, Issues};
/// use stillwater::prelude::*;
///
/// let name = Issues::single(Issue::new(IssuePath::from_field("name"), "too_small", "Required"));
/// let email = Issues::single(Issue::new(
///     IssuePath::from_field("email"),
///     "invalid_string",
///     "Invalid email",
/// ));
///
/// assert_eq!(name.combine(email).len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Issues(NonEmptyVec<Issue>);

impl Issues {
    /// Creates an `Issues` list containing a single issue.
    pub fn single(issue: Issue) -> Self {
        Self(NonEmptyVec::singleton(issue))
    }

    /// Creates an `Issues` list from a `Vec`, or `None` if the vec is empty.
    pub fn from_vec(issues: Vec<Issue>) -> Option<Self> {
        NonEmptyVec::from_vec(issues).map(Self)
    }

    /// Returns the number of top-level issues.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; the list is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the first raised issue.
    pub fn first(&self) -> &Issue {
        self.0.head()
    }

    /// Returns an iterator over the top-level issues.
    pub fn iter(&self) -> impl Iterator<Item = &Issue> {
        self.0.iter()
    }

    /// Returns every top-level issue whose path renders to `key`.
    pub fn at_key(&self, key: &str) -> Vec<&Issue> {
        self.0
            .iter()
            .filter(|issue| issue.path().to_field_key() == key)
            .collect()
    }

    /// Returns a copy with `prefix` prepended to every issue path.
    pub fn prefixed(&self, prefix: &IssuePath) -> Self {
        if prefix.is_root() {
            return self.clone();
        }
        Self::from_vec(self.iter().map(|issue| issue.prefixed(prefix)).collect())
            .unwrap_or_else(|| self.clone())
    }

    /// Converts this list into a `Vec<Issue>`.
    pub fn into_vec(self) -> Vec<Issue> {
        self.0.into_vec()
    }
}

impl Semigroup for Issues {
    fn combine(self, other: Self) -> Self {
        Issues(self.0.combine(other.0))
    }
}

impl Display for Issues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} issue(s):", self.len())?;
        for (i, issue) in self.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, issue)?;
        }
        Ok(())
    }
}

impl std::error::Error for Issues {}

impl IntoIterator for Issues {
    type Item = Issue;
    type IntoIter = std::vec::IntoIter<Issue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

// Issues cross await points inside the resolver.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Issue>();
    assert_sync::<Issue>();
    assert_send::<Issues>();
    assert_sync::<Issues>();
};

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(field: &str, code: &str, message: &str) -> Issue {
        Issue::new(IssuePath::from_field(field), code, message)
    }

    #[test]
    fn test_leaf_accessors() {
        let issue = leaf("email", "invalid_string", "Invalid email");

        assert_eq!(issue.path().to_field_key(), "email");
        assert_eq!(issue.code(), "invalid_string");
        assert_eq!(issue.message(), "Invalid email");
        assert!(issue.branches().is_none());
        assert!(!issue.is_union());
    }

    #[test]
    fn test_union_defaults_code() {
        let issue = Issue::union(
            IssuePath::from_field("age"),
            "Invalid input",
            vec![vec![leaf("age", "too_small", "Too small")]],
        );

        assert_eq!(issue.code(), INVALID_UNION);
        assert_eq!(issue.branches().map(|b| b.len()), Some(1));
    }

    #[test]
    fn test_with_code_overrides_both_variants() {
        let issue = leaf("a", "x", "m").with_code("custom");
        assert_eq!(issue.code(), "custom");

        let union = Issue::union(IssuePath::root(), "m", vec![]).with_code("invalid_enum");
        assert_eq!(union.code(), "invalid_enum");
    }

    #[test]
    fn test_prefixed_rewrites_nested_paths() {
        let issue = Issue::union(
            IssuePath::from_field("age"),
            "Invalid input",
            vec![vec![leaf("min", "too_small", "Too small")]],
        );
        let prefixed = issue.prefixed(&IssuePath::from_field("profile"));

        assert_eq!(prefixed.path().to_field_key(), "profile.age");
        let branches = prefixed.branches().unwrap();
        assert_eq!(branches[0][0].path().to_field_key(), "profile.min");
    }

    #[test]
    fn test_issue_display() {
        let issue = leaf("email", "invalid_string", "Invalid email");
        assert_eq!(issue.to_string(), "email: Invalid email [invalid_string]");

        let root = Issue::new(IssuePath::root(), "custom", "Passwords must match");
        assert!(root.to_string().starts_with("(root): "));
    }

    #[test]
    fn test_issues_from_empty_vec_is_none() {
        assert!(Issues::from_vec(Vec::new()).is_none());
    }

    #[test]
    fn test_issues_combine_preserves_order() {
        let issues = Issues::single(leaf("a", "c1", "first"))
            .combine(Issues::single(leaf("b", "c2", "second")));

        assert_eq!(issues.len(), 2);
        assert_eq!(issues.first().message(), "first");
        let messages: Vec<_> = issues.iter().map(|i| i.message()).collect();
        assert_eq!(messages, vec!["first", "second"]);
    }

    #[test]
    fn test_issues_at_key() {
        let issues = Issues::from_vec(vec![
            leaf("name", "too_small", "short"),
            leaf("email", "invalid_string", "bad"),
            leaf("name", "too_big", "long"),
        ])
        .unwrap();

        assert_eq!(issues.at_key("name").len(), 2);
        assert_eq!(issues.at_key("email").len(), 1);
        assert!(issues.at_key("missing").is_empty());
    }

    #[test]
    fn test_issues_display() {
        let issues = Issues::single(leaf("name", "too_small", "Required"));
        let display = issues.to_string();
        assert!(display.contains("1 issue(s)"));
        assert!(display.contains("name: Required"));
    }
}
