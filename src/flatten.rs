//! Flattening of raised issue trees into per-field errors.
//!
//! [`normalize_issue`] reduces one issue to the `(type, message)` pair a
//! field displays, resolving union failures to their first alternative.
//! [`flatten_issues`] drives it over a whole issue list with a worklist,
//! expanding every union alternative so that issues nested anywhere in a
//! union still reach the map.
//!
//! # Example
//!
//! ```rust
//! use form_resolver::{flatten_issues, Issue, IssuePath, Issues};
//!
//! let issues = Issues::from_vec(vec![
//!     Issue::new(IssuePath::from_field("name"), "too_small", "Too short"),
//!     Issue::new(IssuePath::from_field("name"), "invalid_string", "Letters only"),
//! ])
//! .unwrap();
//!
//! let errors = flatten_issues(&issues, true).unwrap();
//! let name = &errors["name"];
//! assert_eq!(name.error_type, "too_small");
//! assert_eq!(name.types.as_ref().unwrap().len(), 2);
//! ```

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::error::{Issue, Issues, ResolveError};
use crate::field_error::{ErrorMap, FieldError};

/// Resolves an issue to the field error it contributes as a field's primary error.
///
/// Leaf issues map directly to their code and message. Union issues resolve
/// to the first issue of their first branch, recursively; later branches
/// never win, however specific they are.
///
/// # Errors
///
/// Returns [`ResolveError::MalformedUnion`] when a union on the resolution
/// path has no branches or an empty first branch.
pub fn normalize_issue(issue: &Issue) -> Result<FieldError, ResolveError> {
    match issue {
        Issue::Leaf { code, message, .. } => Ok(FieldError::new(code.as_str(), message.as_str())),
        Issue::Union { path, branches, .. } => {
            let first_branch = branches.first().ok_or_else(|| ResolveError::MalformedUnion {
                key: path.to_field_key(),
                reason: "union has no branches".to_string(),
            })?;
            let first_issue = first_branch
                .first()
                .ok_or_else(|| ResolveError::MalformedUnion {
                    key: path.to_field_key(),
                    reason: "first branch has no issues".to_string(),
                })?;
            normalize_issue(first_issue)
        }
    }
}

/// Flattens a raised issue list into a field-keyed [`ErrorMap`].
///
/// Issues are processed in order from a worklist. The first issue seen for a
/// field key sets that field's `type` and `message`; nothing later replaces
/// them. Every issue in every branch of a union is appended to the tail of
/// the worklist, whether or not the union set its field's error.
///
/// With `collect_all`, each visited issue also records its own code and
/// message under the field's `types`, so a field reports every failure it
/// had. Identical messages are recorded again rather than deduplicated.
///
/// # Errors
///
/// Returns [`ResolveError::MalformedUnion`] for a union with no branches or
/// with an empty branch.
pub fn flatten_issues(issues: &Issues, collect_all: bool) -> Result<ErrorMap, ResolveError> {
    let mut queue: VecDeque<&Issue> = issues.iter().collect();
    let mut errors = ErrorMap::new();
    let mut visited = 0usize;

    while let Some(issue) = queue.pop_front() {
        visited += 1;
        let key = issue.path().to_field_key();
        trace!(key = %key, code = issue.code(), "visiting issue");

        if !errors.contains_key(&key) {
            errors.insert(key.clone(), normalize_issue(issue)?);
        }

        if let Some(branches) = issue.branches() {
            enqueue_branches(&mut queue, &key, branches)?;
        }

        if collect_all {
            if let Some(entry) = errors.get_mut(&key) {
                entry.append_type_message(issue.code(), issue.message());
            }
        }
    }

    debug!(
        raised = issues.len(),
        visited,
        fields = errors.len(),
        collect_all,
        "flattened issues"
    );
    Ok(errors)
}

fn enqueue_branches<'a>(
    queue: &mut VecDeque<&'a Issue>,
    key: &str,
    branches: &'a [Vec<Issue>],
) -> Result<(), ResolveError> {
    if branches.is_empty() {
        return Err(ResolveError::MalformedUnion {
            key: key.to_string(),
            reason: "union has no branches".to_string(),
        });
    }
    for (index, branch) in branches.iter().enumerate() {
        if branch.is_empty() {
            return Err(ResolveError::MalformedUnion {
                key: key.to_string(),
                reason: format!("branch {} has no issues", index),
            });
        }
        queue.extend(branch.iter());
    }
    Ok(())
}
