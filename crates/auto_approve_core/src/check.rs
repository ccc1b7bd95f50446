//! The check capability and its result record.
//!
//! Every predicate the engine runs, whether a cheap local check or the
//! network-bound library-type lookup, implements [`CheckRule`] and reports
//! through [`CheckResult`] values. Results are accumulated append-only and
//! never mutated, which is what makes the final audit trail trustworthy.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::pull_request::PullRequest;

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;

/// The outcome of one named check against a pull request.
///
/// `scope` carries the filename the result pertains to; `None` means the
/// result is PR-wide. The external decision layer logs each result by name,
/// so names are stable identifiers, not display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Stable identifier of the check that produced this result.
    pub name: String,

    /// Whether the check passed.
    pub status: bool,

    /// The filename this result pertains to, if file-scoped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

impl CheckResult {
    /// Creates a PR-wide result.
    pub fn new(name: impl Into<String>, status: bool) -> Self {
        Self {
            name: name.into(),
            status,
            scope: None,
        }
    }

    /// Creates a result scoped to a single changed file.
    pub fn scoped(name: impl Into<String>, status: bool, scope: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status,
            scope: Some(scope.into()),
        }
    }
}

/// An independent predicate over pull request metadata.
///
/// Implementations are stateless after construction and must not mutate the
/// pull request snapshot. Each invocation returns the full list of results
/// it produced; for the atomic checks this is always exactly one entry.
///
/// The trait is async because one check (the library-type lookup) suspends
/// on I/O. An I/O failure must degrade to a failing result, never abort the
/// evaluation of sibling checks.
#[async_trait]
pub trait CheckRule: Send + Sync {
    /// Evaluates this check against the pull request snapshot.
    async fn check_pr(&self, pull_request: &PullRequest) -> Vec<CheckResult>;
}
