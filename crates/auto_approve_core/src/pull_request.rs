//! Pull request snapshot types.
//!
//! The engine evaluates an immutable snapshot of the incoming pull request.
//! No check mutates these types; every evaluation gets its own snapshot, so
//! no locking discipline is needed across concurrent evaluations.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "pull_request_tests.rs"]
mod tests;

/// A snapshot of the pull request under evaluation.
///
/// Built by the webhook/dispatch layer from the GitHub payload and the
/// changed-file listing, then fed unchanged through every check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    /// Owner of the repository the pull request targets.
    pub repo_owner: String,

    /// Name of the repository the pull request targets.
    pub repo_name: String,

    /// The pull request number.
    pub pr_number: u64,

    /// Login of the account that opened the pull request.
    pub author: String,

    /// The pull request title.
    pub title: String,

    /// The pull request body. Empty when GitHub reports no body.
    pub body: String,

    /// The changed files, in the order GitHub lists them.
    pub changed_files: Vec<ChangedFile>,
}

/// One changed file in a pull request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangedFile {
    /// Path of the file within the repository.
    pub filename: String,

    /// The unified diff hunk for this file, as returned by the GitHub
    /// files listing.
    pub patch: String,
}
