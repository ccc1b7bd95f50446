//! Response models for the GitHub endpoints used by the auto-approve engine.
//!
//! These are deliberately narrow projections of the GitHub REST payloads:
//! only the fields the rule engine consumes are deserialized.

use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::errors::Error;

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;

/// The GitHub account that authored a commit or opened a pull request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// The account login, e.g. `renovate-bot`.
    pub login: String,
}

/// A single commit on a pull request, as returned by
/// `GET /repos/{owner}/{repo}/pulls/{pr}/commits`.
///
/// The `author` field is `None` when GitHub cannot associate the commit
/// with an account (for example commits with an unverified email address).
/// Consumers must treat an unattributed commit as not belonging to the
/// expected bot author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestCommit {
    /// The GitHub account the commit is attributed to, if any.
    pub author: Option<Account>,
}

/// A pull request summary, as returned by `GET /repos/{owner}/{repo}/pulls`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestSummary {
    /// The pull request number.
    pub number: u64,

    /// The account that opened the pull request, if any.
    pub user: Option<Account>,
}

/// A file returned by the GitHub Contents API
/// (`GET /repos/{owner}/{repo}/contents/{path}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryContent {
    /// Path of the file within the repository.
    pub path: String,

    /// File body, base64 encoded with embedded newlines (GitHub wraps the
    /// encoded payload at 60 characters).
    pub content: Option<String>,

    /// The encoding GitHub used for `content`, normally `"base64"`.
    pub encoding: Option<String>,
}

impl RepositoryContent {
    /// Decodes the base64 `content` payload into UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidResponse` if the content is missing, uses an
    /// encoding other than base64, or does not decode into valid UTF-8.
    pub fn decoded_content(&self) -> Result<String, Error> {
        if let Some(encoding) = &self.encoding {
            if encoding != "base64" {
                return Err(Error::InvalidResponse);
            }
        }

        let encoded: String = self
            .content
            .as_deref()
            .ok_or(Error::InvalidResponse)?
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();

        let bytes = base64::engine::general_purpose::STANDARD
            .decode(encoded)
            .map_err(|_| Error::InvalidResponse)?;

        String::from_utf8(bytes).map_err(|_| Error::InvalidResponse)
    }
}
