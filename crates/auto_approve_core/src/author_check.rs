//! Check that the pull request was opened by an allowed bot account.

use async_trait::async_trait;

use crate::check::{CheckResult, CheckRule};
use crate::pull_request::PullRequest;

#[cfg(test)]
#[path = "author_check_tests.rs"]
mod tests;

/// Passes when the pull request author exactly matches one of the allowed
/// logins. Every policy pins its author to the one bot expected to produce
/// that kind of change.
pub struct AuthorCheck {
    allowed_authors: Vec<String>,
}

impl AuthorCheck {
    pub fn new<I, S>(allowed_authors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed_authors: allowed_authors.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl CheckRule for AuthorCheck {
    async fn check_pr(&self, pull_request: &PullRequest) -> Vec<CheckResult> {
        let status = self
            .allowed_authors
            .iter()
            .any(|author| author == &pull_request.author);
        vec![CheckResult::new("authorshipMatches", status)]
    }
}
