//! Check the changed-file count against a ceiling.

use async_trait::async_trait;

use crate::check::{CheckResult, CheckRule};
use crate::pull_request::PullRequest;

#[cfg(test)]
#[path = "max_files_check_tests.rs"]
mod tests;

/// Passes when the pull request touches at most `max_files` files. Bundled
/// changes above a policy's ceiling need a human eye.
pub struct MaxFilesCheck {
    max_files: usize,
}

impl MaxFilesCheck {
    pub fn new(max_files: usize) -> Self {
        Self { max_files }
    }
}

#[async_trait]
impl CheckRule for MaxFilesCheck {
    async fn check_pr(&self, pull_request: &PullRequest) -> Vec<CheckResult> {
        let status = pull_request.changed_files.len() <= self.max_files;
        vec![CheckResult::new("maxFilesMatches", status)]
    }
}
