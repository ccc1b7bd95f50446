//! Check that every changed file is on the allow-list.

use async_trait::async_trait;
use regex::Regex;

use crate::check::{CheckResult, CheckRule};
use crate::pull_request::PullRequest;

#[cfg(test)]
#[path = "allowed_files_check_tests.rs"]
mod tests;

/// Passes when every changed file's name matches at least one of the
/// configured patterns. Evaluation short-circuits false on the first file
/// that matches none of them.
pub struct AllowedFilesCheck {
    patterns: Vec<Regex>,
}

impl AllowedFilesCheck {
    pub fn new<I>(patterns: I) -> Self
    where
        I: IntoIterator<Item = Regex>,
    {
        Self {
            patterns: patterns.into_iter().collect(),
        }
    }
}

#[async_trait]
impl CheckRule for AllowedFilesCheck {
    async fn check_pr(&self, pull_request: &PullRequest) -> Vec<CheckResult> {
        let status = pull_request.changed_files.iter().all(|file| {
            self.patterns
                .iter()
                .any(|pattern| pattern.is_match(&file.filename))
        });
        vec![CheckResult::new("allowedFileMatches", status)]
    }
}
