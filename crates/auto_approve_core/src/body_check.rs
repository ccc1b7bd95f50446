//! Check the pull request body against a pattern.

use async_trait::async_trait;
use regex::Regex;

use crate::check::{CheckResult, CheckRule};
use crate::pull_request::PullRequest;

#[cfg(test)]
#[path = "body_check_tests.rs"]
mod tests;

/// Passes when the body matches the configured pattern.
///
/// The generated-change policies use this to require a provenance marker in
/// the body, so a hand-written pull request cannot masquerade as generated
/// output.
pub struct BodyCheck {
    pattern: Regex,
}

impl BodyCheck {
    pub fn new(pattern: Regex) -> Self {
        Self { pattern }
    }
}

#[async_trait]
impl CheckRule for BodyCheck {
    async fn check_pr(&self, pull_request: &PullRequest) -> Vec<CheckResult> {
        let status = self.pattern.is_match(&pull_request.body);
        vec![CheckResult::new("bodyMatches", status)]
    }
}
