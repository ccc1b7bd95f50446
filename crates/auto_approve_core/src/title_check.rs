//! Check the pull request title against a pattern.

use async_trait::async_trait;
use regex::Regex;

use crate::check::{CheckResult, CheckRule};
use crate::pull_request::PullRequest;

#[cfg(test)]
#[path = "title_check_tests.rs"]
mod tests;

/// Passes when the title matches the configured pattern.
///
/// With [`TitleCheck::inverted`] the result is negated, which is how the
/// generated-change policies reject titles carrying a breaking-change
/// marker: the check passes only when the pattern does NOT match.
pub struct TitleCheck {
    pattern: Regex,
    inverse: bool,
}

impl TitleCheck {
    pub fn new(pattern: Regex) -> Self {
        Self {
            pattern,
            inverse: false,
        }
    }

    pub fn inverted(pattern: Regex) -> Self {
        Self {
            pattern,
            inverse: true,
        }
    }
}

#[async_trait]
impl CheckRule for TitleCheck {
    async fn check_pr(&self, pull_request: &PullRequest) -> Vec<CheckResult> {
        let mut matches = self.pattern.is_match(&pull_request.title);
        if self.inverse {
            matches = !matches;
        }
        vec![CheckResult::new("titleMatches", matches)]
    }
}
