//! Auto-approve policy for release-please Node release pull requests.

use std::sync::Arc;

use async_trait::async_trait;
use regex::Regex;

use crate::allowed_files_check::AllowedFilesCheck;
use crate::author_check::AuthorCheck;
use crate::check::{CheckResult, CheckRule};
use crate::clock::Clock;
use crate::dependency_checks::check_dependency_files;
use crate::errors::Error;
use crate::file_rule::FileRule;
use crate::language_rule::LanguageRule;
use crate::max_files_check::MaxFilesCheck;
use crate::pull_request::PullRequest;
use crate::title_check::TitleCheck;

#[cfg(test)]
#[path = "node_release_tests.rs"]
mod tests;

// Matches the exact-version line release-please rewrites:  -  "version": "2.3.0",
const OLD_VERSION: &str =
    r#"(?m)^-\s*"(?P<dep>@?\S*)":\s*"(?P<major>\d+)\.(?P<minor>\d+)\.(?P<patch>\d+)",?"#;
const NEW_VERSION: &str =
    r#"(?m)^\+\s*"(?P<dep>@?\S*)":\s*"(?P<major>\d+)\.(?P<minor>\d+)\.(?P<patch>\d+)",?"#;

/// Approves a release-please pull request that rolls the package version
/// forward, but only on weekdays so a broken release does not land into an
/// unstaffed weekend.
pub struct NodeRelease {
    checks: Vec<Box<dyn CheckRule>>,
    file_rules: Vec<FileRule>,
    clock: Arc<dyn Clock>,
}

impl NodeRelease {
    pub fn new(clock: Arc<dyn Clock>) -> Result<Self, Error> {
        let checks: Vec<Box<dyn CheckRule>> = vec![
            Box::new(AuthorCheck::new(["release-please"])),
            Box::new(TitleCheck::new(Regex::new(r"^chore: release")?)),
            Box::new(MaxFilesCheck::new(2)),
            Box::new(AllowedFilesCheck::new([
                Regex::new(r"^package\.json$")?,
                Regex::new(r"^CHANGELOG\.md$")?,
            ])),
        ];

        // Release titles do not name a dependency, so the file rule carries
        // no title pattern: only the bump validation and the single-change
        // guard run per file.
        let file_rules = vec![FileRule::new(
            Regex::new(r"^package\.json$")?,
            Regex::new(OLD_VERSION)?,
            Regex::new(NEW_VERSION)?,
        )];

        Ok(Self {
            checks,
            file_rules,
            clock,
        })
    }
}

#[async_trait]
impl LanguageRule for NodeRelease {
    fn name(&self) -> &'static str {
        "nodeRelease"
    }

    fn checks(&self) -> &[Box<dyn CheckRule>] {
        &self.checks
    }

    async fn additional_checks(&self, pull_request: &PullRequest) -> Vec<CheckResult> {
        let mut results = vec![CheckResult::new(
            "isMergedOnWeekDay",
            self.clock.is_today_a_weekday(),
        )];
        results.extend(check_dependency_files(pull_request, &self.file_rules, None));
        results
    }
}
