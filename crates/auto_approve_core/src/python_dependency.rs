//! Auto-approve policy for renovate Python snippet dependency bumps.

use async_trait::async_trait;
use regex::Regex;

use crate::allowed_files_check::AllowedFilesCheck;
use crate::author_check::AuthorCheck;
use crate::check::{CheckResult, CheckRule};
use crate::dependency_checks::check_dependency_files;
use crate::errors::Error;
use crate::file_rule::FileRule;
use crate::language_rule::LanguageRule;
use crate::max_files_check::MaxFilesCheck;
use crate::pull_request::PullRequest;
use crate::title_check::TitleCheck;

#[cfg(test)]
#[path = "python_dependency_tests.rs"]
mod tests;

const DEPENDENCY_TITLE: &str = r"^(fix|chore)\(deps\): update dependency (@?\S*) to v(\S*)$";

// Matches removed pin lines like:  -google-cloud-storage==1.39.0
const OLD_VERSION: &str =
    r"(?m)^-(?P<dep>@?[^=\s]+)==(?P<major>\d+)\.(?P<minor>\d+)\.(?P<patch>\d+)";

// Matches added pin lines like:   +google-cloud-storage==1.40.0
const NEW_VERSION: &str =
    r"(?m)^\+(?P<dep>@?[^=\s]+)==(?P<major>\d+)\.(?P<minor>\d+)\.(?P<patch>\d+)";

/// Approves a renovate pull request that bumps exactly one pinned dependency
/// in the snippets `requirements.txt`.
pub struct PythonDependency {
    checks: Vec<Box<dyn CheckRule>>,
    file_rules: Vec<FileRule>,
}

impl PythonDependency {
    pub fn new() -> Result<Self, Error> {
        let checks: Vec<Box<dyn CheckRule>> = vec![
            Box::new(TitleCheck::new(Regex::new(DEPENDENCY_TITLE)?)),
            Box::new(AuthorCheck::new(["renovate-bot"])),
            Box::new(MaxFilesCheck::new(3)),
            Box::new(AllowedFilesCheck::new([Regex::new(r"requirements\.txt$")?])),
        ];

        let file_rules = vec![FileRule::new(
            Regex::new(r"^samples/snippets/requirements\.txt$")?,
            Regex::new(OLD_VERSION)?,
            Regex::new(NEW_VERSION)?,
        )
        .with_dependency_title(Regex::new(DEPENDENCY_TITLE)?)];

        Ok(Self { checks, file_rules })
    }
}

#[async_trait]
impl LanguageRule for PythonDependency {
    fn name(&self) -> &'static str {
        "pythonDependency"
    }

    fn checks(&self) -> &[Box<dyn CheckRule>] {
        &self.checks
    }

    async fn additional_checks(&self, pull_request: &PullRequest) -> Vec<CheckResult> {
        check_dependency_files(pull_request, &self.file_rules, None)
    }
}
