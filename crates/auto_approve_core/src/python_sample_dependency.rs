//! Auto-approve policy for renovate Python sample dependency bumps.

use async_trait::async_trait;
use regex::Regex;

use crate::allowed_files_check::AllowedFilesCheck;
use crate::author_check::AuthorCheck;
use crate::check::{CheckResult, CheckRule};
use crate::dependency_checks::check_dependency_files;
use crate::errors::Error;
use crate::file_rule::FileRule;
use crate::language_rule::LanguageRule;
use crate::pull_request::PullRequest;
use crate::title_check::TitleCheck;

#[cfg(test)]
#[path = "python_sample_dependency_tests.rs"]
mod tests;

const DEPENDENCY_TITLE: &str = r"^(fix|chore)\(deps\): update dependency (@?\S*) to v(\S*)$";

const OLD_VERSION: &str =
    r"(?m)^-(?P<dep>@?[^=\s]+)==(?P<major>\d+)\.(?P<minor>\d+)\.(?P<patch>\d+)";
const NEW_VERSION: &str =
    r"(?m)^\+(?P<dep>@?[^=\s]+)==(?P<major>\d+)\.(?P<minor>\d+)\.(?P<patch>\d+)";

/// Approves a renovate pull request that bumps a pinned dependency in any
/// sample `requirements.txt`, as long as the dependency belongs to the
/// google family and the manifest does not sit under an orchestration path
/// (airflow and composer manifests pin against managed runtimes and must be
/// reviewed by a human).
pub struct PythonSampleDependency {
    checks: Vec<Box<dyn CheckRule>>,
    file_rules: Vec<FileRule>,
}

impl PythonSampleDependency {
    pub fn new() -> Result<Self, Error> {
        let checks: Vec<Box<dyn CheckRule>> = vec![
            Box::new(TitleCheck::new(Regex::new(DEPENDENCY_TITLE)?)),
            Box::new(AuthorCheck::new(["renovate-bot"])),
            Box::new(AllowedFilesCheck::new([Regex::new(r"requirements\.txt$")?])),
        ];

        let file_rules = vec![FileRule::new(
            Regex::new(r"requirements\.txt$")?,
            Regex::new(OLD_VERSION)?,
            Regex::new(NEW_VERSION)?,
        )
        .with_dependency_title(Regex::new(DEPENDENCY_TITLE)?)
        .with_excluded_files(vec![Regex::new(r"airflow")?, Regex::new(r"composer")?])
        .with_included_dependencies(vec![Regex::new(r"google")?])];

        Ok(Self { checks, file_rules })
    }
}

#[async_trait]
impl LanguageRule for PythonSampleDependency {
    fn name(&self) -> &'static str {
        "pythonSampleDependency"
    }

    fn checks(&self) -> &[Box<dyn CheckRule>] {
        &self.checks
    }

    async fn additional_checks(&self, pull_request: &PullRequest) -> Vec<CheckResult> {
        check_dependency_files(pull_request, &self.file_rules, None)
    }
}
