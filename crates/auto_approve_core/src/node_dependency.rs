//! Auto-approve policy for renovate Node dependency bumps.

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
#[path = "node_dependency_tests.rs"]
mod tests;

const DEPENDENCY_TITLE: &str = r"^(fix|chore)\(deps\): update dependency (@?\S*) to v(\S*)$";

// Matches removed pin lines like:  -    "chalk": "^4.1.1",
const OLD_VERSION: &str =
    r#"(?m)^-\s*"(?P<dep>@?\S*)":\s*"[\^~]?(?P<major>\d+)\.(?P<minor>\d+)\.(?P<patch>\d+)",?"#;

// Matches added pin lines like:   +    "chalk": "^4.1.2",
const NEW_VERSION: &str =
    r#"(?m)^\+\s*"(?P<dep>@?\S*)":\s*"[\^~]?(?P<major>\d+)\.(?P<minor>\d+)\.(?P<patch>\d+)",?"#;

/// Approves a renovate pull request that bumps exactly one dependency pin
/// in a `package.json`, provided the title, the diff, and the version
/// ordering all agree.
pub struct NodeDependency {
    checks: Vec<Box<dyn CheckRule>>,
    file_rules: Vec<FileRule>,
}

impl NodeDependency {
    pub fn new() -> Result<Self, Error> {
        let checks: Vec<Box<dyn CheckRule>> = vec![
            Box::new(AuthorCheck::new(["renovate-bot"])),
            Box::new(TitleCheck::new(Regex::new(DEPENDENCY_TITLE)?)),
            Box::new(AllowedFilesCheck::new([Regex::new(r"package\.json$")?])),
        ];

        let file_rules = vec![
            FileRule::new(
                Regex::new(r"^samples/package\.json$")?,
                Regex::new(OLD_VERSION)?,
                Regex::new(NEW_VERSION)?,
            )
            .with_dependency_title(Regex::new(DEPENDENCY_TITLE)?),
            FileRule::new(
                Regex::new(r"^package\.json$")?,
                Regex::new(OLD_VERSION)?,
                Regex::new(NEW_VERSION)?,
            )
            .with_dependency_title(Regex::new(DEPENDENCY_TITLE)?),
        ];

        Ok(Self { checks, file_rules })
    }
}

#[async_trait]
impl LanguageRule for NodeDependency {
    fn name(&self) -> &'static str {
        "nodeDependency"
    }

    fn checks(&self) -> &[Box<dyn CheckRule>] {
        &self.checks
    }

    async fn additional_checks(&self, pull_request: &PullRequest) -> Vec<CheckResult> {
        check_dependency_files(pull_request, &self.file_rules, None)
    }
}
