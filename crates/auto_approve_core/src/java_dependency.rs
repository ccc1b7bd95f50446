//! Auto-approve policy for renovate Java dependency bumps.

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
#[path = "java_dependency_tests.rs"]
mod tests;

const DEPENDENCY_TITLE: &str = r"^(fix|chore)\(deps\): update dependency (@?\S*) to v(\S*)$";

// Matches the removed half of a Maven version bump, keeping the groupId and
// artifactId context lines so the name is known:
//       <groupId>com.google.apis</groupId>
//       <artifactId>google-api-services-policytroubleshooter</artifactId>
// -     <version>v1-rev20210319-1.31.5</version>
const POM_OLD_VERSION: &str = concat!(
    r"<groupId>(?P<dep_prefix>[^<]*)</groupId>\s*",
    r"<artifactId>(?P<dep>[^<]*)</artifactId>\s*",
    r"-\s*<version>(?:",
    r"v\d+-rev(?P<rev>\d+)-(?P<rev_major>\d+)\.(?P<rev_minor>\d+)\.(?P<rev_patch>\d+)",
    r"|(?P<major>\d+)\.(?P<minor>\d+)\.(?P<patch>\d+)",
    r")</version>",
);

// Matches the same context followed by the removed and added version lines;
// only the added version is captured.
const POM_NEW_VERSION: &str = concat!(
    r"<groupId>(?P<dep_prefix>[^<]*)</groupId>\s*",
    r"<artifactId>(?P<dep>[^<]*)</artifactId>\s*",
    r"-\s*<version>(?:v\d+-rev\d+-\d+\.\d+\.\d+|\d+\.\d+\.\d+)</version>\s*",
    r"\+\s*<version>(?:",
    r"v\d+-rev(?P<rev>\d+)-(?P<rev_major>\d+)\.(?P<rev_minor>\d+)\.(?P<rev_patch>\d+)",
    r"|(?P<major>\d+)\.(?P<minor>\d+)\.(?P<patch>\d+)",
    r")</version>",
);

// Matches the removed half of a Gradle bump, either a quoted coordinate
// (classpath/invoker lines) or the grpcVersion definition:
// -    classpath 'com.google.cloud.tools:endpoints-framework-gradle-plugin:1.0.3'
// -def grpcVersion = '1.40.1'
const GRADLE_OLD_VERSION: &str = concat!(
    r"(?m)^-(?:",
    r"\s*(?:classpath|invoker)\s+'(?P<dep>.*):(?P<major>\d+)\.(?P<minor>\d+)\.(?P<patch>\d+)",
    r"|def\s+(?P<dep_alt>grpcVersion)\s*=\s*'(?P<alt_major>\d+)\.(?P<alt_minor>\d+)\.(?P<alt_patch>\d+)",
    r")",
);

const GRADLE_NEW_VERSION: &str = concat!(
    r"(?m)^\+(?:",
    r"\s*(?:classpath|invoker)\s+'(?P<dep>.*):(?P<major>\d+)\.(?P<minor>\d+)\.(?P<patch>\d+)",
    r"|def\s+(?P<dep_alt>grpcVersion)\s*=\s*'(?P<alt_major>\d+)\.(?P<alt_minor>\d+)\.(?P<alt_patch>\d+)",
    r")",
);

/// Approves a renovate pull request that bumps one Maven or Gradle
/// dependency. A manifest diff the patterns cannot parse is a rejection,
/// not a skip: Java manifests carry the version away from the name, so an
/// unparsable diff means the change cannot be vouched for.
pub struct JavaDependency {
    checks: Vec<Box<dyn CheckRule>>,
    file_rules: Vec<FileRule>,
}

impl JavaDependency {
    pub fn new() -> Result<Self, Error> {
        let checks: Vec<Box<dyn CheckRule>> = vec![
            Box::new(TitleCheck::new(Regex::new(DEPENDENCY_TITLE)?)),
            Box::new(AuthorCheck::new(["renovate-bot"])),
            Box::new(MaxFilesCheck::new(50)),
            Box::new(AllowedFilesCheck::new([
                Regex::new(r"pom\.xml$")?,
                Regex::new(r"build\.gradle$")?,
            ])),
        ];

        let file_rules = vec![
            FileRule::new(
                Regex::new(r"pom\.xml$")?,
                Regex::new(POM_OLD_VERSION)?,
                Regex::new(POM_NEW_VERSION)?,
            )
            .with_dependency_title(Regex::new(DEPENDENCY_TITLE)?),
            FileRule::new(
                Regex::new(r"build\.gradle$")?,
                Regex::new(GRADLE_OLD_VERSION)?,
                Regex::new(GRADLE_NEW_VERSION)?,
            )
            .with_dependency_title(Regex::new(DEPENDENCY_TITLE)?),
        ];

        Ok(Self { checks, file_rules })
    }
}

#[async_trait]
impl LanguageRule for JavaDependency {
    fn name(&self) -> &'static str {
        "javaDependency"
    }

    fn checks(&self) -> &[Box<dyn CheckRule>] {
        &self.checks
    }

    async fn additional_checks(&self, pull_request: &PullRequest) -> Vec<CheckResult> {
        check_dependency_files(pull_request, &self.file_rules, Some("javaDependencyCheck"))
    }
}
