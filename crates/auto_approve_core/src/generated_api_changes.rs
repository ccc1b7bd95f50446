//! Auto-approve policy for generator-produced API surface changes.

use std::sync::Arc;

use async_trait::async_trait;
use regex::Regex;
use tracing::warn;

use crate::author_check::AuthorCheck;
use crate::body_check::BodyCheck;
use crate::check::{CheckResult, CheckRule};
use crate::errors::Error;
use crate::language_rule::LanguageRule;
use crate::library_type_check::LibraryTypeCheck;
use crate::pull_request::PullRequest;
use crate::title_check::TitleCheck;
use github_client::{PullRequestHistoryReader, RepositoryContentReader};

#[cfg(test)]
#[path = "generated_api_changes_tests.rs"]
mod tests;

const ALLOWED_AUTHOR: &str = "api-generator[bot]";

/// Approves a pull request pushed by the API generator bot, provided the
/// change is not breaking, carries a provenance marker, lands in a
/// fully-generated library, is the bot's only open pull request in the
/// repository, and has no commits from anyone else.
pub struct GeneratedApiChanges {
    checks: Vec<Box<dyn CheckRule>>,
    history_reader: Arc<dyn PullRequestHistoryReader>,
}

impl GeneratedApiChanges {
    pub fn new(
        content_reader: Arc<dyn RepositoryContentReader>,
        history_reader: Arc<dyn PullRequestHistoryReader>,
    ) -> Result<Self, Error> {
        let checks: Vec<Box<dyn CheckRule>> = vec![
            Box::new(TitleCheck::inverted(Regex::new(r"(breaking|BREAKING|!)")?)),
            Box::new(AuthorCheck::new([ALLOWED_AUTHOR])),
            Box::new(BodyCheck::new(Regex::new(r"Provenance-RevId")?)),
            Box::new(LibraryTypeCheck::new(content_reader, ["GENERATED_AUTO"])),
        ];

        Ok(Self {
            checks,
            history_reader,
        })
    }
}

#[async_trait]
impl LanguageRule for GeneratedApiChanges {
    fn name(&self) -> &'static str {
        "generatedApiChanges"
    }

    fn checks(&self) -> &[Box<dyn CheckRule>] {
        &self.checks
    }

    async fn additional_checks(&self, pull_request: &PullRequest) -> Vec<CheckResult> {
        let mut results = Vec::new();

        // The listing counts this pull request too, so "no other open PRs"
        // means a count of at most one.
        let no_other_open_prs = match self
            .history_reader
            .count_open_prs_from_author(
                &pull_request.repo_owner,
                &pull_request.repo_name,
                &pull_request.author,
            )
            .await
        {
            Ok(count) => count <= 1,
            Err(e) => {
                warn!(
                    repo_owner = %pull_request.repo_owner,
                    repo_name = %pull_request.repo_name,
                    error = %e,
                    "Failed to count open pull requests from author"
                );
                false
            }
        };
        results.push(CheckResult::new("areThereOtherOpenPRs", no_other_open_prs));

        // A commit with no resolvable author cannot be attributed to the
        // bot, so it counts as foreign.
        let only_bot_commits = match self
            .history_reader
            .list_commits_on_pr(
                &pull_request.repo_owner,
                &pull_request.repo_name,
                pull_request.pr_number,
            )
            .await
        {
            Ok(commits) => commits.iter().all(|commit| {
                commit
                    .author
                    .as_ref()
                    .is_some_and(|author| author.login == ALLOWED_AUTHOR)
            }),
            Err(e) => {
                warn!(
                    repo_owner = %pull_request.repo_owner,
                    repo_name = %pull_request.repo_name,
                    pr_number = pull_request.pr_number,
                    error = %e,
                    "Failed to list commits on pull request"
                );
                false
            }
        };
        results.push(CheckResult::new(
            "areThereOtherCommitAuthors",
            only_bot_commits,
        ));

        results
    }
}
