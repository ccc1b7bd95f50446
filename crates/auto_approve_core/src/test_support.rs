//! Shared fixtures and collaborator mocks for the engine tests.

use async_trait::async_trait;
use github_client::models::{Account, PullRequestCommit};
use github_client::{Error as GitHubError, PullRequestHistoryReader, RepositoryContentReader};

use crate::clock::Clock;
use crate::pull_request::{ChangedFile, PullRequest};

/// A baseline renovate-style dependency bump with no changed files.
pub(crate) fn base_pr() -> PullRequest {
    PullRequest {
        repo_owner: "test-owner".to_string(),
        repo_name: "test-repo".to_string(),
        pr_number: 42,
        author: "renovate-bot".to_string(),
        title: "chore(deps): update dependency lodash to v4.17.21".to_string(),
        body: String::new(),
        changed_files: Vec::new(),
    }
}

pub(crate) fn changed_file(filename: &str, patch: &str) -> ChangedFile {
    ChangedFile {
        filename: filename.to_string(),
        patch: patch.to_string(),
    }
}

pub(crate) fn commit_by(login: &str) -> PullRequestCommit {
    PullRequestCommit {
        author: Some(Account {
            login: login.to_string(),
        }),
    }
}

/// What a mocked content fetch should produce.
pub(crate) enum ContentOutcome {
    Found(String),
    NotFound,
    Failure,
}

pub(crate) struct StaticContentReader(pub(crate) ContentOutcome);

impl StaticContentReader {
    pub(crate) fn with_library_type(library_type: &str) -> Self {
        Self(ContentOutcome::Found(format!(
            r#"{{"library_type": "{}"}}"#,
            library_type
        )))
    }
}

#[async_trait]
impl RepositoryContentReader for StaticContentReader {
    async fn get_file_content(
        &self,
        _owner: &str,
        _repo: &str,
        _path: &str,
    ) -> Result<String, GitHubError> {
        match &self.0 {
            ContentOutcome::Found(content) => Ok(content.clone()),
            ContentOutcome::NotFound => Err(GitHubError::NotFound),
            ContentOutcome::Failure => Err(GitHubError::InvalidResponse),
        }
    }
}

pub(crate) struct StaticHistoryReader {
    pub(crate) commits: Vec<PullRequestCommit>,
    pub(crate) open_pr_count: usize,
    pub(crate) fail: bool,
}

impl StaticHistoryReader {
    pub(crate) fn new(commits: Vec<PullRequestCommit>, open_pr_count: usize) -> Self {
        Self {
            commits,
            open_pr_count,
            fail: false,
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            commits: Vec::new(),
            open_pr_count: 0,
            fail: true,
        }
    }
}

#[async_trait]
impl PullRequestHistoryReader for StaticHistoryReader {
    async fn list_commits_on_pr(
        &self,
        _owner: &str,
        _repo: &str,
        _pr_number: u64,
    ) -> Result<Vec<PullRequestCommit>, GitHubError> {
        if self.fail {
            return Err(GitHubError::InvalidResponse);
        }
        Ok(self.commits.clone())
    }

    async fn count_open_prs_from_author(
        &self,
        _owner: &str,
        _repo: &str,
        _author: &str,
    ) -> Result<usize, GitHubError> {
        if self.fail {
            return Err(GitHubError::InvalidResponse);
        }
        Ok(self.open_pr_count)
    }
}

pub(crate) struct FixedClock(pub(crate) bool);

impl Clock for FixedClock {
    fn is_today_a_weekday(&self) -> bool {
        self.0
    }
}
