//! Check the repository's declared library type.
//!
//! This is the one atomic check with a network side effect: it fetches the
//! repository's `.repo-metadata.json` through the content reader
//! collaborator and inspects its `library_type` field. Any failure along
//! the way (file absent, fetch error, unparsable JSON, missing field)
//! degrades to a failing result so sibling checks keep running.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::check::{CheckResult, CheckRule};
use crate::pull_request::PullRequest;
use github_client::RepositoryContentReader;

#[cfg(test)]
#[path = "library_type_check_tests.rs"]
mod tests;

const METADATA_FILE: &str = ".repo-metadata.json";

/// Passes when the repository metadata declares a `library_type` that is a
/// member of the allowed set.
pub struct LibraryTypeCheck {
    content_reader: Arc<dyn RepositoryContentReader>,
    allowed_library_types: Vec<String>,
}

impl LibraryTypeCheck {
    pub fn new<I, S>(content_reader: Arc<dyn RepositoryContentReader>, allowed_library_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            content_reader,
            allowed_library_types: allowed_library_types.into_iter().map(Into::into).collect(),
        }
    }

    fn library_type_from(&self, content: &str) -> Option<String> {
        let metadata: serde_json::Value = serde_json::from_str(content).ok()?;
        metadata
            .get("library_type")
            .and_then(|value| value.as_str())
            .map(str::to_string)
    }
}

#[async_trait]
impl CheckRule for LibraryTypeCheck {
    async fn check_pr(&self, pull_request: &PullRequest) -> Vec<CheckResult> {
        let content = self
            .content_reader
            .get_file_content(
                &pull_request.repo_owner,
                &pull_request.repo_name,
                METADATA_FILE,
            )
            .await;

        let status = match content {
            Ok(content) => match self.library_type_from(&content) {
                Some(library_type) => self
                    .allowed_library_types
                    .iter()
                    .any(|allowed| allowed == &library_type),
                None => {
                    warn!(
                        repo_owner = %pull_request.repo_owner,
                        repo_name = %pull_request.repo_name,
                        "Repository metadata has no usable library_type field"
                    );
                    false
                }
            },
            Err(e) => {
                warn!(
                    repo_owner = %pull_request.repo_owner,
                    repo_name = %pull_request.repo_name,
                    error = %e,
                    "Failed to read repository metadata"
                );
                false
            }
        };

        vec![CheckResult::new("libraryTypeMatches", status)]
    }
}
