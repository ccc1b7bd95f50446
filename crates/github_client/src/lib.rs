//! Crate for reading pull request and repository data from the GitHub REST API.
//!
//! This crate provides the narrow GitHub collaborators consumed by the
//! auto-approve rule engine: a repository content reader (used to fetch
//! `.repo-metadata.json` for the library-type check) and a pull request
//! history reader (used by the generated-API policy to detect interleaved
//! commits and competing open pull requests). Authentication is supported
//! either as a GitHub App (JWT) or with a personal access token.

use async_trait::async_trait;
use jsonwebtoken::EncodingKey;
use octocrab::{Octocrab, Result as OctocrabResult};
use tracing::{debug, error, info, instrument};

pub mod errors;
pub use errors::Error;

pub mod models;

// Reference the tests module in the separate file
#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// Reads file content from a repository.
///
/// This is the boundary the auto-approve engine uses for its one
/// network-bound atomic check (the library-type lookup). Implementations
/// must signal a missing file with [`Error::NotFound`] instead of panicking
/// or collapsing it into a generic failure, because the engine distinguishes
/// "repository carries no metadata" from "GitHub request failed" in its
/// audit log.
#[async_trait]
pub trait RepositoryContentReader: Send + Sync {
    /// Fetches a file from the default branch of `owner/repo` and returns
    /// its decoded text content.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if the file does not exist and
    /// `Error::InvalidResponse` if the payload cannot be decoded.
    async fn get_file_content(&self, owner: &str, repo: &str, path: &str)
        -> Result<String, Error>;
}

/// Reads pull request history from a repository.
///
/// Consumed by the generated-API-changes policy to veto approval when other
/// authors or other bot pull requests are interleaved with the change under
/// evaluation.
#[async_trait]
pub trait PullRequestHistoryReader: Send + Sync {
    /// Lists the commits on a pull request, in commit order.
    async fn list_commits_on_pr(
        &self,
        owner: &str,
        repo: &str,
        pr_number: u64,
    ) -> Result<Vec<models::PullRequestCommit>, Error>;

    /// Counts the open pull requests in `owner/repo` opened by `author`.
    ///
    /// The pull request currently under evaluation is itself open, so a
    /// repository with no competing pull requests reports a count of one.
    async fn count_open_prs_from_author(
        &self,
        owner: &str,
        repo: &str,
        author: &str,
    ) -> Result<usize, Error>;
}

/// A client for reading pull request and repository data from GitHub.
#[derive(Debug)]
pub struct GitHubClient {
    client: Octocrab,
}

impl GitHubClient {
    /// Creates a new `GitHubClient` from an already authenticated `Octocrab`
    /// instance (see [`create_app_client`] and [`create_token_client`]).
    pub fn new(client: Octocrab) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RepositoryContentReader for GitHubClient {
    /// Fetches a file through the GitHub Contents API and decodes the
    /// base64 payload into text.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` when GitHub answers with a 404, and
    /// `Error::InvalidResponse` for transport failures or payloads that do
    /// not decode into UTF-8 text.
    #[instrument(skip(self), fields(owner = %owner, repo = %repo, path = %path))]
    async fn get_file_content(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
    ) -> Result<String, Error> {
        let route = format!("/repos/{}/{}/contents/{}", owner, repo, path);
        let result: OctocrabResult<models::RepositoryContent> =
            self.client.get(route, None::<&()>).await;

        match result {
            Ok(content) => {
                debug!(path = path, "Retrieved repository content");
                content.decoded_content()
            }
            Err(octocrab::Error::GitHub { source, .. })
                if source.status_code == http::StatusCode::NOT_FOUND =>
            {
                debug!(path = path, "Repository content not found");
                Err(Error::NotFound)
            }
            Err(e) => {
                log_octocrab_error("Failed to fetch repository content", e);
                Err(Error::InvalidResponse)
            }
        }
    }
}

#[async_trait]
impl PullRequestHistoryReader for GitHubClient {
    /// Lists the commits on a pull request using the REST API directly.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if the pull request does not exist, or
    /// `Error::InvalidResponse` if the API call fails.
    #[instrument(skip(self), fields(owner = %owner, repo = %repo, pr_number = pr_number))]
    async fn list_commits_on_pr(
        &self,
        owner: &str,
        repo: &str,
        pr_number: u64,
    ) -> Result<Vec<models::PullRequestCommit>, Error> {
        let route = format!("/repos/{}/{}/pulls/{}/commits", owner, repo, pr_number);
        let result: OctocrabResult<Vec<models::PullRequestCommit>> =
            self.client.get(route, None::<&()>).await;

        match result {
            Ok(commits) => {
                info!(
                    pr_number = pr_number,
                    commit_count = commits.len(),
                    "Retrieved commits for pull request"
                );
                Ok(commits)
            }
            Err(octocrab::Error::GitHub { source, .. })
                if source.status_code == http::StatusCode::NOT_FOUND =>
            {
                Err(Error::NotFound)
            }
            Err(e) => {
                log_octocrab_error("Failed to list commits on pull request", e);
                Err(Error::InvalidResponse)
            }
        }
    }

    /// Counts the open pull requests in a repository opened by the given
    /// author, using the first page (100 entries) of the pulls listing.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidResponse` if the API call fails.
    #[instrument(skip(self), fields(owner = %owner, repo = %repo, author = %author))]
    async fn count_open_prs_from_author(
        &self,
        owner: &str,
        repo: &str,
        author: &str,
    ) -> Result<usize, Error> {
        let route = format!("/repos/{}/{}/pulls?state=open&per_page=100", owner, repo);
        let result: OctocrabResult<Vec<models::PullRequestSummary>> =
            self.client.get(route, None::<&()>).await;

        match result {
            Ok(pull_requests) => {
                let count = pull_requests
                    .iter()
                    .filter(|pr| pr.user.as_ref().is_some_and(|user| user.login == author))
                    .count();

                info!(
                    author = author,
                    open_count = count,
                    "Counted open pull requests from author"
                );
                Ok(count)
            }
            Err(e) => {
                log_octocrab_error("Failed to list open pull requests", e);
                Err(Error::InvalidResponse)
            }
        }
    }
}

/// Creates an `Octocrab` client authenticated as a GitHub App using a JWT token.
///
/// This function generates a JSON Web Token (JWT) for the specified GitHub
/// App ID and private key, and uses it to create an authenticated `Octocrab`
/// client.
///
/// # Arguments
///
/// * `app_id` - The ID of the GitHub App.
/// * `private_key` - The private key associated with the GitHub App, in PEM format.
///
/// # Errors
///
/// Returns an `Error::AuthError` if the private key cannot be parsed or the
/// client cannot be built.
#[instrument(skip(private_key))]
pub async fn create_app_client(app_id: u64, private_key: &str) -> Result<Octocrab, Error> {
    let key = EncodingKey::from_rsa_pem(private_key.as_bytes()).map_err(|e| {
        error!(
            app_id = app_id,
            error = %e,
            "Failed to parse RSA private key - key format is invalid"
        );
        Error::AuthError(format!(
            "Failed to translate the private key. Error was: {}",
            e
        ))
    })?;

    let octocrab = Octocrab::builder()
        .app(app_id.into(), key)
        .build()
        .map_err(|e| {
            error!(
                app_id = app_id,
                error = ?e,
                "Failed to build Octocrab client with GitHub App credentials"
            );
            Error::AuthError("Failed to build a client for the app install.".to_string())
        })?;

    info!(app_id = app_id, "Successfully created GitHub App client");

    Ok(octocrab)
}

/// Creates an `Octocrab` client authenticated with a personal access token.
///
/// # Errors
///
/// Returns an `Error::ApiError` if the client cannot be built.
#[instrument(skip(token))]
pub fn create_token_client(token: &str) -> Result<Octocrab, Error> {
    Octocrab::builder()
        .personal_token(token.to_string())
        .build()
        .map_err(|_| Error::ApiError())
}

fn log_octocrab_error(message: &str, e: octocrab::Error) {
    match e {
        octocrab::Error::GitHub { source, backtrace } => {
            let err = source;
            error!(
                error_message = err.message,
                backtrace = backtrace.to_string(),
                "{}. Received an error from GitHub",
                message
            )
        }
        octocrab::Error::UriParse { source, backtrace } => error!(
            error_message = source.to_string(),
            backtrace = backtrace.to_string(),
            "{}. Failed to parse URI.",
            message
        ),
        octocrab::Error::Uri { source, backtrace } => error!(
            error_message = source.to_string(),
            backtrace = backtrace.to_string(),
            "{}, Failed to parse URI.",
            message
        ),
        octocrab::Error::InvalidHeaderValue { source, backtrace } => error!(
            error_message = source.to_string(),
            backtrace = backtrace.to_string(),
            "{}. One of the header values was invalid.",
            message
        ),
        octocrab::Error::InvalidUtf8 { source, backtrace } => error!(
            error_message = source.to_string(),
            backtrace = backtrace.to_string(),
            "{}. The message wasn't valid UTF-8.",
            message,
        ),
        _ => error!(error_message = e.to_string(), message),
    };
}
