//! Error types for GitHub client operations.
//!
//! This module defines the error types that can occur when reading pull
//! request and repository data from the GitHub API. The auto-approve engine
//! converts these errors into failing check results at the check boundary,
//! so every variant here must be distinguishable rather than panicking.

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur during GitHub client operations.
///
/// Each variant provides specific context about what went wrong. The one
/// variant that callers branch on is [`Error::NotFound`]: a missing
/// `.repo-metadata.json` is an expected condition for repositories that do
/// not carry library metadata, while the other variants indicate a request
/// or response problem.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A generic API request failure.
    ///
    /// This error occurs when a GitHub API request fails for unspecified
    /// reasons. Check the GitHub API status and ensure your request
    /// parameters are correct.
    #[error("API request failed")]
    ApiError(),

    /// Authentication or GitHub client initialization failure.
    ///
    /// This error occurs when:
    /// - GitHub App credentials are invalid or expired
    /// - Network connectivity issues prevent authentication
    /// - The GitHub App lacks necessary permissions
    ///
    /// The contained string provides specific details about the failure.
    #[error("Failed to authenticate or initialize GitHub client: {0}")]
    AuthError(String),

    /// Error deserializing the response from GitHub.
    ///
    /// This error occurs when the GitHub API returns a response that cannot
    /// be parsed into the expected data structure.
    #[error("Failed to deserialize GitHub response: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// The GitHub API returned a response in an unexpected format.
    ///
    /// Also used when file content advertised as base64 cannot be decoded
    /// into UTF-8 text.
    #[error("Invalid response format")]
    InvalidResponse,

    /// The requested resource was not found.
    ///
    /// This error occurs when a GitHub API request returns a 404 status
    /// code, indicating that the requested resource (repository, file,
    /// pull request, etc.) does not exist or is not accessible with the
    /// current authentication.
    #[error("Resource not found")]
    NotFound,
}
