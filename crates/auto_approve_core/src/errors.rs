//! Error types for the auto-approve rule engine.
//!
//! Evaluation itself never errors: pattern mismatches and collaborator
//! failures degrade to failing check results so the audit trail stays
//! complete. The variants here cover the one fatal category, configuration
//! problems detected while constructing rules.

use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

#[derive(Error, Debug)]
pub enum Error {
    /// The dispatcher requested a rule name that is not registered.
    ///
    /// This is fatal: there is nothing to evaluate the pull request
    /// against, so the caller must surface it immediately instead of
    /// treating it as a failing verdict.
    #[error("Unknown auto-approve rule: {0}")]
    UnknownRule(String),

    /// A rule was constructed with a filename or version pattern that does
    /// not compile.
    #[error("Invalid rule pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}
