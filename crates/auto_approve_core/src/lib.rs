//! # Auto-Approve Core
//!
//! This crate provides the rule engine that decides whether a bot-authored
//! pull request is safe to approve automatically.
//!
//! ## Overview
//!
//! Evaluation runs in three layers:
//! 1. Atomic checks over the pull request snapshot (author, title, body,
//!    file count, allowed file names, declared library type)
//! 2. Per-file version checks driven by [`FileRule`] patterns (title
//!    correlation, forward-bump validation, single-change guard)
//! 3. A closed-world verdict: every produced [`CheckResult`] must pass, and
//!    an evaluation that produced no results never approves
//!
//! ## Main Entry Points
//!
//! - [`RuleKind`] / [`build_rule`] - construct a policy from its
//!   configuration name
//! - [`LanguageRule::evaluate`] - run a policy and keep the full audit trail
//! - [`LanguageRule::check_pr`] - run a policy and reduce to the verdict
//!
//! ## Examples
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use auto_approve_core::{build_rule, PullRequest, RuleContext, SystemClock};
//! use github_client::GitHubClient;
//!
//! # async fn example(client: GitHubClient, pull_request: PullRequest) -> Result<(), Box<dyn std::error::Error>> {
//! let client = Arc::new(client);
//! let context = RuleContext {
//!     content_reader: client.clone(),
//!     history_reader: client,
//!     clock: Arc::new(SystemClock),
//! };
//!
//! let rule = build_rule("nodeDependency".parse()?, &context)?;
//! let evaluation = rule.evaluate(&pull_request).await;
//! if evaluation.approved() {
//!     // post the approving review
//! }
//! # Ok(())
//! # }
//! ```

mod allowed_files_check;
mod author_check;
mod body_check;
mod check;
mod clock;
mod dependency_checks;
mod errors;
mod file_rule;
mod generated_api_changes;
mod generated_template_changes;
mod java_dependency;
mod language_rule;
mod library_type_check;
mod max_files_check;
mod node_dependency;
mod node_release;
mod pull_request;
mod python_dependency;
mod python_sample_dependency;
mod registry;
mod title_check;
mod version_checks;
mod version_diff;
mod versions;

#[cfg(test)]
mod test_support;

pub use allowed_files_check::AllowedFilesCheck;
pub use author_check::AuthorCheck;
pub use body_check::BodyCheck;
pub use check::{CheckResult, CheckRule};
pub use clock::{Clock, SystemClock};
pub use errors::Error;
pub use file_rule::FileRule;
pub use generated_api_changes::GeneratedApiChanges;
pub use generated_template_changes::GeneratedTemplateChanges;
pub use java_dependency::JavaDependency;
pub use language_rule::{LanguageRule, RuleEvaluation};
pub use library_type_check::LibraryTypeCheck;
pub use max_files_check::MaxFilesCheck;
pub use node_dependency::NodeDependency;
pub use node_release::NodeRelease;
pub use pull_request::{ChangedFile, PullRequest};
pub use python_dependency::PythonDependency;
pub use python_sample_dependency::PythonSampleDependency;
pub use registry::{build_rule, RuleContext, RuleKind};
pub use title_check::TitleCheck;
pub use version_checks::{
    does_dependency_match_patterns, does_dependency_match_pr_title, is_valid_version_bump,
};
pub use version_diff::{extract_versions, is_one_dependency_changed};
pub use versions::{VersionStamp, VersionsInfo};
