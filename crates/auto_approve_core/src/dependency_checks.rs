//! The per-file additional-checks pass shared by the dependency policies.

use tracing::debug;

use crate::check::CheckResult;
use crate::file_rule::FileRule;
use crate::pull_request::PullRequest;
use crate::version_checks::{
    does_dependency_match_patterns, does_dependency_match_pr_title, is_valid_version_bump,
};
use crate::version_diff::{extract_versions, is_one_dependency_changed};

#[cfg(test)]
#[path = "dependency_checks_tests.rs"]
mod tests;

/// Runs the version sub-checks over every changed file covered by a rule.
///
/// For each changed file, selects the first matching [`FileRule`] (files
/// with no matching rule are skipped: the allow-list check already vouches
/// for their names) and appends one scoped result per sub-check:
///
/// - a file hitting an exclusion pattern contributes a failing
///   `fileNotExcluded` result and nothing else, so an excluded path can
///   never be silently approved;
/// - a patch that yields no parsable version pair skips the file's version
///   checks, unless `unparsed_diff_failure` names a result to fail with
///   (the Java policy treats an unparsable manifest diff as a rejection);
/// - otherwise: title correlation (when the rule carries a title pattern),
///   the include-pattern gate (when the rule restricts dependencies), the
///   version-bump validation, and the single-change guard.
pub(crate) fn check_dependency_files(
    pull_request: &PullRequest,
    file_rules: &[FileRule],
    unparsed_diff_failure: Option<&'static str>,
) -> Vec<CheckResult> {
    let mut results = Vec::new();

    for file in &pull_request.changed_files {
        let Some(rule) = file_rules.iter().find(|rule| rule.matches(&file.filename)) else {
            debug!(filename = %file.filename, "No file rule matches; skipping file");
            continue;
        };

        if rule.excludes(&file.filename) {
            results.push(CheckResult::scoped("fileNotExcluded", false, &file.filename));
            continue;
        }

        let Some(versions) = extract_versions(file, &rule.old_version, &rule.new_version) else {
            debug!(filename = %file.filename, "Patch contains no parsable version pair");
            if let Some(name) = unparsed_diff_failure {
                results.push(CheckResult::scoped(name, false, &file.filename));
            }
            continue;
        };

        if let Some(title_pattern) = &rule.dependency_title {
            results.push(CheckResult::scoped(
                "doesDependencyMatch",
                does_dependency_match_pr_title(&versions, title_pattern, &pull_request.title),
                &file.filename,
            ));
        }

        if !rule.dependencies_to_include.is_empty() {
            results.push(CheckResult::scoped(
                "doesDependencyConformToRegexes",
                does_dependency_match_patterns(&versions, &rule.dependencies_to_include),
                &file.filename,
            ));
        }

        results.push(CheckResult::scoped(
            "isVersionValid",
            is_valid_version_bump(&versions),
            &file.filename,
        ));

        results.push(CheckResult::scoped(
            "oneDependencyChanged",
            is_one_dependency_changed(file),
            &file.filename,
        ));
    }

    results
}
