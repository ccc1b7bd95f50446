//! Per-file configuration records for dependency-bump policies.

use regex::Regex;

#[cfg(test)]
#[path = "file_rule_tests.rs"]
mod tests;

/// Binds a filename pattern to the version patterns used to parse its diff.
///
/// Declared once per language rule at construction and read-only during
/// evaluation. The version patterns follow the capture group convention
/// documented in [`crate::version_diff`].
pub struct FileRule {
    /// Files this rule applies to.
    pub target_file_to_check: Regex,

    /// Files that must never be auto-approved even when
    /// `target_file_to_check` matches. A match here forces a failing
    /// result rather than a skip.
    pub target_files_to_exclude: Vec<Regex>,

    /// Pattern extracting the declared dependency and version from the
    /// pull request title. `None` for policies whose titles do not name a
    /// dependency (release pull requests).
    pub dependency_title: Option<Regex>,

    /// Pattern matching the removed version line.
    pub old_version: Regex,

    /// Pattern matching the added version line.
    pub new_version: Regex,

    /// When non-empty, the changed dependency must match at least one of
    /// these patterns.
    pub dependencies_to_include: Vec<Regex>,
}

impl FileRule {
    pub fn new(target_file_to_check: Regex, old_version: Regex, new_version: Regex) -> Self {
        Self {
            target_file_to_check,
            target_files_to_exclude: Vec::new(),
            dependency_title: None,
            old_version,
            new_version,
            dependencies_to_include: Vec::new(),
        }
    }

    pub fn with_dependency_title(mut self, dependency_title: Regex) -> Self {
        self.dependency_title = Some(dependency_title);
        self
    }

    pub fn with_excluded_files(mut self, target_files_to_exclude: Vec<Regex>) -> Self {
        self.target_files_to_exclude = target_files_to_exclude;
        self
    }

    pub fn with_included_dependencies(mut self, dependencies_to_include: Vec<Regex>) -> Self {
        self.dependencies_to_include = dependencies_to_include;
        self
    }

    /// Whether this rule applies to the given filename.
    pub fn matches(&self, filename: &str) -> bool {
        self.target_file_to_check.is_match(filename)
    }

    /// Whether the filename hits one of the exclusion patterns.
    pub fn excludes(&self, filename: &str) -> bool {
        self.target_files_to_exclude
            .iter()
            .any(|pattern| pattern.is_match(filename))
    }
}
