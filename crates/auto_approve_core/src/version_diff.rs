//! Parsing of dependency manifest diffs.
//!
//! Two pure functions over patch text: the version-diff extractor, which
//! pulls the old/new dependency pair out of a unified diff hunk, and the
//! single-change guard, which rejects patches that touch more than one
//! line pair.
//!
//! # Capture group convention
//!
//! File rule patterns identify their captures by name:
//!
//! - `dep` — the dependency name; `dep_prefix` optionally carries a
//!   grouping prefix (Maven `groupId`) joined to the name with `:`.
//! - `major`, `minor`, `patch` — plain semver components.
//! - `rev`, `rev_major`, `rev_minor`, `rev_patch` — the revision-stamped
//!   scheme (`v<N>-rev<digits>-<major>.<minor>.<patch>`).
//! - `dep_alt`, `alt_major`, `alt_minor`, `alt_patch` — fallbacks for a
//!   second alternation branch, since a pattern cannot reuse group names.
//!
//! Which scheme a capture produced is decided by whether the `rev` group
//! participated in the match.

use regex::{Captures, Regex};

use crate::pull_request::ChangedFile;
use crate::versions::{VersionStamp, VersionsInfo};

#[cfg(test)]
#[path = "version_diff_tests.rs"]
mod tests;

/// Extracts the old/new dependency versions from a changed file's patch.
///
/// Applies `old_pattern` and `new_pattern` independently to the patch text
/// and returns `None` if either fails to match: a patch without both a
/// removed and an added version line is not a valid dependency-bump file.
/// Pure function over text; no side effects.
pub fn extract_versions(
    file: &ChangedFile,
    old_pattern: &Regex,
    new_pattern: &Regex,
) -> Option<VersionsInfo> {
    let old_captures = old_pattern.captures(&file.patch)?;
    let new_captures = new_pattern.captures(&file.patch)?;

    let (old_dependency_name, old_version) = captured_dependency(&old_captures)?;
    let (new_dependency_name, new_version) = captured_dependency(&new_captures)?;

    Some(VersionsInfo {
        old_dependency_name,
        new_dependency_name,
        old_version,
        new_version,
    })
}

fn captured_dependency(captures: &Captures<'_>) -> Option<(String, VersionStamp)> {
    let name = named(captures, "dep", "dep_alt")?;
    let name = match captures.name("dep_prefix") {
        Some(prefix) => format!("{}:{}", prefix.as_str(), name),
        None => name,
    };

    let stamp = if let Some(revision) = captures.name("rev") {
        VersionStamp::Revision {
            revision: revision.as_str().to_string(),
            major: captures.name("rev_major")?.as_str().to_string(),
            minor: captures.name("rev_minor")?.as_str().to_string(),
            patch: captures.name("rev_patch")?.as_str().to_string(),
        }
    } else {
        VersionStamp::Semver {
            major: named(captures, "major", "alt_major")?,
            minor: named(captures, "minor", "alt_minor")?,
            patch: named(captures, "patch", "alt_patch")?,
        }
    };

    Some((name, stamp))
}

fn named(captures: &Captures<'_>, primary: &str, fallback: &str) -> Option<String> {
    captures
        .name(primary)
        .or_else(|| captures.name(fallback))
        .map(|m| m.as_str().to_string())
}

/// Returns true when the patch changes exactly one line pair.
///
/// Counts added and removed lines in the hunk body, ignoring the `+++`/`---`
/// file headers and `@@` hunk headers. Batched lockfile-style updates that
/// rewrite many dependencies in one file cannot be vouched for by a single
/// title correlation, so they are rejected here.
pub fn is_one_dependency_changed(file: &ChangedFile) -> bool {
    let mut added = 0usize;
    let mut removed = 0usize;

    for line in file.patch.lines() {
        if line.starts_with("+++") || line.starts_with("---") || line.starts_with("@@") {
            continue;
        }
        if line.starts_with('+') {
            added += 1;
        } else if line.starts_with('-') {
            removed += 1;
        }
    }

    added == 1 && removed == 1
}
