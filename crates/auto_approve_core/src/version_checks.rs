//! Predicates over an extracted version pair.
//!
//! The validator decides whether the transition is an allowed forward bump,
//! the title correlator ties the diff back to what the pull request title
//! claims, and the include-pattern check restricts which dependencies a
//! policy is willing to vouch for. All of these fail closed: anything that
//! does not parse or does not line up is a `false`, never an error.

use regex::Regex;

use crate::versions::{VersionStamp, VersionsInfo};

#[cfg(test)]
#[path = "version_checks_tests.rs"]
mod tests;

/// Returns true when the old → new transition is a legitimate forward bump.
///
/// Plain semver: the `(major, minor, patch)` triple must increase under
/// numeric lexicographic ordering; equal-or-lower is rejected so downgrades
/// and no-op "bumps" never pass. Revision-stamped: the revision must
/// increase, or stay equal while the trailing triple increases. Comparison
/// is on integers (`"9" < "10"`), a scheme change between the two sides is
/// rejected, and unparseable components are rejected.
pub fn is_valid_version_bump(versions: &VersionsInfo) -> bool {
    match (&versions.old_version, &versions.new_version) {
        (VersionStamp::Semver { .. }, VersionStamp::Semver { .. }) => {
            triple_increased(&versions.old_version, &versions.new_version)
        }
        (VersionStamp::Revision { .. }, VersionStamp::Revision { .. }) => {
            let (Some(old_revision), Some(new_revision)) = (
                versions.old_version.revision_number(),
                versions.new_version.revision_number(),
            ) else {
                return false;
            };

            if new_revision > old_revision {
                return true;
            }
            new_revision == old_revision
                && triple_increased(&versions.old_version, &versions.new_version)
        }
        _ => false,
    }
}

fn triple_increased(old: &VersionStamp, new: &VersionStamp) -> bool {
    match (old.numeric_triple(), new.numeric_triple()) {
        (Some(old_triple), Some(new_triple)) => new_triple > old_triple,
        _ => false,
    }
}

/// Returns true when the title's declared dependency change matches the
/// diff.
///
/// The title pattern's second capture is the dependency name and its third
/// is the target version. The diff must change the dependency the title
/// names (old and new names agreeing with each other as well), and the
/// declared version must textually match the new version in the diff. This
/// stops a pull request whose title claims to bump dependency X while its
/// diff changes dependency Y.
pub fn does_dependency_match_pr_title(
    versions: &VersionsInfo,
    title_pattern: &Regex,
    title: &str,
) -> bool {
    let Some(captures) = title_pattern.captures(title) else {
        return false;
    };
    let (Some(declared_name), Some(declared_version)) = (captures.get(2), captures.get(3)) else {
        return false;
    };

    versions.old_dependency_name == versions.new_dependency_name
        && dependency_names_match(declared_name.as_str(), &versions.new_dependency_name)
        && version_matches_declaration(declared_version.as_str(), &versions.new_version)
}

// Titles for Maven artifacts declare `group:artifact`; manifest captures may
// carry the same prefix or just the artifact. Compare the unprefixed names
// when the full names differ.
fn dependency_names_match(declared: &str, diffed: &str) -> bool {
    declared == diffed || base_name(declared) == base_name(diffed)
}

fn base_name(name: &str) -> &str {
    name.rsplit(':').next().unwrap_or(name)
}

fn version_matches_declaration(declared: &str, new_version: &VersionStamp) -> bool {
    match new_version {
        VersionStamp::Semver { .. } => declared == new_version.semver_text(),
        // Revision-stamped titles read `v1-rev20210319-1.32.1`; the leading
        // API version digit is not captured from the manifest, so match on
        // the revision and the trailing triple.
        VersionStamp::Revision { revision, .. } => {
            declared.contains(&format!("rev{}", revision))
                && declared.ends_with(&new_version.semver_text())
        }
    }
}

/// Returns true when the changed dependency matches at least one of the
/// include patterns. Policies that only vouch for a family of dependencies
/// (the Python sample rule approves only `google-*` packages) use this as
/// an extra gate.
pub fn does_dependency_match_patterns(versions: &VersionsInfo, patterns: &[Regex]) -> bool {
    patterns
        .iter()
        .any(|pattern| pattern.is_match(&versions.new_dependency_name))
}
