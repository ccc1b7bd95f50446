//! Dependency version data extracted from a manifest diff.

use std::fmt;

#[cfg(test)]
#[path = "versions_tests.rs"]
mod tests;

/// The old/new dependency pair extracted from one changed file.
///
/// Produced by the version-diff extractor and consumed by the validator,
/// the title correlator, and the include-pattern check. Never persisted:
/// it lives for the duration of one file's evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionsInfo {
    /// Dependency name on the removed line.
    pub old_dependency_name: String,

    /// Dependency name on the added line.
    pub new_dependency_name: String,

    /// Version on the removed line.
    pub old_version: VersionStamp,

    /// Version on the added line.
    pub new_version: VersionStamp,
}

/// A captured version in one of the two supported schemes.
///
/// Components are kept as the captured digit strings; numeric parsing
/// happens in the validator so an unparseable component fails closed there
/// instead of being silently dropped during extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionStamp {
    /// Plain `major.minor.patch`.
    Semver {
        major: String,
        minor: String,
        patch: String,
    },

    /// Revision-stamped scheme used by generated API client manifests:
    /// `v<N>-rev<digits>-<major>.<minor>.<patch>`.
    Revision {
        revision: String,
        major: String,
        minor: String,
        patch: String,
    },
}

impl VersionStamp {
    pub fn semver(major: &str, minor: &str, patch: &str) -> Self {
        Self::Semver {
            major: major.to_string(),
            minor: minor.to_string(),
            patch: patch.to_string(),
        }
    }

    pub fn revision(revision: &str, major: &str, minor: &str, patch: &str) -> Self {
        Self::Revision {
            revision: revision.to_string(),
            major: major.to_string(),
            minor: minor.to_string(),
            patch: patch.to_string(),
        }
    }

    /// The `major.minor.patch` components as integers, or `None` if any
    /// component does not parse.
    pub(crate) fn numeric_triple(&self) -> Option<(u64, u64, u64)> {
        let (major, minor, patch) = match self {
            Self::Semver {
                major,
                minor,
                patch,
            }
            | Self::Revision {
                major,
                minor,
                patch,
                ..
            } => (major, minor, patch),
        };
        Some((
            major.parse().ok()?,
            minor.parse().ok()?,
            patch.parse().ok()?,
        ))
    }

    /// The revision number as an integer, or `None` for plain semver or an
    /// unparseable revision.
    pub(crate) fn revision_number(&self) -> Option<u64> {
        match self {
            Self::Semver { .. } => None,
            Self::Revision { revision, .. } => revision.parse().ok(),
        }
    }

    /// The `major.minor.patch` portion as text, for title correlation.
    pub(crate) fn semver_text(&self) -> String {
        match self {
            Self::Semver {
                major,
                minor,
                patch,
            }
            | Self::Revision {
                major,
                minor,
                patch,
                ..
            } => format!("{}.{}.{}", major, minor, patch),
        }
    }
}

impl fmt::Display for VersionStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Semver { .. } => write!(f, "{}", self.semver_text()),
            Self::Revision { revision, .. } => {
                write!(f, "rev{}-{}", revision, self.semver_text())
            }
        }
    }
}
