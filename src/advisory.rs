use crate::domain::{SemanticVersion, Version};
use serde::Serialize;
use std::fmt;

/// Observations about a pair of versions that are worth pointing out.
/// None of them change the comparison result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Advisory {
    /// The candidate ranks below the current version
    Downgrade { current: Version, candidate: Version },
    /// Major versions differ, so the pair is not compatible
    IncompatibleMajor { current: Version, candidate: Version },
    /// `0.y.z` versions may break on any change
    MajorZero { version: Version },
    /// Only build metadata differs
    BuildOnly { current: Version, candidate: Version },
}

/// Collect the advisories for moving from `current` to `candidate`.
pub fn advisories(current: &Version, candidate: &Version) -> Vec<Advisory> {
    let mut found = Vec::new();

    if candidate.precedes(current) {
        found.push(Advisory::Downgrade {
            current: current.clone(),
            candidate: candidate.clone(),
        });
    }

    if !current.is_compatible(candidate) {
        found.push(Advisory::IncompatibleMajor {
            current: current.clone(),
            candidate: candidate.clone(),
        });
    }

    // Reported once when both sides are 0.y.z.
    if let Some(version) = [current, candidate].into_iter().find(|v| v.major == 0) {
        found.push(Advisory::MajorZero {
            version: version.clone(),
        });
    }

    if current.loosely_eq(candidate) && !current.strictly_eq(candidate) {
        found.push(Advisory::BuildOnly {
            current: current.clone(),
            candidate: candidate.clone(),
        });
    }

    found
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::Downgrade { current, candidate } => {
                write!(f, "'{}' is older than '{}'", candidate, current)
            }
            Advisory::IncompatibleMajor { current, candidate } => write!(
                f,
                "'{}' and '{}' have different major versions and are not compatible",
                current, candidate
            ),
            Advisory::MajorZero { version } => write!(
                f,
                "'{}' is in initial development (major version 0); anything may change",
                version
            ),
            Advisory::BuildOnly { current, candidate } => write!(
                f,
                "'{}' and '{}' differ only in build metadata",
                current, candidate
            ),
        }
    }
}
