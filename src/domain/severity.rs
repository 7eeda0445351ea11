use serde::Serialize;
use std::fmt;

/// How large a step a candidate version is over the current one.
///
/// Produced by [`SemanticVersion::compare`](super::SemanticVersion::compare).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum UpdateSeverity {
    Major,
    Minor,
    Patch,
    Prerelease,
    Build,
    /// The candidate is equal or older.
    NoUpdate,
}

impl UpdateSeverity {
    /// Whether the candidate is any kind of forward update
    pub fn is_update(&self) -> bool {
        !matches!(self, UpdateSeverity::NoUpdate)
    }
}

impl fmt::Display for UpdateSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UpdateSeverity::Major => "major",
            UpdateSeverity::Minor => "minor",
            UpdateSeverity::Patch => "patch",
            UpdateSeverity::Prerelease => "prerelease",
            UpdateSeverity::Build => "build",
            UpdateSeverity::NoUpdate => "no-update",
        };
        f.write_str(name)
    }
}
