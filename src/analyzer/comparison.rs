use crate::advisory::{advisories, Advisory};
use crate::domain::{SemanticVersion, UpdateSeverity, Version};
use serde::Serialize;
use std::fmt;

/// How the candidate relates to the current version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Relation {
    /// Equal including build metadata
    StrictlyEqual,
    /// Equal precedence, different build metadata
    Equal,
    /// Current ranks above the candidate
    Greater,
    /// Current ranks below the candidate
    Less,
}

impl Relation {
    /// Relation of `current` to `candidate`, checked from the strictest case down
    pub fn between(current: &Version, candidate: &Version) -> Self {
        if current.strictly_eq(candidate) {
            Relation::StrictlyEqual
        } else if current.loosely_eq(candidate) {
            Relation::Equal
        } else if current.succeeds(candidate) {
            Relation::Greater
        } else {
            Relation::Less
        }
    }

    /// Operator form of the relation
    pub fn symbol(&self) -> &'static str {
        match self {
            Relation::StrictlyEqual => "===",
            Relation::Equal => "==",
            Relation::Greater => ">",
            Relation::Less => "<",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sentence = match self {
            Relation::StrictlyEqual => "Versions are strictly equal.",
            Relation::Equal => "Versions are equal.",
            Relation::Greater => "Version A is greater than Version B.",
            Relation::Less => "Version A is less than Version B.",
        };
        f.write_str(sentence)
    }
}

/// Everything known about moving from one version to another
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub current: Version,
    pub candidate: Version,
    pub relation: Relation,
    pub severity: UpdateSeverity,
    pub compatible: bool,
    pub advisories: Vec<Advisory>,
}

impl Comparison {
    /// One sentence describing the update severity
    pub fn severity_sentence(&self) -> &'static str {
        match self.severity {
            UpdateSeverity::Major => "Version B is a major update to Version A.",
            UpdateSeverity::Minor => "Version B is a minor update to Version A.",
            UpdateSeverity::Patch => "Version B is a patch update to Version A.",
            UpdateSeverity::Prerelease => "Version B is a pre-release update to Version A.",
            UpdateSeverity::Build => "Difference in build metadata.",
            UpdateSeverity::NoUpdate => "No update between the versions detected.",
        }
    }

    /// One sentence describing compatibility
    pub fn compatibility_sentence(&self) -> &'static str {
        if self.compatible {
            "B is compatible with A."
        } else {
            "B is not compatible with A."
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.relation)?;
        writeln!(f, "{}", self.severity_sentence())?;
        write!(f, "{}", self.compatibility_sentence())
    }
}

/// Compare `current` against `candidate`.
pub fn analyze(current: &Version, candidate: &Version) -> Comparison {
    let comparison = Comparison {
        current: current.clone(),
        candidate: candidate.clone(),
        relation: Relation::between(current, candidate),
        severity: current.compare(candidate),
        compatible: current.is_compatible(candidate),
        advisories: advisories(current, candidate),
    };
    tracing::debug!(
        %current,
        %candidate,
        relation = comparison.relation.symbol(),
        severity = %comparison.severity,
        "compared versions"
    );
    comparison
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    #[test]
    fn test_relation_strictly_equal() {
        assert_eq!(
            Relation::between(&v("2.0+500"), &v("2.0.0+500")),
            Relation::StrictlyEqual
        );
    }

    #[test]
    fn test_relation_equal() {
        assert_eq!(
            Relation::between(&v("300.0+master"), &v("300.0+develop")),
            Relation::Equal
        );
    }

    #[test]
    fn test_relation_ordered() {
        assert_eq!(Relation::between(&v("2"), &v("1.9")), Relation::Greater);
        assert_eq!(Relation::between(&v("1.0.0-alpha"), &v("1.0.0")), Relation::Less);
    }

    #[test]
    fn test_analyze_minor_update() {
        let report = analyze(&v("3.230.13"), &v("3.235.1"));
        assert_eq!(report.relation, Relation::Less);
        assert_eq!(report.severity, UpdateSeverity::Minor);
        assert!(report.compatible);
        assert!(report.advisories.is_empty());
    }

    #[test]
    fn test_analyze_major_update() {
        let report = analyze(&v("600.123.4"), &v("601.0.1"));
        assert_eq!(report.severity, UpdateSeverity::Major);
        assert!(!report.compatible);
        assert_eq!(report.compatibility_sentence(), "B is not compatible with A.");
    }

    #[test]
    fn test_comparison_display() {
        let report = analyze(&v("1.3"), &v("1.5"));
        assert_eq!(
            report.to_string(),
            "Version A is less than Version B.\n\
             Version B is a minor update to Version A.\n\
             B is compatible with A."
        );
    }

    #[test]
    fn test_comparison_serializes() {
        let report = analyze(&v("1.0.0"), &v("1.0.1"));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["current"], "1.0.0");
        assert_eq!(json["relation"], "less");
        assert_eq!(json["severity"], "patch");
        assert_eq!(json["compatible"], true);
    }
}
