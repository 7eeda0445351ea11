use crate::domain::{BuildIdentifier, CoreRendering, PrereleaseIdentifier, SemanticVersion, Version};
use serde::Serialize;

/// Kind of a single identifier, as shown to users
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdentifierKind {
    Numeric,
    AlphaNumeric,
    Digits,
}

impl IdentifierKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdentifierKind::Numeric => "numeric",
            IdentifierKind::AlphaNumeric => "alphanumeric",
            IdentifierKind::Digits => "digits",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdentifierDescription {
    pub value: String,
    pub kind: IdentifierKind,
}

impl From<&PrereleaseIdentifier> for IdentifierDescription {
    fn from(identifier: &PrereleaseIdentifier) -> Self {
        let kind = if identifier.is_numeric() {
            IdentifierKind::Numeric
        } else {
            IdentifierKind::AlphaNumeric
        };
        IdentifierDescription {
            value: identifier.to_string(),
            kind,
        }
    }
}

impl From<&BuildIdentifier> for IdentifierDescription {
    fn from(identifier: &BuildIdentifier) -> Self {
        let kind = match identifier {
            BuildIdentifier::Digits(_) => IdentifierKind::Digits,
            BuildIdentifier::AlphaNumeric(_) => IdentifierKind::AlphaNumeric,
        };
        IdentifierDescription {
            value: identifier.to_string(),
            kind,
        }
    }
}

/// Breakdown of a single parsed version
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Description {
    pub version: String,
    pub core: String,
    pub major: u64,
    pub minor: Option<u64>,
    pub patch: Option<u64>,
    pub prerelease: Vec<IdentifierDescription>,
    pub build: Vec<IdentifierDescription>,
}

/// Describe `version`, rendering its core with `rendering`.
pub fn describe(version: &Version, rendering: CoreRendering) -> Description {
    Description {
        version: version.absolute_string_with(rendering),
        core: version.core_string_with(rendering),
        major: version.major,
        minor: version.minor,
        patch: version.patch,
        prerelease: version
            .prerelease
            .iter()
            .flatten()
            .map(IdentifierDescription::from)
            .collect(),
        build: version
            .build
            .iter()
            .flatten()
            .map(IdentifierDescription::from)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe() {
        let version = Version::parse("1.2-alpha.1+0042.exp").unwrap();
        let description = describe(&version, CoreRendering::Preserve);

        assert_eq!(description.version, "1.2-alpha.1+0042.exp");
        assert_eq!(description.core, "1.2");
        assert_eq!(description.patch, None);
        assert_eq!(
            description.prerelease,
            vec![
                IdentifierDescription {
                    value: "alpha".to_string(),
                    kind: IdentifierKind::AlphaNumeric,
                },
                IdentifierDescription {
                    value: "1".to_string(),
                    kind: IdentifierKind::Numeric,
                },
            ]
        );
        assert_eq!(description.build[0].kind, IdentifierKind::Digits);
        assert_eq!(description.build[0].value, "0042");
    }

    #[test]
    fn test_describe_zero_fill() {
        let version = Version::parse("4").unwrap();
        let description = describe(&version, CoreRendering::ZeroFill);
        assert_eq!(description.version, "4.0.0");
        assert!(description.prerelease.is_empty());
        assert!(description.build.is_empty());
    }
}
