use super::build::BuildIdentifier;
use super::comparable::SemanticVersion;
use super::parser;
use super::prerelease::PrereleaseIdentifier;
use crate::error::ParseError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Semantic version representation
///
/// `minor` and `patch` stay `None` when the source string omitted them, so
/// `"1.2"` renders back as `"1.2"`. They still compare as `0`, which makes
/// `1`, `1.0` and `1.0.0` equal.
///
/// Equality (`==`) and ordering (`<`, `>`) follow SemVer precedence and
/// ignore build metadata. Use [`SemanticVersion::strictly_eq`] to include it.
///
/// The fields are public for structured construction, which is not
/// validated. [`Version::parse`] is the checked entry point.
#[derive(Debug, Clone)]
pub struct Version {
    pub major: u64,
    pub minor: Option<u64>,
    pub patch: Option<u64>,
    pub prerelease: Option<Vec<PrereleaseIdentifier>>,
    pub build: Option<Vec<BuildIdentifier>>,
}

impl Version {
    /// `0.0.0`
    pub const INITIAL: Version = Version {
        major: 0,
        minor: Some(0),
        patch: Some(0),
        prerelease: None,
        build: None,
    };

    /// Create a new version with all three core components
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor: Some(minor),
            patch: Some(patch),
            prerelease: None,
            build: None,
        }
    }

    /// Create a version with only a major component, e.g. `"7"`
    pub fn from_major(major: u64) -> Self {
        Version {
            major,
            minor: None,
            patch: None,
            prerelease: None,
            build: None,
        }
    }

    /// Replace the pre-release identifiers
    pub fn with_prerelease(
        mut self,
        identifiers: impl IntoIterator<Item = PrereleaseIdentifier>,
    ) -> Self {
        self.prerelease = Some(identifiers.into_iter().collect());
        self
    }

    /// Replace the build identifiers
    pub fn with_build(mut self, identifiers: impl IntoIterator<Item = BuildIdentifier>) -> Self {
        self.build = Some(identifiers.into_iter().collect());
        self
    }

    /// Parse a version string such as `1.2.3-alpha.1+exp.sha.5114f85`.
    ///
    /// # Example
    /// ```
    /// use semver_compare::{PrereleaseIdentifier, Version};
    ///
    /// let v = Version::parse("1.2.3-alpha.1").unwrap();
    /// assert_eq!((v.major, v.minor, v.patch), (1, Some(2), Some(3)));
    /// assert_eq!(
    ///     v.prerelease.unwrap(),
    ///     vec![PrereleaseIdentifier::AlphaNumeric("alpha".into()), PrereleaseIdentifier::Numeric(1)]
    /// );
    /// assert!(Version::parse("01.0.0").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        parser::parse(input)
    }

    /// Parse a version string that is known to be valid, such as a constant.
    ///
    /// # Panics
    /// Panics if `literal` is not a valid version. Use [`Version::parse`] for
    /// anything that is not fixed at compile time.
    pub fn from_trusted_literal(literal: &str) -> Self {
        match parser::parse(literal) {
            Ok(version) => version,
            Err(e) => panic!("invalid trusted version literal '{}': {}", literal, e),
        }
    }
}

impl SemanticVersion for Version {
    fn major(&self) -> u64 {
        self.major
    }

    fn minor(&self) -> Option<u64> {
        self.minor
    }

    fn patch(&self) -> Option<u64> {
        self.patch
    }

    fn prerelease(&self) -> Option<Cow<'_, [PrereleaseIdentifier]>> {
        self.prerelease.as_deref().map(Cow::Borrowed)
    }

    fn build(&self) -> Option<Cow<'_, [BuildIdentifier]>> {
        self.build.as_deref().map(Cow::Borrowed)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.loosely_eq(other)
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.core().hash(state);
        self.prerelease.as_deref().unwrap_or(&[]).hash(state);
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.precedence(other)
    }
}

impl Default for Version {
    fn default() -> Self {
        Version::INITIAL
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        parser::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.absolute_string())
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.absolute_string())
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        parser::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_version_parse() {
        let v = Version::parse("1.2.3").unwrap();
        assert_eq!(v.major, 1);
        assert_eq!(v.minor, Some(2));
        assert_eq!(v.patch, Some(3));
        assert!(v.prerelease.is_none());
        assert!(v.build.is_none());
    }

    #[test]
    fn test_version_parse_partial_core() {
        let v = Version::parse("7").unwrap();
        assert_eq!(v, Version::from_major(7));
        assert_eq!(v.minor, None);
        assert_eq!(v.patch, None);
    }

    #[test]
    fn test_version_from_str_and_try_from() {
        let a: Version = "1.0.0-rc.1".parse().unwrap();
        let b = Version::try_from("1.0.0-rc.1").unwrap();
        assert!(a.strictly_eq(&b));
    }

    #[test]
    fn test_version_display_round_trips() {
        for input in ["1", "1.2", "1.2.3-alpha.1+build.7", "5+3990"] {
            assert_eq!(Version::parse(input).unwrap().to_string(), input);
        }
    }

    #[test]
    fn test_version_structured_construction() {
        let v = Version::new(1, 2, 3)
            .with_prerelease([
                PrereleaseIdentifier::AlphaNumeric("alpha".to_string()),
                PrereleaseIdentifier::Numeric(1),
                PrereleaseIdentifier::Beta,
                PrereleaseIdentifier::ReleaseCandidate,
                PrereleaseIdentifier::Prerelease,
            ])
            .with_build([
                BuildIdentifier::AlphaNumeric("exp".to_string()),
                BuildIdentifier::Digits("300".to_string()),
            ]);
        assert_eq!(v.to_string(), "1.2.3-alpha.1.beta.rc.prerelease+exp.300");
    }

    #[test]
    fn test_version_initial() {
        assert_eq!(Version::INITIAL.to_string(), "0.0.0");
        assert_eq!(Version::default(), Version::from_major(0));
    }

    #[test]
    fn test_version_equality_ignores_build() {
        assert_eq!(
            Version::parse("300.0+master").unwrap(),
            Version::parse("300.0+develop").unwrap()
        );
        assert_ne!(
            Version::parse("1.0.0-alpha").unwrap(),
            Version::parse("1.0.0").unwrap()
        );
    }

    #[test]
    fn test_version_hash_matches_equality() {
        let set: HashSet<Version> = ["1", "1.0", "1.0.0", "1.0.0+abc", "1.0.0-alpha"]
            .into_iter()
            .map(Version::from_trusted_literal)
            .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_version_sorting() {
        let mut versions: Vec<Version> = ["1.0.0", "1.0.0-rc.1", "0.9", "1.0.0-alpha", "2"]
            .into_iter()
            .map(Version::from_trusted_literal)
            .collect();
        versions.sort();
        let rendered: Vec<String> = versions.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, ["0.9", "1.0.0-alpha", "1.0.0-rc.1", "1.0.0", "2"]);
    }

    #[test]
    #[should_panic(expected = "invalid trusted version literal")]
    fn test_trusted_literal_panics_on_invalid_input() {
        Version::from_trusted_literal("1.0.x");
    }

    #[test]
    fn test_version_serde_as_string() {
        let v = Version::parse("1.2-beta+7").unwrap();
        assert_eq!(serde_json::to_string(&v).unwrap(), "\"1.2-beta+7\"");

        let back: Version = serde_json::from_str("\"1.2-beta+7\"").unwrap();
        assert!(back.strictly_eq(&v));

        assert!(serde_json::from_str::<Version>("\"1.2.x\"").is_err());
    }
}
