//! Pre-release identifiers for semantic versioning
//!
//! A pre-release is the dot-separated list after the first `-` of a version,
//! e.g. `alpha.1` in `1.0.0-alpha.1`. Each element is either numeric or
//! alphanumeric, see https://semver.org/#spec-item-9

use crate::error::ParseError;
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Returns true if the token is non-empty and only decimal digits.
pub(crate) fn is_numeric(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// Returns true if the token is non-empty and only `[A-Za-z0-9-]`.
pub(crate) fn is_alphanumeric(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

/// A single pre-release identifier.
///
/// `Alpha`, `Beta`, `ReleaseCandidate` and `Prerelease` are shorthands for
/// alphanumeric identifiers with a fixed text, so `Alpha` is equal to
/// `AlphaNumeric("alpha")` in every comparison.
#[derive(Debug, Clone)]
pub enum PrereleaseIdentifier {
    /// `alpha`
    Alpha,
    /// `beta`
    Beta,
    /// `rc`
    ReleaseCandidate,
    /// `prerelease`
    Prerelease,
    /// Letters, digits and hyphens, not all digits.
    AlphaNumeric(String),
    /// Digits only, without leading zeros.
    Numeric(u64),
}

/// Normalized comparison key. Variant order makes numeric identifiers rank
/// below alphanumeric ones.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash)]
enum Key<'a> {
    Numeric(u64),
    AlphaNumeric(&'a str),
}

impl PrereleaseIdentifier {
    /// Parse a single identifier token.
    ///
    /// # Returns
    /// * `Ok(PrereleaseIdentifier::Numeric)` - for digit-only tokens without leading zeros
    /// * `Ok(PrereleaseIdentifier::AlphaNumeric)` - for other `[A-Za-z0-9-]+` tokens
    /// * `Err(ParseError::MalformedPrerelease)` - for anything else, including `""` and `"01"`
    ///
    /// # Example
    /// ```
    /// use semver_compare::PrereleaseIdentifier;
    ///
    /// assert_eq!(PrereleaseIdentifier::parse("7").unwrap(), PrereleaseIdentifier::Numeric(7));
    /// assert_eq!(PrereleaseIdentifier::parse("rc").unwrap(), PrereleaseIdentifier::ReleaseCandidate);
    /// assert!(PrereleaseIdentifier::parse("07").is_err());
    /// ```
    pub fn parse(token: &str) -> Result<Self, ParseError> {
        if token.is_empty() {
            return Err(ParseError::prerelease(token, "empty identifier"));
        }

        if is_numeric(token) {
            if token.len() > 1 && token.starts_with('0') {
                return Err(ParseError::prerelease(
                    token,
                    "numeric identifier has a leading zero",
                ));
            }
            return token.parse::<u64>().map(PrereleaseIdentifier::Numeric).map_err(|_| {
                ParseError::prerelease(token, "numeric identifier does not fit in 64 bits")
            });
        }

        if is_alphanumeric(token) {
            Ok(PrereleaseIdentifier::AlphaNumeric(token.to_string()))
        } else {
            Err(ParseError::prerelease(
                token,
                "only ASCII letters, digits and hyphens are allowed",
            ))
        }
    }

    /// Textual form of the identifier, as it appears in a version string.
    pub fn value(&self) -> Cow<'_, str> {
        match self {
            PrereleaseIdentifier::Numeric(n) => Cow::Owned(n.to_string()),
            other => Cow::Borrowed(other.text()),
        }
    }

    /// Whether this identifier ranks as a number.
    pub fn is_numeric(&self) -> bool {
        matches!(self, PrereleaseIdentifier::Numeric(_))
    }

    // Only called for non-numeric variants.
    fn text(&self) -> &str {
        match self {
            PrereleaseIdentifier::Alpha => "alpha",
            PrereleaseIdentifier::Beta => "beta",
            PrereleaseIdentifier::ReleaseCandidate => "rc",
            PrereleaseIdentifier::Prerelease => "prerelease",
            PrereleaseIdentifier::AlphaNumeric(s) => s,
            PrereleaseIdentifier::Numeric(_) => "",
        }
    }

    fn key(&self) -> Key<'_> {
        match self {
            PrereleaseIdentifier::Numeric(n) => Key::Numeric(*n),
            other => Key::AlphaNumeric(other.text()),
        }
    }
}

impl PartialEq for PrereleaseIdentifier {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for PrereleaseIdentifier {}

impl Hash for PrereleaseIdentifier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for PrereleaseIdentifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Numeric identifiers compare numerically, alphanumeric ones by ASCII order,
/// and any numeric identifier ranks below any alphanumeric one.
impl Ord for PrereleaseIdentifier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl FromStr for PrereleaseIdentifier {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let identifier = Self::parse(s)?;
        // Known words map onto their shorthand variants.
        Ok(match identifier.value().as_ref() {
            "alpha" => PrereleaseIdentifier::Alpha,
            "beta" => PrereleaseIdentifier::Beta,
            "rc" => PrereleaseIdentifier::ReleaseCandidate,
            "prerelease" => PrereleaseIdentifier::Prerelease,
            _ => identifier,
        })
    }
}

impl From<u64> for PrereleaseIdentifier {
    fn from(n: u64) -> Self {
        PrereleaseIdentifier::Numeric(n)
    }
}

impl fmt::Display for PrereleaseIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrereleaseIdentifier::Numeric(n) => write!(f, "{}", n),
            other => f.write_str(other.text()),
        }
    }
}
