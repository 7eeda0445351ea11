//! Build metadata identifiers
//!
//! Build metadata follows the first `+` of a version string. It never takes
//! part in precedence, only in strict equality.

use super::prerelease::{is_alphanumeric, is_numeric};
use crate::error::ParseError;
use std::fmt;
use std::str::FromStr;

/// A single build metadata identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BuildIdentifier {
    /// Letters, digits and hyphens, not all digits.
    AlphaNumeric(String),
    /// Digits only. Leading zeros are kept and the value is never ranked.
    Digits(String),
}

impl BuildIdentifier {
    /// Parse a single build identifier token.
    pub fn parse(token: &str) -> Result<Self, ParseError> {
        if token.is_empty() {
            return Err(ParseError::build(token, "empty identifier"));
        }

        if is_numeric(token) {
            Ok(BuildIdentifier::Digits(token.to_string()))
        } else if is_alphanumeric(token) {
            Ok(BuildIdentifier::AlphaNumeric(token.to_string()))
        } else {
            Err(ParseError::build(
                token,
                "only ASCII letters, digits and hyphens are allowed",
            ))
        }
    }

    /// Textual form of the identifier.
    pub fn value(&self) -> &str {
        match self {
            BuildIdentifier::AlphaNumeric(s) | BuildIdentifier::Digits(s) => s,
        }
    }
}

impl FromStr for BuildIdentifier {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for BuildIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}
