//! Conversions to and from the `semver` crate
//!
//! Both directions go through the checked parser. A `semver::Version` whose
//! numeric pre-release identifier does not fit in 64 bits is rejected rather
//! than ranked differently from the `semver` crate.

use super::comparable::{CoreRendering, SemanticVersion};
use super::version::Version;
use crate::error::ParseError;

/// Absent minor and patch components become `0`.
impl TryFrom<&Version> for semver::Version {
    type Error = semver::Error;

    fn try_from(version: &Version) -> Result<Self, Self::Error> {
        semver::Version::parse(&version.absolute_string_with(CoreRendering::ZeroFill))
    }
}

impl TryFrom<&semver::Version> for Version {
    type Error = ParseError;

    fn try_from(version: &semver::Version) -> Result<Self, Self::Error> {
        Version::parse(&version.to_string())
    }
}
