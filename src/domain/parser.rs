//! Version string parser
//!
//! Grammar: `CORE[-PRERELEASE][+BUILD]` where `CORE` is one to three
//! dot-separated decimal numbers without leading zeros.

use super::build::BuildIdentifier;
use super::prerelease::PrereleaseIdentifier;
use super::version::Version;
use crate::error::ParseError;
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, trace};

static CORE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(\.[0-9]+){0,2}$").unwrap());

/// Parse a version string into a [`Version`].
///
/// The input is split on the first `+` into the version and build sections,
/// then the version section on the first `-` into core and pre-release.
/// Every identifier must classify, otherwise the whole string is rejected.
///
/// # Example
/// ```
/// use semver_compare::{parse, ParseError};
///
/// assert!(parse("1.0.0-alpha+001").is_ok());
/// assert!(matches!(parse("1.0.0.1"), Err(ParseError::MalformedCore { .. })));
/// assert!(matches!(parse("18+123+x"), Err(ParseError::MalformedBuild { .. })));
/// ```
pub fn parse(input: &str) -> Result<Version, ParseError> {
    let result = parse_sections(input);
    match &result {
        Ok(version) => trace!(input, %version, "parsed version"),
        Err(e) => debug!(input, stage = e.stage(), error = %e, "rejected version string"),
    }
    result
}

fn parse_sections(input: &str) -> Result<Version, ParseError> {
    if input.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let (head, build) = match input.split_once('+') {
        Some((_, build)) if build.contains('+') => {
            return Err(ParseError::build(build, "more than one '+' build section"));
        }
        Some((head, build)) => (head, Some(build)),
        None => (input, None),
    };

    let (core, prerelease) = match head.split_once('-') {
        Some((core, prerelease)) => (core, Some(prerelease)),
        None => (head, None),
    };

    let (major, minor, patch) = parse_core(core)?;
    let prerelease = prerelease.map(parse_prerelease).transpose()?;
    let build = build.map(parse_build).transpose()?;

    Ok(Version {
        major,
        minor,
        patch,
        prerelease,
        build,
    })
}

fn parse_core(core: &str) -> Result<(u64, Option<u64>, Option<u64>), ParseError> {
    if core.is_empty() {
        return Err(ParseError::core(core, "missing major version"));
    }
    if !CORE_PATTERN.is_match(core) {
        return Err(ParseError::core(
            core,
            "expected MAJOR, MAJOR.MINOR or MAJOR.MINOR.PATCH made of decimal digits",
        ));
    }

    let numbers = core
        .split('.')
        .map(|segment| parse_core_segment(core, segment))
        .collect::<Result<Vec<u64>, ParseError>>()?;

    match numbers.as_slice() {
        [major] => Ok((*major, None, None)),
        [major, minor] => Ok((*major, Some(*minor), None)),
        [major, minor, patch] => Ok((*major, Some(*minor), Some(*patch))),
        _ => Err(ParseError::core(core, "too many components")),
    }
}

fn parse_core_segment(core: &str, segment: &str) -> Result<u64, ParseError> {
    if segment.len() > 1 && segment.starts_with('0') {
        return Err(ParseError::core(
            core,
            format!("leading zero in segment '{}'", segment),
        ));
    }
    segment.parse::<u64>().map_err(|_| {
        ParseError::core(
            core,
            format!("segment '{}' does not fit in 64 bits", segment),
        )
    })
}

fn parse_prerelease(section: &str) -> Result<Vec<PrereleaseIdentifier>, ParseError> {
    if section.is_empty() {
        return Err(ParseError::prerelease(section, "empty pre-release section"));
    }
    section.split('.').map(PrereleaseIdentifier::parse).collect()
}

fn parse_build(section: &str) -> Result<Vec<BuildIdentifier>, ParseError> {
    if section.is_empty() {
        return Err(ParseError::build(section, "empty build section"));
    }
    section.split('.').map(BuildIdentifier::parse).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_version() {
        let v = parse("3.265893.15-alpha.13.beta+exp.sha.315").unwrap();
        assert_eq!(v.major, 3);
        assert_eq!(v.minor, Some(265893));
        assert_eq!(v.patch, Some(15));
        assert_eq!(
            v.prerelease.unwrap(),
            vec![
                PrereleaseIdentifier::Alpha,
                PrereleaseIdentifier::Numeric(13),
                PrereleaseIdentifier::Beta,
            ]
        );
        assert_eq!(
            v.build.unwrap(),
            vec![
                BuildIdentifier::AlphaNumeric("exp".to_string()),
                BuildIdentifier::AlphaNumeric("sha".to_string()),
                BuildIdentifier::Digits("315".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_hyphens_stay_in_prerelease() {
        let v = parse("1.2.3-alpha-beta+3").unwrap();
        assert_eq!(
            v.prerelease.unwrap(),
            vec![PrereleaseIdentifier::AlphaNumeric("alpha-beta".to_string())]
        );
    }

    #[test]
    fn test_parse_build_may_contain_hyphens() {
        let v = parse("1.2.3-test+123-123-123-123").unwrap();
        assert_eq!(
            v.build.unwrap(),
            vec![BuildIdentifier::AlphaNumeric("123-123-123-123".to_string())]
        );
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(parse(""), Err(ParseError::EmptyInput));
    }

    #[test]
    fn test_parse_core_errors() {
        for input in ["01.0.0", ".0.0", "1.0.0.1", "1.x.0", "-alpha", "+123", "1..0", "1.0."] {
            assert!(
                matches!(parse(input), Err(ParseError::MalformedCore { .. })),
                "expected core error for '{}'",
                input
            );
        }
    }

    #[test]
    fn test_parse_core_overflow() {
        assert!(matches!(
            parse("18446744073709551616"),
            Err(ParseError::MalformedCore { .. })
        ));
        assert_eq!(parse("18446744073709551615").unwrap().major, u64::MAX);
    }

    #[test]
    fn test_parse_prerelease_errors() {
        for input in ["1-", "1.0.0-alpha..1", "1.1.1-alpha%", "1.0.0-01"] {
            assert!(
                matches!(parse(input), Err(ParseError::MalformedPrerelease { .. })),
                "expected pre-release error for '{}'",
                input
            );
        }
    }

    #[test]
    fn test_parse_build_errors() {
        for input in ["1+", "2-beta+23$", "18+123+something", "1.2.3-test+a+", "1+a..b"] {
            assert!(
                matches!(parse(input), Err(ParseError::MalformedBuild { .. })),
                "expected build error for '{}'",
                input
            );
        }
    }
}
