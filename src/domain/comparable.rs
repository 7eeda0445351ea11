//! The semantic version capability shared by every version type
//!
//! Implementors only supply the five accessors. Equality, precedence, update
//! severity, compatibility and string rendering are default methods, so the
//! rules live in exactly one place.

use super::build::BuildIdentifier;
use super::prerelease::PrereleaseIdentifier;
use super::severity::UpdateSeverity;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

/// How to render a version core whose minor or patch was omitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CoreRendering {
    /// Render only the components that are present: `1`, `1.2`, `1.2.3`.
    #[default]
    Preserve,
    /// Always render `MAJOR.MINOR.PATCH`, filling absent components with 0.
    ZeroFill,
}

/// A type that can be read as a semantic version.
///
/// Absent `minor` and `patch` components count as `0` in every comparison.
///
/// # Example
/// ```
/// use semver_compare::{SemanticVersion, UpdateSeverity, Version};
///
/// let current = Version::parse("1.4").unwrap();
/// let candidate = Version::parse("1.4.1+exp").unwrap();
///
/// assert!(current.precedes(&candidate));
/// assert_eq!(current.compare(&candidate), UpdateSeverity::Patch);
/// assert!(current.is_compatible(&candidate));
/// ```
pub trait SemanticVersion {
    /// The `MAJOR` component.
    fn major(&self) -> u64;
    /// The `MINOR` component, if it was given.
    fn minor(&self) -> Option<u64>;
    /// The `PATCH` component, if it was given.
    fn patch(&self) -> Option<u64>;
    /// Pre-release identifiers, if any.
    fn prerelease(&self) -> Option<Cow<'_, [PrereleaseIdentifier]>>;
    /// Build metadata identifiers, if any.
    fn build(&self) -> Option<Cow<'_, [BuildIdentifier]>>;

    /// The version core as `[major, minor, patch]` with absent parts as 0.
    fn core(&self) -> [u64; 3] {
        [
            self.major(),
            self.minor().unwrap_or(0),
            self.patch().unwrap_or(0),
        ]
    }

    /// Whether both versions share the same `MAJOR.MINOR.PATCH`.
    fn has_equal_core<V: SemanticVersion + ?Sized>(&self, other: &V) -> bool {
        self.core() == other.core()
    }

    /// Equality ignoring build metadata.
    fn loosely_eq<V: SemanticVersion + ?Sized>(&self, other: &V) -> bool {
        let (lhs, rhs) = (self.prerelease(), other.prerelease());
        self.has_equal_core(other) && identifiers(&lhs) == identifiers(&rhs)
    }

    /// Equality including build metadata.
    fn strictly_eq<V: SemanticVersion + ?Sized>(&self, other: &V) -> bool {
        let (lhs, rhs) = (self.build(), other.build());
        self.loosely_eq(other) && identifiers(&lhs) == identifiers(&rhs)
    }

    /// Precedence of `self` relative to `other`. Build metadata is ignored.
    fn precedence<V: SemanticVersion + ?Sized>(&self, other: &V) -> Ordering {
        self.core().cmp(&other.core()).then_with(|| {
            let (lhs, rhs) = (self.prerelease(), other.prerelease());
            compare_prereleases(identifiers(&lhs), identifiers(&rhs))
        })
    }

    /// `self < other`
    fn precedes<V: SemanticVersion + ?Sized>(&self, other: &V) -> bool {
        self.precedence(other) == Ordering::Less
    }

    /// `self > other`
    fn succeeds<V: SemanticVersion + ?Sized>(&self, other: &V) -> bool {
        self.precedence(other) == Ordering::Greater
    }

    /// `self <= other`, where the equality leg is strict.
    ///
    /// Two versions that differ only in build metadata are neither ordered
    /// nor strictly equal, so this returns `false` for them.
    fn precedes_or_eq<V: SemanticVersion + ?Sized>(&self, other: &V) -> bool {
        self.strictly_eq(other) || self.precedes(other)
    }

    /// `self >= other`, where the equality leg is strict.
    fn succeeds_or_eq<V: SemanticVersion + ?Sized>(&self, other: &V) -> bool {
        self.strictly_eq(other) || self.succeeds(other)
    }

    /// Two versions are compatible when their major versions match.
    fn is_compatible<V: SemanticVersion + ?Sized>(&self, other: &V) -> bool {
        self.major() == other.major()
    }

    /// Classify `other` as an update over `self`.
    ///
    /// `self` must be the older version for a result other than
    /// [`UpdateSeverity::NoUpdate`].
    fn compare<V: SemanticVersion + ?Sized>(&self, other: &V) -> UpdateSeverity {
        let [major, minor, patch] = self.core();
        let [other_major, other_minor, other_patch] = other.core();

        if self.has_equal_core(other) {
            if self.precedes(other) {
                return UpdateSeverity::Prerelease;
            }
            let (lhs, rhs) = (self.build(), other.build());
            if identifiers(&lhs) != identifiers(&rhs)
                && self.prerelease_string() == other.prerelease_string()
            {
                return UpdateSeverity::Build;
            }
            return UpdateSeverity::NoUpdate;
        }

        if major == other_major && minor == other_minor && patch < other_patch {
            UpdateSeverity::Patch
        } else if major == other_major && minor < other_minor {
            UpdateSeverity::Minor
        } else if major < other_major {
            UpdateSeverity::Major
        } else {
            UpdateSeverity::NoUpdate
        }
    }

    /// Whether the version carries a non-empty pre-release.
    fn is_prerelease(&self) -> bool {
        self.prerelease().is_some_and(|ids| !ids.is_empty())
    }

    /// The `MAJOR.MINOR.PATCH` part, rendered with [`CoreRendering::Preserve`].
    fn core_string(&self) -> String {
        self.core_string_with(CoreRendering::Preserve)
    }

    /// The `MAJOR.MINOR.PATCH` part with an explicit rendering.
    fn core_string_with(&self, rendering: CoreRendering) -> String {
        let major = self.major();
        match (rendering, self.minor(), self.patch()) {
            (CoreRendering::ZeroFill, minor, patch) => {
                format!("{}.{}.{}", major, minor.unwrap_or(0), patch.unwrap_or(0))
            }
            // A patch without a minor only comes from structured construction.
            (CoreRendering::Preserve, minor, Some(patch)) => {
                format!("{}.{}.{}", major, minor.unwrap_or(0), patch)
            }
            (CoreRendering::Preserve, Some(minor), None) => format!("{}.{}", major, minor),
            (CoreRendering::Preserve, None, None) => major.to_string(),
        }
    }

    /// Pre-release identifiers joined with `.`, e.g. `alpha.1`.
    fn prerelease_string(&self) -> Option<String> {
        self.prerelease()
            .filter(|ids| !ids.is_empty())
            .map(|ids| join(&ids))
    }

    /// Build identifiers joined with `.`, e.g. `exp.sha.5114f85`.
    fn build_string(&self) -> Option<String> {
        self.build().filter(|ids| !ids.is_empty()).map(|ids| join(&ids))
    }

    /// Pre-release and build without the core, e.g. `alpha.1+exp`.
    ///
    /// A version with build metadata only yields the bare build, e.g. `500`.
    fn extension_string(&self) -> Option<String> {
        match (self.prerelease_string(), self.build_string()) {
            (Some(prerelease), Some(build)) => Some(format!("{}+{}", prerelease, build)),
            (Some(prerelease), None) => Some(prerelease),
            (None, Some(build)) => Some(build),
            (None, None) => None,
        }
    }

    /// The full `MAJOR.MINOR.PATCH-PRERELEASE+BUILD` string.
    fn absolute_string(&self) -> String {
        self.absolute_string_with(CoreRendering::Preserve)
    }

    /// The full version string with an explicit core rendering.
    fn absolute_string_with(&self, rendering: CoreRendering) -> String {
        let mut rendered = self.core_string_with(rendering);
        if let Some(prerelease) = self.prerelease_string() {
            rendered.push('-');
            rendered.push_str(&prerelease);
        }
        if let Some(build) = self.build_string() {
            rendered.push('+');
            rendered.push_str(&build);
        }
        rendered
    }
}

/// An absent identifier list reads as empty.
fn identifiers<'a, T: Clone>(list: &'a Option<Cow<'_, [T]>>) -> &'a [T] {
    list.as_deref().unwrap_or(&[])
}

/// A release ranks above any pre-release of the same core. Two pre-releases
/// compare element by element, and a shorter list that is a prefix of the
/// other ranks lower.
fn compare_prereleases(lhs: &[PrereleaseIdentifier], rhs: &[PrereleaseIdentifier]) -> Ordering {
    match (lhs.is_empty(), rhs.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => lhs.cmp(rhs),
    }
}

fn join<T: fmt::Display>(ids: &[T]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(".")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Version;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    #[test]
    fn test_compare_prereleases_release_ranks_higher() {
        let alpha = [PrereleaseIdentifier::Alpha];
        assert_eq!(compare_prereleases(&[], &alpha), Ordering::Greater);
        assert_eq!(compare_prereleases(&alpha, &[]), Ordering::Less);
        assert_eq!(compare_prereleases(&[], &[]), Ordering::Equal);
    }

    #[test]
    fn test_compare_prereleases_prefix_ranks_lower() {
        let short = [PrereleaseIdentifier::Alpha];
        let long = [PrereleaseIdentifier::Alpha, PrereleaseIdentifier::Numeric(1)];
        assert_eq!(compare_prereleases(&short, &long), Ordering::Less);
    }

    #[test]
    fn test_core_string_preserve() {
        assert_eq!(v("1").core_string(), "1");
        assert_eq!(v("1.0").core_string(), "1.0");
        assert_eq!(v("1.0.0").core_string(), "1.0.0");
    }

    #[test]
    fn test_core_string_zero_fill() {
        assert_eq!(v("1").core_string_with(CoreRendering::ZeroFill), "1.0.0");
        assert_eq!(v("1.5").core_string_with(CoreRendering::ZeroFill), "1.5.0");
    }

    #[test]
    fn test_core_string_patch_without_minor() {
        let version = Version {
            patch: Some(3),
            ..Version::from_major(1)
        };
        assert_eq!(version.core_string(), "1.0.3");
    }

    #[test]
    fn test_extension_string() {
        assert_eq!(v("1-beta.1+exval30").extension_string().unwrap(), "beta.1+exval30");
        assert_eq!(v("1+1").extension_string().unwrap(), "1");
        assert_eq!(v("1-rc").extension_string().unwrap(), "rc");
        assert_eq!(v("1.2.3").extension_string(), None);
    }

    #[test]
    fn test_absolute_string_with_zero_fill() {
        assert_eq!(
            v("2-alpha+7").absolute_string_with(CoreRendering::ZeroFill),
            "2.0.0-alpha+7"
        );
    }

    #[test]
    fn test_empty_lists_render_as_absent() {
        let version = Version::new(1, 0, 0)
            .with_prerelease(Vec::new())
            .with_build(Vec::new());
        assert_eq!(version.absolute_string(), "1.0.0");
        assert!(!version.is_prerelease());
    }

    #[test]
    fn test_strict_leg_of_precedes_or_eq() {
        let master = v("300.0+master");
        let develop = v("300.0+develop");
        assert!(master.loosely_eq(&develop));
        assert!(!master.strictly_eq(&develop));
        assert!(!master.precedes_or_eq(&develop));
        assert!(!master.succeeds_or_eq(&develop));
        assert!(master.precedes_or_eq(&master));
    }

    #[test]
    fn test_compare_uses_zero_for_absent_minor() {
        assert_eq!(v("1").compare(&v("1.0.1")), UpdateSeverity::Patch);
        assert_eq!(v("1").compare(&v("1.1")), UpdateSeverity::Minor);
    }
}
