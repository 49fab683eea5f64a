//! Version range type and evaluation.

use semver::{Version, VersionReq};
use thiserror::Error;

/// Errors that can occur when parsing versions and version ranges.
#[derive(Debug, Error)]
pub enum VersionRangeError {
    /// The range expression syntax is invalid.
    #[error("Invalid version range '{range}': {message}")]
    SyntaxError {
        /// The offending range expression.
        range: String,
        /// What went wrong.
        message: String,
    },

    /// The version string is not a valid semantic version.
    #[error("Invalid version '{version}': {source}")]
    InvalidVersion {
        /// The offending version string.
        version: String,
        /// The underlying parse error.
        source: semver::Error,
    },
}

/// A parsed version range expression.
///
/// A range is a list of alternatives joined by `||`; each alternative is a
/// set of comparators that must all hold. An alternative without comparators
/// accepts any release version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRange {
    pub(super) source: String,
    pub(super) alternatives: Vec<VersionReq>,
}

impl VersionRange {
    /// Returns the range that accepts every release version (`*`).
    #[must_use]
    pub fn any() -> Self {
        Self {
            source: "*".to_string(),
            alternatives: vec![VersionReq::STAR],
        }
    }

    /// Returns true if the version satisfies at least one alternative.
    ///
    /// Pre-release versions only match comparators that name the same
    /// `major.minor.patch` with a pre-release tag.
    #[must_use]
    pub fn matches(&self, version: &Version) -> bool {
        self.alternatives.iter().any(|req| req.matches(version))
    }

    /// Returns true if the range places no restriction on release versions.
    ///
    /// This is the only kind of range that can be evaluated without a
    /// well-formed version.
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.alternatives
            .iter()
            .any(|req| req.comparators.is_empty())
    }

    /// Returns the expression this range was parsed from.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl Default for VersionRange {
    fn default() -> Self {
        Self::any()
    }
}

impl std::fmt::Display for VersionRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}

impl std::str::FromStr for VersionRange {
    type Err = VersionRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::parse_range(s)
    }
}

/// Parses a target version string such as `"7.10.0"`.
///
/// Surrounding whitespace and a leading `=` or `v` are ignored.
///
/// # Errors
///
/// Returns [`VersionRangeError::InvalidVersion`] if the string is not a full
/// `major.minor.patch` semantic version.
///
/// # Examples
///
/// ```
/// use shared::version::parse_version;
///
/// assert_eq!(parse_version("v7.10.0").unwrap().minor, 10);
/// assert!(parse_version("7.10").is_err());
/// ```
pub fn parse_version(input: &str) -> Result<Version, VersionRangeError> {
    let trimmed = input.trim();
    let stripped = trimmed.strip_prefix('=').unwrap_or(trimmed).trim_start();
    let stripped = stripped.strip_prefix('v').unwrap_or(stripped);

    Version::parse(stripped).map_err(|source| VersionRangeError::InvalidVersion {
        version: input.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn version(s: &str) -> Version {
        parse_version(s).unwrap()
    }

    #[test]
    fn test_parse_version_plain() {
        let v = version("7.10.0");
        assert_eq!((v.major, v.minor, v.patch), (7, 10, 0));
    }

    #[test]
    fn test_parse_version_prefixes() {
        assert_eq!(version("v8.2.0"), version("8.2.0"));
        assert_eq!(version("=8.2.0"), version("8.2.0"));
        assert_eq!(version("  8.2.0 "), version("8.2.0"));
    }

    #[test]
    fn test_parse_version_malformed() {
        for input in ["", "7", "7.10", "seven", "7.10.0.1"] {
            let result = parse_version(input);
            assert!(
                matches!(result, Err(VersionRangeError::InvalidVersion { .. })),
                "expected {input:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_any_range() {
        let range = VersionRange::any();
        assert!(range.is_unrestricted());
        assert!(range.matches(&version("0.0.1")));
        assert!(range.matches(&version("99.0.0")));
        assert_eq!(range.to_string(), "*");
    }

    #[test]
    fn test_any_range_excludes_prerelease() {
        assert!(!VersionRange::any().matches(&version("8.0.0-rc1")));
    }

    #[test]
    fn test_default_is_any() {
        assert_eq!(VersionRange::default(), VersionRange::any());
    }
}
