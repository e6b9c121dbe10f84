//! Version tuples and alternative sets.
//!
//! An interface version is written `MAJOR.MINOR` or `MAJOR.MINOR.PATCH`.
//! Requirements may list several acceptable versions separated by
//! whitespace (`"1.0 2.3"`); those are parsed into [`VersionAlternatives`].
//! A provided version is always a single [`Version`].

use std::fmt;

/// A parsed `major.minor[.patch]` version.
///
/// A two-part version has no patch component. `None` orders below every
/// explicit patch, so `1.2` is older than `1.2.0` at patch granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: Option<u32>,
}

impl Version {
    /// Create a version with an explicit patch component.
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch: Some(patch),
        }
    }

    /// Create a two-part version.
    pub fn without_patch(major: u32, minor: u32) -> Self {
        Self {
            major,
            minor,
            patch: None,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.patch {
            Some(patch) => write!(f, "{}.{}.{}", self.major, self.minor, patch),
            None => write!(f, "{}.{}", self.major, self.minor),
        }
    }
}

/// Parse a single dot-separated version token.
///
/// Returns `None` unless the token has two or three parts that are all
/// non-negative integers.
pub fn parse_version_token(token: &str) -> Option<Version> {
    let parts: Vec<&str> = token.split('.').collect();
    if !(2..=3).contains(&parts.len()) {
        return None;
    }

    let mut numbers = Vec::with_capacity(3);
    for part in &parts {
        numbers.push(part.parse::<u32>().ok()?);
    }

    Some(Version {
        major: numbers[0],
        minor: numbers[1],
        patch: numbers.get(2).copied(),
    })
}

/// An ordered list of acceptable versions.
///
/// Unparseable tokens are kept as `None` so that position is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionAlternatives(Vec<Option<Version>>);

impl VersionAlternatives {
    /// Iterate over the alternatives in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Option<Version>> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Parse a whitespace-separated version expression.
pub fn parse_version_alternatives(expr: &str) -> VersionAlternatives {
    VersionAlternatives(expr.split_whitespace().map(parse_version_token).collect())
}

/// Parse the version a provider declares.
///
/// Only the first whitespace token is considered; a provided version is
/// never an alternative set.
pub fn parse_provided_version(version: &str) -> Option<Version> {
    version.split_whitespace().next().and_then(parse_version_token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_three_part_version() {
        assert_eq!(parse_version_token("3.2.1"), Some(Version::new(3, 2, 1)));
    }

    #[test]
    fn parses_two_part_version_without_patch() {
        let v = parse_version_token("3.2").unwrap();
        assert_eq!(v, Version::without_patch(3, 2));
        assert_ne!(v, Version::new(3, 2, 0));
    }

    #[test]
    fn rejects_wrong_part_counts() {
        assert_eq!(parse_version_token("3"), None);
        assert_eq!(parse_version_token("1.2.3.4"), None);
        assert_eq!(parse_version_token(""), None);
    }

    #[test]
    fn rejects_non_numeric_parts() {
        assert_eq!(parse_version_token("1.x"), None);
        assert_eq!(parse_version_token("1.2.beta"), None);
        assert_eq!(parse_version_token("-1.2"), None);
        assert_eq!(parse_version_token("1..2"), None);
    }

    #[test]
    fn display_round_trips() {
        for token in ["1.2", "1.2.3", "0.0", "10.20.30"] {
            assert_eq!(parse_version_token(token).unwrap().to_string(), token);
        }
    }

    #[test]
    fn missing_patch_orders_below_zero_patch() {
        assert!(Version::without_patch(1, 2).patch < Version::new(1, 2, 0).patch);
    }

    #[test]
    fn alternatives_preserve_order_and_invalid_entries() {
        let alts = parse_version_alternatives("1.0  bogus\t2.3.4");
        let collected: Vec<_> = alts.iter().copied().collect();
        assert_eq!(
            collected,
            vec![
                Some(Version::without_patch(1, 0)),
                None,
                Some(Version::new(2, 3, 4)),
            ]
        );
    }

    #[test]
    fn empty_expression_has_no_alternatives() {
        assert!(parse_version_alternatives("").is_empty());
        assert!(parse_version_alternatives("   ").is_empty());
    }

    #[test]
    fn provided_version_uses_first_token_only() {
        assert_eq!(
            parse_provided_version("2.1 3.0"),
            Some(Version::without_patch(2, 1))
        );
        assert_eq!(parse_provided_version(""), None);
    }
}
