//! Interface compatibility matching.
//!
//! A provider satisfies a requirement when it implements the same major
//! version and is at least as new at minor/patch granularity. A requirement
//! may list several majors; the first alternative with the provider's major
//! is the one compared against.

use std::fmt;

use super::version::{parse_provided_version, parse_version_alternatives, Version};

/// Graded result of comparing a provided interface with a requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compatibility {
    /// Same major, provided minor is newer.
    NewerMinor,
    /// Same major and minor, provided patch is newer.
    NewerPatch,
    /// Same major, minor and patch.
    Exact,
    /// Same major and minor, provided patch is older.
    OlderPatch,
    /// Same major, provided minor is older.
    OlderMinor,
    /// Different id, unparseable version, or no alternative with the same major.
    Unmatched,
}

impl Compatibility {
    /// Whether this grade satisfies the requirement.
    pub fn is_compatible(self) -> bool {
        matches!(self, Self::NewerMinor | Self::NewerPatch | Self::Exact)
    }
}

impl fmt::Display for Compatibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::NewerMinor => "compatible (newer minor version)",
            Self::NewerPatch => "compatible (newer patch version)",
            Self::Exact => "compatible (same version)",
            Self::OlderPatch => "incompatible (older patch version)",
            Self::OlderMinor => "incompatible (older minor version)",
            Self::Unmatched => "incompatible (no matching interface version)",
        };
        f.write_str(text)
    }
}

/// Compare a provided interface against a required one.
pub fn compare(
    provided_id: &str,
    provided_version: &str,
    required_id: &str,
    required_expr: &str,
) -> Compatibility {
    if provided_id != required_id {
        return Compatibility::Unmatched;
    }

    let Some(provided) = parse_provided_version(provided_version) else {
        return Compatibility::Unmatched;
    };

    for alternative in parse_version_alternatives(required_expr).iter() {
        // An unreadable alternative ends the scan.
        let Some(required) = alternative else {
            return Compatibility::Unmatched;
        };
        if required.major == provided.major {
            return grade(&provided, required);
        }
    }

    Compatibility::Unmatched
}

fn grade(provided: &Version, required: &Version) -> Compatibility {
    use std::cmp::Ordering;

    match provided.minor.cmp(&required.minor) {
        Ordering::Greater => Compatibility::NewerMinor,
        Ordering::Less => Compatibility::OlderMinor,
        Ordering::Equal => match provided.patch.cmp(&required.patch) {
            Ordering::Greater => Compatibility::NewerPatch,
            Ordering::Equal => Compatibility::Exact,
            Ordering::Less => Compatibility::OlderPatch,
        },
    }
}

/// Decide whether a provided interface satisfies a requirement.
pub fn is_compatible(
    provided_id: &str,
    provided_version: &str,
    required_id: &str,
    required_expr: &str,
) -> bool {
    compare(provided_id, provided_version, required_id, required_expr).is_compatible()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_versions_are_compatible() {
        assert!(is_compatible("users", "1.2.3", "users", "1.2.3"));
        assert_eq!(compare("users", "1.2.3", "users", "1.2.3"), Compatibility::Exact);
    }

    #[test]
    fn matches_second_alternative() {
        assert!(is_compatible("X", "2.0.0", "X", "1.0.0 2.0.0"));
    }

    #[test]
    fn older_minor_is_incompatible() {
        assert!(!is_compatible("X", "1.5.0", "X", "1.6.0"));
        assert_eq!(compare("X", "1.5.0", "X", "1.6.0"), Compatibility::OlderMinor);
    }

    #[test]
    fn newer_minor_ignores_patch() {
        assert_eq!(compare("X", "1.7.0", "X", "1.6.9"), Compatibility::NewerMinor);
    }

    #[test]
    fn patch_comparison() {
        assert_eq!(compare("X", "1.6.2", "X", "1.6.1"), Compatibility::NewerPatch);
        assert_eq!(compare("X", "1.6.0", "X", "1.6.1"), Compatibility::OlderPatch);
    }

    #[test]
    fn id_mismatch_is_incompatible() {
        assert!(!is_compatible("X", "2.0.0", "Y", "2.0.0"));
    }

    #[test]
    fn ids_are_case_sensitive() {
        assert!(!is_compatible("users", "1.0", "Users", "1.0"));
    }

    #[test]
    fn newer_major_does_not_satisfy_older_requirement() {
        assert!(!is_compatible("X", "2.0", "X", "1.0"));
        assert!(!is_compatible("X", "1.0", "X", "2.0"));
    }

    #[test]
    fn two_part_requirement_accepts_any_patch() {
        assert!(is_compatible("X", "1.2.0", "X", "1.2"));
        assert!(is_compatible("X", "1.2", "X", "1.2"));
    }

    #[test]
    fn two_part_provider_is_older_than_explicit_patch() {
        assert!(!is_compatible("X", "1.2", "X", "1.2.0"));
    }

    #[test]
    fn empty_requirement_is_incompatible() {
        assert!(!is_compatible("X", "1.0", "X", ""));
    }

    #[test]
    fn unparseable_provided_version_is_incompatible() {
        assert!(!is_compatible("X", "one", "X", "1.0"));
        assert!(!is_compatible("X", "", "X", "1.0"));
    }

    #[test]
    fn provided_version_only_uses_first_token() {
        assert!(!is_compatible("X", "1.0 2.0", "X", "2.0"));
        assert!(is_compatible("X", "1.0 2.0", "X", "1.0"));
    }

    #[test]
    fn unreadable_alternative_stops_search() {
        assert!(!is_compatible("X", "2.0", "X", "1.0 beta 2.0"));
        assert!(is_compatible("X", "1.0", "X", "1.0 beta 2.0"));
    }

    #[test]
    fn first_alternative_with_same_major_decides() {
        assert!(!is_compatible("X", "1.3", "X", "1.4 1.2"));
    }

    #[test]
    fn compatibility_display() {
        assert!(Compatibility::Exact.to_string().starts_with("compatible"));
        assert!(Compatibility::Unmatched.to_string().starts_with("incompatible"));
    }
}
