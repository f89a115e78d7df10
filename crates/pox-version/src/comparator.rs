//! Version precedence

use std::cmp::Ordering;

use crate::Version;

/// Compare two versions by precedence.
///
/// Major, minor and patch are compared numerically, in that order. A version
/// without pre-release identifiers has a higher precedence than one with
/// them; otherwise the identifiers are compared pairwise from left to right
/// and a shorter list that is a prefix of the longer one has the lower
/// precedence. Build metadata is never consulted.
pub fn compare(a: &Version, b: &Version) -> Ordering {
    a.major()
        .cmp(&b.major())
        .then_with(|| a.minor().cmp(&b.minor()))
        .then_with(|| a.patch().cmp(&b.patch()))
        .then_with(|| compare_pre_release(a.pre_release(), b.pre_release()))
}

fn compare_pre_release(a: &[String], b: &[String]) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            for (left, right) in a.iter().zip(b) {
                match compare_identifiers(left, right) {
                    Ordering::Equal => continue,
                    other => return other,
                }
            }

            a.len().cmp(&b.len())
        }
    }
}

/// Compare two pre-release identifiers.
///
/// Numeric identifiers always have a lower precedence than alphanumeric
/// ones. Two numeric identifiers compare by value, two alphanumeric
/// identifiers compare by their bytes.
pub fn compare_identifiers(a: &str, b: &str) -> Ordering {
    match (is_numeric_identifier(a), is_numeric_identifier(b)) {
        (true, true) => compare_numeric(a, b),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.as_bytes().cmp(b.as_bytes()),
    }
}

/// Check if an identifier consists of ASCII digits only
pub(crate) fn is_numeric_identifier(identifier: &str) -> bool {
    !identifier.is_empty() && identifier.bytes().all(|b| b.is_ascii_digit())
}

// Works on the digits directly so identifiers longer than u64 never overflow.
fn compare_numeric(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');

    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Comparator for comparing versions
pub struct Comparator;

impl Comparator {
    /// Check if version1 > version2
    pub fn greater_than(version1: &Version, version2: &Version) -> bool {
        compare(version1, version2) == Ordering::Greater
    }

    /// Check if version1 >= version2
    pub fn greater_than_or_equal_to(version1: &Version, version2: &Version) -> bool {
        compare(version1, version2) != Ordering::Less
    }

    /// Check if version1 < version2
    pub fn less_than(version1: &Version, version2: &Version) -> bool {
        compare(version1, version2) == Ordering::Less
    }

    /// Check if version1 <= version2
    pub fn less_than_or_equal_to(version1: &Version, version2: &Version) -> bool {
        compare(version1, version2) != Ordering::Greater
    }

    /// Check if version1 == version2
    pub fn equal_to(version1: &Version, version2: &Version) -> bool {
        compare(version1, version2) == Ordering::Equal
    }

    /// Check if version1 != version2
    pub fn not_equal_to(version1: &Version, version2: &Version) -> bool {
        compare(version1, version2) != Ordering::Equal
    }
}
