//! Semantic version number value object

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::comparator::{compare, is_numeric_identifier};
use crate::version_parser::{self, VersionParserError};

/// A semantic version number, as defined by SemVer 2.0.0
///
/// Versions are immutable: every transformation returns a new value.
///
/// Equality, ordering and hashing follow version precedence, so build
/// metadata is ignored and numeric pre-release identifiers compare by value
/// (`1.0.0+a == 1.0.0+b`, `1.0.0-01 == 1.0.0-1`).
#[derive(Debug, Clone)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    pre_release: Vec<String>,
    build: Vec<String>,
}

impl Version {
    /// Create a new version from its components
    pub fn new<P, B>(major: u64, minor: u64, patch: u64, pre_release: P, build: B) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        B: IntoIterator,
        B::Item: Into<String>,
    {
        Version {
            major,
            minor,
            patch,
            pre_release: pre_release.into_iter().map(Into::into).collect(),
            build: build.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a version string
    pub fn parse(version: &str) -> Result<Self, VersionParserError> {
        version_parser::parse(version)
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// The pre-release identifiers, in order
    pub fn pre_release(&self) -> &[String] {
        &self.pre_release
    }

    /// The build metadata identifiers, in order
    pub fn build(&self) -> &[String] {
        &self.build
    }

    /// Check if the version is stable.
    ///
    /// A version with a major version of `0` or with any pre-release
    /// identifiers is unstable.
    pub fn is_stable(&self) -> bool {
        self.major > 0 && self.pre_release.is_empty()
    }

    pub fn with_major(&self, major: u64) -> Self {
        Version {
            major,
            ..self.clone()
        }
    }

    pub fn with_minor(&self, minor: u64) -> Self {
        Version {
            minor,
            ..self.clone()
        }
    }

    pub fn with_patch(&self, patch: u64) -> Self {
        Version {
            patch,
            ..self.clone()
        }
    }

    pub fn with_pre_release<I>(&self, pre_release: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Version {
            pre_release: pre_release.into_iter().map(Into::into).collect(),
            ..self.clone()
        }
    }

    pub fn with_build<I>(&self, build: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Version {
            build: build.into_iter().map(Into::into).collect(),
            ..self.clone()
        }
    }

    /// Increment the major version number by `amount`.
    ///
    /// Minor and patch are reset to `0` and all metadata is cleared.
    pub fn increment_major(&self, amount: u64) -> Self {
        Version::release(self.major.saturating_add(amount), 0, 0)
    }

    /// Increment the minor version number by `amount`.
    ///
    /// Patch is reset to `0` and all metadata is cleared.
    pub fn increment_minor(&self, amount: u64) -> Self {
        Version::release(self.major, self.minor.saturating_add(amount), 0)
    }

    /// Increment the patch version number by `amount`, clearing all metadata
    pub fn increment_patch(&self, amount: u64) -> Self {
        Version::release(self.major, self.minor, self.patch.saturating_add(amount))
    }

    /// Shorthand for `increment_major(1)`
    pub fn bump_major(&self) -> Self {
        self.increment_major(1)
    }

    /// Shorthand for `increment_minor(1)`
    pub fn bump_minor(&self) -> Self {
        self.increment_minor(1)
    }

    /// Shorthand for `increment_patch(1)`
    pub fn bump_patch(&self) -> Self {
        self.increment_patch(1)
    }

    pub fn is_equal_to(&self, other: &Version) -> bool {
        crate::compare::is_equal_to(self, other)
    }

    pub fn is_greater_than(&self, other: &Version) -> bool {
        crate::compare::is_greater_than(self, other)
    }

    pub fn is_less_than(&self, other: &Version) -> bool {
        crate::compare::is_less_than(self, other)
    }

    fn release(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            pre_release: Vec::new(),
            build: Vec::new(),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;

        if !self.pre_release.is_empty() {
            write!(f, "-{}", self.pre_release.join("."))?;
        }

        if !self.build.is_empty() {
            write!(f, "+{}", self.build.join("."))?;
        }

        Ok(())
    }
}

impl FromStr for Version {
    type Err = VersionParserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        version_parser::parse(s)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        compare(self, other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);

        self.pre_release.len().hash(state);
        for identifier in &self.pre_release {
            if is_numeric_identifier(identifier) {
                // "01" and "1" are equal, so they must hash alike
                let trimmed = identifier.trim_start_matches('0');
                0u8.hash(state);
                trimmed.hash(state);
            } else {
                1u8.hash(state);
                identifier.hash(state);
            }
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
        version_parser::parse(&raw).map_err(serde::de::Error::custom)
    }
}
