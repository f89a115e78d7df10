//! Version string validation and decomposition

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::Version;

/// Error type for version parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionParserError {
    #[error("The string \"{0}\" is not a valid representation of a semantic version number.")]
    InvalidFormat(String),
}

lazy_static! {
    /// A single pre-release or build identifier
    static ref IDENTIFIER_REGEX: &'static str = r"[0-9A-Za-z-]+";

    /// A numeric version field, no leading zeros
    static ref NUMBER_REGEX: &'static str = r"(?:0|[1-9][0-9]*)";

    // Full SemVer 2.0.0 grammar. `$` only matches at the end of the input.
    static ref SEMVER_RE: Regex = Regex::new(&format!(
        r"^{num}\.{num}\.{num}(?:-{id}(?:\.{id})*)?(?:\+{id}(?:\.{id})*)?$",
        num = *NUMBER_REGEX,
        id = *IDENTIFIER_REGEX,
    )).unwrap();
}

/// The components of a version string, as produced by [`parse_components`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Components {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub pre_release: Vec<String>,
    pub build: Vec<String>,
}

impl From<Components> for Version {
    fn from(components: Components) -> Self {
        Version::new(
            components.major,
            components.minor,
            components.patch,
            components.pre_release,
            components.build,
        )
    }
}

/// Check if a string is a well-formed semantic version number.
///
/// Leading zeros in the major, minor or patch number, empty identifiers and
/// characters outside of `[0-9A-Za-z-]` all invalidate the string. Leading
/// zeros are allowed in pre-release and build identifiers.
///
/// ```
/// use pox_version::is_valid;
///
/// assert!(is_valid("1.2.3-alpha.1+2016"));
/// assert!(!is_valid("01.2.3"));
/// ```
pub fn is_valid(version: &str) -> bool {
    SEMVER_RE.is_match(version)
}

/// Break a version string apart into its components.
///
/// The string is validated before it is split, so malformed input never
/// produces a partial result.
///
/// ```
/// use pox_version::parse_components;
///
/// let components = parse_components("1.2.3-alpha.1+20161004").unwrap();
/// assert_eq!(components.pre_release, vec!["alpha", "1"]);
/// assert_eq!(components.build, vec!["20161004"]);
/// ```
pub fn parse_components(version: &str) -> Result<Components, VersionParserError> {
    if !is_valid(version) {
        log::trace!("Rejected version string {:?}", version);
        return Err(VersionParserError::InvalidFormat(version.to_string()));
    }

    let (rest, build) = match version.split_once('+') {
        Some((rest, build)) => (rest, identifiers(build)),
        None => (version, Vec::new()),
    };

    let (number, pre_release) = match rest.split_once('-') {
        Some((number, pre)) => (number, identifiers(pre)),
        None => (rest, Vec::new()),
    };

    let mut parts = number.split('.');
    let mut next_number = || -> Result<u64, VersionParserError> {
        parts
            .next()
            .and_then(|part| part.parse::<u64>().ok())
            .ok_or_else(|| {
                log::trace!("Version number out of range in {:?}", version);
                VersionParserError::InvalidFormat(version.to_string())
            })
    };

    let major = next_number()?;
    let minor = next_number()?;
    let patch = next_number()?;

    Ok(Components {
        major,
        minor,
        patch,
        pre_release,
        build,
    })
}

/// Parse a version string into a [`Version`]
pub fn parse(version: &str) -> Result<Version, VersionParserError> {
    parse_components(version).map(Version::from)
}

fn identifiers(section: &str) -> Vec<String> {
    section.split('.').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid() {
        // Malformed numbers
        assert!(!is_valid("x.0.0"));
        assert!(!is_valid("0.x.0"));
        assert!(!is_valid("0.0.x"));
        assert!(!is_valid("-1.0.0"));
        assert!(!is_valid("0.-1.0"));
        assert!(!is_valid("0.0.-1"));
        assert!(!is_valid("1.2"));
        assert!(!is_valid("1.2.3.4"));
        assert!(!is_valid(""));

        // Leading zeros
        assert!(!is_valid("00.0.0"));
        assert!(!is_valid("0.00.0"));
        assert!(!is_valid("0.0.00"));
        assert!(!is_valid("00.00.00"));
        assert!(!is_valid("01.2.3"));

        // Empty or malformed metadata
        assert!(!is_valid("0.0.0-"));
        assert!(!is_valid("0.0.0+"));
        assert!(!is_valid("1.2.3-"));
        assert!(!is_valid("0.0.0-!"));
        assert!(!is_valid("0.0.0+!"));
        assert!(!is_valid("0.0.0+0+0"));
        assert!(!is_valid("1.2.3-alpha..1"));
        assert!(!is_valid("1.2.3-alpha."));
        assert!(!is_valid("1.2.3+.build"));

        // Anything around the version
        assert!(!is_valid("v1.2.3"));
        assert!(!is_valid(" 1.2.3"));
        assert!(!is_valid("1.2.3\n"));

        assert!(is_valid("0.0.0"));
        assert!(is_valid("1.0.0"));
        assert!(is_valid("0.1.0"));
        assert!(is_valid("0.0.1"));
        assert!(is_valid("1.1.1"));
        assert!(is_valid("1.2.3"));
        assert!(is_valid("10.0.0"));
        assert!(is_valid("0.10.0"));
        assert!(is_valid("0.0.10"));
        assert!(is_valid("10.10.10"));

        assert!(is_valid("0.0.0+0"));
        assert!(is_valid("0.0.0-0"));
        assert!(is_valid("0.0.0-0+0"));
        assert!(is_valid("0.0.0-0-0"));
        assert!(is_valid("0.0.0+0-0"));
        assert!(is_valid("0.0.0-a-a"));
        assert!(is_valid("0.0.0-a+a"));
        assert!(is_valid("0.0.0+a-a"));
        assert!(is_valid("1.2.3-alpha.1+2016"));
        assert!(is_valid("1.2.3-01"));
        assert!(is_valid("1.2.3+001"));
    }

    #[test]
    fn test_parse_components() {
        assert_eq!(
            parse_components("1.2.3-alpha.1+20161004").unwrap(),
            Components {
                major: 1,
                minor: 2,
                patch: 3,
                pre_release: vec!["alpha".to_string(), "1".to_string()],
                build: vec!["20161004".to_string()],
            }
        );

        assert_eq!(
            parse_components("1.2.3").unwrap(),
            Components {
                major: 1,
                minor: 2,
                patch: 3,
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_parse_components_splits_build_before_pre_release() {
        // The dash belongs to the build metadata, not a pre-release section
        let components = parse_components("1.0.0+x86-64.20161004").unwrap();
        assert!(components.pre_release.is_empty());
        assert_eq!(components.build, vec!["x86-64", "20161004"]);

        // Only the first dash starts the pre-release
        let components = parse_components("1.0.0-rc-1.2+b-1").unwrap();
        assert_eq!(components.pre_release, vec!["rc-1", "2"]);
        assert_eq!(components.build, vec!["b-1"]);
    }

    #[test]
    fn test_parse_components_invalid() {
        assert_eq!(
            parse_components("x.y.z"),
            Err(VersionParserError::InvalidFormat("x.y.z".to_string()))
        );
        assert!(parse_components("1.2.3-").is_err());
        assert!(parse_components("1.2.3+a+b").is_err());
    }

    #[test]
    fn test_parse_components_overflow() {
        let too_big = "18446744073709551616.0.0";
        assert!(is_valid(too_big));
        assert_eq!(
            parse_components(too_big),
            Err(VersionParserError::InvalidFormat(too_big.to_string()))
        );

        let max = parse_components("18446744073709551615.0.0").unwrap();
        assert_eq!(max.major, u64::MAX);
    }

    #[test]
    fn test_parse() {
        let version = parse("1.2.3-alpha.1+20161004").unwrap();
        assert_eq!(version.major(), 1);
        assert_eq!(version.minor(), 2);
        assert_eq!(version.patch(), 3);
        assert_eq!(version.pre_release(), ["alpha", "1"]);
        assert_eq!(version.build(), ["20161004"]);
    }

    #[test]
    fn test_parse_round_trip() {
        for input in [
            "0.0.0",
            "1.2.3",
            "10.20.30",
            "1.0.0-alpha",
            "1.0.0-alpha.1",
            "1.0.0-0.3.7",
            "1.0.0-x.7.z.92",
            "1.0.0-x-y-z.--",
            "1.0.0-01",
            "1.0.0+20130313144700",
            "1.0.0-beta+exp.sha.5114f85",
            "1.0.0+21AF26D3----117B344092BD",
        ] {
            assert_eq!(parse(input).unwrap().to_string(), input);
        }
    }

    #[test]
    fn test_error_message() {
        let err = parse("x.y.z").unwrap_err();
        assert_eq!(
            err.to_string(),
            "The string \"x.y.z\" is not a valid representation of a semantic version number."
        );
    }
}
