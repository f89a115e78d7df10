//! Strict semantic versioning library
//!
//! This crate parses and validates version numbers as defined by
//! [SemVer 2.0.0](https://semver.org/spec/v2.0.0.html), compares them by
//! precedence, and composes simple constraints (`==`, `>`, `<`, AND, OR)
//! to match versions against ranges.
//!
//! ```
//! use pox_version::{Constraint, ConstraintInterface, MultiConstraint, Version};
//!
//! let range = MultiConstraint::and_x(vec![
//!     Box::new(Constraint::greater_than(Version::parse("1.2.3").unwrap())),
//!     Box::new(Constraint::less_than(Version::parse("2.0.0").unwrap())),
//! ]);
//!
//! assert!(range.allows(&Version::parse("1.5.0").unwrap()));
//! assert!(!range.allows(&Version::parse("2.0.0").unwrap()));
//! ```

pub mod compare;
pub mod constraint;
mod comparator;
mod sort;
mod version;
mod version_parser;

pub use comparator::{compare, compare_identifiers, Comparator};
pub use constraint::{Constraint, ConstraintInterface, MultiConstraint, Operator};
pub use sort::{rsort, satisfied_by, sort};
pub use version::Version;
pub use version_parser::{is_valid, parse, parse_components, Components, VersionParserError};
