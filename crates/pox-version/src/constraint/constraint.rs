//! Single version constraint implementation

use std::fmt;

use super::{ConstraintInterface, Operator};
use crate::comparator::compare;
use crate::Version;

/// A single version constraint (e.g., "> 1.2.3")
#[derive(Debug, Clone)]
pub struct Constraint {
    operator: Operator,
    version: Version,
}

impl Constraint {
    /// Create a new constraint
    pub fn new(operator: Operator, version: Version) -> Self {
        Constraint { operator, version }
    }

    /// Allow only versions with the same precedence as `version`
    pub fn equal_to(version: Version) -> Self {
        Self::new(Operator::EqualTo, version)
    }

    /// Allow only versions with a higher precedence than `version`
    pub fn greater_than(version: Version) -> Self {
        Self::new(Operator::GreaterThan, version)
    }

    /// Allow only versions with a lower precedence than `version`
    pub fn less_than(version: Version) -> Self {
        Self::new(Operator::LessThan, version)
    }

    /// Get the version
    pub fn version(&self) -> &Version {
        &self.version
    }

    /// Get the operator
    pub fn operator(&self) -> Operator {
        self.operator
    }
}

impl ConstraintInterface for Constraint {
    fn allows(&self, version: &Version) -> bool {
        self.operator.accepts(compare(&self.version, version))
    }

    fn clone_box(&self) -> Box<dyn ConstraintInterface> {
        Box::new(self.clone())
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.operator, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(version: &str) -> Version {
        Version::parse(version).unwrap()
    }

    #[test]
    fn test_equal_to() {
        let constraint = Constraint::equal_to(v("1.0.0"));

        assert!(constraint.allows(&v("1.0.0")));
        assert!(constraint.allows(&v("1.0.0+build.1")));
        assert!(!constraint.allows(&v("1.0.1")));
        assert!(!constraint.allows(&v("0.9.9")));
        assert!(!constraint.allows(&v("1.0.0-rc.1")));
    }

    #[test]
    fn test_greater_than() {
        let constraint = Constraint::greater_than(v("1.0.0"));

        assert!(constraint.allows(&v("2.0.0")));
        assert!(constraint.allows(&v("1.0.1-alpha")));
        assert!(!constraint.allows(&v("1.0.0")));
        assert!(!constraint.allows(&v("1.0.0-rc.1")));
        assert!(!constraint.allows(&v("0.1.0")));
    }

    #[test]
    fn test_less_than() {
        let constraint = Constraint::less_than(v("1.0.0"));

        assert!(constraint.allows(&v("0.1.0")));
        assert!(constraint.allows(&v("1.0.0-rc.1")));
        assert!(!constraint.allows(&v("1.0.0")));
        assert!(!constraint.allows(&v("1.0.0+build")));
        assert!(!constraint.allows(&v("2.0.0")));
    }

    #[test]
    fn test_accessors() {
        let constraint = Constraint::new(Operator::LessThan, v("2.0.0"));
        assert_eq!(constraint.operator(), Operator::LessThan);
        assert_eq!(constraint.version().to_string(), "2.0.0");
    }

    #[test]
    fn test_display() {
        assert_eq!(Constraint::equal_to(v("1.0.0")).to_string(), "== 1.0.0");
        assert_eq!(Constraint::greater_than(v("1.2.3-rc.1")).to_string(), "> 1.2.3-rc.1");
        assert_eq!(Constraint::less_than(v("2.0.0+b")).to_string(), "< 2.0.0+b");
    }
}
