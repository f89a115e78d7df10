//! Operator types for version constraints

use std::cmp::Ordering;
use std::fmt;

/// Comparison operators for version constraints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Equal (==)
    EqualTo,
    /// Greater than (>)
    GreaterThan,
    /// Less than (<)
    LessThan,
}

impl Operator {
    /// Get the string representation of the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::EqualTo => "==",
            Operator::GreaterThan => ">",
            Operator::LessThan => "<",
        }
    }

    /// Check if the ordering of the constraint version against a candidate
    /// satisfies this operator.
    ///
    /// The ordering is read from the constraint's side: a candidate is
    /// greater than the constraint version when the constraint version
    /// compares as [`Ordering::Less`].
    pub fn accepts(&self, ordering: Ordering) -> bool {
        match self {
            Operator::EqualTo => ordering == Ordering::Equal,
            Operator::GreaterThan => ordering == Ordering::Less,
            Operator::LessThan => ordering == Ordering::Greater,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
