//! Convenience checks between two versions

use crate::constraint::{Constraint, ConstraintInterface};
use crate::Version;

/// Check if `left` and `right` have the same precedence
pub fn is_equal_to(left: &Version, right: &Version) -> bool {
    Constraint::equal_to(left.clone()).allows(right)
}

/// Check if `left` has a higher precedence than `right`
pub fn is_greater_than(left: &Version, right: &Version) -> bool {
    Constraint::greater_than(right.clone()).allows(left)
}

/// Check if `left` has a lower precedence than `right`
pub fn is_less_than(left: &Version, right: &Version) -> bool {
    Constraint::less_than(right.clone()).allows(left)
}
