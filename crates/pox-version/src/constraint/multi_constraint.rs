//! MultiConstraint - compound constraint combining multiple constraints

use std::fmt;

use super::ConstraintInterface;
use crate::Version;

/// A constraint combining multiple constraints with AND (conjunctive) or OR (disjunctive) logic
///
/// Children are evaluated in order and evaluation stops as soon as the
/// result is known. An empty conjunction allows every version, an empty
/// disjunction allows none.
#[derive(Debug, Clone)]
pub struct MultiConstraint {
    constraints: Vec<Box<dyn ConstraintInterface>>,
    conjunctive: bool,
}

impl MultiConstraint {
    /// Create a new MultiConstraint
    pub fn new(constraints: Vec<Box<dyn ConstraintInterface>>, conjunctive: bool) -> Self {
        MultiConstraint {
            constraints,
            conjunctive,
        }
    }

    /// Require that every constraint allows a version
    pub fn and_x(constraints: Vec<Box<dyn ConstraintInterface>>) -> Self {
        Self::new(constraints, true)
    }

    /// Require that at least one constraint allows a version
    pub fn or_x(constraints: Vec<Box<dyn ConstraintInterface>>) -> Self {
        Self::new(constraints, false)
    }

    /// Get the constraints
    pub fn constraints(&self) -> &[Box<dyn ConstraintInterface>] {
        &self.constraints
    }

    /// Check if this is a conjunctive (AND) constraint
    pub fn is_conjunctive(&self) -> bool {
        self.conjunctive
    }

    /// Check if this is a disjunctive (OR) constraint
    pub fn is_disjunctive(&self) -> bool {
        !self.conjunctive
    }
}

impl ConstraintInterface for MultiConstraint {
    fn allows(&self, version: &Version) -> bool {
        if self.conjunctive {
            self.constraints.iter().all(|constraint| constraint.allows(version))
        } else {
            self.constraints.iter().any(|constraint| constraint.allows(version))
        }
    }

    fn clone_box(&self) -> Box<dyn ConstraintInterface> {
        Box::new(self.clone())
    }
}

impl fmt::Display for MultiConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let constraints_str: Vec<String> = self.constraints.iter().map(|c| c.to_string()).collect();

        let separator = if self.conjunctive { " " } else { " || " };
        write!(f, "[{}]", constraints_str.join(separator))
    }
}
