//! Constraint types for version matching

pub mod constraint;
mod constraint_interface;
mod multi_constraint;
mod operator;

pub use constraint::Constraint;
pub use constraint_interface::ConstraintInterface;
pub use multi_constraint::MultiConstraint;
pub use operator::Operator;
