//! Sorting and filtering lists of versions

use crate::constraint::ConstraintInterface;
use crate::Version;

/// Sort versions in ascending order of precedence.
///
/// Versions with the same precedence keep their input order.
pub fn sort(versions: &[Version]) -> Vec<Version> {
    usort(versions, true)
}

/// Sort versions in descending order of precedence (reverse sort)
pub fn rsort(versions: &[Version]) -> Vec<Version> {
    usort(versions, false)
}

/// Return all versions allowed by the constraint, in input order
pub fn satisfied_by(versions: &[Version], constraint: &dyn ConstraintInterface) -> Vec<Version> {
    versions
        .iter()
        .filter(|version| constraint.allows(version))
        .cloned()
        .collect()
}

fn usort(versions: &[Version], ascending: bool) -> Vec<Version> {
    let mut sorted = versions.to_vec();

    sorted.sort_by(|a, b| {
        if ascending {
            a.cmp(b)
        } else {
            b.cmp(a)
        }
    });

    sorted
}
