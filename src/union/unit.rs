//! The unit type: a single value carrying no information.

use crate::structural::{StructuralDisplay, StructuralHash};
use crate::typeclass::{Monoid, Semigroup};

/// A value with no information content; all instances compare equal.
///
/// Useful as the payload of a union when only the variant matters, for
/// example an `Update<Unit>` that can only set-or-clear a flag, or an
/// `Either<Unit, T>` whose left side is a bare marker.
///
/// Renders as `Unit`.
///
/// # Examples
///
/// ```rust
/// use funrs::union::Unit;
///
/// assert_eq!(Unit, Unit);
/// assert_eq!(Unit.to_string(), "Unit");
/// ```
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, StructuralDisplay, StructuralHash,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit;

impl From<()> for Unit {
    fn from((): ()) -> Self {
        Self
    }
}

impl From<Unit> for () {
    fn from(_: Unit) -> Self {}
}

impl Semigroup for Unit {
    fn combine(self, _other: Self) -> Self {
        Self
    }
}

impl Monoid for Unit {
    fn empty() -> Self {
        Self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_all_instances_compare_equal() {
        assert_eq!(Unit, Unit);
        assert_eq!(Unit.structural_hash(), Unit.structural_hash());
    }

    #[rstest]
    fn test_render() {
        assert_eq!(Unit.to_string(), "Unit");
    }

    #[rstest]
    fn test_monoid_is_trivial() {
        assert_eq!(Unit.combine(Unit), Unit);
        assert_eq!(Unit::empty(), Unit);
        assert_eq!(Monoid::combine_all(vec![Unit, Unit, Unit]), Unit);
    }

    #[rstest]
    fn test_unit_round_trips_with_the_primitive() {
        assert_eq!(Unit::from(()), Unit);
        let _: () = Unit.into();
    }
}
