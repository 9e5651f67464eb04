//! The `Foldable` typeclass: reducing a container to a summary value.

use super::higher::TypeConstructor;
use super::monoid::Monoid;

/// A container whose elements can be folded into a single value.
///
/// # Examples
///
/// ```rust
/// use funrs::list;
/// use funrs::typeclass::Foldable;
///
/// let total = list![1, 2, 3, 4].fold_left(0, |sum, value| sum + value);
/// assert_eq!(total, 10);
/// ```
pub trait Foldable: TypeConstructor {
    /// Folds the elements left to right.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds the elements right to left.
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Maps every element into a monoid and combines the results.
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
        Self: Sized,
    {
        self.fold_left(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// Collects the elements into a `Vec`, left to right.
    fn to_vec(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        })
    }
}
