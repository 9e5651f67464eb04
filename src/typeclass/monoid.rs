//! The `Monoid` typeclass: associative combination with an identity.

use super::semigroup::Semigroup;

/// A semigroup with an identity element.
///
/// # Laws
///
/// ## Left identity
///
/// `Self::empty().combine(x) == x`
///
/// ## Right identity
///
/// `x.combine(Self::empty()) == x`
///
/// # Examples
///
/// ```rust
/// use funrs::list;
/// use funrs::typeclass::Monoid;
/// use funrs::union::List;
///
/// assert_eq!(List::<i32>::empty(), list![]);
/// assert_eq!(Monoid::combine_all(vec![list![1], list![2, 3]]), list![1, 2, 3]);
/// ```
pub trait Monoid: Semigroup {
    /// The identity element of [`combine`](Semigroup::combine).
    fn empty() -> Self;

    /// Combines every element of `iterator`, starting from the identity.
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator.into_iter().fold(Self::empty(), Semigroup::combine)
    }
}
