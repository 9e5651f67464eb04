//! The `Alternative` typeclass: choice between fallible computations.

use super::applicative::Applicative;

/// An applicative with an empty case and a left-biased choice operator.
///
/// # Laws
///
/// ## Left identity
///
/// `Self::empty().alt(x) == x`
///
/// ## Right identity
///
/// `x.alt(Self::empty()) == x`
///
/// ## Associativity
///
/// `x.alt(y).alt(z) == x.alt(y.alt(z))`
///
/// # Examples
///
/// ```rust
/// use funrs::typeclass::Alternative;
/// use funrs::union::Option;
///
/// let chosen = Option::<i32>::none().alt(Option::some(2)).alt(Option::some(3));
/// assert_eq!(chosen, Option::some(2));
/// ```
pub trait Alternative: Applicative {
    /// The empty computation: the identity of [`alt`](Alternative::alt).
    fn empty<B>() -> Self::WithType<B>;

    /// Returns `self` unless it is empty, otherwise `alternative`.
    #[must_use]
    fn alt(self, alternative: Self) -> Self;

    /// Succeeds with `()` when `condition` holds, otherwise is empty.
    fn guard(condition: bool) -> Self::WithType<()>
    where
        Self: Sized,
    {
        if condition {
            Self::pure(())
        } else {
            Self::empty()
        }
    }

    /// Folds `alternatives` with [`alt`](Alternative::alt), keeping the first
    /// non-empty one.
    fn choice<I>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized;
}
