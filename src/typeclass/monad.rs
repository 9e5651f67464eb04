//! The `Monad` typeclass: sequencing dependent computations.

use super::applicative::Applicative;

/// An applicative whose computations may depend on earlier results.
///
/// # Laws
///
/// ## Left identity
///
/// `Self::pure(a).flat_map(f) == f(a)`
///
/// ## Right identity
///
/// `m.flat_map(Self::pure) == m`
///
/// ## Associativity
///
/// `m.flat_map(f).flat_map(g) == m.flat_map(|a| f(a).flat_map(g))`
///
/// # Examples
///
/// ```rust
/// use funrs::typeclass::Monad;
/// use funrs::union::Option;
///
/// fn checked_half(value: i32) -> Option<i32> {
///     if value % 2 == 0 { Option::some(value / 2) } else { Option::none() }
/// }
///
/// assert_eq!(Option::some(8).flat_map(checked_half), Option::some(4));
/// assert_eq!(Option::some(7).flat_map(checked_half), Option::none());
/// ```
pub trait Monad: Applicative {
    /// Sequences a dependent computation, flattening the result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Sequences two computations, discarding the first result.
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}
