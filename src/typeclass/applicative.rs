//! The `Applicative` typeclass: combining independent computations.

use super::functor::Functor;

/// A functor that can lift values and combine independent computations.
///
/// # Laws
///
/// ## Identity
///
/// `Self::pure(a).map2(x, |_, b| b) == x`
///
/// ## Homomorphism
///
/// `Self::pure(a).map2(Self::pure(b), f) == Self::pure(f(a, b))`
///
/// # Examples
///
/// ```rust
/// use funrs::typeclass::Applicative;
/// use funrs::union::Option;
///
/// let sum = Option::some(2).map2(Option::some(3), |left, right| left + right);
/// assert_eq!(sum, Option::some(5));
///
/// let missing = Option::some(2).map2(Option::<i32>::none(), |left, right| left + right);
/// assert_eq!(missing, Option::none());
/// ```
pub trait Applicative: Functor {
    /// Lifts a plain value into the container.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two independent computations with `function`.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Pairs up two independent computations.
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |left, right| (left, right))
    }
}
