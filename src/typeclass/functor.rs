//! The `Functor` typeclass: structure-preserving mapping.

use super::higher::TypeConstructor;

/// A container that can map a function over its element, preserving shape.
///
/// # Laws
///
/// ## Identity
///
/// `x.fmap(|a| a) == x`
///
/// ## Composition
///
/// `x.fmap(f).fmap(g) == x.fmap(|a| g(f(a)))`
///
/// # Examples
///
/// ```rust
/// use funrs::typeclass::Functor;
/// use funrs::union::Option;
///
/// let doubled = Option::some(21).fmap(|value| value * 2);
/// assert_eq!(doubled, Option::some(42));
/// ```
pub trait Functor: TypeConstructor {
    /// Maps `function` over the contained element, consuming `self`.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Maps `function` over a borrowed element, leaving `self` intact.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the contained element with `value`, keeping the shape.
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the contained element, keeping only the shape.
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.fmap(|_| ())
    }
}

/// A functor over zero or more elements, requiring `FnMut` to map.
///
/// Containers holding at most one element implement [`Functor`] with an
/// `FnOnce` closure. A list applies the function once per element, so it
/// implements this variant instead. The laws are the same.
///
/// # Examples
///
/// ```rust
/// use funrs::list;
/// use funrs::typeclass::FunctorMut;
///
/// let doubled = list![1, 2, 3].fmap_mut(|value| value * 2);
/// assert_eq!(doubled, list![2, 4, 6]);
/// ```
pub trait FunctorMut: TypeConstructor {
    /// Maps `function` over every element, consuming `self`.
    fn fmap_mut<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;

    /// Maps `function` over every borrowed element, leaving `self` intact.
    fn fmap_ref_mut<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnMut(&Self::Inner) -> B;
}
