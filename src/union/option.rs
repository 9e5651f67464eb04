//! An optional value: `Some(value)` or `None`.

use core::option::Option as StdOption;

use crate::structural::{StructuralDisplay, StructuralHash};
use crate::typeclass::{Alternative, Applicative, Foldable, Functor, Monad, TypeConstructor};
use crate::union::either::Either;
use crate::union::update::Update;
use crate::union::UnionType;

/// A value that is either present (`Some`) or absent (`None`).
///
/// Unlike a nullable reference, absence is a variant of the type itself: a
/// present payload can never be a null-equivalent, because `Some` owns its
/// value by construction.
///
/// Renders as `Some(value)` or `None`, and compares, hashes, and displays
/// structurally.
///
/// # Examples
///
/// ```rust
/// use funrs::union::Option;
///
/// let present = Option::some(1);
/// assert_eq!(present.to_string(), "Some(1)");
/// assert_eq!(present.map(|value| value + 1), Option::some(2));
///
/// let absent = Option::<i32>::none();
/// assert_eq!(absent.to_string(), "None");
/// assert_eq!(absent.map(|value| value + 1), Option::none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, UnionType, StructuralDisplay, StructuralHash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Option<T> {
    /// A present value.
    Some(T),
    /// The absence of a value.
    None,
}

impl<T> Option<T> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Creates a present value.
    pub const fn some(value: T) -> Self {
        Self::Some(value)
    }

    /// Creates an absent value.
    pub const fn none() -> Self {
        Self::None
    }

    // ========================================================================
    // Inspection
    // ========================================================================

    /// Returns `true` if this is `Some`.
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if this is `None`.
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Borrows the payload, if present.
    pub const fn as_ref(&self) -> Option<&T> {
        match self {
            Self::Some(value) => Option::Some(value),
            Self::None => Option::None,
        }
    }

    // ========================================================================
    // Core combinators
    // ========================================================================

    /// Transforms the payload, passing `None` through unchanged.
    pub fn map<U, F>(self, function: F) -> Option<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Option::Some(function(value)),
            Self::None => Option::None,
        }
    }

    /// Chains a computation that itself may produce an absent value.
    pub fn bind<U, F>(self, function: F) -> Option<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => Option::None,
        }
    }

    /// Keeps a present value only if it satisfies `predicate`.
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) if predicate(&value) => Self::Some(value),
            Self::Some(_) | Self::None => Self::None,
        }
    }

    /// Exhaustive case analysis: exactly one of the two functions runs.
    pub fn fold<U, F, G>(self, on_some: F, on_none: G) -> U
    where
        F: FnOnce(T) -> U,
        G: FnOnce() -> U,
    {
        match self {
            Self::Some(value) => on_some(value),
            Self::None => on_none(),
        }
    }

    /// Extracts the payload, or substitutes `fallback` when absent.
    pub fn default_with(self, fallback: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => fallback,
        }
    }

    /// Left-biased choice: keeps `self` when present, otherwise `alternative`.
    #[must_use]
    pub fn or(self, alternative: Self) -> Self {
        if self.is_some() {
            self
        } else {
            alternative
        }
    }

    /// Returns the first present candidate, or `None` if there is none.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funrs::union::Option;
    ///
    /// let chosen = Option::choose(vec![
    ///     Option::none(),
    ///     Option::some("B"),
    ///     Option::some("C"),
    /// ]);
    /// assert_eq!(chosen, Option::some("B"));
    /// ```
    pub fn choose<I>(candidates: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        candidates.into_iter().fold(Self::None, Self::or)
    }

    /// Narrows the payload to another type, degrading to `None` on failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funrs::union::Option;
    ///
    /// let narrowed: Option<u8> = Option::some(7_i64).of_type();
    /// assert_eq!(narrowed, Option::some(7_u8));
    ///
    /// let out_of_range: Option<u8> = Option::some(300_i64).of_type();
    /// assert_eq!(out_of_range, Option::none());
    /// ```
    pub fn of_type<U>(self) -> Option<U>
    where
        U: TryFrom<T>,
    {
        self.bind(|value| match U::try_from(value) {
            Ok(narrowed) => Option::Some(narrowed),
            Err(_) => Option::None,
        })
    }

    // ========================================================================
    // Conversions
    // ========================================================================

    /// Wraps a present value as `Left`, or `fallback` as `Right`.
    pub fn to_either_left<R>(self, fallback: R) -> Either<T, R> {
        match self {
            Self::Some(value) => Either::Left(value),
            Self::None => Either::Right(fallback),
        }
    }

    /// Wraps a present value as `Right`, or `fallback` as `Left`.
    pub fn to_either_right<L>(self, fallback: L) -> Either<L, T> {
        match self {
            Self::Some(value) => Either::Right(value),
            Self::None => Either::Left(fallback),
        }
    }

    /// Converts to an update intent: `Some` becomes `Set`, `None` becomes
    /// `Ignore`.
    pub fn to_update(self) -> Update<T> {
        match self {
            Self::Some(value) => Update::Set(value),
            Self::None => Update::Ignore,
        }
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    /// Iterates over the zero-or-one contained value by reference.
    pub const fn iter(&self) -> Iter<'_, T> {
        Iter {
            value: match self {
                Self::Some(value) => StdOption::Some(value),
                Self::None => StdOption::None,
            },
        }
    }
}

/// Borrowing iterator over an [`Option`], yielding at most one element.
#[derive(Debug)]
pub struct Iter<'a, T> {
    value: StdOption<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> StdOption<&'a T> {
        self.value.take()
    }

    fn size_hint(&self) -> (usize, StdOption<usize>) {
        let remaining = usize::from(self.value.is_some());
        (remaining, StdOption::Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Owning iterator over an [`Option`], yielding at most one element.
#[derive(Debug)]
pub struct IntoIter<T> {
    value: StdOption<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> StdOption<T> {
        self.value.take()
    }

    fn size_hint(&self) -> (usize, StdOption<usize>) {
        let remaining = usize::from(self.value.is_some());
        (remaining, StdOption::Some(remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for Option<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            value: self.into(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Option<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> Default for Option<T> {
    fn default() -> Self {
        Self::None
    }
}

/// Operator sugar for [`or`](Option::or): `a | b` keeps `a` when present.
impl<T> core::ops::BitOr for Option<T> {
    type Output = Self;

    fn bitor(self, alternative: Self) -> Self {
        self.or(alternative)
    }
}

impl<T> From<StdOption<T>> for Option<T> {
    fn from(value: StdOption<T>) -> Self {
        match value {
            StdOption::Some(inner) => Self::Some(inner),
            StdOption::None => Self::None,
        }
    }
}

impl<T> From<Option<T>> for StdOption<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Option::Some(inner) => StdOption::Some(inner),
            Option::None => StdOption::None,
        }
    }
}

// ============================================================================
// Typeclass instances
// ============================================================================

impl<T> TypeConstructor for Option<T> {
    type Inner = T;
    type WithType<B> = Option<B>;
}

impl<T> Functor for Option<T> {
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    fn fmap_ref<B, F>(&self, function: F) -> Option<B>
    where
        F: FnOnce(&T) -> B,
    {
        match self {
            Self::Some(value) => Option::Some(function(value)),
            Self::None => Option::None,
        }
    }
}

impl<T> Applicative for Option<T> {
    fn pure<B>(value: B) -> Option<B> {
        Option::Some(value)
    }

    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Self::Some(left), Option::Some(right)) => Option::Some(function(left, right)),
            _ => Option::None,
        }
    }
}

impl<T> Monad for Option<T> {
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(T) -> Option<B>,
    {
        self.bind(function)
    }
}

impl<T> Alternative for Option<T> {
    fn empty<B>() -> Option<B> {
        Option::None
    }

    fn alt(self, alternative: Self) -> Self {
        self.or(alternative)
    }

    fn choice<I>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        Self::choose(alternatives)
    }
}

impl<T> Foldable for Option<T> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        match self {
            Self::Some(value) => function(init, value),
            Self::None => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        match self {
            Self::Some(value) => function(value, init),
            Self::None => init,
        }
    }
}
