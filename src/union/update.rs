//! An update intent against a stored optional value: `Set`, `Ignore`, or
//! `Clear`.

use core::option::Option as StdOption;

use crate::structural::{StructuralDisplay, StructuralHash};
use crate::typeclass::{Alternative, Applicative, Foldable, Functor, Monad, TypeConstructor};
use crate::union::either::Either;
use crate::union::option::Option;
use crate::union::UnionType;

/// A described mutation of some external stored optional value.
///
/// `Set(value)` means "store this value", `Ignore` means "leave the stored
/// value untouched", and `Clear` means "erase the stored value". The intent
/// is applied with [`resolve`](Update::resolve).
///
/// `Ignore` is the sole absent case: `Clear` carries no payload, but it is
/// still a positive instruction, so combinators like
/// [`or`](Update::or) treat it as present while
/// [`filter`](Update::filter) leaves it alone.
///
/// Renders as `Set(value)`, `Ignore`, or `Clear`, and compares, hashes, and
/// displays structurally.
///
/// # Examples
///
/// ```rust
/// use funrs::union::{Option, Update};
///
/// let stored = Option::some("A");
/// assert_eq!(Update::set("B").resolve(stored.clone()), Option::some("B"));
/// assert_eq!(Update::ignore().resolve(stored.clone()), Option::some("A"));
/// assert_eq!(Update::clear().resolve(stored), Option::none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, UnionType, StructuralDisplay, StructuralHash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Update<T> {
    /// Store a new value.
    Set(T),
    /// Leave the stored value untouched.
    Ignore,
    /// Erase the stored value.
    Clear,
}

impl<T> Update<T> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Creates an intent to store `value`.
    pub const fn set(value: T) -> Self {
        Self::Set(value)
    }

    /// Creates an intent to leave the stored value untouched.
    pub const fn ignore() -> Self {
        Self::Ignore
    }

    /// Creates an intent to erase the stored value.
    pub const fn clear() -> Self {
        Self::Clear
    }

    // ========================================================================
    // Inspection
    // ========================================================================

    /// Returns `true` if this is `Set`.
    pub const fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }

    /// Returns `true` if this is `Ignore`.
    pub const fn is_ignore(&self) -> bool {
        matches!(self, Self::Ignore)
    }

    /// Returns `true` if this is `Clear`.
    pub const fn is_clear(&self) -> bool {
        matches!(self, Self::Clear)
    }

    // ========================================================================
    // Core combinators
    // ========================================================================

    /// Transforms the payload of `Set`, passing the other intents through.
    pub fn map<U, F>(self, function: F) -> Update<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Set(value) => Update::Set(function(value)),
            Self::Ignore => Update::Ignore,
            Self::Clear => Update::Clear,
        }
    }

    /// Chains a computation on the payload of `Set`, passing the other
    /// intents through.
    pub fn bind<U, F>(self, function: F) -> Update<U>
    where
        F: FnOnce(T) -> Update<U>,
    {
        match self {
            Self::Set(value) => function(value),
            Self::Ignore => Update::Ignore,
            Self::Clear => Update::Clear,
        }
    }

    /// Keeps a `Set` only if its payload satisfies `predicate`, demoting it
    /// to `Ignore` otherwise.
    ///
    /// `Clear` carries no payload to test, so it passes through unchanged.
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Set(value) if predicate(&value) => Self::Set(value),
            Self::Set(_) | Self::Ignore => Self::Ignore,
            Self::Clear => Self::Clear,
        }
    }

    /// Exhaustive case analysis: exactly one of the three functions runs.
    pub fn fold<U, F, G, H>(self, on_set: F, on_ignore: G, on_clear: H) -> U
    where
        F: FnOnce(T) -> U,
        G: FnOnce() -> U,
        H: FnOnce() -> U,
    {
        match self {
            Self::Set(value) => on_set(value),
            Self::Ignore => on_ignore(),
            Self::Clear => on_clear(),
        }
    }

    /// Extracts the payload of `Set`, or substitutes `fallback`.
    pub fn default_with(self, fallback: T) -> T {
        match self {
            Self::Set(value) => value,
            Self::Ignore | Self::Clear => fallback,
        }
    }

    /// Left-biased choice: keeps `self` unless it is `Ignore`.
    ///
    /// `Clear` is a positive instruction, so it wins over any alternative.
    #[must_use]
    pub fn or(self, alternative: Self) -> Self {
        if self.is_ignore() {
            alternative
        } else {
            self
        }
    }

    /// Returns the first non-`Ignore` candidate, or `Ignore` if there is
    /// none.
    pub fn choose<I>(candidates: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        candidates.into_iter().fold(Self::Ignore, Self::or)
    }

    /// Narrows the payload of `Set` to another type, demoting to `Ignore` on
    /// failure. `Clear` passes through unchanged.
    pub fn of_type<U>(self) -> Update<U>
    where
        U: TryFrom<T>,
    {
        match self {
            Self::Set(value) => match U::try_from(value) {
                Ok(narrowed) => Update::Set(narrowed),
                Err(_) => Update::Ignore,
            },
            Self::Ignore => Update::Ignore,
            Self::Clear => Update::Clear,
        }
    }

    // ========================================================================
    // Application
    // ========================================================================

    /// Applies this intent against the `existing` stored value, producing
    /// the new stored value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funrs::union::{Option, Update};
    ///
    /// assert_eq!(Update::ignore().resolve(Option::some("A")), Option::some("A"));
    /// assert_eq!(Update::<&str>::ignore().resolve(Option::none()), Option::none());
    /// ```
    pub fn resolve(self, existing: Option<T>) -> Option<T> {
        match self {
            Self::Set(value) => Option::Some(value),
            Self::Ignore => existing,
            Self::Clear => Option::None,
        }
    }

    /// Converts to an [`Option`]: only `Set` carries a value.
    pub fn to_option(self) -> Option<T> {
        match self {
            Self::Set(value) => Option::Some(value),
            Self::Ignore | Self::Clear => Option::None,
        }
    }

    /// Wraps a `Set` payload as `Left`, or `fallback` as `Right`.
    pub fn to_either_left<R>(self, fallback: R) -> Either<T, R> {
        match self {
            Self::Set(value) => Either::Left(value),
            Self::Ignore | Self::Clear => Either::Right(fallback),
        }
    }

    /// Wraps a `Set` payload as `Right`, or `fallback` as `Left`.
    pub fn to_either_right<L>(self, fallback: L) -> Either<L, T> {
        match self {
            Self::Set(value) => Either::Right(value),
            Self::Ignore | Self::Clear => Either::Left(fallback),
        }
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    /// Iterates over the payload of a `Set` by reference; other intents
    /// yield nothing.
    pub const fn iter(&self) -> Iter<'_, T> {
        Iter {
            value: match self {
                Self::Set(value) => StdOption::Some(value),
                Self::Ignore | Self::Clear => StdOption::None,
            },
        }
    }
}

/// Borrowing iterator over an [`Update`], yielding at most one element.
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

impl<T> Default for Update<T> {
    fn default() -> Self {
        Self::Ignore
    }
}

/// Operator sugar for [`or`](Update::or): `a | b` keeps `a` unless it is
/// `Ignore`.
impl<T> core::ops::BitOr for Update<T> {
    type Output = Self;

    fn bitor(self, alternative: Self) -> Self {
        self.or(alternative)
    }
}

impl<T> From<Option<T>> for Update<T> {
    fn from(option: Option<T>) -> Self {
        option.to_update()
    }
}

// ============================================================================
// Typeclass instances
// ============================================================================

impl<T> TypeConstructor for Update<T> {
    type Inner = T;
    type WithType<B> = Update<B>;
}

impl<T> Functor for Update<T> {
    fn fmap<B, F>(self, function: F) -> Update<B>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    fn fmap_ref<B, F>(&self, function: F) -> Update<B>
    where
        F: FnOnce(&T) -> B,
    {
        match self {
            Self::Set(value) => Update::Set(function(value)),
            Self::Ignore => Update::Ignore,
            Self::Clear => Update::Clear,
        }
    }
}

impl<T> Applicative for Update<T> {
    fn pure<B>(value: B) -> Update<B> {
        Update::Set(value)
    }

    fn map2<B, C, F>(self, other: Update<B>, function: F) -> Update<C>
    where
        F: FnOnce(T, B) -> C,
    {
        // Consistent with bind: the leftmost non-Set intent decides.
        self.bind(|left| other.map(|right| function(left, right)))
    }
}

impl<T> Monad for Update<T> {
    fn flat_map<B, F>(self, function: F) -> Update<B>
    where
        F: FnOnce(T) -> Update<B>,
    {
        self.bind(function)
    }
}

impl<T> Alternative for Update<T> {
    fn empty<B>() -> Update<B> {
        Update::Ignore
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

impl<T> Foldable for Update<T> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        match self {
            Self::Set(value) => function(init, value),
            Self::Ignore | Self::Clear => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        match self {
            Self::Set(value) => function(value, init),
            Self::Ignore | Self::Clear => init,
        }
    }
}
