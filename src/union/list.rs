//! An immutable persistent singly-linked list: `Cons(head, tail)` or `Empty`.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::option::Option as StdOption;
use std::rc::Rc;

use static_assertions::assert_not_impl_any;

use crate::structural::{hash_identity, StructuralHash};
use crate::typeclass::{Foldable, FunctorMut, Monoid, Semigroup, TypeConstructor};
use crate::union::option::Option;
use crate::union::UnionType;

/// An immutable singly-linked sequence with structural sharing.
///
/// Each `Cons` node owns its head value and shares its tail through a
/// reference-counted pointer; since nodes never mutate, a tail may be aliased
/// by any number of longer lists. Prepending is O(1), every other operation
/// is O(n).
///
/// Traversal and construction are iterative throughout, so operations on
/// long lists do not risk exhausting the call stack.
///
/// Renders as `[1, 2, 3]` (or `[]` when empty), and compares and hashes
/// structurally, element by element.
///
/// # Examples
///
/// ```rust
/// use funrs::list;
/// use funrs::union::List;
///
/// let numbers = list![1, 2, 3];
/// assert_eq!(numbers.to_string(), "[1, 2, 3]");
/// assert_eq!(numbers.len(), 3);
/// assert_eq!(List::<i32>::empty().to_string(), "[]");
/// ```
#[derive(Clone, UnionType)]
pub enum List<T> {
    /// A node holding one element and the rest of the sequence.
    Cons(T, Rc<List<T>>),
    /// The end of the sequence.
    Empty,
}

// Rc-linked spines are single-threaded by construction.
assert_not_impl_any!(List<i32>: Send, Sync);

impl<T> List<T> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Creates the empty list.
    pub const fn empty() -> Self {
        Self::Empty
    }

    /// Prepends `head` onto `tail` in O(1).
    pub fn cons(head: T, tail: Self) -> Self {
        Self::Cons(head, Rc::new(tail))
    }

    /// Creates a one-element list.
    pub fn singleton(value: T) -> Self {
        Self::cons(value, Self::Empty)
    }

    /// Clones a slice into a list, preserving order.
    pub fn from_slice(elements: &[T]) -> Self
    where
        T: Clone,
    {
        elements.iter().cloned().collect()
    }

    /// Builds a list from a vector, consuming it back to front so each
    /// element is prepended in O(1).
    fn build_from_vec(mut elements: Vec<T>) -> Self {
        let mut result = Self::Empty;
        while let StdOption::Some(element) = elements.pop() {
            result = Self::cons(element, result);
        }
        result
    }

    // ========================================================================
    // Inspection
    // ========================================================================

    /// Returns `true` if this is `Empty`.
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Counts the elements, in O(n).
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Borrows the first element, if any.
    pub const fn head(&self) -> Option<&T> {
        match self {
            Self::Cons(head, _) => Option::Some(head),
            Self::Empty => Option::None,
        }
    }

    /// Borrows the rest of the list after the first element, if any.
    pub fn tail(&self) -> Option<&Self> {
        match self {
            Self::Cons(_, tail) => Option::Some(tail.as_ref()),
            Self::Empty => Option::None,
        }
    }

    /// Splits off the first element and the rest, if any.
    pub fn uncons(&self) -> Option<(&T, &Self)> {
        match self {
            Self::Cons(head, tail) => Option::Some((head, tail.as_ref())),
            Self::Empty => Option::None,
        }
    }

    /// Exhaustive case analysis: exactly one of the two functions runs.
    pub fn fold<U, F, G>(&self, on_cons: F, on_empty: G) -> U
    where
        F: FnOnce(&T, &Self) -> U,
        G: FnOnce() -> U,
    {
        match self {
            Self::Cons(head, tail) => on_cons(head, tail),
            Self::Empty => on_empty(),
        }
    }

    // ========================================================================
    // Core combinators
    // ========================================================================

    /// Concatenates two lists, preserving order.
    ///
    /// The left operand is drained front-to-back onto an explicit stack,
    /// then popped back-to-front, re-consing each element onto the right
    /// operand. Neither input is mutated; the result shares the right
    /// operand's entire spine.
    #[must_use]
    pub fn append(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        let mut stack: Vec<&T> = self.iter().collect();
        let mut result = other.clone();

        while let StdOption::Some(element) = stack.pop() {
            result = Self::cons(element.clone(), result);
        }

        result
    }

    /// Transforms every element, preserving order.
    pub fn map<U, F>(&self, function: F) -> List<U>
    where
        F: FnMut(&T) -> U,
    {
        List::build_from_vec(self.iter().map(function).collect())
    }

    /// Maps every element to a sub-list and concatenates the results in
    /// order.
    pub fn bind<U, F>(&self, mut function: F) -> List<U>
    where
        U: Clone,
        F: FnMut(&T) -> List<U>,
    {
        let mut elements: Vec<U> = Vec::new();

        for element in self {
            elements.extend(function(element).iter().cloned());
        }

        List::build_from_vec(elements)
    }

    /// Keeps only the elements satisfying `predicate`, preserving order.
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        Self::build_from_vec(
            self.iter()
                .filter(|element| predicate(element))
                .cloned()
                .collect(),
        )
    }

    /// Narrows every element to another type, dropping those that fail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funrs::list;
    /// use funrs::union::List;
    ///
    /// let narrowed: List<u8> = list![1_i64, 300, 2].of_type();
    /// assert_eq!(narrowed, list![1_u8, 2]);
    /// ```
    pub fn of_type<U>(&self) -> List<U>
    where
        T: Clone,
        U: TryFrom<T>,
    {
        List::build_from_vec(
            self.iter()
                .filter_map(|element| U::try_from(element.clone()).ok())
                .collect(),
        )
    }

    /// Reverses the element order.
    #[must_use]
    pub fn reverse(&self) -> Self
    where
        T: Clone,
    {
        self.iter()
            .fold(Self::Empty, |reversed, element| {
                Self::cons(element.clone(), reversed)
            })
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    /// Iterates over the elements by reference, front to back.
    ///
    /// The iterator is restartable: the list is immutable, so iterating
    /// never consumes or changes it.
    pub const fn iter(&self) -> Iter<'_, T> {
        Iter { current: self }
    }
}

/// Borrowing iterator over a [`List`], walking the spine front to back.
#[derive(Debug)]
pub struct Iter<'a, T> {
    current: &'a List<T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> StdOption<&'a T> {
        match self.current {
            List::Cons(head, tail) => {
                self.current = tail;
                StdOption::Some(head)
            }
            List::Empty => StdOption::None,
        }
    }
}

/// Owning iterator over a [`List`], cloning each element out of the shared
/// spine.
#[derive(Debug)]
pub struct IntoIter<T> {
    current: List<T>,
}

impl<T: Clone> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> StdOption<T> {
        match &self.current {
            List::Cons(head, tail) => {
                let element = head.clone();
                self.current = tail.as_ref().clone();
                StdOption::Some(element)
            }
            List::Empty => StdOption::None,
        }
    }
}

impl<T: Clone> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { current: self }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iterator: I) -> Self {
        Self::build_from_vec(iterator.into_iter().collect())
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::Empty
    }
}

/// Operator sugar for [`append`](List::append): `a + b` concatenates.
impl<T: Clone> core::ops::Add for List<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.append(&other)
    }
}

// ============================================================================
// Structural identity
// ============================================================================
//
// These impls are hand-written rather than derived: the derived versions
// would recurse down the spine, and the render contract for sequences is the
// bracket form rather than the `Cons(head, tail)` tag form.

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut left = self.iter();
        let mut right = other.iter();

        loop {
            match (left.next(), right.next()) {
                (StdOption::Some(a), StdOption::Some(b)) if a == b => {}
                (StdOption::None, StdOption::None) => return true,
                _ => return false,
            }
        }
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: StructuralHash> StructuralHash for List<T> {
    fn structural_hash(&self) -> u64 {
        let type_seed = hash_identity(core::any::type_name::<Self>());
        let empty_hash = type_seed.wrapping_mul(257) ^ hash_identity("Empty");
        let cons_seed = type_seed.wrapping_mul(257) ^ hash_identity("Cons");

        // Innermost node first: fold from the back, so each node's hash
        // mixes its head with the already-computed hash of its tail.
        let elements: Vec<&T> = self.iter().collect();
        elements.iter().rev().fold(empty_hash, |tail_hash, head| {
            (cons_seed.wrapping_mul(257) ^ head.structural_hash()).wrapping_mul(257) ^ tail_hash
        })
    }
}

impl<T: StructuralHash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.structural_hash());
    }
}

impl<T: fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("[")?;

        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                formatter.write_str(", ")?;
            }
            write!(formatter, "{element}")?;
        }

        formatter.write_str("]")
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

// Serialized as a plain sequence, like Vec.
#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for List<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for List<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(Vec::<T>::deserialize(deserializer)?.into_iter().collect())
    }
}

/// Builds a [`List`](crate::union::List) from its elements, in order.
///
/// # Examples
///
/// ```rust
/// use funrs::list;
/// use funrs::union::List;
///
/// assert_eq!(list![1, 2, 3].to_string(), "[1, 2, 3]");
///
/// let empty: List<i32> = list![];
/// assert_eq!(empty, List::empty());
/// ```
#[macro_export]
macro_rules! list {
    () => {
        $crate::union::List::empty()
    };
    ($($element:expr),+ $(,)?) => {
        ::core::iter::IntoIterator::into_iter([$($element),+])
            .collect::<$crate::union::List<_>>()
    };
}

// ============================================================================
// Typeclass instances
// ============================================================================

impl<T> TypeConstructor for List<T> {
    type Inner = T;
    type WithType<B> = List<B>;
}

impl<T: Clone> FunctorMut for List<T> {
    fn fmap_mut<B, F>(self, mut function: F) -> List<B>
    where
        F: FnMut(T) -> B,
    {
        self.map(|element| function(element.clone()))
    }

    fn fmap_ref_mut<B, F>(&self, function: F) -> List<B>
    where
        F: FnMut(&T) -> B,
    {
        self.map(function)
    }
}

impl<T: Clone> Foldable for List<T> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.iter()
            .fold(init, |accumulator, element| {
                function(accumulator, element.clone())
            })
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        let elements: Vec<&T> = self.iter().collect();
        elements.iter().rev().fold(init, |accumulator, element| {
            function((*element).clone(), accumulator)
        })
    }
}

impl<T: Clone> Semigroup for List<T> {
    fn combine(self, other: Self) -> Self {
        self.append(&other)
    }
}

impl<T: Clone> Monoid for List<T> {
    fn empty() -> Self {
        Self::Empty
    }
}
