//! The `Semigroup` typeclass: associative combination.

/// A type with an associative binary operation.
///
/// # Laws
///
/// ## Associativity
///
/// `a.combine(b).combine(c) == a.combine(b.combine(c))`
///
/// # Examples
///
/// ```rust
/// use funrs::list;
/// use funrs::typeclass::Semigroup;
///
/// assert_eq!(list![1, 2].combine(list![3, 4]), list![1, 2, 3, 4]);
/// ```
pub trait Semigroup {
    /// Combines two values associatively.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two borrowed values, cloning as needed.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }
}
