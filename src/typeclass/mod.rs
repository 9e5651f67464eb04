//! Typeclass traits shared by the algebraic value types.
//!
//! These traits describe the small algebra the union types in
//! [`crate::union`] have in common: mapping ([`Functor`]), combining
//! independent computations ([`Applicative`]), sequencing dependent ones
//! ([`Monad`]), choosing between alternatives ([`Alternative`]), reducing to
//! a summary ([`Foldable`]), and appending ([`Semigroup`] / [`Monoid`]).
//!
//! Higher-kinded polymorphism is emulated with the generic associated type
//! on [`TypeConstructor`]: `Self::WithType<B>` names "the same shape with a
//! different element type", which is what lets `fmap` change `Option<A>` into
//! `Option<B>` generically.

mod alternative;
mod applicative;
mod foldable;
mod functor;
mod higher;
mod monad;
mod monoid;
mod semigroup;

pub use alternative::Alternative;
pub use applicative::Applicative;
pub use foldable::Foldable;
pub use functor::{Functor, FunctorMut};
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
