//! # funrs
//!
//! Immutable algebraic value types for Rust: an optional value
//! ([`union::Option`]), a two-way choice ([`union::Either`]), a persistent
//! singly-linked list ([`union::List`]), an update intent
//! ([`union::Update`]), and a unit type ([`union::Unit`]) — together with
//! the typeclass traits they share and a structural identity engine that
//! derives equality, hashing, and rendering from declared fields.
//!
//! ## Design
//!
//! Every data type is a closed union: a Rust enum with a fixed variant set,
//! so combinators dispatch with exhaustive `match` and adding an impossible
//! variant is a compile error rather than a runtime failure. Each variant
//! reports its declared name as a tag (`"Some"`, `"Left"`, `"Cons"`, …)
//! through [`union::UnionType`].
//!
//! Value identity is structural throughout: two values are equal when they
//! are the same variant with pairwise-equal fields, equal values hash
//! identically, and rendering follows a fixed contract (`Some(1)`, `None`,
//! `[1, 2, 3]`, `Set(A)`). The derive macros in [`structural`] extend the
//! same identity to user-defined types.
//!
//! ## Examples
//!
//! ```rust
//! use funrs::list;
//! use funrs::prelude::*;
//!
//! let stored = Option::some("A");
//! let intent = Update::set("B").filter(|value| !value.is_empty());
//! assert_eq!(intent.resolve(stored), Option::some("B"));
//!
//! let numbers = list![1, 2, 3].append(&list![4]);
//! assert_eq!(numbers.to_string(), "[1, 2, 3, 4]");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

// Lets the derive macros refer to this crate by its external name from
// within the crate itself.
extern crate self as funrs;

pub mod structural;
pub mod typeclass;
pub mod union;

pub mod prelude {
    //! Convenience re-export of the whole public surface.
    //!
    //! Note that importing the prelude shadows `std::option::Option` with
    //! [`crate::union::Option`]; spell out `core::option::Option` where the
    //! standard type is still needed.

    pub use crate::structural::*;
    pub use crate::typeclass::*;
    pub use crate::union::*;
}
