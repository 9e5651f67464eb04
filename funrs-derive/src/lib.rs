//! Derive macros for the funrs structural identity engine.
//!
//! This crate provides procedural macros that derive value identity for
//! algebraic data types from their declared fields, replacing hand-written
//! `Display`, hashing, and union-tag boilerplate.
//!
//! # Available Derive Macros
//!
//! - [`UnionType`]: Implements `funrs::union::UnionType`, exposing the
//!   variant name as the instance's tag (enums only).
//! - [`StructuralDisplay`]: Implements `Display` with the structural render
//!   format — `Tag(v1, v2)` for enum variants, `Type { field = value }` for
//!   records.
//! - [`StructuralHash`]: Implements `funrs::structural::StructuralHash` (and
//!   `std::hash::Hash` on top of it) by folding every field into a seed
//!   derived from the concrete type identity.
//!
//! # Example
//!
//! ```rust,ignore
//! use funrs::prelude::*;
//!
//! #[derive(PartialEq, Eq, StructuralDisplay, StructuralHash)]
//! struct Name {
//!     first: String,
//!     last: String,
//! }
//!
//! let name = Name { first: "Joe".to_string(), last: "Blow".to_string() };
//! assert_eq!(name.to_string(), "Name { first = Joe, last = Blow }");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod display;
mod hash;
mod union_type;

use proc_macro::TokenStream;

/// Derive macro implementing `funrs::union::UnionType` for an enum.
///
/// The generated `tag` method returns the variant's declared name as a
/// `&'static str`, fixed at construction. This is the closed-union tag
/// contract: the tag identifies the variant within its family, e.g. `"Some"`
/// and `"None"` for an option type.
///
/// # Generated Code
///
/// ```rust,ignore
/// impl<T> UnionType for Option<T> {
///     fn tag(&self) -> &'static str {
///         match self {
///             Self::Some(..) => "Some",
///             Self::None => "None",
///         }
///     }
/// }
/// ```
///
/// # Errors
///
/// Deriving on a struct or a `union` is a compile error — only closed enums
/// carry variant tags.
#[proc_macro_derive(UnionType)]
pub fn derive_union_type(input: TokenStream) -> TokenStream {
    union_type::derive_union_type_impl(input)
}

/// Derive macro implementing `Display` with the structural render format.
///
/// # Render format
///
/// - Enum variant without fields: the bare tag, e.g. `None`.
/// - Enum variant with fields: `Tag(v1, v2, …)`, each value rendered with its
///   own `Display`, e.g. `Some(1)`.
/// - Struct with named fields: `Type { field1 = v1, field2 = v2 }`.
/// - Tuple struct: `Type(v1, v2, …)`; field-less struct: the bare type name.
///
/// # Bounds
///
/// Every generic type parameter receives a `Display` bound.
#[proc_macro_derive(StructuralDisplay)]
pub fn derive_structural_display(input: TokenStream) -> TokenStream {
    display::derive_structural_display_impl(input)
}

/// Derive macro implementing `funrs::structural::StructuralHash`.
///
/// The generated hash starts from a seed identifying the concrete type (the
/// type name, plus the variant tag for enums) and folds each field value in
/// declared order with a multiply-xor step:
///
/// ```text
/// seed = seed * 257 ^ structural_hash(field)
/// ```
///
/// Two equal values always produce the same hash. The macro also implements
/// `std::hash::Hash` in terms of `structural_hash`, so derived types can be
/// used as map and set keys directly — do not additionally derive `Hash`.
///
/// # Bounds
///
/// Every generic type parameter receives a `StructuralHash` bound.
#[proc_macro_derive(StructuralHash)]
pub fn derive_structural_hash(input: TokenStream) -> TokenStream {
    hash::derive_structural_hash_impl(input)
}
