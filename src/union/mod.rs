//! Closed union types: `Option`, `Either`, `List`, `Update`, and `Unit`.
//!
//! Each union is a Rust enum with a fixed variant set, so every combinator
//! dispatches with an exhaustive `match` checked at compile time — there is
//! no runtime "unrecognized variant" failure mode. What survives of the
//! closed-union convention at runtime is the tag: every variant reports its
//! declared name through [`UnionType::tag`], fixed at construction.
//!
//! All five types derive their value identity from the structural engine in
//! [`crate::structural`]: equality and hashing are field-wise in declared
//! order, and rendering follows the `Tag(v1, v2)` contract.

pub mod either;
pub mod list;
pub mod option;
pub mod unit;
pub mod update;

pub use either::Either;
pub use list::List;
pub use option::Option;
pub use unit::Unit;
pub use update::Update;

pub use funrs_derive::UnionType;

/// A variant of a closed union, identified by its tag.
///
/// The tag is the variant's declared name, fixed at construction: `"Some"`
/// and `"None"` for [`Option`], `"Left"` and `"Right"` for [`Either`],
/// `"Cons"` and `"Empty"` for [`List`], `"Set"`, `"Ignore"`, and `"Clear"`
/// for [`Update`]. Derive it with `#[derive(UnionType)]` on any enum.
///
/// # Examples
///
/// ```rust
/// use funrs::union::{Option, UnionType};
///
/// assert_eq!(Option::some(1).tag(), "Some");
/// assert_eq!(Option::<i32>::none().tag(), "None");
/// ```
pub trait UnionType {
    /// Returns the tag identifying this instance's variant.
    fn tag(&self) -> &'static str;
}
