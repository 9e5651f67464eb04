//! Structural identity engine.
//!
//! This module is the runtime half of the engine that gives every algebraic
//! value type in this crate (and user-defined records) a consistent value
//! identity: equality, hashing, and rendering all derived from the type's
//! declared fields, in declared order.
//!
//! The three capabilities are split across standard and crate traits:
//!
//! - **Equality** is plain `#[derive(PartialEq, Eq)]`: identical concrete
//!   variant first, then pairwise field equality in declared order.
//! - **Hashing** is [`StructuralHash`], derived with
//!   `#[derive(StructuralHash)]`: a seed identifying the concrete type,
//!   folded over every field with a multiply-xor step (`seed * 257 ^ hash`).
//!   The derive also implements `std::hash::Hash` on top of it, so derived
//!   types work as map and set keys.
//! - **Rendering** is `Display`, derived with `#[derive(StructuralDisplay)]`:
//!   union variants render as `Tag` or `Tag(v1, v2, …)`, records as
//!   `Type { field = value, … }`.
//!
//! # Examples
//!
//! ```rust
//! use funrs::structural::{StructuralDisplay, StructuralHash};
//!
//! #[derive(PartialEq, Eq, StructuralDisplay, StructuralHash)]
//! struct Name {
//!     first: String,
//!     last: String,
//! }
//!
//! let joe = Name { first: "Joe".to_string(), last: "Blow".to_string() };
//! let same = Name { first: "Joe".to_string(), last: "Blow".to_string() };
//!
//! assert_eq!(joe.to_string(), "Name { first = Joe, last = Blow }");
//! assert_eq!(joe.structural_hash(), same.structural_hash());
//! ```

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::rc::Rc;
use std::sync::Arc;

pub use funrs_derive::{StructuralDisplay, StructuralHash};

/// A value whose hash is derived structurally from its declared fields.
///
/// # Laws
///
/// ## Consistency with equality
///
/// For all `a`, `b`: `a == b` implies
/// `a.structural_hash() == b.structural_hash()`.
///
/// ## Type discrimination
///
/// Values of different concrete types (or different variants of the same
/// union) hash from different seeds, so collisions across variants are
/// incidental rather than systematic.
///
/// # Examples
///
/// ```rust
/// use funrs::structural::StructuralHash;
/// use funrs::union::Option;
///
/// let first = Option::some(1);
/// let second = Option::some(1);
/// assert_eq!(first.structural_hash(), second.structural_hash());
/// assert_ne!(first.structural_hash(), Option::<i32>::none().structural_hash());
/// ```
pub trait StructuralHash {
    /// Returns the structural hash of this value.
    fn structural_hash(&self) -> u64;
}

/// Hashes a type or tag name into an identity seed.
///
/// This is an FNV-1a fold over the name's bytes. It anchors every structural
/// hash to the concrete type (and, for unions, the variant tag), so values
/// of different types hash from different seeds.
#[must_use]
pub fn hash_identity(name: &str) -> u64 {
    const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

    name.bytes().fold(FNV_OFFSET_BASIS, |state, byte| {
        (state ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// Hashes any `Hash` value to a single `u64` with the standard hasher.
///
/// Used to adapt standard-library types into the structural hashing scheme.
#[must_use]
pub fn hash_value<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

macro_rules! impl_structural_hash_via_std {
    ($($type:ty),* $(,)?) => {
        $(
            impl StructuralHash for $type {
                #[inline]
                fn structural_hash(&self) -> u64 {
                    hash_value(self)
                }
            }
        )*
    };
}

impl_structural_hash_via_std!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, bool, char, str, String, ()
);

impl<T: StructuralHash + ?Sized> StructuralHash for &T {
    #[inline]
    fn structural_hash(&self) -> u64 {
        (**self).structural_hash()
    }
}

impl<T: StructuralHash + ?Sized> StructuralHash for Box<T> {
    #[inline]
    fn structural_hash(&self) -> u64 {
        (**self).structural_hash()
    }
}

impl<T: StructuralHash + ?Sized> StructuralHash for Rc<T> {
    #[inline]
    fn structural_hash(&self) -> u64 {
        (**self).structural_hash()
    }
}

impl<T: StructuralHash + ?Sized> StructuralHash for Arc<T> {
    #[inline]
    fn structural_hash(&self) -> u64 {
        (**self).structural_hash()
    }
}

impl<T: StructuralHash> StructuralHash for [T] {
    fn structural_hash(&self) -> u64 {
        self.iter()
            .fold(hash_identity("[]"), |state, element| {
                state.wrapping_mul(257) ^ element.structural_hash()
            })
    }
}

impl<T: StructuralHash> StructuralHash for Vec<T> {
    #[inline]
    fn structural_hash(&self) -> u64 {
        self.as_slice().structural_hash()
    }
}

impl<A: StructuralHash, B: StructuralHash> StructuralHash for (A, B) {
    fn structural_hash(&self) -> u64 {
        let seed = hash_identity("(,)");
        let state = seed.wrapping_mul(257) ^ self.0.structural_hash();
        state.wrapping_mul(257) ^ self.1.structural_hash()
    }
}

impl<A: StructuralHash, B: StructuralHash, C: StructuralHash> StructuralHash for (A, B, C) {
    fn structural_hash(&self) -> u64 {
        let seed = hash_identity("(,,)");
        let state = seed.wrapping_mul(257) ^ self.0.structural_hash();
        let state = state.wrapping_mul(257) ^ self.1.structural_hash();
        state.wrapping_mul(257) ^ self.2.structural_hash()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_hash_identity_is_deterministic() {
        assert_eq!(hash_identity("Some"), hash_identity("Some"));
    }

    #[rstest]
    fn test_hash_identity_discriminates_names() {
        assert_ne!(hash_identity("Some"), hash_identity("None"));
        assert_ne!(hash_identity("Left"), hash_identity("Right"));
    }

    #[rstest]
    fn test_hash_value_matches_for_equal_inputs() {
        assert_eq!(hash_value(&42_i32), hash_value(&42_i32));
        assert_eq!(hash_value("abc"), hash_value("abc"));
    }

    #[rstest]
    fn test_string_and_str_agree() {
        let owned = String::from("value");
        assert_eq!(owned.structural_hash(), "value".structural_hash());
    }

    #[rstest]
    fn test_smart_pointers_are_transparent() {
        assert_eq!(Rc::new(7_i32).structural_hash(), 7_i32.structural_hash());
        assert_eq!(Box::new(7_i32).structural_hash(), 7_i32.structural_hash());
        assert_eq!(Arc::new(7_i32).structural_hash(), 7_i32.structural_hash());
    }

    #[rstest]
    fn test_pair_hash_is_order_sensitive() {
        assert_ne!((1_i32, 2_i32).structural_hash(), (2_i32, 1_i32).structural_hash());
    }
}
