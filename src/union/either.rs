//! A tagged choice between two typed alternatives: `Left` or `Right`.

use crate::structural::{StructuralDisplay, StructuralHash};
use crate::typeclass::{Applicative, Foldable, Functor, Monad, TypeConstructor};
use crate::union::option::Option;
use crate::union::UnionType;

/// A value carrying exactly one of two payload types.
///
/// Neither side is privileged as "the error": `Either` is a symmetric
/// choice, and every combinator exists in a left and a right flavor. The
/// typeclass instances operate on the right side, matching the convention
/// that the last type parameter is the mapped one.
///
/// Renders as `Left(value)` or `Right(value)`, and compares, hashes, and
/// displays structurally.
///
/// # Examples
///
/// ```rust
/// use funrs::union::Either;
///
/// let number: Either<i32, &str> = Either::left(1);
/// assert_eq!(number.to_string(), "Left(1)");
/// assert_eq!(number.map_left(|value| value + 1), Either::left(2));
///
/// let text: Either<i32, &str> = Either::right("A");
/// assert_eq!(text.to_string(), "Right(A)");
/// assert_eq!(text.map_left(|value| value + 1), Either::right("A"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, UnionType, StructuralDisplay, StructuralHash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left alternative.
    Left(L),
    /// The right alternative.
    Right(R),
}

impl<L, R> Either<L, R> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Creates a left value.
    pub const fn left(value: L) -> Self {
        Self::Left(value)
    }

    /// Creates a right value.
    pub const fn right(value: R) -> Self {
        Self::Right(value)
    }

    // ========================================================================
    // Inspection
    // ========================================================================

    /// Returns `true` if this is `Left`.
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is `Right`.
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // ========================================================================
    // Core combinators
    // ========================================================================

    /// Transforms the left payload, passing `Right` through unchanged.
    pub fn map_left<U, F>(self, function: F) -> Either<U, R>
    where
        F: FnOnce(L) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Transforms the right payload, passing `Left` through unchanged.
    pub fn map_right<U, F>(self, function: F) -> Either<L, U>
    where
        F: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Chains a computation on the left payload, passing `Right` through.
    pub fn bind_left<U, F>(self, function: F) -> Either<U, R>
    where
        F: FnOnce(L) -> Either<U, R>,
    {
        match self {
            Self::Left(value) => function(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Chains a computation on the right payload, passing `Left` through.
    pub fn bind_right<U, F>(self, function: F) -> Either<L, U>
    where
        F: FnOnce(R) -> Either<L, U>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    /// Exhaustive case analysis: exactly one of the two functions runs.
    pub fn fold<U, F, G>(self, on_left: F, on_right: G) -> U
    where
        F: FnOnce(L) -> U,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => on_left(value),
            Self::Right(value) => on_right(value),
        }
    }

    /// Transforms both sides with independent functions.
    pub fn bi_map<U, V, F, G>(self, on_left: F, on_right: G) -> Either<U, V>
    where
        F: FnOnce(L) -> U,
        G: FnOnce(R) -> V,
    {
        match self {
            Self::Left(value) => Either::Left(on_left(value)),
            Self::Right(value) => Either::Right(on_right(value)),
        }
    }

    /// Swaps which side is which.
    pub fn flip(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    /// Extracts the left payload, or substitutes `fallback`.
    pub fn left_or(self, fallback: L) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => fallback,
        }
    }

    /// Extracts the right payload, or substitutes `fallback`.
    pub fn right_or(self, fallback: R) -> R {
        match self {
            Self::Left(_) => fallback,
            Self::Right(value) => value,
        }
    }

    // ========================================================================
    // Conversions
    // ========================================================================

    /// Converts to an [`Option`] of the left payload.
    pub fn left_option(self) -> Option<L> {
        match self {
            Self::Left(value) => Option::Some(value),
            Self::Right(_) => Option::None,
        }
    }

    /// Converts to an [`Option`] of the right payload.
    pub fn right_option(self) -> Option<R> {
        match self {
            Self::Left(_) => Option::None,
            Self::Right(value) => Option::Some(value),
        }
    }
}

// Right corresponds to Ok, matching the right-biased typeclass instances.
impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(error) => Err(error),
            Either::Right(value) => Ok(value),
        }
    }
}

// ============================================================================
// Typeclass instances (right-biased)
// ============================================================================

impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B> = Either<L, B>;
}

impl<L: Clone, R> Functor for Either<L, R> {
    fn fmap<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> B,
    {
        self.map_right(function)
    }

    fn fmap_ref<B, F>(&self, function: F) -> Either<L, B>
    where
        F: FnOnce(&R) -> B,
    {
        match self {
            Self::Left(value) => Either::Left(value.clone()),
            Self::Right(value) => Either::Right(function(value)),
        }
    }
}

impl<L: Clone, R> Applicative for Either<L, R> {
    fn pure<B>(value: B) -> Either<L, B> {
        Either::Right(value)
    }

    fn map2<B, C, F>(self, other: Either<L, B>, function: F) -> Either<L, C>
    where
        F: FnOnce(R, B) -> C,
    {
        match (self, other) {
            (Self::Right(left), Either::Right(right)) => Either::Right(function(left, right)),
            (Self::Left(value), _) | (_, Either::Left(value)) => Either::Left(value),
        }
    }
}

impl<L: Clone, R> Monad for Either<L, R> {
    fn flat_map<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> Either<L, B>,
    {
        self.bind_right(function)
    }
}

impl<L, R> Foldable for Either<L, R> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, R) -> B,
    {
        match self {
            Self::Left(_) => init,
            Self::Right(value) => function(init, value),
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(R, B) -> B,
    {
        match self {
            Self::Left(_) => init,
            Self::Right(value) => function(value, init),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn left_value() -> Either<i32, String> {
        Either::left(1)
    }

    fn right_value() -> Either<i32, String> {
        Either::right("A".to_string())
    }

    #[rstest]
    fn test_is_left_and_is_right_identify_variants() {
        assert!(left_value().is_left());
        assert!(!left_value().is_right());
        assert!(right_value().is_right());
        assert!(!right_value().is_left());
    }

    #[rstest]
    fn test_tag() {
        assert_eq!(left_value().tag(), "Left");
        assert_eq!(right_value().tag(), "Right");
    }

    #[rstest]
    fn test_render() {
        assert_eq!(left_value().to_string(), "Left(1)");
        assert_eq!(right_value().to_string(), "Right(A)");
    }

    #[rstest]
    fn test_map_left_transforms_only_left() {
        assert_eq!(left_value().map_left(|value| value + 1), Either::left(2));
        assert_eq!(right_value().map_left(|value| value + 1), right_value());
    }

    #[rstest]
    fn test_map_right_transforms_only_right() {
        assert_eq!(
            right_value().map_right(|value| format!("{value}!")),
            Either::right("A!".to_string())
        );
        assert_eq!(left_value().map_right(|value| format!("{value}!")), left_value());
    }

    #[rstest]
    fn test_bind_right_chains_and_passes_left_through() {
        let parse = |text: String| match text.parse::<i64>() {
            Ok(number) => Either::<i32, i64>::right(number),
            Err(_) => Either::left(-1),
        };

        assert_eq!(
            Either::<i32, String>::right("42".to_string()).bind_right(parse),
            Either::right(42)
        );
        assert_eq!(right_value().bind_right(parse), Either::left(-1));
        assert_eq!(left_value().bind_right(parse), Either::left(1));
    }

    #[rstest]
    fn test_bind_left_chains_and_passes_right_through() {
        let widen = |value: i32| Either::<i64, String>::left(i64::from(value) * 2);

        assert_eq!(left_value().bind_left(widen), Either::left(2_i64));
        assert_eq!(right_value().bind_left(widen), Either::right("A".to_string()));
    }

    #[rstest]
    fn test_fold_invokes_exactly_one_case() {
        assert_eq!(left_value().fold(|value| value.to_string(), |text| text), "1");
        assert_eq!(right_value().fold(|value| value.to_string(), |text| text), "A");
    }

    #[rstest]
    fn test_bi_map_transforms_both_sides_independently() {
        assert_eq!(
            left_value().bi_map(|value| value + 1, |text| format!("{text}!")),
            Either::left(2)
        );
        assert_eq!(
            right_value().bi_map(|value| value + 1, |text| format!("{text}!")),
            Either::right("A!".to_string())
        );
    }

    #[rstest]
    fn test_flip_swaps_sides() {
        assert_eq!(left_value().flip(), Either::<String, i32>::right(1));
        assert_eq!(right_value().flip(), Either::<String, i32>::left("A".to_string()));
        assert_eq!(left_value().flip().flip(), left_value());
    }

    #[rstest]
    fn test_left_or_and_right_or_extract_or_substitute() {
        assert_eq!(left_value().left_or(0), 1);
        assert_eq!(right_value().left_or(0), 0);
        assert_eq!(right_value().right_or("Z".to_string()), "A");
        assert_eq!(left_value().right_or("Z".to_string()), "Z");
    }

    #[rstest]
    fn test_option_conversions() {
        assert_eq!(left_value().left_option(), Option::some(1));
        assert_eq!(right_value().left_option(), Option::none());
        assert_eq!(right_value().right_option(), Option::some("A".to_string()));
        assert_eq!(left_value().right_option(), Option::none());
    }

    #[rstest]
    fn test_result_round_trip() {
        let success: Result<String, i32> = Ok("A".to_string());
        assert_eq!(Either::from(success), right_value());
        assert_eq!(Result::from(right_value()), Ok("A".to_string()));

        let failure: Result<String, i32> = Err(1);
        assert_eq!(Either::from(failure), left_value());
        assert_eq!(Result::from(left_value()), Err(1));
    }

    #[rstest]
    fn test_equality_discriminates_variants_and_payloads() {
        assert_eq!(left_value(), left_value());
        assert_ne!(left_value(), Either::left(2));
        assert_ne!(
            Either::<i32, i32>::left(1),
            Either::<i32, i32>::right(1)
        );
    }

    #[rstest]
    fn test_structural_hash_matches_for_equal_values() {
        assert_eq!(
            left_value().structural_hash(),
            left_value().structural_hash()
        );
        assert_ne!(
            Either::<i32, i32>::left(1).structural_hash(),
            Either::<i32, i32>::right(1).structural_hash()
        );
    }
}
