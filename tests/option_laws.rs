//! Property-based tests for Option.
//!
//! These tests verify the monad, functor, and alternative laws, plus the
//! structural identity contract.

use funrs::structural::StructuralHash;
use funrs::typeclass::{Applicative, Functor, Monad};
use funrs::union::Option;
use proptest::prelude::*;

// =============================================================================
// Strategy for generating Option
// =============================================================================

fn option_strategy() -> impl Strategy<Value = Option<i32>> {
    prop_oneof![Just(Option::none()), any::<i32>().prop_map(Option::some)]
}

proptest! {
    // =========================================================================
    // Monad Laws
    // =========================================================================

    #[test]
    fn prop_monad_left_identity(value: i32) {
        let half = |value: i32| {
            if value % 2 == 0 { Option::some(value / 2) } else { Option::none() }
        };
        prop_assert_eq!(Option::<i32>::pure(value).flat_map(half), half(value));
    }

    #[test]
    fn prop_monad_right_identity(option in option_strategy()) {
        prop_assert_eq!(option.clone().flat_map(Option::some), option);
    }

    #[test]
    fn prop_monad_associativity(option in option_strategy()) {
        let first = |value: i32| Option::some(value.wrapping_add(1));
        let second = |value: i32| {
            if value % 3 == 0 { Option::none() } else { Option::some(value) }
        };

        let left = option.clone().flat_map(first).flat_map(second);
        let right = option.flat_map(|value| first(value).flat_map(second));
        prop_assert_eq!(left, right);
    }

    // =========================================================================
    // Functor Laws
    // =========================================================================

    #[test]
    fn prop_functor_identity(option in option_strategy()) {
        prop_assert_eq!(option.clone().fmap(|value| value), option);
    }

    #[test]
    fn prop_functor_composition(option in option_strategy()) {
        let first = |value: i32| value.wrapping_add(1);
        let second = |value: i32| value.wrapping_mul(2);

        let left = option.clone().fmap(first).fmap(second);
        let right = option.fmap(|value| second(first(value)));
        prop_assert_eq!(left, right);
    }

    // =========================================================================
    // Choice Properties
    // =========================================================================

    #[test]
    fn prop_or_left_identity(option in option_strategy()) {
        prop_assert_eq!(Option::none().or(option.clone()), option);
    }

    #[test]
    fn prop_or_right_identity(option in option_strategy()) {
        prop_assert_eq!(option.clone().or(Option::none()), option);
    }

    #[test]
    fn prop_or_associativity(
        first in option_strategy(),
        second in option_strategy(),
        third in option_strategy()
    ) {
        let left = first.clone().or(second.clone()).or(third.clone());
        let right = first.or(second.or(third));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_or_prefers_present_left(left: i32, option in option_strategy()) {
        prop_assert_eq!(Option::some(left).or(option), Option::some(left));
    }

    #[test]
    fn prop_choose_equals_left_fold_of_or(
        candidates in prop::collection::vec(option_strategy(), 0..8)
    ) {
        let folded = candidates
            .clone()
            .into_iter()
            .fold(Option::none(), Option::or);
        prop_assert_eq!(Option::choose(candidates), folded);
    }

    // =========================================================================
    // Filter Properties
    // =========================================================================

    #[test]
    fn prop_filter_result_satisfies_predicate(option in option_strategy()) {
        let filtered: core::option::Option<i32> = option.filter(|value| value % 2 == 0).into();
        if let core::option::Option::Some(value) = filtered {
            prop_assert_eq!(value % 2, 0);
        }
    }

    #[test]
    fn prop_filter_on_none_is_none(_: ()) {
        let filtered = Option::<i32>::none().filter(|_| true);
        prop_assert_eq!(filtered, Option::none());
    }

    // =========================================================================
    // Structural Identity
    // =========================================================================

    #[test]
    fn prop_equal_options_hash_identically(value: i32) {
        prop_assert_eq!(
            Option::some(value).structural_hash(),
            Option::some(value).structural_hash()
        );
    }

    #[test]
    fn prop_render_of_some_wraps_payload(value: i32) {
        prop_assert_eq!(Option::some(value).to_string(), format!("Some({value})"));
    }

    #[test]
    fn prop_std_option_round_trip(option in option_strategy()) {
        let std_option: core::option::Option<i32> = option.clone().into();
        prop_assert_eq!(Option::from(std_option), option);
    }
}
