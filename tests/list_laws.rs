//! Property-based tests for List.
//!
//! These tests verify the semigroup/monoid laws of append, the functor laws,
//! and the agreement between list combinators and their Vec equivalents.

use funrs::structural::StructuralHash;
use funrs::typeclass::{FunctorMut, Semigroup};
use funrs::union::List;
use proptest::prelude::*;

// =============================================================================
// Strategy for generating List
// =============================================================================

fn list_strategy(max_size: usize) -> impl Strategy<Value = List<i32>> {
    prop::collection::vec(any::<i32>(), 0..max_size).prop_map(|vector| vector.into_iter().collect())
}

fn small_list() -> impl Strategy<Value = List<i32>> {
    list_strategy(20)
}

proptest! {
    // =========================================================================
    // Append Properties (Semigroup / Monoid Laws)
    // =========================================================================

    #[test]
    fn prop_append_left_identity(list in small_list()) {
        prop_assert_eq!(List::empty().append(&list), list);
    }

    #[test]
    fn prop_append_right_identity(list in small_list()) {
        prop_assert_eq!(list.append(&List::empty()), list);
    }

    #[test]
    fn prop_append_associativity(
        first in small_list(),
        second in small_list(),
        third in small_list()
    ) {
        let left = first.append(&second).append(&third);
        let right = first.append(&second.append(&third));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_append_concatenates_in_order(
        left in prop::collection::vec(any::<i32>(), 0..20),
        right in prop::collection::vec(any::<i32>(), 0..20)
    ) {
        let appended = left.clone().into_iter().collect::<List<i32>>()
            .append(&right.clone().into_iter().collect());
        let expected: List<i32> = left.into_iter().chain(right).collect();
        prop_assert_eq!(appended, expected);
    }

    #[test]
    fn prop_append_length(first in small_list(), second in small_list()) {
        prop_assert_eq!(first.append(&second).len(), first.len() + second.len());
    }

    #[test]
    fn prop_semigroup_combine_is_append(first in small_list(), second in small_list()) {
        prop_assert_eq!(first.clone().combine(second.clone()), first.append(&second));
    }

    // =========================================================================
    // Functor Laws
    // =========================================================================

    #[test]
    fn prop_functor_identity(list in small_list()) {
        prop_assert_eq!(list.clone().fmap_mut(|element| element), list);
    }

    #[test]
    fn prop_functor_composition(list in small_list()) {
        let first = |element: i32| element.wrapping_add(1);
        let second = |element: i32| element.wrapping_mul(2);

        let left = list.clone().fmap_mut(first).fmap_mut(second);
        let right = list.fmap_mut(|element| second(first(element)));
        prop_assert_eq!(left, right);
    }

    // =========================================================================
    // Bind Properties
    // =========================================================================

    #[test]
    fn prop_bind_with_singleton_equals_map(list in small_list()) {
        let bound = list.bind(|element| List::cons(element.wrapping_mul(3), List::empty()));
        let mapped = list.map(|element| element.wrapping_mul(3));
        prop_assert_eq!(bound, mapped);
    }

    #[test]
    fn prop_bind_with_empty_is_empty(list in small_list()) {
        prop_assert_eq!(list.bind(|_| List::<i32>::empty()), List::empty());
    }

    // =========================================================================
    // Filter Properties
    // =========================================================================

    #[test]
    fn prop_filter_agrees_with_vec_filter(list in small_list()) {
        let filtered = list.filter(|element| element % 2 == 0);
        let expected: List<i32> = list.iter().copied().filter(|element| element % 2 == 0).collect();
        prop_assert_eq!(filtered, expected);
    }

    // =========================================================================
    // Reverse Properties
    // =========================================================================

    #[test]
    fn prop_reverse_reverse_is_identity(list in small_list()) {
        prop_assert_eq!(list.reverse().reverse(), list);
    }

    #[test]
    fn prop_reverse_preserves_length(list in small_list()) {
        prop_assert_eq!(list.reverse().len(), list.len());
    }

    // =========================================================================
    // Iteration Properties
    // =========================================================================

    #[test]
    fn prop_from_iter_preserves_order(elements in prop::collection::vec(any::<i32>(), 0..20)) {
        let list: List<i32> = elements.clone().into_iter().collect();
        let back_to_vec: Vec<i32> = list.into_iter().collect();
        prop_assert_eq!(back_to_vec, elements);
    }

    #[test]
    fn prop_len_matches_iter_count(list in small_list()) {
        prop_assert_eq!(list.len(), list.iter().count());
    }

    // =========================================================================
    // Structural Identity
    // =========================================================================

    #[test]
    fn prop_eq_reflexive(list in small_list()) {
        prop_assert_eq!(list.clone(), list);
    }

    #[test]
    fn prop_eq_symmetric(first in small_list(), second in small_list()) {
        prop_assert_eq!(first == second, second == first);
    }

    #[test]
    fn prop_equal_lists_hash_identically(elements in prop::collection::vec(any::<i32>(), 0..20)) {
        let first: List<i32> = elements.clone().into_iter().collect();
        let second: List<i32> = elements.into_iter().collect();
        prop_assert_eq!(first.structural_hash(), second.structural_hash());
    }

    #[test]
    fn prop_render_matches_bracket_form(elements in prop::collection::vec(any::<i32>(), 0..20)) {
        let list: List<i32> = elements.clone().into_iter().collect();
        let pieces: Vec<String> = elements.iter().map(ToString::to_string).collect();
        prop_assert_eq!(list.to_string(), format!("[{}]", pieces.join(", ")));
    }
}
