//! Property-based tests for the automaton and set layers.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs, plus the exhaustive remainder
//! sweeps for the mod-3 and mod-4 automata.

use finite_automaton::{binary_mod_automaton, compute_output, ExecutionError, Set};
use proptest::prelude::*;
use std::convert::Infallible;
use std::sync::Arc;

fn identity(token: &str) -> Result<String, Infallible> {
    Ok(token.to_string())
}

#[test]
fn mod_three_matches_remainders_up_to_one_thousand() {
    let fa = Arc::new(binary_mod_automaton(3).unwrap());
    for value in 0..=1000u32 {
        let binary = format!("{value:b}");
        assert_eq!(
            compute_output(&fa, &binary).unwrap(),
            i64::from(value % 3),
            "value {value} ({binary})"
        );
    }
}

#[test]
fn mod_four_matches_remainders_up_to_one_thousand() {
    let fa = Arc::new(binary_mod_automaton(4).unwrap());
    for value in 0..=1000u32 {
        let binary = format!("{value:b}");
        assert_eq!(
            compute_output(&fa, &binary).unwrap(),
            i64::from(value % 4),
            "value {value} ({binary})"
        );
    }
}

proptest! {
    #[test]
    fn any_modulus_matches_the_integer_remainder(
        modulus in 1..=64u32,
        value in 0..=1_000_000u32,
    ) {
        let fa = Arc::new(binary_mod_automaton(modulus).unwrap());
        let binary = format!("{value:b}");
        prop_assert_eq!(
            compute_output(&fa, &binary).unwrap(),
            i64::from(value % modulus)
        );
    }

    #[test]
    fn runs_are_deterministic(value in 0..=100_000u32) {
        let fa = Arc::new(binary_mod_automaton(7).unwrap());
        let binary = format!("{value:b}");
        let first = compute_output(&fa, &binary).unwrap();
        let second = compute_output(&fa, &binary).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn symbols_outside_the_alphabet_are_rejected(
        value in 0..=1000u32,
        bad in prop::char::range('2', '9'),
    ) {
        let fa = Arc::new(binary_mod_automaton(3).unwrap());
        let input = format!("{value:b}{bad}");
        let result = compute_output(&fa, &input);
        prop_assert!(
            matches!(
                result,
                Err(ExecutionError::UnacceptableSymbol { symbol }) if symbol == bad
            ),
            "unexpected result: {:?}",
            result
        );
    }

    #[test]
    fn insertion_order_never_matters(mut elements in prop::collection::vec("[a-z]{1,4}", 0..12)) {
        let forward: Set<String> = elements.iter().cloned().collect();
        elements.reverse();
        let backward: Set<String> = elements.into_iter().collect();

        prop_assert!(forward.is_subset(&backward));
        prop_assert!(backward.is_subset(&forward));
        prop_assert_eq!(&forward, &backward);
        prop_assert_eq!(forward.to_string(), backward.to_string());
    }

    #[test]
    fn insert_is_idempotent(elements in prop::collection::vec("[a-z]{1,4}", 1..8)) {
        let mut set: Set<String> = elements.iter().cloned().collect();
        let size = set.len();
        set.insert(elements[0].clone());
        prop_assert_eq!(set.len(), size);
    }

    #[test]
    fn display_roundtrips_through_parse(elements in prop::collection::vec("[A-Za-z0-9]{1,6}", 0..10)) {
        let original: Set<String> = elements.into_iter().collect();
        let parsed = Set::parse(&original.to_string(), identity).unwrap();
        prop_assert_eq!(original, parsed);
    }

    #[test]
    fn unwrapped_literals_are_format_errors(text in "[A-Za-z0-9,]{0,20}") {
        let result = Set::parse(&text, identity);
        prop_assert!(
            matches!(
                result,
                Err(finite_automaton::ParseError::Format { .. })
            ),
            "unexpected result: {:?}",
            result
        );
    }
}
