#![cfg(feature = "persistent")]
//! Integration tests for the list, outcome and deferred combinators.

use funcore::control::{Cause, Deferred, Outcome};
use funcore::persistent::{
    PersistentList, flatten_outcomes, lift2_deferred, product, sequence, sequence_deferred,
    sequence_deferred_outcome, traverse, unzip, zip_with,
};
use proptest::prelude::*;
use rstest::rstest;
use std::cell::Cell;
use std::rc::Rc;

fn parse(text: &&str) -> Outcome<i32> {
    Outcome::from(text.parse::<i32>())
}

// =============================================================================
// traverse / sequence
// =============================================================================

#[rstest]
#[case(&["1", "2", "3"], Outcome::success(PersistentList::from([1, 2, 3])))]
#[case(&[], Outcome::success(PersistentList::new()))]
fn traverse_parses_all(#[case] input: &[&str], #[case] expected: Outcome<PersistentList<i32>>) {
    let list: PersistentList<&str> = input.iter().copied().collect();
    assert_eq!(traverse(&list, parse), expected);
}

#[rstest]
fn traverse_reports_first_failure() {
    let list = PersistentList::from(["1", "two", "three"]);
    let result = traverse(&list, parse);
    assert_eq!(
        result.cause().map(|cause| cause.to_string()),
        Some("invalid digit found in string".to_string())
    );
}

#[rstest]
fn sequence_of_lookups() {
    let ages = PersistentList::from([Some(31), None, Some(40)]);
    let outcomes = ages.map(|age| Outcome::of(*age));
    assert_eq!(sequence(&outcomes), Outcome::failure_with(Cause::Missing));
    assert_eq!(flatten_outcomes(&outcomes), PersistentList::from([31, 40]));
}

#[rstest]
fn sequence_with_empty_element_is_empty() {
    let outcomes = PersistentList::from([Outcome::success(1), Outcome::empty()]);
    assert_eq!(sequence(&outcomes), Outcome::empty());
}

// =============================================================================
// zip_with / product / unzip
// =============================================================================

#[rstest]
#[case(vec![1, 2, 3], vec![10, 20], vec![11, 22])]
#[case(vec![1], vec![10, 20, 30], vec![11])]
#[case(vec![], vec![10], vec![])]
fn zip_with_sums(#[case] first: Vec<i32>, #[case] second: Vec<i32>, #[case] expected: Vec<i32>) {
    assert_eq!(
        zip_with(&PersistentList::from(first), &PersistentList::from(second), |a, b| a + b),
        PersistentList::from(expected)
    );
}

#[rstest]
fn product_is_cartesian() {
    let sizes = PersistentList::from(["S", "M"]);
    let colours = PersistentList::from(["red", "blue"]);
    let variants = product(&sizes, &colours, |size, colour| format!("{size}-{colour}"));
    assert_eq!(variants.to_string(), "[S-red, S-blue, M-red, M-blue, NIL]");
}

#[rstest]
fn unzip_pairs() {
    let pairs = zip_with(
        &PersistentList::from([1, 2, 3]),
        &PersistentList::from(['a', 'b', 'c']),
        |n, c| (*n, *c),
    );
    let (numbers, letters) = unzip(&pairs);
    assert_eq!(numbers, PersistentList::from([1, 2, 3]));
    assert_eq!(letters, PersistentList::from(['a', 'b', 'c']));
}

// =============================================================================
// Deferred Combinators
// =============================================================================

#[rstest]
fn sequence_deferred_forces_each_once() {
    let calls = Rc::new(Cell::new(0));
    let list: PersistentList<Deferred<i32>> = (1..=4)
        .map(|n| {
            let counter = Rc::clone(&calls);
            Deferred::new(move || {
                counter.set(counter.get() + 1);
                n * n
            })
        })
        .collect();

    let combined = sequence_deferred(&list);
    assert_eq!(calls.get(), 0);
    assert_eq!(combined.value(), PersistentList::from([1, 4, 9, 16]));
    assert_eq!(combined.value(), PersistentList::from([1, 4, 9, 16]));
    assert_eq!(calls.get(), 4);
}

#[rstest]
fn sequence_deferred_outcome_stops_at_panic() {
    let reached = Rc::new(Cell::new(false));
    let flag = Rc::clone(&reached);
    let list = PersistentList::from([
        Deferred::new(|| 1),
        Deferred::new(|| -> i32 { panic!("second producer") }),
        Deferred::new(move || {
            flag.set(true);
            3
        }),
    ]);

    let result = sequence_deferred_outcome(&list).value();
    assert_eq!(
        result,
        Outcome::failure_with(Cause::Panicked("second producer".to_string()))
    );
    assert!(!reached.get());
}

#[rstest]
fn sequence_deferred_outcome_succeeds() {
    let list = PersistentList::from([Deferred::ready(1), Deferred::new(|| 2)]);
    assert_eq!(
        sequence_deferred_outcome(&list).value(),
        Outcome::success(PersistentList::from([1, 2]))
    );
}

#[rstest]
fn lift2_deferred_is_lazy() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let concat = lift2_deferred(move |a: String, b: String| {
        counter.set(counter.get() + 1);
        a + &b
    });

    let joined = concat(&Deferred::new(|| "foo".to_string()), &Deferred::ready("bar".to_string()));
    assert_eq!(calls.get(), 0);
    assert_eq!(joined.value(), "foobar");
    assert_eq!(calls.get(), 1);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_zip_with_length_is_min(first in prop::collection::vec(any::<i32>(), 0..20),
                                   second in prop::collection::vec(any::<i32>(), 0..20)) {
        let expected = first.len().min(second.len());
        let zipped = zip_with(&PersistentList::from(first), &PersistentList::from(second), |a, b| (*a, *b));
        prop_assert_eq!(zipped.len(), expected);
    }

    #[test]
    fn prop_traverse_success_preserves_elements(values in prop::collection::vec(any::<i32>(), 0..20)) {
        let list = PersistentList::from(values);
        prop_assert_eq!(traverse(&list, |x| Outcome::success(*x)), Outcome::success(list.clone()));
    }

    #[test]
    fn prop_product_length(first in prop::collection::vec(any::<u8>(), 0..8),
                           second in prop::collection::vec(any::<u8>(), 0..8)) {
        let expected = first.len() * second.len();
        let pairs = product(&PersistentList::from(first), &PersistentList::from(second), |a, b| (*a, *b));
        prop_assert_eq!(pairs.len(), expected);
    }
}
