#![cfg(feature = "serde")]

//! Integration tests for serde support in funcore.
//!
//! These tests verify that the outcome types and `PersistentList` serialize
//! and deserialize with serde_json.

use funcore::control::{Cause, Disjunction, Optional, Outcome};
use funcore::persistent::PersistentList;
use rstest::rstest;

// =============================================================================
// Outcome Types
// =============================================================================

#[rstest]
#[case(Outcome::success(42))]
#[case(Outcome::failure("boom"))]
#[case(Outcome::failure_with(Cause::IndexOutOfBounds { index: 3, length: 1 }))]
#[case(Outcome::failure_with(Cause::Missing))]
#[case(Outcome::empty())]
fn test_outcome_json_roundtrip(#[case] outcome: Outcome<i32>) {
    let json = serde_json::to_string(&outcome).unwrap();
    let restored: Outcome<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(outcome, restored);
}

#[rstest]
fn test_outcome_json_shape() {
    assert_eq!(serde_json::to_string(&Outcome::success(1)).unwrap(), r#"{"Success":1}"#);
    assert_eq!(serde_json::to_string(&Outcome::<i32>::empty()).unwrap(), r#""Empty""#);
    assert_eq!(
        serde_json::to_string(&Outcome::<i32>::failure("bad")).unwrap(),
        r#"{"Failure":{"Message":"bad"}}"#
    );
}

#[rstest]
fn test_optional_and_disjunction_roundtrip() {
    let present = Optional::present("value".to_string());
    let json = serde_json::to_string(&present).unwrap();
    assert_eq!(serde_json::from_str::<Optional<String>>(&json).unwrap(), present);

    let first: Disjunction<String, i32> = Disjunction::first("error".to_string());
    let second: Disjunction<String, i32> = Disjunction::second(7);
    for value in [first, second] {
        let json = serde_json::to_string(&value).unwrap();
        let restored: Disjunction<String, i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(value, restored);
    }
}

// =============================================================================
// PersistentList
// =============================================================================

#[rstest]
fn test_list_json_roundtrip() {
    let list: PersistentList<i32> = (1..=10).collect();
    let json = serde_json::to_string(&list).unwrap();
    assert_eq!(json, "[1,2,3,4,5,6,7,8,9,10]");
    let restored: PersistentList<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(list, restored);
}

#[rstest]
fn test_list_nested_structures() {
    let inner1: PersistentList<i32> = (1..=3).collect();
    let inner2: PersistentList<i32> = (4..=6).collect();
    let outer: PersistentList<PersistentList<i32>> = vec![inner1, inner2].into_iter().collect();

    let json = serde_json::to_string(&outer).unwrap();
    let restored: PersistentList<PersistentList<i32>> = serde_json::from_str(&json).unwrap();

    assert_eq!(outer.len(), restored.len());
    for (original, restored_inner) in outer.iter().zip(restored.iter()) {
        assert_eq!(original, restored_inner);
    }
}

#[rstest]
fn test_list_of_outcomes() {
    let list = PersistentList::from([Outcome::success(1), Outcome::empty(), Outcome::failure("x")]);
    let json = serde_json::to_string(&list).unwrap();
    let restored: PersistentList<Outcome<i32>> = serde_json::from_str(&json).unwrap();
    assert_eq!(list, restored);
}

#[rstest]
fn test_list_rejects_non_sequence() {
    let result: Result<PersistentList<i32>, _> = serde_json::from_str(r#"{"a":1}"#);
    assert!(result.is_err());
}

#[rstest]
fn test_empty_list() {
    let list: PersistentList<String> = PersistentList::new();
    let json = serde_json::to_string(&list).unwrap();
    assert_eq!(json, "[]");
    let restored: PersistentList<String> = serde_json::from_str(&json).unwrap();
    assert!(restored.is_empty());
}
