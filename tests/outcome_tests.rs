#![cfg(feature = "control")]
//! Behaviour tests for Outcome.
//!
//! Tests cover:
//! - Construction from possibly-missing values
//! - Recovery with `or_else`
//! - Panic conversion inside `map` and `or_else`
//! - Lifting plain functions

use funcore::control::{Cause, Optional, Outcome};
use rstest::rstest;
use std::cell::{Cell, RefCell};

#[derive(Debug, Clone, PartialEq)]
struct Account {
    owner: String,
    balance: i64,
}

fn find_account(owner: &str) -> Outcome<Account> {
    match owner {
        "alice" => Outcome::success(Account {
            owner: owner.to_string(),
            balance: 120,
        }),
        "closed" => Outcome::empty(),
        _ => Outcome::failure(format!("no account for {owner}")),
    }
}

fn withdraw(account: Account, amount: i64) -> Outcome<Account> {
    Outcome::success(account)
        .filter_or_fail(|account| account.balance >= amount, "insufficient funds")
        .map(|account| Account {
            balance: account.balance - amount,
            ..account
        })
}

// =============================================================================
// Construction
// =============================================================================

#[rstest]
#[case(Some(5), Outcome::success(5))]
#[case(Some(-5), Outcome::empty())]
#[case(None, Outcome::failure_with(Cause::Missing))]
fn of_filtered(#[case] value: Option<i32>, #[case] expected: Outcome<i32>) {
    assert_eq!(Outcome::of_filtered(value, |x| *x > 0), expected);
}

#[rstest]
#[case(Some(5), Outcome::success(5))]
#[case(Some(-5), Outcome::failure("must be positive"))]
#[case(None, Outcome::failure("must be positive"))]
fn of_filtered_or_fail(#[case] value: Option<i32>, #[case] expected: Outcome<i32>) {
    assert_eq!(
        Outcome::of_filtered_or_fail(value, "must be positive", |x| *x > 0),
        expected
    );
}

#[rstest]
fn conversions_from_std_types() {
    assert_eq!(Outcome::from(Some(1)), Outcome::success(1));
    assert_eq!(Outcome::<i32>::from(None), Outcome::failure_with(Cause::Missing));
    assert_eq!(Outcome::from("7".parse::<u8>()), Outcome::success(7));
    assert!(Outcome::from("x".parse::<u8>()).is_failure());
    assert_eq!(Outcome::<u8>::default(), Outcome::empty());
}

// =============================================================================
// Chaining
// =============================================================================

#[rstest]
#[case("alice", 20, Outcome::success(100))]
#[case("alice", 500, Outcome::failure("insufficient funds"))]
#[case("bob", 20, Outcome::failure("no account for bob"))]
#[case("closed", 20, Outcome::empty())]
fn withdrawal_pipeline(#[case] owner: &str, #[case] amount: i64, #[case] expected: Outcome<i64>) {
    let balance = find_account(owner)
        .flat_map(|account| withdraw(account, amount))
        .map(|account| account.balance);
    assert_eq!(balance, expected);
}

#[rstest]
fn map_failure_rewrites_only_failures() {
    let described = find_account("bob").map_failure("lookup failed");
    assert_eq!(described.cause(), Some(&Cause::message("lookup failed")));
    assert!(find_account("closed").map_failure("lookup failed").is_empty());
}

// =============================================================================
// Recovery
// =============================================================================

#[rstest]
#[case(Outcome::success(1), Outcome::success(1))]
#[case(Outcome::empty(), Outcome::success(0))]
#[case(Outcome::failure("e"), Outcome::success(0))]
fn or_else_recovers_non_success(#[case] input: Outcome<i32>, #[case] expected: Outcome<i32>) {
    assert_eq!(input.or_else(|| Outcome::success(0)), expected);
}

#[rstest]
fn or_else_is_not_evaluated_on_success() {
    let called = Cell::new(false);
    let result = Outcome::success(1).or_else(|| {
        called.set(true);
        Outcome::success(2)
    });
    assert_eq!(result, Outcome::success(1));
    assert!(!called.get());
}

#[rstest]
fn or_else_can_chain_fallbacks() {
    let resolved = find_account("bob")
        .or_else(|| find_account("closed"))
        .or_else(|| find_account("alice"));
    assert_eq!(resolved.map(|account| account.owner), Outcome::success("alice".to_string()));
}

#[rstest]
fn get_or_else_variants() {
    assert_eq!(Outcome::success(3).get_or_else(0), 3);
    assert_eq!(Outcome::<i32>::failure("e").get_or_else(0), 0);
    assert_eq!(Outcome::<i32>::empty().get_or_else_with(|| 9), 9);
}

// =============================================================================
// Panic Conversion
// =============================================================================

#[rstest]
fn panic_in_map_becomes_failure() {
    let values = [3, 0];
    let result = Outcome::success(values).map(|values| values[0] / values[1]);
    assert!(matches!(result.cause(), Some(Cause::Panicked(_))));
}

#[rstest]
fn panic_in_or_else_becomes_failure() {
    let result: Outcome<i32> = Outcome::empty().or_else(|| panic!("fallback exploded"));
    assert_eq!(
        result,
        Outcome::failure_with(Cause::Panicked("fallback exploded".to_string()))
    );
}

#[rstest]
fn flat_map_does_not_catch_panics() {
    let result = std::panic::catch_unwind(|| {
        Outcome::success(1).flat_map(|_| -> Outcome<i32> { panic!("not guarded") })
    });
    assert!(result.is_err());
}

// =============================================================================
// Lifting
// =============================================================================

#[rstest]
fn lift2_adapts_binary_function() {
    let transfer = Outcome::lift2(|from: Account, to: Account| from.balance + to.balance);
    assert_eq!(
        transfer(find_account("alice"), find_account("alice")),
        Outcome::success(240)
    );
    assert!(transfer(find_account("alice"), find_account("bob")).is_failure());
    assert!(transfer(find_account("closed"), find_account("bob")).is_empty());
}

#[rstest]
fn callbacks_and_conversions() {
    let seen = RefCell::new(Vec::new());
    for outcome in [Outcome::success(1), Outcome::failure("boom"), Outcome::empty()] {
        outcome.for_each(
            |value| seen.borrow_mut().push(format!("value {value}")),
            |cause| seen.borrow_mut().push(format!("cause {cause}")),
            || seen.borrow_mut().push("nothing".to_string()),
        );
    }
    assert_eq!(seen.into_inner(), vec!["value 1", "cause boom", "nothing"]);

    assert_eq!(Outcome::success(2).into_optional(), Optional::present(2));
    assert_eq!(Outcome::<i32>::empty().into_optional(), Optional::absent());
}
