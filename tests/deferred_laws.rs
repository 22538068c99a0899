#![cfg(feature = "control")]
//! Property-based tests for Deferred laws.
//!
//! This module verifies that Deferred implementations satisfy:
//!
//! - **Idempotence**: force() returns the same value every time
//! - **Memoization**: the producer runs at most once
//! - **Functor Laws**: identity and composition
//! - **Monad Laws**: left identity, right identity, associativity

use funcore::control::Deferred;
use proptest::prelude::*;
use std::cell::Cell;
use std::rc::Rc;

// =============================================================================
// Idempotence and Memoization
// =============================================================================

proptest! {
    #[test]
    fn prop_deferred_idempotence(value in any::<i32>()) {
        let deferred = Deferred::new(move || value);

        let first = *deferred.force();
        let second = *deferred.force();
        prop_assert_eq!(first, value);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_deferred_runs_producer_once(value in any::<i32>(), forces in 1_usize..20) {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let deferred = Deferred::new(move || {
            counter.set(counter.get() + 1);
            value
        });
        let clones: Vec<Deferred<i32>> = (0..forces).map(|_| deferred.clone()).collect();

        for clone in &clones {
            prop_assert_eq!(clone.value(), value);
        }
        prop_assert_eq!(calls.get(), 1);
    }

    #[test]
    fn prop_ready_never_runs_anything(value in any::<i64>()) {
        let deferred = Deferred::ready(value);
        prop_assert!(deferred.is_evaluated());
        prop_assert_eq!(deferred.value(), value);
    }
}

// =============================================================================
// Functor Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_deferred_functor_identity(value in any::<i32>()) {
        let deferred = Deferred::new(move || value);
        prop_assert_eq!(deferred.map(|x| x).value(), value);
    }

    #[test]
    fn prop_deferred_functor_composition(value in any::<i32>()) {
        let f = |x: i32| x.wrapping_add(7);
        let g = |x: i32| x.wrapping_mul(3);

        let deferred = Deferred::new(move || value);
        let composed = deferred.map(move |x| g(f(x))).value();
        let chained = deferred.map(f).map(g).value();
        prop_assert_eq!(composed, chained);
    }
}

// =============================================================================
// Monad Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_deferred_left_identity(value in any::<i32>()) {
        let function = |x: i32| Deferred::new(move || x.wrapping_sub(1));
        prop_assert_eq!(
            Deferred::pure(value).flat_map(function).value(),
            function(value).value()
        );
    }

    #[test]
    fn prop_deferred_right_identity(value in any::<i32>()) {
        let deferred = Deferred::new(move || value);
        prop_assert_eq!(deferred.flat_map(Deferred::pure).value(), value);
    }

    #[test]
    fn prop_deferred_associativity(value in any::<i32>()) {
        let f = |x: i32| Deferred::new(move || x.wrapping_add(1));
        let g = |x: i32| Deferred::new(move || x.wrapping_mul(2));

        let deferred = Deferred::new(move || value);
        let left = deferred.flat_map(f).flat_map(g).value();
        let right = deferred.flat_map(move |x| f(x).flat_map(g)).value();
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_lift2_matches_zip_with(first in any::<i32>(), second in any::<i32>()) {
        let add = Deferred::lift2(|a: i32, b: i32| a.wrapping_add(b));
        let a = Deferred::new(move || first);
        let b = Deferred::new(move || second);
        prop_assert_eq!(add(&a, &b).value(), a.zip_with(&b, i32::wrapping_add).value());
    }
}
