//! Monad type class - sequencing dependent computations.
//!
//! # Laws
//!
//! ## Left identity
//!
//! ```text
//! pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right identity
//!
//! ```text
//! m.flat_map(pure) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use funcore::control::Outcome;
//! use funcore::typeclass::Monad;
//!
//! fn parse_positive(text: &str) -> Outcome<i32> {
//!     Outcome::from(text.parse::<i32>()).filter_or_fail(|n| *n > 0, "not positive")
//! }
//!
//! let result = Outcome::success("42").flat_map(parse_positive);
//! assert_eq!(result, Outcome::success(42));
//! ```

use super::applicative::Applicative;

/// An Applicative whose computations can depend on earlier results.
pub trait Monad: Applicative {
    /// Feeds the held value into `function` and flattens the result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for [`Monad::flat_map`].
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        Monad::flat_map(self, function)
    }

    /// Sequences `next` after `self`, discarding the held value.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        Monad::flat_map(self, |_| next)
    }
}

#[cfg(all(test, feature = "control"))]
mod tests {
    use super::*;
    use crate::control::{Disjunction, Optional, Outcome};
    use rstest::rstest;

    #[rstest]
    fn optional_then_keeps_next() {
        let next = Monad::then(Optional::present(1), Optional::present("x"));
        assert_eq!(next, Optional::present("x"));
    }

    #[rstest]
    fn disjunction_and_then_chains_second() {
        let value: Disjunction<String, i32> = Disjunction::second(4);
        let result = Monad::and_then(value, |x| Disjunction::second(x * 10));
        assert_eq!(result, Disjunction::second(40));
    }

    #[rstest]
    fn outcome_then_passes_empty_through() {
        let empty: Outcome<i32> = Outcome::empty();
        assert_eq!(Monad::then(empty, Outcome::success(1)), Outcome::empty());
    }
}
