//! Disjunction type - a value that is one of two alternatives.
//!
//! [`Disjunction<E, A>`] is either `First(E)` or `Second(A)`. By convention
//! `First` describes a failure and `Second` carries the value, and the type
//! is right-biased: [`Disjunction::map`] and [`Disjunction::flat_map`] work
//! on `Second` and pass `First` through untouched.
//!
//! # Examples
//!
//! ```rust
//! use funcore::control::Disjunction;
//!
//! fn parse(text: &str) -> Disjunction<String, i32> {
//!     text.parse::<i32>()
//!         .map_or_else(|error| Disjunction::first(error.to_string()), Disjunction::second)
//! }
//!
//! assert_eq!(parse("20").map(|x| x + 1), Disjunction::second(21));
//! assert!(parse("twenty").map(|x| x + 1).is_first());
//! ```

use std::fmt;

use crate::typeclass::{Applicative, Foldable, Functor, Monad, TypeConstructor};

/// A value that is one of two alternatives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Disjunction<E, A> {
    /// The first alternative, conventionally a failure description.
    First(E),
    /// The second alternative, conventionally the value.
    Second(A),
}

impl<E, A> Disjunction<E, A> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates the first alternative.
    #[inline]
    pub const fn first(value: E) -> Self {
        Self::First(value)
    }

    /// Creates the second alternative.
    #[inline]
    pub const fn second(value: A) -> Self {
        Self::Second(value)
    }

    /// Alias for [`Disjunction::first`].
    #[inline]
    pub const fn left(value: E) -> Self {
        Self::First(value)
    }

    /// Alias for [`Disjunction::second`].
    #[inline]
    pub const fn right(value: A) -> Self {
        Self::Second(value)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `First` value.
    #[inline]
    pub const fn is_first(&self) -> bool {
        matches!(self, Self::First(_))
    }

    /// Returns `true` if this is a `Second` value.
    #[inline]
    pub const fn is_second(&self) -> bool {
        matches!(self, Self::Second(_))
    }

    /// Borrows both alternatives.
    #[inline]
    pub const fn as_ref(&self) -> Disjunction<&E, &A> {
        match self {
            Self::First(value) => Disjunction::First(value),
            Self::Second(value) => Disjunction::Second(value),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Transforms the `Second` value; `First` passes through.
    #[inline]
    pub fn map<B, F>(self, function: F) -> Disjunction<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::First(value) => Disjunction::First(value),
            Self::Second(value) => Disjunction::Second(function(value)),
        }
    }

    /// Transforms the `First` value; `Second` passes through.
    #[inline]
    pub fn map_first<T, F>(self, function: F) -> Disjunction<T, A>
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::First(value) => Disjunction::First(function(value)),
            Self::Second(value) => Disjunction::Second(value),
        }
    }

    /// Chains a computation on the `Second` value.
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> Disjunction<E, B>
    where
        F: FnOnce(A) -> Disjunction<E, B>,
    {
        match self {
            Self::First(value) => Disjunction::First(value),
            Self::Second(value) => function(value),
        }
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the `Second` value, or `default`.
    #[inline]
    pub fn get_or_else(self, default: A) -> A {
        match self {
            Self::First(_) => default,
            Self::Second(value) => value,
        }
    }

    /// Returns the `Second` value, or the result of `producer`.
    #[inline]
    pub fn get_or_else_with<F>(self, producer: F) -> A
    where
        F: FnOnce() -> A,
    {
        match self {
            Self::First(_) => producer(),
            Self::Second(value) => value,
        }
    }

    /// Returns `self` if it is `Second`, otherwise evaluates `alternative`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcore::control::Disjunction;
    ///
    /// let failed: Disjunction<&str, i32> = Disjunction::first("no");
    /// assert_eq!(failed.or_else(|| Disjunction::second(1)), Disjunction::second(1));
    /// ```
    #[inline]
    pub fn or_else<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        self.map(Self::Second).get_or_else_with(alternative)
    }

    /// Collapses both alternatives into one value.
    #[inline]
    pub fn fold<T, F, G>(self, first_function: F, second_function: G) -> T
    where
        F: FnOnce(E) -> T,
        G: FnOnce(A) -> T,
    {
        match self {
            Self::First(value) => first_function(value),
            Self::Second(value) => second_function(value),
        }
    }

    /// Converts into a standard [`Result`], `Second` becoming `Ok`.
    #[inline]
    pub fn into_result(self) -> Result<A, E> {
        self.fold(Err, Ok)
    }
}

impl<E, A> From<Result<A, E>> for Disjunction<E, A> {
    #[inline]
    fn from(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::Second(value),
            Err(error) => Self::First(error),
        }
    }
}

impl<E: fmt::Display, A: fmt::Display> fmt::Display for Disjunction<E, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First(value) => write!(formatter, "First({value})"),
            Self::Second(value) => write!(formatter, "Second({value})"),
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<E, A> TypeConstructor for Disjunction<E, A> {
    type Inner = A;
    type WithType<B> = Disjunction<E, B>;
}

impl<E: Clone, A> Functor for Disjunction<E, A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Disjunction<E, B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Disjunction<E, B>
    where
        F: FnOnce(&A) -> B,
    {
        match self {
            Self::First(value) => Disjunction::First(value.clone()),
            Self::Second(value) => Disjunction::Second(function(value)),
        }
    }
}

impl<E: Clone, A> Applicative for Disjunction<E, A> {
    #[inline]
    fn pure<B>(value: B) -> Disjunction<E, B> {
        Disjunction::Second(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Disjunction<E, B>, function: F) -> Disjunction<E, C>
    where
        F: FnOnce(A, B) -> C,
    {
        self.flat_map(|a| other.map(|b| function(a, b)))
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Disjunction<E, B>,
        third: Disjunction<E, C>,
        function: F,
    ) -> Disjunction<E, D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        self.flat_map(|a| second.flat_map(|b| third.map(|c| function(a, b, c))))
    }
}

impl<E: Clone, A> Monad for Disjunction<E, A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Disjunction<E, B>
    where
        F: FnOnce(A) -> Disjunction<E, B>,
    {
        Self::flat_map(self, function)
    }
}

impl<E, A> Foldable for Disjunction<E, A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Self::First(_) => init,
            Self::Second(value) => function(init, value),
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Self::First(_) => init,
            Self::Second(value) => function(value, init),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_map_leaves_first_untouched() {
        let value: Disjunction<String, i32> = Disjunction::first("error".to_string());
        assert_eq!(value.map(|x| x * 2), Disjunction::first("error".to_string()));
    }

    #[rstest]
    fn test_left_right_aliases() {
        assert_eq!(Disjunction::<i32, ()>::left(1), Disjunction::first(1));
        assert_eq!(Disjunction::<(), i32>::right(2), Disjunction::second(2));
    }

    #[rstest]
    fn test_get_or_else_with_only_runs_on_first() {
        let second: Disjunction<&str, i32> = Disjunction::second(3);
        assert_eq!(second.get_or_else_with(|| panic!("must not run")), 3);

        let first: Disjunction<&str, i32> = Disjunction::first("e");
        assert_eq!(first.get_or_else(9), 9);
    }

    #[rstest]
    fn test_or_else_keeps_second() {
        let second: Disjunction<&str, i32> = Disjunction::second(3);
        assert_eq!(
            second.or_else(|| panic!("must not run")),
            Disjunction::second(3)
        );
    }

    #[rstest]
    fn test_result_conversion_roundtrip() {
        let ok: Result<i32, String> = Ok(42);
        assert_eq!(Disjunction::from(ok.clone()).into_result(), ok);

        let err: Result<i32, String> = Err("error".to_string());
        assert_eq!(Disjunction::from(err.clone()).into_result(), err);
    }

    #[rstest]
    fn test_display() {
        let first: Disjunction<&str, i32> = Disjunction::first("bad");
        assert_eq!(format!("{first}"), "First(bad)");
        let second: Disjunction<&str, i32> = Disjunction::second(1);
        assert_eq!(format!("{second}"), "Second(1)");
    }
}
