//! Optional values - presence or absence without an error description.
//!
//! [`Optional<A>`] is the simplest outcome type: it is either
//! [`Optional::Present`] holding a value or [`Optional::Absent`]. Use
//! [`Outcome`](super::Outcome) when the reason for absence matters.
//!
//! # Examples
//!
//! ```rust
//! use funcore::control::Optional;
//!
//! fn mean(values: &[f64]) -> Optional<f64> {
//!     if values.is_empty() {
//!         Optional::absent()
//!     } else {
//!         Optional::present(values.iter().sum::<f64>() / values.len() as f64)
//!     }
//! }
//!
//! let variance = |values: &[f64]| {
//!     mean(values).flat_map(|m| {
//!         let squares: Vec<f64> = values.iter().map(|x| (x - m).powi(2)).collect();
//!         mean(&squares)
//!     })
//! };
//!
//! assert_eq!(variance(&[1.0, 3.0]), Optional::present(1.0));
//! assert_eq!(variance(&[]), Optional::absent());
//! ```

use std::fmt;

use crate::typeclass::{Applicative, Foldable, Functor, Monad, TypeConstructor};

/// A value that may be absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Optional<A> {
    /// No value.
    Absent,
    /// A value is present.
    Present(A),
}

impl<A> Optional<A> {
    /// Creates a present value.
    #[inline]
    pub const fn present(value: A) -> Self {
        Self::Present(value)
    }

    /// Creates an absent value.
    #[inline]
    pub const fn absent() -> Self {
        Self::Absent
    }

    /// Converts a possibly-missing source value: `None` becomes `Absent`,
    /// anything else `Present`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcore::control::Optional;
    ///
    /// assert_eq!(Optional::of(Some(1)), Optional::present(1));
    /// assert_eq!(Optional::<i32>::of(None), Optional::absent());
    /// ```
    #[inline]
    pub fn of(value: Option<A>) -> Self {
        value.map_or(Self::Absent, Self::Present)
    }

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Borrows the held value.
    #[inline]
    pub const fn as_ref(&self) -> Optional<&A> {
        match self {
            Self::Present(value) => Optional::Present(value),
            Self::Absent => Optional::Absent,
        }
    }

    /// Transforms the held value.
    #[inline]
    pub fn map<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Present(value) => Optional::Present(function(value)),
            Self::Absent => Optional::Absent,
        }
    }

    /// Keeps the value only if it satisfies `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcore::control::Optional;
    ///
    /// assert_eq!(Optional::present(4).filter(|x| x % 2 == 0), Optional::present(4));
    /// assert_eq!(Optional::present(3).filter(|x| x % 2 == 0), Optional::absent());
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        self.flat_map(|value| {
            if predicate(&value) {
                Self::Present(value)
            } else {
                Self::Absent
            }
        })
    }

    /// Chains a computation that may itself be absent.
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> Optional<B>,
    {
        self.map(function).get_or_else(Optional::Absent)
    }

    /// Returns the held value, or `default`.
    #[inline]
    pub fn get_or_else(self, default: A) -> A {
        match self {
            Self::Present(value) => value,
            Self::Absent => default,
        }
    }

    /// Returns the held value, or the result of `producer`.
    ///
    /// `producer` only runs when the value is absent.
    #[inline]
    pub fn get_or_else_with<F>(self, producer: F) -> A
    where
        F: FnOnce() -> A,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => producer(),
        }
    }

    /// Returns `self` if present, otherwise the alternative produced by
    /// `alternative`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcore::control::Optional;
    ///
    /// assert_eq!(Optional::absent().or_else(|| Optional::present(2)), Optional::present(2));
    /// assert_eq!(Optional::present(1).or_else(|| Optional::present(2)), Optional::present(1));
    /// ```
    #[inline]
    pub fn or_else<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        self.map(Self::Present).get_or_else_with(alternative)
    }

    /// Combines two optional values with a binary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcore::control::Optional;
    ///
    /// let sum = Optional::map2(Optional::present(1), Optional::present(2), |a, b| a + b);
    /// assert_eq!(sum, Optional::present(3));
    /// ```
    #[inline]
    pub fn map2<B, C, F>(first: Self, second: Optional<B>, function: F) -> Optional<C>
    where
        F: FnOnce(A, B) -> C,
    {
        first.flat_map(|a| second.map(|b| function(a, b)))
    }

    /// Converts into a standard [`Option`].
    #[inline]
    pub fn into_option(self) -> Option<A> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }
}

impl<A> Default for Optional<A> {
    #[inline]
    fn default() -> Self {
        Self::Absent
    }
}

impl<A> From<Option<A>> for Optional<A> {
    #[inline]
    fn from(value: Option<A>) -> Self {
        Self::of(value)
    }
}

impl<A: fmt::Display> fmt::Display for Optional<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => write!(formatter, "Present({value})"),
            Self::Absent => write!(formatter, "Absent"),
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<A> TypeConstructor for Optional<A> {
    type Inner = A;
    type WithType<B> = Optional<B>;
}

impl<A> Functor for Optional<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Optional<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

impl<A> Applicative for Optional<A> {
    #[inline]
    fn pure<B>(value: B) -> Optional<B> {
        Optional::Present(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Optional<B>, function: F) -> Optional<C>
    where
        F: FnOnce(A, B) -> C,
    {
        Self::map2(self, other, function)
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Optional<B>, third: Optional<C>, function: F) -> Optional<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Present(a), Optional::Present(b), Optional::Present(c)) => {
                Optional::Present(function(a, b, c))
            }
            _ => Optional::Absent,
        }
    }
}

impl<A> Monad for Optional<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> Optional<B>,
    {
        Self::flat_map(self, function)
    }
}

impl<A> Foldable for Optional<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Self::Present(value) => function(init, value),
            Self::Absent => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Self::Present(value) => function(value, init),
            Self::Absent => init,
        }
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_absent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(3), Optional::Present(3))]
    #[case(None, Optional::Absent)]
    fn test_of(#[case] source: Option<i32>, #[case] expected: Optional<i32>) {
        assert_eq!(Optional::of(source), expected);
    }

    #[rstest]
    fn test_get_or_else_with_is_lazy() {
        let value = Optional::present(1).get_or_else_with(|| panic!("must not run"));
        assert_eq!(value, 1);
    }

    #[rstest]
    fn test_or_else_skips_alternative_when_present() {
        let value = Optional::present(1).or_else(|| panic!("must not run"));
        assert_eq!(value, Optional::present(1));
    }

    #[rstest]
    fn test_flat_map_absent_stays_absent() {
        let absent: Optional<i32> = Optional::absent();
        assert_eq!(absent.flat_map(|x| Optional::present(x + 1)), Optional::absent());
    }

    #[rstest]
    fn test_display() {
        assert_eq!(format!("{}", Optional::present(5)), "Present(5)");
        assert_eq!(format!("{}", Optional::<i32>::absent()), "Absent");
    }

    #[rstest]
    fn test_into_option_round_trip() {
        assert_eq!(Optional::from(Some('x')).into_option(), Some('x'));
    }
}
