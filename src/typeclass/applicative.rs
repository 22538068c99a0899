//! Applicative type class - combining independent computations.
//!
//! An Applicative lifts plain values with [`Applicative::pure`] and combines
//! several wrapped values with [`Applicative::map2`] / [`Applicative::map3`].
//!
//! # Laws
//!
//! ```text
//! pure(a).map2(pure(b), f) == pure(f(a, b))
//! fa.map2(pure(()), |a, _| a) == fa
//! ```

use super::functor::Functor;

/// A Functor that can lift values and combine independent computations.
pub trait Applicative: Functor {
    /// Lifts a plain value into the context.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two computations with a binary function.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three computations with a ternary function.
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Pairs the values of two computations.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }
}

#[cfg(all(test, feature = "control"))]
mod tests {
    use super::*;
    use crate::control::{Optional, Outcome};
    use rstest::rstest;

    #[rstest]
    fn optional_map2_both_present() {
        let sum = Applicative::map2(Optional::present(1), Optional::present(2), |a, b| a + b);
        assert_eq!(sum, Optional::present(3));
    }

    #[rstest]
    fn outcome_product_short_circuits_on_failure() {
        let failed: Outcome<i32> = Outcome::failure("boom");
        let paired = Outcome::success(1).product(failed);
        assert!(paired.is_failure());
    }

    #[rstest]
    fn outcome_pure_is_success() {
        assert_eq!(<Outcome<()> as Applicative>::pure(7), Outcome::success(7));
    }
}
