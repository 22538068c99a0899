//! Foldable type class - reducing a structure to a single value.
//!
//! `fold_left` is the primitive every other method is derived from.
//! Implementations must keep `fold_left` iterative so that folding an
//! arbitrarily long structure does not grow the call stack.
//!
//! # Examples
//!
//! ```rust
//! use funcore::persistent::PersistentList;
//! use funcore::typeclass::Foldable;
//!
//! let list = PersistentList::from([1, 2, 3, 4]);
//! assert_eq!(Foldable::fold_left(list.clone(), 0, |acc, x| acc + x), 10);
//! assert_eq!(Foldable::to_vec(list), vec![1, 2, 3, 4]);
//! ```

use super::higher::TypeConstructor;

/// A type class for structures that can be folded to a summary value.
pub trait Foldable: TypeConstructor {
    /// Folds from the left: `f(f(f(init, a1), a2), a3)`.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds from the right: `f(a1, f(a2, f(a3, init)))`.
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Returns `true` if the structure holds no element.
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.clone().fold_left(true, |_, _| false)
    }

    /// Counts the elements.
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }

    /// Collects the elements, left to right, into a `Vec`.
    fn to_vec(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        })
    }

    /// Returns `true` if any element satisfies the predicate.
    fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        self.clone()
            .fold_left(false, |found, element| found || predicate(&element))
    }

    /// Returns `true` if every element satisfies the predicate.
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        !self.exists(|element| !predicate(element))
    }
}
