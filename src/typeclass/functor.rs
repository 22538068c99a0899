//! Functor type class - mapping over a container.
//!
//! A Functor lifts a function `A -> B` into `F<A> -> F<B>` without touching
//! the structure of the container.
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use funcore::control::Optional;
//! use funcore::typeclass::Functor;
//!
//! let doubled = Optional::present(21).fmap(|x| x * 2);
//! assert_eq!(doubled, Optional::present(42));
//! ```

use super::higher::TypeConstructor;

/// A type class for containers whose single value can be mapped.
///
/// `fmap` takes an `FnOnce`; containers that apply the function to many
/// elements implement [`FunctorMut`] instead.
pub trait Functor: TypeConstructor {
    /// Applies `function` to the held value, consuming the container.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies `function` to a reference to the held value.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the held value with `value`, keeping the structure.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the held value.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

/// A Functor over containers of many elements.
///
/// The mapping function may be called once per element, so it is `FnMut`.
pub trait FunctorMut: TypeConstructor {
    /// Applies `function` to every element, consuming the container.
    fn fmap_mut<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;

    /// Applies `function` to a reference to every element.
    fn fmap_ref_mut<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnMut(&Self::Inner) -> B;
}
