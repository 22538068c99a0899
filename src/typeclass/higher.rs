//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust does not support Higher-Kinded Types, so a trait cannot abstract
//! over `Outcome<_>` or `PersistentList<_>` as type constructors directly.
//! [`TypeConstructor`] works around this with a GAT that names "the same
//! container, holding a different element type".
//!
//! # Example
//!
//! ```rust
//! use funcore::control::Outcome;
//! use funcore::typeclass::TypeConstructor;
//!
//! fn rewrap<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let outcome: Outcome<String> = rewrap(Outcome::success(42));
//! assert!(outcome.is_empty());
//! ```

/// A type constructor of kind `* -> *`.
///
/// `Inner` is the element type currently held; `WithType<B>` is the same
/// constructor applied to `B`.
pub trait TypeConstructor {
    /// The element type held by this constructor.
    type Inner;

    /// The same constructor applied to a different element type.
    type WithType<B>: TypeConstructor<Inner = B>;
}
