//! # funcore
//!
//! A small functional core for Rust: outcome types, a persistent list, lazy
//! streams, and memoized deferred values.
//!
//! ## Overview
//!
//! - **Type Classes**: Functor, Applicative, Monad, Foldable
//! - **Control Structures**: [`Optional`](control::Optional),
//!   [`Disjunction`](control::Disjunction), [`Outcome`](control::Outcome),
//!   and [`Deferred`](control::Deferred)
//! - **Persistent Data Structures**: [`PersistentList`](persistent::PersistentList)
//!   and [`LazyStream`](persistent::LazyStream)
//!
//! Every value is immutable once built. The only mutation anywhere is a
//! `Deferred` caching its result on first use. All types are single-threaded
//! (`!Send`, `!Sync`).
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, etc.)
//! - `control`: Optional, Disjunction, Outcome, Deferred
//! - `persistent`: `PersistentList`, `LazyStream`, and combinators
//! - `serde`: Serialization for the outcome types and `PersistentList`
//! - `full`: Enable all features
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events and never installs a subscriber:
//!
//! - `TRACE` when a `Deferred` is evaluated and when a stream is
//!   materialized into a list
//! - `DEBUG` (target `funcore::outcome`) when a panic inside
//!   `Outcome::map` or `Outcome::or_else` is converted into a `Failure`
//!
//! ## Example
//!
//! ```rust
//! use funcore::prelude::*;
//!
//! let scores = PersistentList::from(["12", "7", "x"]);
//! let parsed = traverse(&scores, |text| Outcome::from(text.parse::<u32>()));
//! assert!(parsed.is_failure());
//!
//! let total = flatten_outcomes(&scores.map(|text| Outcome::from(text.parse::<u32>())))
//!     .fold_left(0, |sum, score| sum + score);
//! assert_eq!(total, 19);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use funcore::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "persistent")]
    pub use crate::persistent::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "persistent")]
pub mod persistent;
