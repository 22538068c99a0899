//! Control structures for absent, failing, and deferred values.
//!
//! This module provides the building blocks that the persistent structures
//! return and consume:
//!
//! - [`Optional`]: a value that may be absent
//! - [`Disjunction`]: a value that is one of two alternatives
//! - [`Outcome`]: success, empty, or failure with a [`Cause`]
//! - [`Deferred`]: a memoized computation that runs at most once
//!
//! # Examples
//!
//! ## Recovering from a failure
//!
//! ```rust
//! use funcore::control::Outcome;
//!
//! let port = Outcome::from("80x".parse::<u16>())
//!     .or_else(|| Outcome::success(8080));
//! assert_eq!(port, Outcome::success(8080));
//! ```
//!
//! ## Deferred evaluation
//!
//! ```rust
//! use funcore::control::Deferred;
//!
//! let deferred = Deferred::new(|| {
//!     println!("Computing...");
//!     42
//! });
//! // "Computing..." is not printed yet
//!
//! assert_eq!(*deferred.force(), 42);
//! ```

mod cause;
mod deferred;
mod disjunction;
mod optional;
mod outcome;

pub use cause::Cause;
pub use deferred::{Deferred, DeferredState};
pub use disjunction::Disjunction;
pub use optional::Optional;
pub use outcome::Outcome;
