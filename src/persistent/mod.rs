//! Persistent (immutable) data structures.
//!
//! This module provides immutable sequences that use structural sharing to
//! avoid copying:
//!
//! - [`PersistentList`]: persistent singly-linked list
//! - [`LazyStream`]: lazy, memoized, possibly infinite stream
//!
//! together with free functions that combine lists with
//! [`Outcome`](crate::control::Outcome) and
//! [`Deferred`](crate::control::Deferred) values.
//!
//! # Structural Sharing
//!
//! Prepending to a list, or taking its tail, reuses the existing nodes.
//! Operations that must produce new nodes, such as `map` or `concat`, leave
//! their inputs untouched.
//!
//! # Examples
//!
//! ## `PersistentList`
//!
//! ```rust
//! use funcore::persistent::PersistentList;
//!
//! let list = PersistentList::new().cons(3).cons(2).cons(1);
//! assert_eq!(list.head(), Some(&1));
//!
//! // Structural sharing: the original list is preserved
//! let extended = list.cons(0);
//! assert_eq!(list.len(), 3);
//! assert_eq!(extended.len(), 4);
//! ```
//!
//! ## `LazyStream`
//!
//! ```rust
//! use funcore::persistent::{LazyStream, PersistentList};
//!
//! let powers = LazyStream::iterate(1, |n| n * 2).take_at_most(5);
//! assert_eq!(powers.to_list(), PersistentList::from([1, 2, 4, 8, 16]));
//! ```

mod combinators;
mod list;
mod stream;

pub use combinators::{
    flatten_outcomes, lift2_deferred, product, sequence, sequence_deferred,
    sequence_deferred_outcome, traverse, unzip, zip_with,
};
pub use list::PersistentList;
pub use list::PersistentListIntoIterator;
pub use list::PersistentListIterator;
pub use stream::LazyStream;
