//! Deferred evaluation with memoization.
//!
//! This module provides [`Deferred<A>`], a computation that runs at most once.
//! The producer is invoked on the first [`Deferred::force`]; every later access
//! returns the cached value.
//!
//! Cloning a `Deferred` does not copy the computation: all clones share one
//! cell, so forcing any of them evaluates the producer for all of them. This
//! is what lets [`LazyStream`](crate::persistent::LazyStream) nodes reference
//! the same deferred tail from several streams.
//!
//! # Examples
//!
//! ```rust
//! use funcore::control::Deferred;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let calls = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&calls);
//! let deferred = Deferred::new(move || {
//!     counter.set(counter.get() + 1);
//!     42
//! });
//!
//! assert_eq!(calls.get(), 0);
//! assert_eq!(*deferred.force(), 42);
//! assert_eq!(*deferred.force(), 42);
//! assert_eq!(calls.get(), 1);
//! ```

use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;

const POISONED_MESSAGE: &str = "Deferred value is poisoned (its producer panicked or forced itself)";

/// The internal state of a [`Deferred`] value.
pub enum DeferredState<A> {
    /// The producer has not run yet.
    Pending(Box<dyn FnOnce() -> A>),
    /// The producer ran and its result is cached.
    Evaluated(A),
    /// The producer panicked, or is currently running.
    Poisoned,
}

/// A memoized deferred computation.
///
/// # Thread Safety
///
/// `Deferred` is built on `Rc<RefCell<_>>` and is neither `Send` nor `Sync`.
/// Forcing the same value concurrently is impossible by construction; a
/// concurrent host needs a synchronized one-shot cell with the same
/// contract (evaluate once, return the cached value afterwards).
///
/// # Panics
///
/// Forcing a poisoned value panics. A value becomes poisoned when its
/// producer panics, and it is observed as poisoned if the producer forces
/// the very value it is computing.
pub struct Deferred<A> {
    state: Rc<RefCell<DeferredState<A>>>,
}

static_assertions::assert_not_impl_any!(Deferred<i32>: Send, Sync);

impl<A> Deferred<A> {
    /// Creates a deferred value from a producer.
    ///
    /// The producer does not run until the value is forced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcore::control::Deferred;
    ///
    /// let deferred = Deferred::new(|| 6 * 7);
    /// assert!(!deferred.is_evaluated());
    /// ```
    #[inline]
    pub fn new<F>(producer: F) -> Self
    where
        F: FnOnce() -> A + 'static,
    {
        Self {
            state: Rc::new(RefCell::new(DeferredState::Pending(Box::new(producer)))),
        }
    }

    /// Creates a deferred value that is already evaluated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcore::control::Deferred;
    ///
    /// let deferred = Deferred::ready("done");
    /// assert!(deferred.is_evaluated());
    /// ```
    #[inline]
    pub fn ready(value: A) -> Self {
        Self {
            state: Rc::new(RefCell::new(DeferredState::Evaluated(value))),
        }
    }

    /// Lifts a value into `Deferred`. Alias for [`Deferred::ready`].
    #[inline]
    pub fn pure(value: A) -> Self {
        Self::ready(value)
    }

    /// Forces evaluation and returns a reference to the cached value.
    ///
    /// # Panics
    ///
    /// Panics if the value is poisoned.
    pub fn force(&self) -> Ref<'_, A> {
        let needs_evaluation = {
            let state = self.state.borrow();
            match &*state {
                DeferredState::Evaluated(_) => false,
                DeferredState::Poisoned => panic!("{POISONED_MESSAGE}"),
                DeferredState::Pending(_) => true,
            }
        };

        if needs_evaluation {
            self.evaluate();
        }

        Ref::map(self.state.borrow(), |state| match state {
            DeferredState::Evaluated(value) => value,
            _ => panic!("{POISONED_MESSAGE}"),
        })
    }

    /// Runs the producer.
    ///
    /// The state is `Poisoned` while the producer runs, and stays that way
    /// if it panics. No borrow is held across the call so that the producer
    /// may force other deferred values freely.
    fn evaluate(&self) {
        let producer = {
            let mut state = self.state.borrow_mut();
            match std::mem::replace(&mut *state, DeferredState::Poisoned) {
                DeferredState::Pending(producer) => producer,
                other => {
                    *state = other;
                    return;
                }
            }
        };

        tracing::trace!("evaluating deferred value");
        let value = producer();
        *self.state.borrow_mut() = DeferredState::Evaluated(value);
    }

    /// Returns the cached value without forcing it.
    pub fn get(&self) -> Option<Ref<'_, A>> {
        let state = self.state.borrow();
        if matches!(&*state, DeferredState::Evaluated(_)) {
            Some(Ref::map(state, |state| match state {
                DeferredState::Evaluated(value) => value,
                _ => unreachable!(),
            }))
        } else {
            None
        }
    }

    /// Returns whether the producer has run to completion.
    #[inline]
    pub fn is_evaluated(&self) -> bool {
        matches!(&*self.state.borrow(), DeferredState::Evaluated(_))
    }

    /// Returns whether the value is poisoned.
    #[inline]
    pub fn is_poisoned(&self) -> bool {
        matches!(&*self.state.borrow(), DeferredState::Poisoned)
    }

    /// Takes the cached value out if this is the last handle to an
    /// evaluated cell.
    ///
    /// Used to unlink long chains of memoized values without recursion.
    pub(crate) fn into_evaluated(self) -> Option<A> {
        Rc::try_unwrap(self.state)
            .ok()
            .and_then(|cell| match cell.into_inner() {
                DeferredState::Evaluated(value) => Some(value),
                _ => None,
            })
    }
}

impl<A: Clone> Deferred<A> {
    /// Forces evaluation and returns a clone of the cached value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcore::control::Deferred;
    ///
    /// let deferred = Deferred::new(|| String::from("hi"));
    /// assert_eq!(deferred.value(), "hi");
    /// ```
    pub fn value(&self) -> A {
        self.force().clone()
    }

    /// Consumes the handle and returns the value, moving it out of the cell
    /// when no other handle shares it.
    pub fn into_value(self) -> A {
        match Rc::try_unwrap(self.state) {
            Ok(cell) => match cell.into_inner() {
                DeferredState::Evaluated(value) => value,
                DeferredState::Pending(producer) => producer(),
                DeferredState::Poisoned => panic!("{POISONED_MESSAGE}"),
            },
            Err(shared) => Self { state: shared }.value(),
        }
    }
}

impl<A: Clone + 'static> Deferred<A> {
    /// Returns a deferred value that applies `function` to this one.
    ///
    /// Neither this value nor `function` is evaluated until the result is
    /// forced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcore::control::Deferred;
    ///
    /// let doubled = Deferred::new(|| 21).map(|x| x * 2);
    /// assert_eq!(*doubled.force(), 42);
    /// ```
    pub fn map<B, F>(&self, function: F) -> Deferred<B>
    where
        F: FnOnce(A) -> B + 'static,
    {
        let source = self.clone();
        Deferred::new(move || function(source.value()))
    }

    /// Chains a computation that itself produces a deferred value, flattening
    /// the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcore::control::Deferred;
    ///
    /// let result = Deferred::new(|| 21).flat_map(|x| Deferred::new(move || x * 2));
    /// assert_eq!(*result.force(), 42);
    /// ```
    pub fn flat_map<B, F>(&self, function: F) -> Deferred<B>
    where
        B: Clone,
        F: FnOnce(A) -> Deferred<B> + 'static,
    {
        let source = self.clone();
        Deferred::new(move || function(source.value()).into_value())
    }

    /// Combines two deferred values with a binary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcore::control::Deferred;
    ///
    /// let sum = Deferred::new(|| 20).zip_with(&Deferred::new(|| 22), |a, b| a + b);
    /// assert_eq!(*sum.force(), 42);
    /// ```
    pub fn zip_with<B, C, F>(&self, other: &Deferred<B>, function: F) -> Deferred<C>
    where
        B: Clone + 'static,
        F: FnOnce(A, B) -> C + 'static,
    {
        let first = self.clone();
        let second = other.clone();
        Deferred::new(move || function(first.value(), second.value()))
    }

    /// Adapts a binary function over plain values into one over deferred
    /// values. The function only runs when the result is forced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcore::control::Deferred;
    ///
    /// let greet = Deferred::lift2(|greeting: String, name: String| format!("{greeting}, {name}!"));
    /// let message = greet(
    ///     &Deferred::new(|| "Hello".to_string()),
    ///     &Deferred::new(|| "Mickey".to_string()),
    /// );
    /// assert_eq!(*message.force(), "Hello, Mickey!");
    /// ```
    pub fn lift2<B, C, F>(function: F) -> impl Fn(&Self, &Deferred<B>) -> Deferred<C>
    where
        B: Clone + 'static,
        F: Fn(A, B) -> C + Clone + 'static,
    {
        move |first, second| first.zip_with(second, function.clone())
    }
}

impl<A> Clone for Deferred<A> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl<A: Default + 'static> Default for Deferred<A> {
    fn default() -> Self {
        Self::new(A::default)
    }
}

impl<A: fmt::Debug> fmt::Debug for Deferred<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        match &*state {
            DeferredState::Evaluated(value) => formatter.debug_tuple("Deferred").field(value).finish(),
            DeferredState::Pending(_) => formatter.debug_tuple("Deferred").field(&"<pending>").finish(),
            DeferredState::Poisoned => formatter.debug_tuple("Deferred").field(&"<poisoned>").finish(),
        }
    }
}
