//! Lazy, possibly infinite streams with memoized nodes.
//!
//! A [`LazyStream`] is either empty or a node whose head and tail are both
//! [`Deferred`]. Nothing is computed until it is forced, and every node is
//! computed at most once, however many streams share it.
//!
//! [`LazyStream::fold_right`] is the primitive behind `map`, `append`
//! and `head_safe`: its combining function receives the tail as a
//! `Deferred`, so only the nodes the function actually touches are
//! forced. Operations that may skip an unbounded run of elements
//! (`drop_while`, `filter`, `flat_map`, `exists`, `to_list`) are written
//! as loops instead, so a long run does not grow the call stack.
//!
//! # Examples
//!
//! ```rust
//! use funcore::persistent::{LazyStream, PersistentList};
//!
//! let evens = LazyStream::from(1)
//!     .filter(|n| n % 2 == 0)
//!     .map(|n| n * n)
//!     .take_at_most(3);
//!
//! assert_eq!(evens.to_list(), PersistentList::from([4, 16, 36]));
//! ```

use std::fmt;
use std::rc::Rc;

use crate::control::{Deferred, Outcome};
use crate::persistent::PersistentList;

struct Cons<A> {
    head: Deferred<A>,
    tail: Deferred<LazyStream<A>>,
}

/// A lazy, memoized, possibly infinite stream.
///
/// # Termination
///
/// `to_list`, `drop_while`, `exists` and `filter` keep forcing nodes until
/// they find what they are looking for. On an infinite stream that never
/// satisfies them they do not return; bound the stream first with
/// [`take_at_most`](Self::take_at_most) or [`take_while`](Self::take_while).
pub struct LazyStream<A> {
    node: Option<Rc<Cons<A>>>,
}

static_assertions::assert_not_impl_any!(LazyStream<i32>: Send, Sync);

impl<A> LazyStream<A> {
    /// Creates the empty stream.
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self { node: None }
    }

    /// Creates a stream from a deferred head and a deferred tail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcore::control::{Deferred, Outcome};
    /// use funcore::persistent::LazyStream;
    ///
    /// let stream = LazyStream::cons(Deferred::new(|| 1), Deferred::ready(LazyStream::empty()));
    /// assert_eq!(stream.head(), Outcome::success(1));
    /// ```
    #[must_use]
    pub fn cons(head: Deferred<A>, tail: Deferred<Self>) -> Self {
        Self {
            node: Some(Rc::new(Cons { head, tail })),
        }
    }

    /// Returns `true` for the empty stream. Forces nothing.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.node.is_none()
    }
}

impl<A: Clone + 'static> LazyStream<A> {
    // =========================================================================
    // Access
    // =========================================================================

    /// Forces and returns the first element, or `Empty`.
    pub fn head(&self) -> Outcome<A> {
        self.node
            .as_ref()
            .map_or(Outcome::Empty, |cons| Outcome::Success(cons.head.value()))
    }

    /// Forces and returns the rest of the stream, or `Empty`.
    pub fn tail(&self) -> Outcome<Self> {
        self.node
            .as_ref()
            .map_or(Outcome::Empty, |cons| Outcome::Success(cons.tail.value()))
    }

    /// Returns the first element through [`fold_right`](Self::fold_right).
    ///
    /// Only the first node is forced.
    pub fn head_safe(&self) -> Outcome<A> {
        self.fold_right(Deferred::ready(Outcome::Empty), |head, _| {
            Outcome::Success(head)
        })
    }

    // =========================================================================
    // Folding
    // =========================================================================

    /// Folds from the right with a lazily evaluated accumulator.
    ///
    /// `combine` receives an element and a `Deferred` holding the fold of
    /// the rest of the stream. Unless `combine` forces it, the rest is never
    /// evaluated, which makes this usable on infinite streams.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcore::control::Deferred;
    /// use funcore::persistent::LazyStream;
    ///
    /// // Stops at the first element greater than 3.
    /// let first_big = LazyStream::from(1).fold_right(Deferred::ready(None), |n, rest| {
    ///     if n > 3 { Some(n) } else { rest.value() }
    /// });
    /// assert_eq!(first_big, Some(4));
    /// ```
    pub fn fold_right<B, F>(&self, seed: Deferred<B>, combine: F) -> B
    where
        B: Clone + 'static,
        F: Fn(A, Deferred<B>) -> B + 'static,
    {
        self.fold_right_shared(seed, Rc::new(combine))
    }

    fn fold_right_shared<B, F>(&self, seed: Deferred<B>, combine: Rc<F>) -> B
    where
        B: Clone + 'static,
        F: Fn(A, Deferred<B>) -> B + 'static,
    {
        match &self.node {
            None => seed.value(),
            Some(cons) => {
                let tail = cons.tail.clone();
                let rest = {
                    let combine = Rc::clone(&combine);
                    Deferred::new(move || tail.value().fold_right_shared(seed, combine))
                };
                combine(cons.head.value(), rest)
            }
        }
    }

    /// Returns `true` if any element satisfies `predicate`.
    ///
    /// Forces nodes one at a time and stops at the first match.
    pub fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&A) -> bool,
    {
        let mut current = self.clone();
        loop {
            let next = match &current.node {
                None => return false,
                Some(cons) if predicate(&cons.head.force()) => return true,
                Some(cons) => cons.tail.value(),
            };
            current = next;
        }
    }

    /// Returns the first element that satisfies `predicate`, or `Empty`
    /// if a finite stream has none.
    pub fn find<P>(&self, predicate: P) -> Outcome<A>
    where
        P: Fn(&A) -> bool + 'static,
    {
        self.filter(predicate).head_safe()
    }

    /// Forces the whole stream into a [`PersistentList`].
    ///
    /// The stream must be finite.
    #[must_use]
    pub fn to_list(&self) -> PersistentList<A> {
        let mut elements = Vec::new();
        let mut current = self.clone();
        while let Some(cons) = current.node.clone() {
            elements.push(cons.head.value());
            current = cons.tail.value();
        }
        tracing::trace!(forced = elements.len(), "materialized lazy stream");
        PersistentList::from(elements)
    }

    // =========================================================================
    // Bounding
    // =========================================================================

    /// Keeps at most the first `count` elements.
    ///
    /// Nothing is forced: the new nodes share the heads of the original and
    /// wrap its tails.
    #[must_use]
    pub fn take_at_most(&self, count: usize) -> Self {
        match &self.node {
            Some(cons) if count > 0 => {
                let tail = if count == 1 {
                    Deferred::ready(Self::empty())
                } else {
                    let source = cons.tail.clone();
                    Deferred::new(move || source.value().take_at_most(count - 1))
                };
                Self::cons(cons.head.clone(), tail)
            }
            _ => Self::empty(),
        }
    }

    /// Skips up to `count` elements, forcing only the skipped tails.
    #[must_use]
    pub fn drop_at_most(&self, count: usize) -> Self {
        let mut current = self.clone();
        for _ in 0..count {
            let next = match &current.node {
                None => break,
                Some(cons) => cons.tail.value(),
            };
            current = next;
        }
        current
    }

    /// Keeps elements while `predicate` holds.
    ///
    /// The head of each kept node is forced to test it; the rest of the
    /// stream is not.
    #[must_use]
    pub fn take_while<P>(&self, predicate: P) -> Self
    where
        P: Fn(&A) -> bool + 'static,
    {
        self.take_while_shared(Rc::new(predicate))
    }

    fn take_while_shared<P>(&self, predicate: Rc<P>) -> Self
    where
        P: Fn(&A) -> bool + 'static,
    {
        match &self.node {
            Some(cons) if predicate(&cons.head.force()) => {
                let source = cons.tail.clone();
                Self::cons(
                    cons.head.clone(),
                    Deferred::new(move || source.value().take_while_shared(predicate)),
                )
            }
            _ => Self::empty(),
        }
    }

    /// [`take_while`](Self::take_while) expressed through
    /// [`fold_right`](Self::fold_right).
    #[must_use]
    pub fn take_while_via_fold_right<P>(&self, predicate: P) -> Self
    where
        P: Fn(&A) -> bool + 'static,
    {
        self.fold_right(Deferred::ready(Self::empty()), move |head, rest| {
            if predicate(&head) {
                Self::cons(Deferred::ready(head), rest)
            } else {
                Self::empty()
            }
        })
    }

    /// Skips elements while `predicate` holds.
    #[must_use]
    pub fn drop_while<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&A) -> bool,
    {
        let mut current = self.clone();
        loop {
            let next = match &current.node {
                Some(cons) if predicate(&cons.head.force()) => cons.tail.value(),
                _ => return current,
            };
            current = next;
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies `function` lazily to every element.
    ///
    /// `function` runs when a head of the result is forced, once per node.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcore::persistent::{LazyStream, PersistentList};
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    ///
    /// let calls = Rc::new(Cell::new(0));
    /// let counter = Rc::clone(&calls);
    /// let squares = LazyStream::from(1).map(move |n| {
    ///     counter.set(counter.get() + 1);
    ///     n * n
    /// });
    ///
    /// assert_eq!(calls.get(), 0);
    /// assert_eq!(squares.take_at_most(3).to_list(), PersistentList::from([1, 4, 9]));
    /// assert_eq!(calls.get(), 3);
    /// ```
    #[must_use]
    pub fn map<B, F>(&self, function: F) -> LazyStream<B>
    where
        B: Clone + 'static,
        F: Fn(A) -> B + 'static,
    {
        let function = Rc::new(function);
        self.fold_right(Deferred::ready(LazyStream::empty()), move |head, rest| {
            let function = Rc::clone(&function);
            LazyStream::cons(Deferred::new(move || function(head)), rest)
        })
    }

    /// Keeps the elements that satisfy `predicate`.
    ///
    /// Non-matching elements are skipped with [`drop_while`](Self::drop_while),
    /// so the first match is found without recursion; the remainder is
    /// filtered lazily.
    ///
    /// # Laziness
    ///
    /// Building the filtered stream forces the source up to and including
    /// its first matching element. On an infinite source with no match,
    /// `filter` itself does not return.
    #[must_use]
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&A) -> bool + 'static,
    {
        self.filter_shared(Rc::new(predicate))
    }

    fn filter_shared<P>(&self, predicate: Rc<P>) -> Self
    where
        P: Fn(&A) -> bool + 'static,
    {
        let matched = self.drop_while(|element| !predicate(element));
        match &matched.node {
            None => Self::empty(),
            Some(cons) => {
                let source = cons.tail.clone();
                Self::cons(
                    cons.head.clone(),
                    Deferred::new(move || source.value().filter_shared(predicate)),
                )
            }
        }
    }

    /// Continues into `other` once this stream is exhausted.
    ///
    /// `other` is not forced until every element of `self` has been
    /// consumed.
    #[must_use]
    pub fn append(&self, other: Deferred<Self>) -> Self {
        self.fold_right(other, |head, rest| Self::cons(Deferred::ready(head), rest))
    }

    /// Maps every element to a sub-stream and concatenates them lazily.
    ///
    /// Works on an infinite source as long as each sub-stream is finite.
    ///
    /// # Laziness
    ///
    /// Source elements whose sub-stream is empty are skipped in a loop until
    /// a non-empty sub-stream is found, so a long run of empty sub-streams
    /// does not grow the call stack. The rest of the source is flattened
    /// only when the result is consumed past that sub-stream.
    #[must_use]
    pub fn flat_map<B, F>(&self, function: F) -> LazyStream<B>
    where
        B: Clone + 'static,
        F: Fn(A) -> LazyStream<B> + 'static,
    {
        self.flat_map_shared(Rc::new(function))
    }

    fn flat_map_shared<B, F>(&self, function: Rc<F>) -> LazyStream<B>
    where
        B: Clone + 'static,
        F: Fn(A) -> LazyStream<B> + 'static,
    {
        let mut current = self.clone();
        loop {
            let next = match &current.node {
                None => return LazyStream::empty(),
                Some(cons) => {
                    let inner = function(cons.head.value());
                    if !inner.is_empty() {
                        let source = cons.tail.clone();
                        return inner.append(Deferred::new(move || {
                            source.value().flat_map_shared(function)
                        }));
                    }
                    cons.tail.value()
                }
            };
            current = next;
        }
    }

    // =========================================================================
    // Generators
    // =========================================================================

    /// The infinite stream `seed, f(seed), f(f(seed)), ...`.
    #[must_use]
    pub fn iterate<F>(seed: A, function: F) -> Self
    where
        F: Fn(&A) -> A + 'static,
    {
        Self::iterate_shared(seed, Rc::new(function))
    }

    fn iterate_shared<F>(seed: A, function: Rc<F>) -> Self
    where
        F: Fn(&A) -> A + 'static,
    {
        let previous = seed.clone();
        Self::cons(
            Deferred::ready(seed),
            Deferred::new(move || {
                let next = function(&previous);
                Self::iterate_shared(next, function)
            }),
        )
    }

    /// The infinite stream of `producer()` results.
    ///
    /// `producer` runs once for every node that is forced.
    #[must_use]
    pub fn repeat<F>(producer: F) -> Self
    where
        F: Fn() -> A + 'static,
    {
        Self::repeat_shared(Rc::new(producer))
    }

    fn repeat_shared<F>(producer: Rc<F>) -> Self
    where
        F: Fn() -> A + 'static,
    {
        let head = {
            let producer = Rc::clone(&producer);
            Deferred::new(move || producer())
        };
        Self::cons(head, Deferred::new(move || Self::repeat_shared(producer)))
    }
}

impl LazyStream<i64> {
    /// The ascending integers starting at `start`.
    #[must_use]
    pub fn from(start: i64) -> Self {
        Self::iterate(start, |n| n + 1)
    }
}

impl<A> Clone for LazyStream<A> {
    fn clone(&self) -> Self {
        Self {
            node: self.node.clone(),
        }
    }
}

/// Unlinks memoized tails in a loop so that dropping a long forced stream
/// does not recurse once per node.
impl<A> Drop for LazyStream<A> {
    fn drop(&mut self) {
        let mut current = self.node.take();
        while let Some(cons) = current {
            current = match Rc::try_unwrap(cons) {
                Ok(Cons { tail, .. }) => tail
                    .into_evaluated()
                    .and_then(|mut stream| stream.node.take()),
                Err(_) => None,
            };
        }
    }
}

impl<A> Default for LazyStream<A> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Builds a finite stream whose nodes are already evaluated.
impl<A> FromIterator<A> for LazyStream<A> {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        let elements: Vec<A> = iter.into_iter().collect();
        elements.into_iter().rev().fold(Self::empty(), |tail, element| {
            Self::cons(Deferred::ready(element), Deferred::ready(tail))
        })
    }
}

impl<A> fmt::Debug for LazyStream<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("LazyStream")
            .field("is_empty", &self.is_empty())
            .finish_non_exhaustive()
    }
}
