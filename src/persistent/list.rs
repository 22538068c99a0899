//! Persistent (immutable) singly-linked list.
//!
//! This module provides [`PersistentList`], an immutable singly-linked list
//! that uses structural sharing for efficient operations.
//!
//! # Overview
//!
//! `PersistentList` is a cons-list. Every bulk operation is built on
//! [`PersistentList::fold_left`], which is a plain loop, so no operation in
//! this module recurses once per element:
//!
//! - O(1) prepend (`cons`), head access, tail access, and length
//! - O(n) `reverse`, `map`, `filter`, `concat`, each a single linear pass
//! - `fold_right` runs `fold_left` over the reversed list
//!
//! Lookups that may miss return an [`Outcome`] instead of panicking.
//!
//! # Examples
//!
//! ```rust
//! use funcore::control::Outcome;
//! use funcore::persistent::PersistentList;
//!
//! // Build a list using cons
//! let list = PersistentList::new().cons(3).cons(2).cons(1);
//! assert_eq!(list.head(), Some(&1));
//! assert_eq!(list.len(), 3);
//!
//! // Structural sharing: the original list is preserved
//! let extended = list.cons(0);
//! assert_eq!(list.len(), 3);
//! assert_eq!(extended.len(), 4);
//!
//! assert_eq!(list.get_at(7), Outcome::failure_with(
//!     funcore::control::Cause::IndexOutOfBounds { index: 7, length: 3 }
//! ));
//! assert_eq!(list.to_string(), "[1, 2, 3, NIL]");
//! ```
//!
//! # Structural Sharing
//!
//! When you create a new list by prepending an element with `cons`, the new
//! list shares all nodes with the original list:
//!
//! ```text
//! list1: 1 -> 2 -> 3 -> nil
//! list2 = list1.cons(0): 0 -> [1 -> 2 -> 3 -> nil]  // shares [1, 2, 3] with list1
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::rc::Rc;

use crate::control::{Cause, Outcome};
use crate::typeclass::{FunctorMut, TypeConstructor};

/// Internal node structure for the persistent list.
struct Node<T> {
    element: T,
    next: Option<Rc<Self>>,
}

/// A persistent (immutable) singly-linked list.
///
/// # Time Complexity
///
/// | Operation     | Complexity |
/// |---------------|------------|
/// | `new`         | O(1)       |
/// | `cons`        | O(1)       |
/// | `head`        | O(1)       |
/// | `tail`        | O(1)       |
/// | `len`         | O(1)       |
/// | `get_at`      | O(n)       |
/// | `concat`      | O(n)       |
/// | `reverse`     | O(n)       |
/// | `has_sub_list`| O(n * m)   |
///
/// # Thread Safety
///
/// Nodes are shared through `Rc`, so a list is neither `Send` nor `Sync`.
///
/// # Examples
///
/// ```rust
/// use funcore::persistent::PersistentList;
///
/// let list = PersistentList::singleton(42);
/// assert_eq!(list.head(), Some(&42));
/// ```
pub struct PersistentList<T> {
    head: Option<Rc<Node<T>>>,
    /// Cached length for O(1) access.
    length: usize,
}

static_assertions::assert_not_impl_any!(PersistentList<i32>: Send, Sync);

impl<T> PersistentList<T> {
    /// Creates a new empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcore::persistent::PersistentList;
    ///
    /// let list: PersistentList<i32> = PersistentList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            head: None,
            length: 0,
        }
    }

    /// Creates a list containing a single element.
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self::new().cons(element)
    }

    /// Builds a list from a Vec, consuming it from the back.
    fn build_from_vec(mut elements: Vec<T>) -> Self {
        let length = elements.len();
        let mut head: Option<Rc<Node<T>>> = None;
        while let Some(element) = elements.pop() {
            head = Some(Rc::new(Node {
                element,
                next: head,
            }));
        }
        Self { head, length }
    }

    /// Prepends an element to the front of the list.
    ///
    /// The new list shares every node of `self`.
    ///
    /// # Complexity
    ///
    /// O(1) time and space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcore::persistent::PersistentList;
    ///
    /// let list = PersistentList::new().cons(3).cons(2).cons(1);
    /// assert_eq!(list.head(), Some(&1));
    /// assert_eq!(list.len(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub fn cons(&self, element: T) -> Self {
        Self {
            head: Some(Rc::new(Node {
                element,
                next: self.head.clone(),
            })),
            length: self.length + 1,
        }
    }

    /// Returns a reference to the first element.
    #[inline]
    #[must_use]
    pub fn head(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.element)
    }

    /// Returns the list without its first element.
    ///
    /// The tail of an empty list is empty. The result shares structure with
    /// `self`.
    #[must_use]
    pub fn tail(&self) -> Self {
        self.head.as_ref().map_or_else(Self::new, |node| Self {
            head: node.next.clone(),
            length: self.length - 1,
        })
    }

    /// Returns `true` if the list contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the number of elements.
    ///
    /// The length is cached, so this is O(1).
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns an iterator over references to the elements.
    #[inline]
    pub fn iter(&self) -> PersistentListIterator<'_, T> {
        PersistentListIterator {
            current: self.head.as_ref(),
            remaining: self.length,
        }
    }

    /// Accumulates the elements from left to right.
    ///
    /// This is the primitive every other bulk operation is derived from. It
    /// is a loop, so it handles lists of any length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcore::persistent::PersistentList;
    ///
    /// let list = PersistentList::from(["a", "b", "c"]);
    /// let joined = list.fold_left(String::new(), |acc, s| acc + *s);
    /// assert_eq!(joined, "abc");
    /// ```
    pub fn fold_left<'a, B, F>(&'a self, init: B, mut function: F) -> B
    where
        F: FnMut(B, &'a T) -> B,
    {
        let mut accumulator = init;
        let mut current = self.head.as_ref();
        while let Some(node) = current {
            accumulator = function(accumulator, &node.element);
            current = node.next.as_ref();
        }
        accumulator
    }

    /// Accumulates the elements from right to left:
    /// `f(a1, f(a2, ... f(an, init)))`.
    ///
    /// The elements are first collected into a reversed list of references
    /// and then folded from the left, so the call stack does not grow with
    /// the length of the list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcore::persistent::PersistentList;
    ///
    /// let list = PersistentList::from([1, 2, 3]);
    /// let rendered = list.fold_right(String::from("."), |x, acc| format!("({x} {acc})"));
    /// assert_eq!(rendered, "(1 (2 (3 .)))");
    /// ```
    pub fn fold_right<B, F>(&self, init: B, mut function: F) -> B
    where
        F: FnMut(&T, B) -> B,
    {
        let reversed = self.fold_left(PersistentList::new(), |accumulator, element| {
            accumulator.cons(element)
        });
        reversed.fold_left(init, |accumulator, element| function(*element, accumulator))
    }

    /// Returns `true` if any element satisfies `predicate`.
    ///
    /// Stops at the first match.
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().any(predicate)
    }

    /// Returns `true` if every element satisfies `predicate`.
    pub fn for_all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().all(predicate)
    }

    /// Drops up to `count` elements from the front.
    ///
    /// The result shares the remaining nodes with `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcore::persistent::PersistentList;
    ///
    /// let list = PersistentList::from([1, 2, 4]);
    /// assert_eq!(list.drop_at_most(1), PersistentList::from([2, 4]));
    /// assert!(list.drop_at_most(10).is_empty());
    /// ```
    #[must_use]
    pub fn drop_at_most(&self, count: usize) -> Self {
        let mut current = self.head.as_ref();
        let mut dropped = 0;
        while dropped < count {
            match current {
                Some(node) => {
                    current = node.next.as_ref();
                    dropped += 1;
                }
                None => break,
            }
        }
        Self {
            head: current.cloned(),
            length: self.length - dropped,
        }
    }

    /// Drops elements from the front while `predicate` holds.
    ///
    /// The result shares the remaining nodes with `self`.
    #[must_use]
    pub fn drop_while<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        let mut current = self.head.as_ref();
        let mut dropped = 0;
        while let Some(node) = current {
            if !predicate(&node.element) {
                break;
            }
            current = node.next.as_ref();
            dropped += 1;
        }
        Self {
            head: current.cloned(),
            length: self.length - dropped,
        }
    }
}

impl<T: PartialEq> PersistentList<T> {
    /// Returns `true` if `prefix` is an element-wise prefix of this list.
    ///
    /// The empty list is a prefix of every list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcore::persistent::PersistentList;
    ///
    /// let list = PersistentList::from([1, 2, 3]);
    /// assert!(list.starts_with(&PersistentList::from([1, 2])));
    /// assert!(!list.starts_with(&PersistentList::from([2])));
    /// ```
    #[must_use]
    pub fn starts_with(&self, prefix: &Self) -> bool {
        prefix.length <= self.length && self.iter().zip(prefix.iter()).all(|(a, b)| a == b)
    }

    /// Returns `true` if `sub` appears as a contiguous run in this list.
    ///
    /// Tries [`starts_with`](Self::starts_with) at every suffix, so the
    /// worst case is quadratic.
    #[must_use]
    pub fn has_sub_list(&self, sub: &Self) -> bool {
        let mut suffix = self.clone();
        loop {
            if suffix.starts_with(sub) {
                return true;
            }
            if suffix.is_empty() {
                return false;
            }
            suffix = suffix.tail();
        }
    }
}

impl<T: Clone> PersistentList<T> {
    /// Returns the list in reverse order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcore::persistent::PersistentList;
    ///
    /// let list = PersistentList::from([1, 2, 3]);
    /// assert_eq!(list.reverse(), PersistentList::from([3, 2, 1]));
    /// ```
    #[must_use]
    pub fn reverse(&self) -> Self {
        self.fold_left(Self::new(), |accumulator, element| {
            accumulator.cons(element.clone())
        })
    }

    /// Applies `function` to every element.
    ///
    /// Builds a reversed result with one left fold, then reverses it once.
    #[must_use]
    pub fn map<B, F>(&self, mut function: F) -> PersistentList<B>
    where
        B: Clone,
        F: FnMut(&T) -> B,
    {
        self.fold_left(PersistentList::new(), |accumulator, element| {
            accumulator.cons(function(element))
        })
        .reverse()
    }

    /// Keeps the elements that satisfy `predicate`, in order.
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        self.fold_left(Self::new(), |accumulator, element| {
            if predicate(element) {
                accumulator.cons(element.clone())
            } else {
                accumulator
            }
        })
        .reverse()
    }

    /// Appends `other` after this list.
    ///
    /// The nodes of `self` are rebuilt; `other` is attached unchanged and
    /// shared with the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcore::persistent::PersistentList;
    ///
    /// let joined = PersistentList::from([1, 2]).concat(&PersistentList::from([3, 4]));
    /// assert_eq!(joined.to_string(), "[1, 2, 3, 4, NIL]");
    /// ```
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        self.fold_right(other.clone(), |element, accumulator| {
            accumulator.cons(element.clone())
        })
    }

    /// Maps every element to a list and concatenates the results.
    #[must_use]
    pub fn flat_map<B, F>(&self, function: F) -> PersistentList<B>
    where
        B: Clone,
        F: FnMut(&T) -> PersistentList<B>,
    {
        self.map(function).flatten()
    }

    /// Replaces the first element.
    ///
    /// # Panics
    ///
    /// Panics if the list is empty.
    #[must_use]
    pub fn set_head(&self, element: T) -> Self {
        assert!(!self.is_empty(), "set_head called on an empty list");
        self.tail().cons(element)
    }

    /// Removes the last element. The empty list stays empty.
    #[must_use]
    pub fn drop_last(&self) -> Self {
        self.reverse().drop_at_most(1).reverse()
    }

    /// Splits the list before `index`.
    ///
    /// `index` is clamped to the length, so concatenating the two halves
    /// always gives back the original list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcore::persistent::PersistentList;
    ///
    /// let (front, back) = PersistentList::from([1, 2, 3]).split_at(1);
    /// assert_eq!(front, PersistentList::from([1]));
    /// assert_eq!(back, PersistentList::from([2, 3]));
    ///
    /// let (front, back) = PersistentList::from([1, 2]).split_at(5);
    /// assert_eq!((front.len(), back.len()), (2, 0));
    /// ```
    #[must_use]
    pub fn split_at(&self, index: usize) -> (Self, Self) {
        let index = index.min(self.length);
        let (front, back, _) = self.fold_left(
            (Self::new(), Self::new(), index),
            |(front, back, remaining), element| {
                if remaining == 0 {
                    (front, back.cons(element.clone()), remaining)
                } else {
                    (front.cons(element.clone()), back, remaining - 1)
                }
            },
        );
        (front.reverse(), back.reverse())
    }

    /// Returns the element at `index`.
    ///
    /// An index past the end is a `Failure` with
    /// [`Cause::IndexOutOfBounds`].
    pub fn get_at(&self, index: usize) -> Outcome<T> {
        self.iter().nth(index).map_or_else(
            || {
                Outcome::Failure(Cause::IndexOutOfBounds {
                    index,
                    length: self.length,
                })
            },
            |element| Outcome::Success(element.clone()),
        )
    }

    /// Returns the first element, or `Empty` for the empty list.
    pub fn head_safe(&self) -> Outcome<T> {
        self.head().cloned().map_or(Outcome::Empty, Outcome::Success)
    }

    /// Returns the last element, or `Empty` for the empty list.
    pub fn last_safe(&self) -> Outcome<T> {
        self.fold_left(None, |_, element| Some(element))
            .cloned()
            .map_or(Outcome::Empty, Outcome::Success)
    }

    /// Splits every element into a pair and collects the two sides.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcore::persistent::PersistentList;
    ///
    /// let (values, squares) = PersistentList::from([1, 2, 3]).unzip_with(|x| (*x, x * x));
    /// assert_eq!(values, PersistentList::from([1, 2, 3]));
    /// assert_eq!(squares, PersistentList::from([1, 4, 9]));
    /// ```
    pub fn unzip_with<A1, A2, F>(&self, mut function: F) -> (PersistentList<A1>, PersistentList<A2>)
    where
        A1: Clone,
        A2: Clone,
        F: FnMut(&T) -> (A1, A2),
    {
        self.fold_right(
            (PersistentList::new(), PersistentList::new()),
            |element, (firsts, seconds)| {
                let (first, second) = function(element);
                (firsts.cons(first), seconds.cons(second))
            },
        )
    }
}

impl<T: Clone> PersistentList<PersistentList<T>> {
    /// Concatenates a list of lists, in order.
    ///
    /// Folds from the right so every inner list is rebuilt once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcore::persistent::PersistentList;
    ///
    /// let rows = PersistentList::from([
    ///     PersistentList::from([1, 2, 3]),
    ///     PersistentList::from([4, 5]),
    /// ]);
    /// assert_eq!(rows.flatten(), PersistentList::from([1, 2, 3, 4, 5]));
    /// ```
    #[must_use]
    pub fn flatten(&self) -> PersistentList<T> {
        self.fold_right(PersistentList::new(), |inner, accumulator| {
            inner.concat(&accumulator)
        })
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over references to elements of a [`PersistentList`].
pub struct PersistentListIterator<'a, T> {
    current: Option<&'a Rc<Node<T>>>,
    remaining: usize,
}

impl<'a, T> Iterator for PersistentListIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            self.current = node.next.as_ref();
            self.remaining -= 1;
            &node.element
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for PersistentListIterator<'_, T> {}

/// An owning iterator over elements of a [`PersistentList`].
///
/// Elements of nodes that no other list shares are moved out; shared ones
/// are cloned.
pub struct PersistentListIntoIterator<T> {
    list: PersistentList<T>,
}

impl<T: Clone> Iterator for PersistentListIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.head.take()?;
        self.list.length -= 1;
        match Rc::try_unwrap(node) {
            Ok(Node { element, next }) => {
                self.list.head = next;
                Some(element)
            }
            Err(shared) => {
                self.list.head = shared.next.clone();
                Some(shared.element.clone())
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.length, Some(self.list.length))
    }
}

impl<T: Clone> ExactSizeIterator for PersistentListIntoIterator<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for PersistentList<T> {
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
            length: self.length,
        }
    }
}

/// Releases nodes in a loop; the derived drop would recurse once per node.
impl<T> Drop for PersistentList<T> {
    fn drop(&mut self) {
        let mut current = self.head.take();
        while let Some(node) = current {
            match Rc::try_unwrap(node) {
                Ok(mut node) => current = node.next.take(),
                Err(_) => break,
            }
        }
    }
}

impl<T> Default for PersistentList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for PersistentList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::build_from_vec(iter.into_iter().collect())
    }
}

impl<T, const N: usize> From<[T; N]> for PersistentList<T> {
    fn from(elements: [T; N]) -> Self {
        Self::build_from_vec(Vec::from(elements))
    }
}

impl<T> From<Vec<T>> for PersistentList<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::build_from_vec(elements)
    }
}

impl<T: Clone> IntoIterator for PersistentList<T> {
    type Item = T;
    type IntoIter = PersistentListIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        PersistentListIntoIterator { list: self }
    }
}

impl<'a, T> IntoIterator for &'a PersistentList<T> {
    type Item = &'a T;
    type IntoIter = PersistentListIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for PersistentList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for PersistentList<T> {}

/// Hashes the length, then each element in order, so equal lists hash
/// equally.
impl<T: Hash> Hash for PersistentList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for PersistentList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

/// Renders the elements followed by an explicit end marker:
/// `[1, 2, 4, NIL]`, or `[NIL]` for the empty list.
impl<T: fmt::Display> fmt::Display for PersistentList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        for element in self {
            write!(formatter, "{element}, ")?;
        }
        write!(formatter, "NIL]")
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for PersistentList<T> {
    type Inner = T;
    type WithType<B> = PersistentList<B>;
}

impl<T: Clone> FunctorMut for PersistentList<T> {
    fn fmap_mut<B, F>(self, function: F) -> PersistentList<B>
    where
        F: FnMut(T) -> B,
    {
        self.into_iter().map(function).collect()
    }

    fn fmap_ref_mut<B, F>(&self, function: F) -> PersistentList<B>
    where
        F: FnMut(&T) -> B,
    {
        self.iter().map(function).collect()
    }
}

/// The inherent `fold_left`/`fold_right` borrow the list and pass elements
/// by reference; these consume it and pass them by value.
impl<T: Clone> crate::typeclass::Foldable for PersistentList<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.reverse()
            .into_iter()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    #[inline]
    fn length(&self) -> usize {
        self.length
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for PersistentList<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct PersistentListVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> PersistentListVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for PersistentListVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = PersistentList<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(PersistentList::build_from_vec(elements))
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for PersistentList<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(PersistentListVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
