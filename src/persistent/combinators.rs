//! Free functions that work across lists, outcomes, and deferred values.
//!
//! # Examples
//!
//! ```rust
//! use funcore::control::Outcome;
//! use funcore::persistent::{PersistentList, traverse, zip_with};
//!
//! let parsed = traverse(&PersistentList::from(["1", "2", "3"]), |text| {
//!     Outcome::from(text.parse::<i32>())
//! });
//! assert_eq!(parsed, Outcome::success(PersistentList::from([1, 2, 3])));
//!
//! let sums = zip_with(
//!     &PersistentList::from([1, 2, 3]),
//!     &PersistentList::from([10, 20]),
//!     |a, b| a + b,
//! );
//! assert_eq!(sums, PersistentList::from([11, 22]));
//! ```

use crate::control::{Deferred, Outcome};

use super::PersistentList;

/// Turns a list of outcomes into an outcome of a list.
///
/// Succeeds only if every element is a success; otherwise returns the first
/// element that is not.
pub fn sequence<A: Clone>(list: &PersistentList<Outcome<A>>) -> Outcome<PersistentList<A>> {
    traverse(list, Outcome::clone)
}

/// Applies `function` to every element and collects the successes.
///
/// Stops at the first `Failure` or `Empty` and returns it; `function` is not
/// called on later elements. The empty list traverses to an empty success.
///
/// # Examples
///
/// ```rust
/// use funcore::control::Outcome;
/// use funcore::persistent::{PersistentList, traverse};
///
/// let positive = |x: &i32| Outcome::success(*x).filter_or_fail(|x| *x > 0, "not positive");
///
/// assert_eq!(
///     traverse(&PersistentList::from([1, -2, 3]), positive),
///     Outcome::failure("not positive")
/// );
/// assert_eq!(
///     traverse(&PersistentList::<i32>::new(), positive),
///     Outcome::success(PersistentList::new())
/// );
/// ```
pub fn traverse<A, B, F>(list: &PersistentList<A>, mut function: F) -> Outcome<PersistentList<B>>
where
    F: FnMut(&A) -> Outcome<B>,
{
    let mut collected = Vec::with_capacity(list.len());
    for element in list {
        match function(element) {
            Outcome::Success(value) => collected.push(value),
            Outcome::Failure(cause) => return Outcome::Failure(cause),
            Outcome::Empty => return Outcome::Empty,
        }
    }
    Outcome::Success(PersistentList::from(collected))
}

/// Combines two lists element by element, stopping at the shorter one.
pub fn zip_with<A, B, C, F>(
    first: &PersistentList<A>,
    second: &PersistentList<B>,
    mut function: F,
) -> PersistentList<C>
where
    F: FnMut(&A, &B) -> C,
{
    first
        .iter()
        .zip(second.iter())
        .map(|(a, b)| function(a, b))
        .collect()
}

/// Applies `function` to every pair of the cartesian product, first list
/// outermost.
///
/// # Examples
///
/// ```rust
/// use funcore::persistent::{PersistentList, product};
///
/// let pairs = product(&PersistentList::from([1, 2]), &PersistentList::from(['a', 'b']), |n, c| {
///     format!("{n}{c}")
/// });
/// assert_eq!(pairs.to_string(), "[1a, 1b, 2a, 2b, NIL]");
/// ```
pub fn product<A, B, C, F>(
    first: &PersistentList<A>,
    second: &PersistentList<B>,
    mut function: F,
) -> PersistentList<C>
where
    A: Clone,
    B: Clone,
    C: Clone,
    F: FnMut(&A, &B) -> C,
{
    first.flat_map(|a| second.map(|b| function(a, b)))
}

/// Splits a list of pairs into a pair of lists.
pub fn unzip<A: Clone, B: Clone>(
    list: &PersistentList<(A, B)>,
) -> (PersistentList<A>, PersistentList<B>) {
    list.unzip_with(Clone::clone)
}

/// Keeps the success values and discards `Failure` and `Empty` elements.
pub fn flatten_outcomes<A: Clone>(list: &PersistentList<Outcome<A>>) -> PersistentList<A> {
    list.flat_map(|outcome| {
        outcome
            .as_ref()
            .map(|value| PersistentList::singleton(value.clone()))
            .get_or_else(PersistentList::new())
    })
}

/// Defers a whole list of deferred values as one.
///
/// No element is forced until the result is.
pub fn sequence_deferred<A: Clone + 'static>(
    list: &PersistentList<Deferred<A>>,
) -> Deferred<PersistentList<A>> {
    let list = list.clone();
    Deferred::new(move || list.map(Deferred::value))
}

/// Like [`sequence_deferred`], but forcing happens behind the same panic
/// guard as [`Outcome::map`].
///
/// A producer that panics turns the result into a `Failure`, and forcing
/// stops at that element.
///
/// # Examples
///
/// ```rust
/// use funcore::control::{Deferred, Outcome};
/// use funcore::persistent::{PersistentList, sequence_deferred_outcome};
///
/// let list = PersistentList::from([
///     Deferred::new(|| 1),
///     Deferred::new(|| -> i32 { panic!("bad producer") }),
/// ]);
/// let result = sequence_deferred_outcome(&list);
/// assert!(result.value().is_failure());
/// ```
pub fn sequence_deferred_outcome<A: Clone + 'static>(
    list: &PersistentList<Deferred<A>>,
) -> Deferred<Outcome<PersistentList<A>>> {
    let list = list.clone();
    Deferred::new(move || traverse(&list, |deferred| Outcome::success(deferred).map(Deferred::value)))
}

/// Adapts a binary function over plain values into one over deferred
/// values. See [`Deferred::lift2`].
pub fn lift2_deferred<A, B, C, F>(function: F) -> impl Fn(&Deferred<A>, &Deferred<B>) -> Deferred<C>
where
    A: Clone + 'static,
    B: Clone + 'static,
    F: Fn(A, B) -> C + Clone + 'static,
{
    Deferred::lift2(function)
}
