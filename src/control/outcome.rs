//! Outcome type - success, absence, or failure with a cause.
//!
//! [`Outcome<A>`] distinguishes three states:
//!
//! - [`Outcome::Success`] holds a value.
//! - [`Outcome::Empty`] is a legitimate absence, with no cause attached.
//! - [`Outcome::Failure`] means an operation could not complete; it carries a
//!   [`Cause`].
//!
//! Chains of `map`/`flat_map` short-circuit on the first non-success.
//! [`Outcome::map`] and [`Outcome::or_else`] run user code behind a panic
//! guard: a panic inside them becomes `Failure(Cause::Panicked(..))` instead of
//! unwinding out of the chain.
//!
//! # Examples
//!
//! ```rust
//! use funcore::control::{Cause, Outcome};
//!
//! fn lookup(key: &str) -> Outcome<u32> {
//!     match key {
//!         "alice" => Outcome::success(30),
//!         "ghost" => Outcome::empty(),
//!         _ => Outcome::failure(format!("unknown user {key}")),
//!     }
//! }
//!
//! assert_eq!(lookup("alice").map(|age| age + 1), Outcome::success(31));
//! assert_eq!(lookup("ghost").map(|age| age + 1), Outcome::empty());
//! assert_eq!(
//!     lookup("bob").cause(),
//!     Some(&Cause::message("unknown user bob"))
//! );
//! ```

use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};

use super::cause::Cause;
use super::optional::Optional;
use crate::typeclass::{Applicative, Foldable, Functor, Monad, TypeConstructor};

/// A tri-state result: success, failure with a cause, or empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<A> {
    /// The operation produced a value.
    Success(A),
    /// The operation could not complete.
    Failure(Cause),
    /// There is no value, and no error either.
    Empty,
}

/// Runs `body`, turning a panic into a [`Cause::Panicked`].
fn guarded<T, F>(body: F) -> Result<T, Cause>
where
    F: FnOnce() -> T,
{
    catch_unwind(AssertUnwindSafe(body)).map_err(|payload| {
        let cause = Cause::from_panic(payload.as_ref());
        tracing::debug!(target: "funcore::outcome", %cause, "converted panic into failure");
        cause
    })
}

impl<A> Outcome<A> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a successful outcome.
    #[inline]
    pub const fn success(value: A) -> Self {
        Self::Success(value)
    }

    /// Creates a failed outcome whose cause is `message`.
    #[inline]
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure(Cause::message(message))
    }

    /// Creates a failed outcome with an explicit cause.
    #[inline]
    pub const fn failure_with(cause: Cause) -> Self {
        Self::Failure(cause)
    }

    /// Creates an empty outcome.
    #[inline]
    pub const fn empty() -> Self {
        Self::Empty
    }

    /// Converts a possibly-missing value: `None` becomes a failure with
    /// [`Cause::Missing`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcore::control::{Cause, Outcome};
    ///
    /// assert_eq!(Outcome::of(Some(1)), Outcome::success(1));
    /// assert_eq!(Outcome::<i32>::of(None), Outcome::failure_with(Cause::Missing));
    /// ```
    #[inline]
    pub fn of(value: Option<A>) -> Self {
        value.map_or(Self::Failure(Cause::Missing), Self::Success)
    }

    /// Like [`Outcome::of`], but a missing value fails with `message`.
    #[inline]
    pub fn of_or_fail(value: Option<A>, message: impl Into<String>) -> Self {
        Self::of(value).map_failure(message)
    }

    /// Converts a possibly-missing value and keeps it only if it satisfies
    /// `predicate`; a rejected value becomes `Empty`.
    #[inline]
    pub fn of_filtered<P>(value: Option<A>, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        Self::of(value).filter(predicate)
    }

    /// Converts a possibly-missing value and keeps it only if it satisfies
    /// `predicate`; both a missing and a rejected value fail with `message`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcore::control::Outcome;
    ///
    /// let adult = |age: Option<u32>| Outcome::of_filtered_or_fail(age, "not an adult", |a| *a >= 18);
    /// assert_eq!(adult(Some(30)), Outcome::success(30));
    /// assert_eq!(adult(Some(12)), Outcome::failure("not an adult"));
    /// assert_eq!(adult(None), Outcome::failure("not an adult"));
    /// ```
    pub fn of_filtered_or_fail<P>(value: Option<A>, message: impl Into<String>, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        let message = message.into();
        Self::of_or_fail(value, message.clone()).filter_or_fail(predicate, message)
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` for `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns `true` for `Empty`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns the cause of a failure.
    #[inline]
    pub const fn cause(&self) -> Option<&Cause> {
        match self {
            Self::Failure(cause) => Some(cause),
            _ => None,
        }
    }

    /// Borrows the held value.
    pub fn as_ref(&self) -> Outcome<&A> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(cause) => Outcome::Failure(cause.clone()),
            Self::Empty => Outcome::Empty,
        }
    }

    /// Returns `true` if this is a success whose value satisfies `predicate`.
    #[inline]
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&A) -> bool,
    {
        match self {
            Self::Success(value) => predicate(value),
            _ => false,
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Transforms a success value.
    ///
    /// If `function` panics the result is a `Failure` carrying
    /// [`Cause::Panicked`]; the panic does not propagate. `Failure` and
    /// `Empty` pass through and `function` is not called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcore::control::Outcome;
    ///
    /// assert_eq!(Outcome::success(2).map(|x| x * 10), Outcome::success(20));
    ///
    /// let divided = Outcome::success(0).map(|x: i32| 10 / x);
    /// assert!(divided.is_failure());
    /// ```
    pub fn map<B, F>(self, function: F) -> Outcome<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Success(value) => match guarded(move || function(value)) {
                Ok(mapped) => Outcome::Success(mapped),
                Err(cause) => Outcome::Failure(cause),
            },
            Self::Failure(cause) => Outcome::Failure(cause),
            Self::Empty => Outcome::Empty,
        }
    }

    /// Transforms a success value with a fallible function; an `Err`
    /// becomes a `Failure` described by the error's `Display` output.
    pub fn try_map<B, E, F>(self, function: F) -> Outcome<B>
    where
        E: fmt::Display,
        F: FnOnce(A) -> Result<B, E>,
    {
        self.flat_map(|value| Outcome::from(function(value)))
    }

    /// Chains a computation that produces another outcome.
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> Outcome<B>
    where
        F: FnOnce(A) -> Outcome<B>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(cause) => Outcome::Failure(cause),
            Self::Empty => Outcome::Empty,
        }
    }

    /// Keeps a success only if `predicate` holds; otherwise `Empty`.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        self.flat_map(|value| {
            if predicate(&value) {
                Self::Success(value)
            } else {
                Self::Empty
            }
        })
    }

    /// Keeps a success only if `predicate` holds; otherwise a `Failure`
    /// described by `message`.
    #[inline]
    pub fn filter_or_fail<P>(self, predicate: P, message: impl Into<String>) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        self.flat_map(|value| {
            if predicate(&value) {
                Self::Success(value)
            } else {
                Self::failure(message)
            }
        })
    }

    /// Replaces the cause of a failure with `message`.
    ///
    /// `Success` and `Empty` are returned unchanged.
    #[inline]
    pub fn map_failure(self, message: impl Into<String>) -> Self {
        match self {
            Self::Failure(_) => Self::failure(message),
            other => other,
        }
    }

    // =========================================================================
    // Extraction and Recovery
    // =========================================================================

    /// Returns the success value, or `default`.
    #[inline]
    pub fn get_or_else(self, default: A) -> A {
        match self {
            Self::Success(value) => value,
            _ => default,
        }
    }

    /// Returns the success value, or the result of `producer`.
    #[inline]
    pub fn get_or_else_with<F>(self, producer: F) -> A
    where
        F: FnOnce() -> A,
    {
        match self {
            Self::Success(value) => value,
            _ => producer(),
        }
    }

    /// Returns `self` if it is a success, otherwise evaluates `alternative`.
    ///
    /// A panic raised by `alternative` is caught and returned as a
    /// `Failure`, so a recovery chain never unwinds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcore::control::Outcome;
    ///
    /// assert_eq!(Outcome::empty().or_else(|| Outcome::success(5)), Outcome::success(5));
    /// assert_eq!(
    ///     Outcome::success(1).or_else(|| panic!("not evaluated")),
    ///     Outcome::success(1)
    /// );
    /// ```
    pub fn or_else<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            _ => guarded(alternative).unwrap_or_else(Self::Failure),
        }
    }

    /// Calls exactly one of the callbacks, depending on the variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcore::control::Outcome;
    ///
    /// let mut log = Vec::new();
    /// Outcome::success(3).for_each(
    ///     |value| log.push(format!("got {value}")),
    ///     |cause| eprintln!("{cause}"),
    ///     || eprintln!("nothing"),
    /// );
    /// assert_eq!(log, vec!["got 3"]);
    /// ```
    pub fn for_each<S, F, N>(self, on_success: S, on_failure: F, on_empty: N)
    where
        S: FnOnce(A),
        F: FnOnce(Cause),
        N: FnOnce(),
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(cause) => on_failure(cause),
            Self::Empty => on_empty(),
        }
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// Converts into a `Result`, with `Empty` as `Ok(None)`.
    #[inline]
    pub fn into_result(self) -> Result<Option<A>, Cause> {
        match self {
            Self::Success(value) => Ok(Some(value)),
            Self::Failure(cause) => Err(cause),
            Self::Empty => Ok(None),
        }
    }

    /// Drops the failure detail.
    #[inline]
    pub fn into_optional(self) -> Optional<A> {
        match self {
            Self::Success(value) => Optional::Present(value),
            _ => Optional::Absent,
        }
    }

    // =========================================================================
    // Lifting
    // =========================================================================

    /// Combines two outcomes with a binary function, short-circuiting on the
    /// first non-success.
    #[inline]
    pub fn map2<B, C, F>(first: Self, second: Outcome<B>, function: F) -> Outcome<C>
    where
        F: FnOnce(A, B) -> C,
    {
        first.flat_map(|a| second.map(|b| function(a, b)))
    }

    /// Adapts a unary function into one over outcomes.
    pub fn lift<B, F>(function: F) -> impl Fn(Self) -> Outcome<B>
    where
        F: Fn(A) -> B,
    {
        move |outcome| outcome.map(&function)
    }

    /// Adapts a binary function into one over outcomes.
    ///
    /// The first argument that is not a success decides the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcore::control::Outcome;
    ///
    /// let add = Outcome::lift2(|a: i32, b: i32| a + b);
    /// assert_eq!(add(Outcome::success(1), Outcome::success(2)), Outcome::success(3));
    /// assert_eq!(add(Outcome::empty(), Outcome::failure("x")), Outcome::empty());
    /// assert_eq!(add(Outcome::failure("x"), Outcome::empty()), Outcome::failure("x"));
    /// ```
    pub fn lift2<B, C, F>(function: F) -> impl Fn(Self, Outcome<B>) -> Outcome<C>
    where
        F: Fn(A, B) -> C,
    {
        move |first, second| first.flat_map(|a| second.map(|b| function(a, b)))
    }

    /// Adapts a ternary function into one over outcomes.
    pub fn lift3<B, C, D, F>(function: F) -> impl Fn(Self, Outcome<B>, Outcome<C>) -> Outcome<D>
    where
        F: Fn(A, B, C) -> D,
    {
        move |first, second, third| {
            first.flat_map(|a| second.flat_map(|b| third.map(|c| function(a, b, c))))
        }
    }
}

impl<A> Default for Outcome<A> {
    #[inline]
    fn default() -> Self {
        Self::Empty
    }
}

impl<A> From<Option<A>> for Outcome<A> {
    #[inline]
    fn from(value: Option<A>) -> Self {
        Self::of(value)
    }
}

impl<A, E: fmt::Display> From<Result<A, E>> for Outcome<A> {
    #[inline]
    fn from(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::failure(error.to_string()),
        }
    }
}

impl<A: fmt::Display> fmt::Display for Outcome<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(formatter, "Success({value})"),
            Self::Failure(cause) => write!(formatter, "Failure({cause})"),
            Self::Empty => write!(formatter, "Empty"),
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<A> TypeConstructor for Outcome<A> {
    type Inner = A;
    type WithType<B> = Outcome<B>;
}

impl<A> Functor for Outcome<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Outcome<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Outcome<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

impl<A> Applicative for Outcome<A> {
    #[inline]
    fn pure<B>(value: B) -> Outcome<B> {
        Outcome::Success(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Outcome<B>, function: F) -> Outcome<C>
    where
        F: FnOnce(A, B) -> C,
    {
        Self::map2(self, other, function)
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Outcome<B>, third: Outcome<C>, function: F) -> Outcome<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        self.flat_map(|a| second.flat_map(|b| third.map(|c| function(a, b, c))))
    }
}

impl<A> Monad for Outcome<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Outcome<B>
    where
        F: FnOnce(A) -> Outcome<B>,
    {
        Self::flat_map(self, function)
    }
}

impl<A> Foldable for Outcome<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Self::Success(value) => function(init, value),
            _ => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Self::Success(value) => function(value, init),
            _ => init,
        }
    }

    #[inline]
    fn is_empty(&self) -> bool {
        !self.is_success()
    }
}
