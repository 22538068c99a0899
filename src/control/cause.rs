//! Failure causes carried by [`Outcome::Failure`](super::Outcome::Failure).
//!
//! A [`Cause`] is an opaque description of why an operation could not
//! complete. It is deliberately small: callers that need richer diagnostics
//! attach their own message with [`Outcome::map_failure`](super::Outcome::map_failure).

use std::any::Any;
use std::fmt;

/// Describes why an [`Outcome`](super::Outcome) is a `Failure`.
///
/// # Examples
///
/// ```rust
/// use funcore::control::Cause;
///
/// let cause = Cause::message("invalid input");
/// assert_eq!(format!("{cause}"), "invalid input");
///
/// assert_eq!(format!("{}", Cause::Missing), "no such element");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cause {
    /// A value that was required is missing.
    Missing,
    /// A caller supplied description.
    Message(String),
    /// User code panicked while the outcome was being computed.
    Panicked(String),
    /// A positional lookup fell outside the structure.
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// The length of the structure at lookup time.
        length: usize,
    },
}

impl Cause {
    /// Creates a [`Cause::Message`].
    pub fn message(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }

    /// Builds a [`Cause::Panicked`] from a payload returned by
    /// [`std::panic::catch_unwind`].
    pub(crate) fn from_panic(payload: &(dyn Any + Send)) -> Self {
        let text = payload
            .downcast_ref::<&str>()
            .map(|text| (*text).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic payload".to_string());
        Self::Panicked(text)
    }

    /// Renders the cause as a human readable message.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(formatter, "no such element"),
            Self::Message(message) => write!(formatter, "{message}"),
            Self::Panicked(message) => write!(formatter, "panicked: {message}"),
            Self::IndexOutOfBounds { index, length } => write!(
                formatter,
                "index {index} out of bounds for length {length}"
            ),
        }
    }
}

impl std::error::Error for Cause {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::panic::catch_unwind;

    #[rstest]
    #[case(Cause::Missing, "no such element")]
    #[case(Cause::message("bad"), "bad")]
    #[case(Cause::Panicked("oops".to_string()), "panicked: oops")]
    #[case(Cause::IndexOutOfBounds { index: 4, length: 2 }, "index 4 out of bounds for length 2")]
    fn test_cause_display(#[case] cause: Cause, #[case] expected: &str) {
        assert_eq!(format!("{cause}"), expected);
        assert_eq!(cause.describe(), expected);
    }

    #[rstest]
    fn test_from_panic_str_payload() {
        let payload = catch_unwind(|| panic!("static message")).unwrap_err();
        assert_eq!(
            Cause::from_panic(payload.as_ref()),
            Cause::Panicked("static message".to_string())
        );
    }

    #[rstest]
    fn test_from_panic_string_payload() {
        let payload = catch_unwind(|| panic!("formatted {}", 42)).unwrap_err();
        assert_eq!(
            Cause::from_panic(payload.as_ref()),
            Cause::Panicked("formatted 42".to_string())
        );
    }

    #[rstest]
    fn test_cause_is_error() {
        use std::error::Error;

        let cause = Cause::Missing;
        let error: &dyn Error = &cause;
        assert!(error.source().is_none());
    }
}
