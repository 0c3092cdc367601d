//! Error types for combinator construction and sentinel-terminated sources.
//!
//! Invalid construction parameters are reported eagerly through
//! [`IterError`]. Failures of caller-supplied functions are never wrapped:
//! they reach the caller as the function's own error type. The one place an
//! error is turned into ordinary termination is `iter_except`, which compares
//! error kinds through [`HasErrorKind`].

/// Represents a rejected construction parameter.
///
/// # Examples
///
/// ```rust
/// use lazy_itertools::InvalidArgumentError;
///
/// let error = InvalidArgumentError {
///     combinator: "islice",
///     parameter: "step",
///     reason: "must be positive",
/// };
/// assert_eq!(format!("{error}"), "islice: invalid `step` (must be positive)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidArgumentError {
    /// The combinator whose constructor rejected the argument.
    pub combinator: &'static str,
    /// The name of the rejected parameter.
    pub parameter: &'static str,
    /// Why the value was rejected.
    pub reason: &'static str,
}

impl InvalidArgumentError {
    pub(crate) fn new(
        combinator: &'static str,
        parameter: &'static str,
        reason: &'static str,
    ) -> Self {
        tracing::debug!(combinator, parameter, reason, "rejected combinator argument");
        Self {
            combinator,
            parameter,
            reason,
        }
    }
}

impl std::fmt::Display for InvalidArgumentError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}: invalid `{}` ({})",
            self.combinator, self.parameter, self.reason
        )
    }
}

impl std::error::Error for InvalidArgumentError {}

/// Represents errors raised by combinator constructors.
///
/// # Examples
///
/// ```rust
/// use lazy_itertools::{IterError, base::islice};
///
/// let result = islice("abc".chars(), -1, None, 1);
/// assert!(matches!(result, Err(IterError::InvalidArgument(_))));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IterError {
    /// A construction parameter was out of range.
    InvalidArgument(InvalidArgumentError),
}

impl std::fmt::Display for IterError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for IterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidArgument(error) => Some(error),
        }
    }
}

impl From<InvalidArgumentError> for IterError {
    fn from(error: InvalidArgumentError) -> Self {
        Self::InvalidArgument(error)
    }
}

/// Errors that carry a comparable kind tag.
///
/// `iter_except` ends its sequence when the wrapped function fails with an
/// error whose [`kind`](HasErrorKind::kind) equals the designated tag. Errors
/// of any other kind are passed through to the caller.
///
/// # Examples
///
/// ```rust
/// use lazy_itertools::HasErrorKind;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum QueueError {
///     Empty,
///     Closed,
/// }
///
/// impl HasErrorKind for QueueError {
///     type Kind = Self;
///
///     fn kind(&self) -> Self {
///         *self
///     }
/// }
///
/// assert_eq!(QueueError::Empty.kind(), QueueError::Empty);
/// ```
pub trait HasErrorKind {
    /// The tag type compared against the sentinel.
    type Kind: PartialEq;

    /// Returns the kind tag of this error.
    fn kind(&self) -> Self::Kind;
}

impl HasErrorKind for std::io::Error {
    type Kind = std::io::ErrorKind;

    fn kind(&self) -> std::io::ErrorKind {
        Self::kind(self)
    }
}

impl HasErrorKind for IterError {
    type Kind = &'static str;

    fn kind(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "InvalidArgument",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::error::Error;

    fn step_error() -> InvalidArgumentError {
        InvalidArgumentError::new("islice", "step", "must be positive")
    }

    #[rstest]
    fn test_invalid_argument_error_display() {
        assert_eq!(
            format!("{}", step_error()),
            "islice: invalid `step` (must be positive)"
        );
    }

    #[rstest]
    fn test_iter_error_display_matches_inner() {
        let error = IterError::from(step_error());
        assert_eq!(format!("{error}"), format!("{}", step_error()));
    }

    #[rstest]
    fn test_iter_error_source_is_inner() {
        let error = IterError::from(step_error());
        let source = error.source().map(|inner| inner.to_string());
        assert_eq!(source, Some(step_error().to_string()));
    }

    #[rstest]
    fn test_invalid_argument_error_equality() {
        let other = InvalidArgumentError::new("islice", "start", "must be non-negative");
        assert_eq!(step_error(), step_error().clone());
        assert_ne!(step_error(), other);
    }

    #[rstest]
    fn test_io_error_kind_tag() {
        let error = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "drained");
        assert_eq!(HasErrorKind::kind(&error), std::io::ErrorKind::UnexpectedEof);
    }

    #[rstest]
    fn test_iter_error_kind_tag() {
        assert_eq!(IterError::from(step_error()).kind(), "InvalidArgument");
    }
}
