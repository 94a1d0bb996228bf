//! Error value that carries a failing status across `?` boundaries.
//!
//! [`StatusError`] is what [`status_call_throw!`](crate::status_call_throw)
//! raises: code written against `Result` and `?` receives the failing status
//! as an ordinary error and can recover it with [`StatusError::status`].
//! The diagnostic is emitted at the raise site, so the error carries no message.
//!
//! # Examples
//!
//! ```
//! use status_rail::{Status, StatusError};
//!
//! let err = StatusError::new(Status::Corrupted);
//! assert_eq!(err.status(), Status::Corrupted);
//! assert_eq!(err.to_string(), "status error: corrupted (-11)");
//! ```
use crate::types::{Status, StatusCode};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Wraps one status code raised by the throwing propagation combinator.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusError<S: StatusCode = Status> {
    status: S,
}

impl<S: StatusCode> StatusError<S> {
    #[inline]
    pub fn new(status: S) -> Self {
        Self { status }
    }

    /// Returns the wrapped status.
    #[inline]
    pub fn status(&self) -> S {
        self.status
    }

    /// Consumes the error, returning the wrapped status.
    #[inline]
    pub fn into_status(self) -> S {
        self.status
    }
}

impl<S: StatusCode> core::fmt::Display for StatusError<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "status error: {}", self.status)
    }
}

impl<S: StatusCode> core::error::Error for StatusError<S> {}
