//! Uniform access to the status of anything a participating function returns.
//!
//! The propagation macros inspect their callee's result through
//! [`StatusCarrier`], so a bare status, a [`StatusReturn`] and a
//! [`StatusOnly`] can all be guarded by the same combinator.
//!
//! # Examples
//!
//! ```
//! use status_rail::traits::StatusCarrier;
//! use status_rail::{Status, StatusOnly, StatusReturn};
//!
//! assert_eq!(Status::NotFound.status(), Status::NotFound);
//! assert_eq!(StatusReturn::new(Status::Ok, 1).status(), Status::Ok);
//! assert_eq!(StatusOnly::new(Status::Timeout).status(), Status::Timeout);
//! ```
use crate::types::{StatusCode, StatusOnly, StatusReturn};

/// Types whose success or failure is described by a [`StatusCode`].
pub trait StatusCarrier {
    type Status: StatusCode;

    /// Returns the carried status by value.
    fn status(&self) -> Self::Status;
}

impl<S: StatusCode> StatusCarrier for S {
    type Status = S;

    #[inline]
    fn status(&self) -> S {
        *self
    }
}

impl<S: StatusCode, V> StatusCarrier for StatusReturn<S, V> {
    type Status = S;

    #[inline]
    fn status(&self) -> S {
        StatusReturn::status(self)
    }
}

impl<S: StatusCode> StatusCarrier for StatusOnly<S> {
    type Status = S;

    #[inline]
    fn status(&self) -> S {
        StatusOnly::status(self)
    }
}
