//! Bridges from `Result`-based code back into the status convention.
//!
//! Code that caught a [`StatusError`] (or that already returns
//! `Result<T, S>`) can hand its outcome to status-returning callers without
//! matching by hand.
//!
//! # Examples
//!
//! ```
//! use status_rail::traits::ResultStatusExt;
//! use status_rail::{Status, StatusError};
//!
//! let caught: Result<u8, StatusError> = Err(StatusError::new(Status::CantOpen));
//! assert_eq!(caught.status_or_ok(), Status::CantOpen);
//!
//! let fine: Result<u8, Status> = Ok(9);
//! let ret = fine.into_status_return();
//! assert_eq!((ret.status(), *ret.value()), (Status::Ok, 9));
//! ```
use crate::convert::{result_to_status, status_error_to_status};
use crate::types::{StatusCode, StatusError, StatusOnly, StatusReturn};

/// Status-convention views of a `Result`.
pub trait ResultStatusExt<T, S: StatusCode> {
    /// `S::OK` for `Ok`, the failing status for `Err`.
    fn status_or_ok(&self) -> S;

    /// Converts into a [`StatusReturn`]; an `Err` gets a default payload.
    fn into_status_return(self) -> StatusReturn<S, T>
    where
        T: Default;

    /// Converts into a [`StatusOnly`], dropping any payload.
    fn into_status_only(self) -> StatusOnly<S>;
}

impl<T, S: StatusCode> ResultStatusExt<T, S> for Result<T, S> {
    #[inline]
    fn status_or_ok(&self) -> S {
        match self {
            Ok(_) => S::OK,
            Err(status) => *status,
        }
    }

    #[inline]
    fn into_status_return(self) -> StatusReturn<S, T>
    where
        T: Default,
    {
        StatusReturn::from_result(self)
    }

    #[inline]
    fn into_status_only(self) -> StatusOnly<S> {
        StatusOnly::new(result_to_status(self.map(|_| ())))
    }
}

impl<T, S: StatusCode> ResultStatusExt<T, S> for Result<T, StatusError<S>> {
    #[inline]
    fn status_or_ok(&self) -> S {
        match self {
            Ok(_) => S::OK,
            Err(error) => error.status(),
        }
    }

    #[inline]
    fn into_status_return(self) -> StatusReturn<S, T>
    where
        T: Default,
    {
        StatusReturn::from_result(self.map_err(status_error_to_status))
    }

    #[inline]
    fn into_status_only(self) -> StatusOnly<S> {
        StatusOnly::new(self.status_or_ok())
    }
}
