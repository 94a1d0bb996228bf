//! Conversion helpers between bare statuses, `Result` and [`StatusError`].
//!
//! These adapters let status-returning code sit next to `Result`-returning
//! code without hand-written matches at each boundary.
//!
//! # Examples
//!
//! ```
//! use status_rail::convert::*;
//! use status_rail::Status;
//!
//! assert_eq!(status_to_result(Status::Ok), Ok(()));
//! assert_eq!(status_to_result(Status::NotFound), Err(Status::NotFound));
//! assert_eq!(result_to_status(Err(Status::Timeout)), Status::Timeout);
//! ```

use crate::types::{StatusCode, StatusError};

/// `Ok(())` for the success status, `Err(status)` otherwise.
#[inline]
pub fn status_to_result<S: StatusCode>(status: S) -> Result<(), S> {
    if status.is_ok() {
        Ok(())
    } else {
        Err(status)
    }
}

/// Collapses a unit `Result` into a bare status.
#[inline]
pub fn result_to_status<S: StatusCode>(result: Result<(), S>) -> S {
    match result {
        Ok(()) => S::OK,
        Err(status) => status,
    }
}

/// Like [`status_to_result`], but wraps the failure in a [`StatusError`].
///
/// # Examples
///
/// ```
/// use status_rail::convert::status_to_error;
/// use status_rail::{Status, StatusError};
///
/// assert_eq!(status_to_error(Status::Corrupted), Err(StatusError::new(Status::Corrupted)));
/// ```
#[inline]
pub fn status_to_error<S: StatusCode>(status: S) -> Result<(), StatusError<S>> {
    status_to_result(status).map_err(StatusError::new)
}

/// Unwraps the status carried by a [`StatusError`].
#[inline]
pub fn status_error_to_status<S: StatusCode>(error: StatusError<S>) -> S {
    error.into_status()
}
