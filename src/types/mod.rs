//! Status and result types.
//!
//! This module provides the value types of the calling convention: the
//! status code, the status + value container, and the error raised by the
//! throwing combinator.
//!
//! # Examples
//!
//! ```
//! use status_rail::{Status, StatusError, StatusReturn};
//!
//! let ret: StatusReturn<Status, Vec<u8>> = Status::CantRead.into();
//! assert!(!ret.is_ok());
//!
//! let err = StatusError::new(ret.status());
//! assert_eq!(err.status(), Status::CantRead);
//! ```

pub mod status;
pub mod status_error;
pub mod status_return;

pub use status::*;
pub use status_error::*;
pub use status_return::*;

/// `StatusReturn` over the crate's own [`Status`].
///
/// # Type Parameters
///
/// * `V` - The payload type
pub type StatusResult<V> = StatusReturn<Status, V>;

/// Result alias for call sites that opt into `?`-based propagation.
pub type StatusErrorResult<T, S = Status> = Result<T, StatusError<S>>;
