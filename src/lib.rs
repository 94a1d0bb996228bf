//! Status-code propagation with a severity-gated diagnostic channel.
//!
//! Functions report failure by returning a [`StatusCode`] or a
//! [`StatusReturn`] (status plus payload). Callers propagate failures with
//! the combinator macros, which log one diagnostic at the hop where the
//! failure is observed and return early, or raise a [`StatusError`] for
//! code that prefers `?`.
//!
//! # Examples
//!
//! ## Propagating a status with a payload
//!
//! ```
//! use status_rail::{status_auto_return_call, Status, StatusReturn};
//!
//! fn read_len(path: &str) -> StatusReturn<Status, usize> {
//!     if path.is_empty() {
//!         return Status::InvalidParam.into();
//!     }
//!     StatusReturn::ok(path.len())
//! }
//!
//! fn twice(path: &str) -> Status {
//!     status_auto_return_call!(len, read_len(path));
//!     assert_eq!(len * 2, path.len() * 2);
//!     Status::Ok
//! }
//!
//! assert_eq!(twice("a.txt"), Status::Ok);
//! assert_eq!(twice(""), Status::InvalidParam);
//! ```
//!
//! ## Bridging into `?`
//!
//! ```
//! use status_rail::{status_call_throw, Status, StatusError};
//!
//! fn flush() -> Status {
//!     Status::CantWrite
//! }
//!
//! fn save() -> Result<(), StatusError> {
//!     status_call_throw!(flush());
//!     Ok(())
//! }
//!
//! assert_eq!(save().unwrap_err().status(), Status::CantWrite);
//! ```
//!
//! ## Filtering diagnostics
//!
//! ```
//! use status_rail::log::{self, Severity};
//! use status_rail::log_debug;
//!
//! fn expensive_dump() -> String {
//!     panic!("only evaluated when debug records are admitted")
//! }
//!
//! log::set_global_log_level(Severity::Warning);
//! log_debug!("state: {}", expensive_dump());
//! ```

/// Conversions between statuses, `Result` and `StatusError`
pub mod convert;
/// Severity levels, threshold, records and sinks
pub mod log;
/// Logging and propagation macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Debug-only invariant checks
pub mod sanity;
/// Core traits of the status convention
pub mod traits;
/// Status codes, status + value containers and `StatusError`
pub mod types;

pub use traits::*;
pub use types::{
    Status, StatusCode, StatusError, StatusErrorResult, StatusOnly, StatusResult, StatusReturn,
};
