//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use status_rail::prelude::*;
//!
//! fn load(id: u32) -> StatusResult<String> {
//!     validate!(id != 0, Status::InvalidParam);
//!     StatusReturn::ok(format!("record {id}"))
//! }
//!
//! fn show(id: u32) -> Status {
//!     status_auto_return_call!(text, load(id));
//!     log_info!("loaded {}", text);
//!     Status::Ok
//! }
//!
//! assert_eq!(show(1), Status::Ok);
//! assert_eq!(show(0), Status::InvalidParam);
//! ```

// Macros
pub use crate::{
    function_path, here, log_debug, log_error, log_info, log_this, log_verbose, log_warning,
    sanity_check, status_auto_return_call, status_call, status_call_throw, status_return_call,
    validate,
};

// Core types
pub use crate::log::Severity;
pub use crate::types::{
    Status, StatusCode, StatusError, StatusErrorResult, StatusOnly, StatusResult, StatusReturn,
};

// Traits
pub use crate::traits::{ResultStatusExt, StatusCarrier};
