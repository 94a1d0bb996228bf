//! Logging and propagation macros.
//!
//! - [`macro@crate::log`] and the `log_error!` .. `log_verbose!` shorthands emit a
//!   diagnostic only when the threshold admits its severity. Message
//!   arguments are not evaluated otherwise.
//! - [`macro@crate::validate`] returns a failure status from the enclosing
//!   function when a predicate does not hold.
//! - [`macro@crate::sanity_check`] panics on a broken invariant while sanity
//!   checks are enabled, and never evaluates its predicate otherwise.
//! - [`macro@crate::status_call`], [`macro@crate::status_return_call`] and
//!   [`macro@crate::status_auto_return_call`] propagate a failing status out of
//!   the enclosing function, extracting the payload on success.
//! - [`macro@crate::status_call_throw`] turns a failing status into a
//!   [`StatusError`](crate::StatusError) returned through `Err`.
//!
//! Every propagation macro evaluates its argument once and logs exactly one
//! error record on the failure path of that hop.
//!
//! The macros expand to `return` in the caller, so the enclosing function
//! must return something the failing status converts into: the status type
//! itself, a [`StatusReturn`](crate::StatusReturn) with a `Default` payload,
//! or a [`StatusOnly`](crate::StatusOnly). `status_call_throw!` instead needs
//! a `Result` whose error type converts from `StatusError`.
//!
//! # Examples
//!
//! ```
//! use status_rail::{status_call, validate, Status};
//!
//! fn check_header(magic: u32) -> Status {
//!     validate!(magic == 0xCAFE, Status::Corrupted, "bad magic {:#x}", magic);
//!     Status::Ok
//! }
//!
//! fn open(magic: u32) -> Status {
//!     status_call!(check_header(magic));
//!     Status::Ok
//! }
//!
//! assert_eq!(open(0xCAFE), Status::Ok);
//! assert_eq!(open(0xBEEF), Status::Corrupted);
//! ```

/// Resolves to the path of the enclosing function, e.g. `my_crate::io::load`.
///
/// Closure segments are dropped, so a call inside a closure reports the
/// function that defines the closure.
///
/// # Examples
///
/// ```
/// fn locate() -> &'static str {
///     status_rail::function_path!()
/// }
///
/// assert!(locate().ends_with("locate"));
/// ```
#[macro_export]
macro_rules! function_path {
    () => {
        $crate::log::record::normalize_function_path($crate::__here_probe!())
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __here_probe {
    () => {{
        fn __status_rail_here() {}
        ::core::any::type_name_of_val(&__status_rail_here)
    }};
}

/// Captures the current file, line and enclosing function as a
/// [`SourceLocation`](crate::log::SourceLocation).
///
/// # Examples
///
/// ```
/// use status_rail::here;
///
/// let expected_line = line!() + 1;
/// let loc = here!();
/// assert_eq!(loc.line(), expected_line);
/// ```
#[macro_export]
macro_rules! here {
    () => {
        $crate::log::SourceLocation::new(::core::file!(), ::core::line!(), $crate::__here_probe!())
    };
}

/// Emits a diagnostic at the given severity.
///
/// The threshold is checked first; when it rejects the severity nothing is
/// built and the format arguments are never evaluated.
///
/// # Examples
///
/// ```
/// use status_rail::log::{with_sink, MemorySink, Severity};
///
/// let sink = MemorySink::new();
/// with_sink(sink.clone(), || status_rail::log!(Severity::Warning, "retry {}/{}", 1, 3));
/// assert_eq!(sink.records()[0].message, "retry 1/3");
/// ```
#[macro_export]
macro_rules! log {
    ($severity:expr, $($arg:tt)+) => {{
        let severity: $crate::log::Severity = $severity;
        if $crate::log::enabled(severity) {
            $crate::log::LogMessage::new(severity, $crate::here!())
                .push(::core::format_args!($($arg)+))
                .end();
        }
    }};
}

/// Logs at [`Severity::Error`](crate::log::Severity::Error).
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)+) => {
        $crate::log!($crate::log::Severity::Error, $($arg)+)
    };
}

/// Logs at [`Severity::Warning`](crate::log::Severity::Warning).
#[macro_export]
macro_rules! log_warning {
    ($($arg:tt)+) => {
        $crate::log!($crate::log::Severity::Warning, $($arg)+)
    };
}

/// Logs at [`Severity::Info`](crate::log::Severity::Info).
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)+) => {
        $crate::log!($crate::log::Severity::Info, $($arg)+)
    };
}

/// Logs at [`Severity::Debug`](crate::log::Severity::Debug).
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)+) => {
        $crate::log!($crate::log::Severity::Debug, $($arg)+)
    };
}

/// Logs at [`Severity::Verbose`](crate::log::Severity::Verbose).
#[macro_export]
macro_rules! log_verbose {
    ($($arg:tt)+) => {
        $crate::log!($crate::log::Severity::Verbose, $($arg)+)
    };
}

/// Logs the address of a referenced value at info severity, for tracing
/// object lifetimes.
///
/// Pass a reference: `log_this!(self)` inside a `&self` method, or
/// `log_this!(&value)`.
#[macro_export]
macro_rules! log_this {
    ($reference:expr) => {
        $crate::log_info!("{:p}", $reference)
    };
}

/// Returns `status` from the enclosing function when `predicate` is false.
///
/// The predicate is evaluated once. On failure an error record quoting the
/// predicate's source text (and the optional formatted message) is emitted
/// before returning.
///
/// # Examples
///
/// ```
/// use status_rail::{validate, Status};
///
/// fn set_volume(level: u8) -> Status {
///     validate!(level <= 100, Status::InvalidParam, "volume {} out of range", level);
///     Status::Ok
/// }
///
/// assert_eq!(set_volume(40), Status::Ok);
/// assert_eq!(set_volume(140), Status::InvalidParam);
/// ```
#[macro_export]
macro_rules! validate {
    ($predicate:expr, $status:expr $(,)?) => {
        if !($predicate) {
            let status = $status;
            $crate::log_error!(
                "Validation failed: {}, returning status_code: {}",
                ::core::stringify!($predicate),
                status
            );
            return ::core::convert::Into::into(status);
        }
    };
    ($predicate:expr, $status:expr, $($arg:tt)+) => {
        if !($predicate) {
            let status = $status;
            $crate::log_error!(
                "Validation failed: {}, returning status_code: {}: {}",
                ::core::stringify!($predicate),
                status,
                ::core::format_args!($($arg)+)
            );
            return ::core::convert::Into::into(status);
        }
    };
}

/// Asserts an invariant while sanity checks are enabled.
///
/// On failure logs `SanityCheck failed: <predicate>` and panics with the
/// predicate text and source location. With checks disabled the predicate
/// is wrapped in a closure that is never called. See [`crate::sanity`].
#[macro_export]
macro_rules! sanity_check {
    ($predicate:expr $(,)?) => {
        $crate::sanity::check(|| $predicate, ::core::stringify!($predicate), $crate::here!())
    };
}

/// Propagates a failing status out of the enclosing function.
///
/// `call` may yield a bare status, a [`StatusReturn`](crate::StatusReturn) or
/// a [`StatusOnly`](crate::StatusOnly); a successful result is discarded.
///
/// # Examples
///
/// ```
/// use status_rail::{status_call, Status};
///
/// fn lock() -> Status {
///     Status::Timeout
/// }
///
/// fn update() -> Status {
///     status_call!(lock());
///     unreachable!("lock() failed");
/// }
///
/// assert_eq!(update(), Status::Timeout);
/// ```
#[macro_export]
macro_rules! status_call {
    ($call:expr $(,)?) => {{
        let status = $crate::traits::StatusCarrier::status(&$call);
        if $crate::types::StatusCode::is_failure(&status) {
            $crate::log_error!(
                "Call: {} failed, returned status_code: {}",
                ::core::stringify!($call),
                status
            );
            return ::core::convert::Into::into(status);
        }
    }};
}

/// Propagates a failing [`StatusReturn`](crate::StatusReturn), otherwise moves
/// its payload into the existing place `dest`.
///
/// # Examples
///
/// ```
/// use status_rail::{status_return_call, Status, StatusReturn};
///
/// fn fetch() -> StatusReturn<Status, Vec<u8>> {
///     StatusReturn::ok(vec![1, 2])
/// }
///
/// fn load(buffer: &mut Vec<u8>) -> Status {
///     status_return_call!(*buffer, fetch());
///     Status::Ok
/// }
///
/// let mut buffer = Vec::new();
/// assert_eq!(load(&mut buffer), Status::Ok);
/// assert_eq!(buffer, vec![1, 2]);
/// ```
#[macro_export]
macro_rules! status_return_call {
    ($dest:expr, $call:expr $(,)?) => {
        $dest = $crate::__status_extract!($call);
    };
}

/// Like [`status_return_call!`], but declares `dest` itself with the
/// payload's type. Write `mut dest` for a mutable binding.
///
/// # Examples
///
/// ```
/// use status_rail::{status_auto_return_call, Status, StatusReturn};
///
/// fn names() -> StatusReturn<Status, Vec<&'static str>> {
///     StatusReturn::ok(vec!["a"])
/// }
///
/// fn add_name() -> Status {
///     status_auto_return_call!(mut list, names());
///     list.push("b");
///     assert_eq!(list, ["a", "b"]);
///     Status::Ok
/// }
///
/// assert_eq!(add_name(), Status::Ok);
/// ```
#[macro_export]
macro_rules! status_auto_return_call {
    (mut $dest:ident, $call:expr $(,)?) => {
        let mut $dest = $crate::__status_extract!($call);
    };
    ($dest:ident, $call:expr $(,)?) => {
        let $dest = $crate::__status_extract!($call);
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __status_extract {
    ($call:expr) => {{
        let ret = $call;
        let status = $crate::StatusReturn::status(&ret);
        if $crate::types::StatusCode::is_failure(&status) {
            $crate::log_error!(
                "Call: {} failed, returned status_code: {}",
                ::core::stringify!($call),
                status
            );
            return ::core::convert::Into::into(status);
        }
        $crate::StatusReturn::into_value(ret)
    }};
}

/// Raises a failing status as a [`StatusError`](crate::StatusError).
///
/// Expands to `return Err(StatusError::new(status).into())`, so the
/// enclosing function returns a `Result` whose error type converts from
/// `StatusError`: the error then travels through `?` like any other.
///
/// # Examples
///
/// ```
/// use status_rail::{status_call_throw, Status, StatusError};
///
/// fn reserve() -> Status {
///     Status::CantAllocate
/// }
///
/// fn build() -> Result<u32, Box<dyn std::error::Error>> {
///     status_call_throw!(reserve());
///     Ok(1)
/// }
///
/// let err = build().unwrap_err();
/// let status_err = err.downcast_ref::<StatusError>().unwrap();
/// assert_eq!(status_err.status(), Status::CantAllocate);
/// ```
#[macro_export]
macro_rules! status_call_throw {
    ($call:expr $(,)?) => {{
        let status = $crate::traits::StatusCarrier::status(&$call);
        if $crate::types::StatusCode::is_failure(&status) {
            $crate::log_error!(
                "Call: {} failed, returned status_code: {}, raising a StatusError",
                ::core::stringify!($call),
                status
            );
            return ::core::result::Result::Err(::core::convert::From::from(
                $crate::StatusError::new(status),
            ));
        }
    }};
}
