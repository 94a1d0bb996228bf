//! Status codes: the leaf of the calling convention.
//!
//! Every participating function reports success or a specific failure kind
//! through a small, `Copy` discriminant. The [`StatusCode`] trait captures what
//! the rest of the crate needs from such a type, and [`Status`] is the
//! ready-made enumeration used by default.
//!
//! # Examples
//!
//! ```
//! use status_rail::{Status, StatusCode};
//!
//! assert!(Status::Ok.is_ok());
//! assert!(!Status::NotFound.is_ok());
//! assert!(bool::from(Status::Ok));
//! assert!(!Status::CantRead);
//! ```
use core::fmt::{Debug, Display};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A trivially-copyable status discriminant with one designated success value.
///
/// The `Copy` bound is the capability check for types stored in
/// [`StatusReturn`](crate::StatusReturn): a status never owns resources and
/// never runs custom drop logic.
///
/// Consuming modules may define their own status enums:
///
/// ```
/// use status_rail::StatusCode;
/// use std::fmt;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum HashStatus {
///     Ok,
///     DigestMismatch,
/// }
///
/// impl fmt::Display for HashStatus {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         fmt::Debug::fmt(self, f)
///     }
/// }
///
/// impl StatusCode for HashStatus {
///     const OK: Self = HashStatus::Ok;
/// }
///
/// assert!(HashStatus::Ok.is_ok());
/// assert!(!HashStatus::DigestMismatch.is_ok());
/// ```
pub trait StatusCode: Copy + PartialEq + Debug + Display + 'static {
    /// The success value.
    const OK: Self;

    /// Returns `true` for the success value and `false` for every failure.
    #[inline]
    fn is_ok(&self) -> bool {
        *self == Self::OK
    }

    /// Negation of [`is_ok`](StatusCode::is_ok).
    #[inline]
    fn is_failure(&self) -> bool {
        !self.is_ok()
    }
}

impl StatusCode for bool {
    const OK: Self = true;
}

/// The crate's default status enumeration.
///
/// `Ok` is zero and the `Default`; all failures carry stable negative codes.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i32)]
pub enum Status {
    #[default]
    Ok = 0,
    UndefinedError = -1,
    InvalidParam = -2,
    NotInitialized = -3,
    AlreadyInitialized = -4,
    NotFound = -5,
    AlreadyExists = -6,
    CantAllocate = -7,
    CantOpen = -8,
    CantRead = -9,
    CantWrite = -10,
    Corrupted = -11,
    InvalidOperation = -12,
    Unsupported = -13,
    Timeout = -14,
}

impl Status {
    /// Every variant, success first, then failures in code order.
    pub const ALL: [Status; 15] = [
        Status::Ok,
        Status::UndefinedError,
        Status::InvalidParam,
        Status::NotInitialized,
        Status::AlreadyInitialized,
        Status::NotFound,
        Status::AlreadyExists,
        Status::CantAllocate,
        Status::CantOpen,
        Status::CantRead,
        Status::CantWrite,
        Status::Corrupted,
        Status::InvalidOperation,
        Status::Unsupported,
        Status::Timeout,
    ];

    /// Returns the integer code of this status.
    #[inline]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Maps an integer code back to a status, `None` for unknown codes.
    ///
    /// # Examples
    ///
    /// ```
    /// use status_rail::Status;
    ///
    /// assert_eq!(Status::from_code(-5), Some(Status::NotFound));
    /// assert_eq!(Status::from_code(7), None);
    /// ```
    pub const fn from_code(code: i32) -> Option<Self> {
        let status = match code {
            0 => Status::Ok,
            -1 => Status::UndefinedError,
            -2 => Status::InvalidParam,
            -3 => Status::NotInitialized,
            -4 => Status::AlreadyInitialized,
            -5 => Status::NotFound,
            -6 => Status::AlreadyExists,
            -7 => Status::CantAllocate,
            -8 => Status::CantOpen,
            -9 => Status::CantRead,
            -10 => Status::CantWrite,
            -11 => Status::Corrupted,
            -12 => Status::InvalidOperation,
            -13 => Status::Unsupported,
            -14 => Status::Timeout,
            _ => return None,
        };
        Some(status)
    }

    /// Stable snake_case name, used by `Display`.
    pub const fn name(self) -> &'static str {
        match self {
            Status::Ok => "ok",
            Status::UndefinedError => "undefined_error",
            Status::InvalidParam => "invalid_param",
            Status::NotInitialized => "not_initialized",
            Status::AlreadyInitialized => "already_initialized",
            Status::NotFound => "not_found",
            Status::AlreadyExists => "already_exists",
            Status::CantAllocate => "cant_allocate",
            Status::CantOpen => "cant_open",
            Status::CantRead => "cant_read",
            Status::CantWrite => "cant_write",
            Status::Corrupted => "corrupted",
            Status::InvalidOperation => "invalid_operation",
            Status::Unsupported => "unsupported",
            Status::Timeout => "timeout",
        }
    }
}

impl StatusCode for Status {
    const OK: Self = Status::Ok;
}

impl Display for Status {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} ({})", self.name(), self.code())
    }
}

impl From<Status> for bool {
    #[inline]
    fn from(status: Status) -> bool {
        status.is_ok()
    }
}

impl core::ops::Not for Status {
    type Output = bool;

    #[inline]
    fn not(self) -> bool {
        self.is_failure()
    }
}

impl From<Status> for i32 {
    #[inline]
    fn from(status: Status) -> i32 {
        status.code()
    }
}
