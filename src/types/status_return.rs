//! Combined status + value return type.
//!
//! [`StatusReturn`] pairs a status with a payload for functions that "may fail
//! and, on success, yield `V`". [`StatusOnly`] is the payload-free form: it has
//! no value accessor at all, so asking a status-only call for a value is a
//! compile error rather than a runtime one.
//!
//! # Examples
//!
//! ```
//! use status_rail::{Status, StatusReturn};
//!
//! fn parse_port(text: &str) -> StatusReturn<Status, u16> {
//!     match text.parse() {
//!         Ok(port) => StatusReturn::ok(port),
//!         Err(_) => StatusReturn::with_status(Status::InvalidParam),
//!     }
//! }
//!
//! let port = parse_port("8080");
//! assert!(port.is_ok());
//! assert_eq!(*port.value(), 8080);
//!
//! let bad = parse_port("eighty");
//! assert_eq!(bad.status(), Status::InvalidParam);
//! ```
use crate::types::StatusCode;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A status paired with an owned payload.
///
/// There is no empty state: every instance is built from a status, a status
/// and a value, or a value alone (status defaults to `S::OK`).
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusReturn<S: StatusCode, V> {
    status: S,
    value: V,
}

impl<S: StatusCode, V> StatusReturn<S, V> {
    /// Creates a container holding both a status and a value.
    ///
    /// The value is moved in; clone at the call site to keep a copy.
    #[inline]
    pub fn new(status: S, value: V) -> Self {
        Self { status, value }
    }

    /// Creates a successful container from a value alone.
    ///
    /// # Examples
    ///
    /// ```
    /// use status_rail::{Status, StatusReturn};
    ///
    /// let r = StatusReturn::<Status, _>::ok(vec![1, 2, 3]);
    /// assert_eq!(r.status(), Status::Ok);
    /// ```
    #[inline]
    pub fn ok(value: V) -> Self {
        Self { status: S::OK, value }
    }

    /// Creates a container from a status alone; the value is `V::default()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use status_rail::{Status, StatusReturn};
    ///
    /// let r = StatusReturn::<Status, String>::with_status(Status::NotFound);
    /// assert!(!r.is_ok());
    /// assert!(r.value().is_empty());
    /// ```
    #[inline]
    pub fn with_status(status: S) -> Self
    where
        V: Default,
    {
        Self { status, value: V::default() }
    }

    /// Truthiness of the stored status.
    #[inline]
    pub fn is_ok(&self) -> bool {
        self.status.is_ok()
    }

    /// Negated truthiness of the stored status.
    #[inline]
    pub fn is_failure(&self) -> bool {
        self.status.is_failure()
    }

    /// Returns the stored status by value.
    #[inline]
    pub fn status(&self) -> S {
        self.status
    }

    /// Returns a reference to the payload.
    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Returns a mutable reference to the payload.
    #[inline]
    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Moves the payload out, consuming the container.
    #[inline]
    pub fn into_value(self) -> V {
        self.value
    }

    /// Splits the container into its status and payload.
    #[inline]
    pub fn into_parts(self) -> (S, V) {
        (self.status, self.value)
    }

    /// Converts into a `Result`, discarding the payload on failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use status_rail::{Status, StatusReturn};
    ///
    /// let r = StatusReturn::new(Status::Timeout, 3);
    /// assert_eq!(r.into_result(), Err(Status::Timeout));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<V, S> {
        if self.status.is_ok() {
            Ok(self.value)
        } else {
            Err(self.status)
        }
    }

    /// Builds a container from a `Result`; an `Err` gets a default payload.
    #[inline]
    pub fn from_result(result: Result<V, S>) -> Self
    where
        V: Default,
    {
        match result {
            Ok(value) => Self::ok(value),
            Err(status) => Self::with_status(status),
        }
    }

    /// Maps the payload while keeping the status.
    #[inline]
    pub fn map<U, F>(self, f: F) -> StatusReturn<S, U>
    where
        F: FnOnce(V) -> U,
    {
        StatusReturn { status: self.status, value: f(self.value) }
    }
}

impl<S: StatusCode, V: Default> From<S> for StatusReturn<S, V> {
    #[inline]
    fn from(status: S) -> Self {
        Self::with_status(status)
    }
}

impl<S: StatusCode, V: Default> From<Result<V, S>> for StatusReturn<S, V> {
    #[inline]
    fn from(result: Result<V, S>) -> Self {
        Self::from_result(result)
    }
}

impl<S: StatusCode, V> From<&StatusReturn<S, V>> for bool {
    #[inline]
    fn from(ret: &StatusReturn<S, V>) -> bool {
        ret.is_ok()
    }
}

impl<S: StatusCode, V> core::ops::Not for &StatusReturn<S, V> {
    type Output = bool;

    #[inline]
    fn not(self) -> bool {
        self.is_failure()
    }
}

/// The payload-free form of [`StatusReturn`].
///
/// # Examples
///
/// ```
/// use status_rail::{Status, StatusOnly};
///
/// let r: StatusOnly<Status> = Status::CantWrite.into();
/// assert!(!r.is_ok());
/// assert_eq!(r.status(), Status::CantWrite);
/// ```
///
/// There is no payload to read:
///
/// ```compile_fail
/// use status_rail::{Status, StatusOnly};
///
/// let r = StatusOnly::new(Status::Ok);
/// let _ = r.value();
/// ```
///
/// ```compile_fail
/// use status_rail::{Status, StatusOnly};
///
/// let r = StatusOnly::new(Status::Ok);
/// let _ = r.into_value();
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusOnly<S: StatusCode> {
    status: S,
}

impl<S: StatusCode> StatusOnly<S> {
    #[inline]
    pub fn new(status: S) -> Self {
        Self { status }
    }

    #[inline]
    pub fn is_ok(&self) -> bool {
        self.status.is_ok()
    }

    #[inline]
    pub fn is_failure(&self) -> bool {
        self.status.is_failure()
    }

    #[inline]
    pub fn status(&self) -> S {
        self.status
    }

    #[inline]
    pub fn into_result(self) -> Result<(), S> {
        if self.status.is_ok() {
            Ok(())
        } else {
            Err(self.status)
        }
    }
}

impl<S: StatusCode> From<S> for StatusOnly<S> {
    #[inline]
    fn from(status: S) -> Self {
        Self::new(status)
    }
}

impl<S: StatusCode> From<&StatusOnly<S>> for bool {
    #[inline]
    fn from(ret: &StatusOnly<S>) -> bool {
        ret.is_ok()
    }
}

impl<S: StatusCode> core::ops::Not for &StatusOnly<S> {
    type Output = bool;

    #[inline]
    fn not(self) -> bool {
        self.is_failure()
    }
}
