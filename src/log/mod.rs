//! Severity-gated diagnostic channel.
//!
//! A call site asks [`enabled`] whether its [`Severity`] passes the
//! process-wide threshold. Only then is a [`LogMessage`] built, filled with
//! message fragments and flushed to the active [`Sink`]. The
//! [`log!`](crate::log) macro family does the check for you and keeps the
//! message arguments unevaluated when the level is filtered out.
//!
//! # Threshold lifecycle
//!
//! The threshold starts at [`DEFAULT_LEVEL`]. On first access it is seeded
//! from the `STATUS_RAIL_LOG_LEVEL` environment variable (a level name or a
//! digit `0..=4`), unless [`set_global_log_level`] already ran. The cell is an
//! atomic with relaxed ordering: concurrent writers race, last writer wins.
//!
//! # Examples
//!
//! ```
//! use status_rail::log::{self, Severity};
//!
//! log::set_global_log_level(Severity::Warning);
//! assert!(log::enabled(Severity::Error));
//! assert!(!log::enabled(Severity::Debug));
//! ```
use core::fmt;
use core::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod record;
pub mod sink;
#[cfg(feature = "tracing")]
pub mod tracing_sink;

pub use record::{
    trim_function_signature, DiagnosticRecord, LogMessage, SourceLocation, FMT_ERROR_MARKER,
};
pub use sink::{
    reset_global_sink, set_global_log_function, set_global_sink, with_sink, CapturedRecord,
    FunctionSink, LogFunction, MemorySink, Sink, StdoutSink,
};
#[cfg(feature = "tracing")]
pub use tracing_sink::TracingSink;

/// Ordered diagnostic severity, most severe first.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Severity {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
    Verbose = 4,
}

impl Severity {
    pub const ALL: [Severity; 5] = [
        Severity::Error,
        Severity::Warning,
        Severity::Info,
        Severity::Debug,
        Severity::Verbose,
    ];

    /// Human-readable level name, as printed by the default sink.
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "Error",
            Severity::Warning => "Warning",
            Severity::Info => "Info",
            Severity::Debug => "Debug",
            Severity::Verbose => "Verbose",
        }
    }

    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Severity::Error),
            1 => Some(Severity::Warning),
            2 => Some(Severity::Info),
            3 => Some(Severity::Debug),
            4 => Some(Severity::Verbose),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known [`Severity`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSeverityError {
    input: String,
}

impl ParseSeverityError {
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level '{}'", self.input)
    }
}

impl core::error::Error for ParseSeverityError {}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    /// Accepts level names in any case (`warn` is an alias of `warning`,
    /// `trace` of `verbose`) or the digits `0..=4`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let level = match trimmed.to_ascii_lowercase().as_str() {
            "error" | "0" => Severity::Error,
            "warning" | "warn" | "1" => Severity::Warning,
            "info" | "2" => Severity::Info,
            "debug" | "3" => Severity::Debug,
            "verbose" | "trace" | "4" => Severity::Verbose,
            _ => return Err(ParseSeverityError { input: trimmed.to_string() }),
        };
        Ok(level)
    }
}

/// Threshold used when neither the environment nor a caller sets one.
pub const DEFAULT_LEVEL: Severity = Severity::Info;

/// Environment variable consulted once to seed the threshold.
pub const LEVEL_ENV: &str = "STATUS_RAIL_LOG_LEVEL";

const UNSET: u8 = u8::MAX;

static GLOBAL_LEVEL: AtomicU8 = AtomicU8::new(UNSET);

/// Seeds the threshold from `STATUS_RAIL_LOG_LEVEL`.
///
/// Runs implicitly on first threshold access; call it explicitly for
/// deterministic start-up. Has no effect once a level is set.
pub fn init() {
    let level = std::env::var(LEVEL_ENV)
        .ok()
        .and_then(|value| value.parse::<Severity>().ok())
        .unwrap_or(DEFAULT_LEVEL);
    let _ = GLOBAL_LEVEL.compare_exchange(UNSET, level as u8, Ordering::Relaxed, Ordering::Relaxed);
}

/// Sets the process-wide threshold.
pub fn set_global_log_level(level: Severity) {
    GLOBAL_LEVEL.store(level as u8, Ordering::Relaxed);
}

/// Returns the process-wide threshold.
#[inline]
pub fn global_log_level() -> Severity {
    let mut raw = GLOBAL_LEVEL.load(Ordering::Relaxed);
    if raw == UNSET {
        init();
        raw = GLOBAL_LEVEL.load(Ordering::Relaxed);
    }
    Severity::from_u8(raw).unwrap_or(DEFAULT_LEVEL)
}

/// Returns `true` when records at `level` pass the current threshold.
#[inline]
pub fn enabled(level: Severity) -> bool {
    level <= global_log_level()
}
