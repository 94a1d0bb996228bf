//! Debug-only invariant checks.
//!
//! [`sanity_check!`](crate::sanity_check) guards assumptions that only a
//! programming error can break. Whether checks run is a switch with a
//! build-time default (on with `debug_assertions` or the `sanity-checks`
//! feature) that start-up code may override with [`set_enabled`]. When the
//! switch is off the predicate closure is never called, so side effects inside
//! a predicate do not happen.
//!
//! # Examples
//!
//! ```
//! use status_rail::sanity_check;
//!
//! fn midpoint(lo: usize, hi: usize) -> usize {
//!     sanity_check!(lo <= hi);
//!     lo + (hi - lo) / 2
//! }
//!
//! assert_eq!(midpoint(2, 8), 5);
//! ```
use std::sync::atomic::{AtomicU8, Ordering};

use crate::log::{LogMessage, Severity, SourceLocation};

const BUILD_DEFAULT: u8 = 0;
const FORCED_OFF: u8 = 1;
const FORCED_ON: u8 = 2;

static MODE: AtomicU8 = AtomicU8::new(BUILD_DEFAULT);

/// Whether this build enables sanity checks when nothing overrides it.
#[inline]
pub const fn build_default() -> bool {
    cfg!(any(debug_assertions, feature = "sanity-checks"))
}

/// Returns `true` when sanity checks currently run.
#[inline]
pub fn enabled() -> bool {
    match MODE.load(Ordering::Relaxed) {
        FORCED_ON => true,
        FORCED_OFF => false,
        _ => build_default(),
    }
}

/// Overrides the build default.
pub fn set_enabled(on: bool) {
    MODE.store(if on { FORCED_ON } else { FORCED_OFF }, Ordering::Relaxed);
}

/// Drops any override set by [`set_enabled`].
pub fn reset() {
    MODE.store(BUILD_DEFAULT, Ordering::Relaxed);
}

/// Runs `predicate` if checks are enabled and panics when it returns `false`.
///
/// The panic message carries the predicate text, file, line and function.
#[inline]
pub fn check<P>(predicate: P, expression: &'static str, location: SourceLocation)
where
    P: FnOnce() -> bool,
{
    if enabled() && !predicate() {
        failed(expression, location);
    }
}

#[cold]
#[inline(never)]
fn failed(expression: &'static str, location: SourceLocation) -> ! {
    if let Some(msg) = LogMessage::start(Severity::Error, location) {
        msg.push("SanityCheck failed: ").push(expression).end();
    }
    panic!(
        "SanityCheck {} failed in {} line {} function {}()",
        expression,
        location.file(),
        location.line(),
        location.function()
    );
}
