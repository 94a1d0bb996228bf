//! Bridge from the diagnostic channel into `tracing`.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! status-rail = { version = "0.1", features = ["tracing"] }
//! ```
//!
//! The threshold still applies first: a record filtered out by
//! [`global_log_level`](crate::log::global_log_level) never reaches `tracing`.

use tracing::Level;

use crate::log::{DiagnosticRecord, Severity, Sink};

/// Forwards each record as a `tracing` event at the matching level.
///
/// `Verbose` maps to `TRACE`. The source location is attached as the
/// `file`, `line` and `function` fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl Sink for TracingSink {
    fn log(&self, record: &DiagnosticRecord<'_>) {
        let file = record.location().file();
        let line = record.location().line();
        let function = record.function_name();
        let message = record.message();

        match record.severity() {
            Severity::Error => {
                tracing::error!(target: "status_rail", file, line, function = %function, "{message}")
            },
            Severity::Warning => {
                tracing::warn!(target: "status_rail", file, line, function = %function, "{message}")
            },
            Severity::Info => {
                tracing::info!(target: "status_rail", file, line, function = %function, "{message}")
            },
            Severity::Debug => {
                tracing::debug!(target: "status_rail", file, line, function = %function, "{message}")
            },
            Severity::Verbose => {
                tracing::trace!(target: "status_rail", file, line, function = %function, "{message}")
            },
        }
    }
}

impl From<Severity> for Level {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Error => Level::ERROR,
            Severity::Warning => Level::WARN,
            Severity::Info => Level::INFO,
            Severity::Debug => Level::DEBUG,
            Severity::Verbose => Level::TRACE,
        }
    }
}
