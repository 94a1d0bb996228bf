//! Pluggable destinations for diagnostic records.
//!
//! Records go to the sink installed for the current thread by [`with_sink`]
//! if there is one, otherwise to the process-wide sink set by
//! [`set_global_sink`], otherwise to [`StdoutSink`].
//!
//! # Examples
//!
//! ```
//! use status_rail::log::{with_sink, MemorySink, Severity};
//! use status_rail::log_error;
//!
//! let sink = MemorySink::new();
//! with_sink(sink.clone(), || log_error!("disk {} is full", 2));
//!
//! let records = sink.records();
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].severity, Severity::Error);
//! assert_eq!(records[0].message, "disk 2 is full");
//! ```
use std::cell::RefCell;
use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError, RwLock};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::log::{DiagnosticRecord, Severity};

/// Receives flushed diagnostic records.
pub trait Sink: Send + Sync {
    fn log(&self, record: &DiagnosticRecord<'_>);
}

impl<F> Sink for F
where
    F: Fn(&DiagnosticRecord<'_>) + Send + Sync,
{
    #[inline]
    fn log(&self, record: &DiagnosticRecord<'_>) {
        self(record)
    }
}

/// Plain callback receiving level, function name and message.
pub type LogFunction = fn(Severity, &str, &str);

/// Adapts a [`LogFunction`] into a [`Sink`].
#[derive(Debug, Clone, Copy)]
pub struct FunctionSink(pub LogFunction);

impl Sink for FunctionSink {
    fn log(&self, record: &DiagnosticRecord<'_>) {
        (self.0)(record.severity(), &record.function_name(), record.message())
    }
}

/// Default sink: one line per record on standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl Sink for StdoutSink {
    fn log(&self, record: &DiagnosticRecord<'_>) {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        let _ = writeln!(handle, "{record}");
    }
}

/// Owned copy of a [`DiagnosticRecord`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedRecord {
    pub severity: Severity,
    pub file: String,
    pub line: u32,
    pub function: String,
    pub message: String,
}

impl From<&DiagnosticRecord<'_>> for CapturedRecord {
    fn from(record: &DiagnosticRecord<'_>) -> Self {
        Self {
            severity: record.severity(),
            file: record.location().file().to_string(),
            line: record.location().line(),
            function: record.location().function().to_string(),
            message: record.message().to_string(),
        }
    }
}

/// Collects records in memory. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    records: Arc<Mutex<Vec<CapturedRecord>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything captured so far.
    pub fn records(&self) -> Vec<CapturedRecord> {
        self.lock().clone()
    }

    /// Drains the captured records.
    pub fn take(&self) -> Vec<CapturedRecord> {
        core::mem::take(&mut *self.lock())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<CapturedRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Sink for MemorySink {
    fn log(&self, record: &DiagnosticRecord<'_>) {
        self.lock().push(CapturedRecord::from(record));
    }
}

static GLOBAL_SINK: RwLock<Option<Arc<dyn Sink>>> = RwLock::new(None);

thread_local! {
    static SCOPED_SINK: RefCell<Option<Arc<dyn Sink>>> = const { RefCell::new(None) };
}

/// Installs the process-wide sink.
pub fn set_global_sink<S: Sink + 'static>(sink: S) {
    *GLOBAL_SINK.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::new(sink));
}

/// Installs a [`LogFunction`] as the process-wide sink.
pub fn set_global_log_function(function: LogFunction) {
    set_global_sink(FunctionSink(function));
}

/// Restores the default [`StdoutSink`].
pub fn reset_global_sink() {
    *GLOBAL_SINK.write().unwrap_or_else(PoisonError::into_inner) = None;
}

/// Routes records emitted on this thread to `sink` while `f` runs.
///
/// Nested calls stack; the previous sink is restored even if `f` panics.
pub fn with_sink<S, R, F>(sink: S, f: F) -> R
where
    S: Sink + 'static,
    F: FnOnce() -> R,
{
    struct Restore(Option<Arc<dyn Sink>>);

    impl Drop for Restore {
        fn drop(&mut self) {
            let previous = self.0.take();
            SCOPED_SINK.with(|slot| *slot.borrow_mut() = previous);
        }
    }

    let previous = SCOPED_SINK.with(|slot| slot.borrow_mut().replace(Arc::new(sink)));
    let _restore = Restore(previous);
    f()
}

pub(crate) fn dispatch(record: &DiagnosticRecord<'_>) {
    // Clone the handle out so a sink that logs does not re-enter a held borrow or lock.
    let scoped = SCOPED_SINK.with(|slot| slot.borrow().clone());
    if let Some(sink) = scoped {
        sink.log(record);
        return;
    }
    let global = GLOBAL_SINK.read().unwrap_or_else(PoisonError::into_inner).clone();
    match global {
        Some(sink) => sink.log(record),
        None => StdoutSink.log(record),
    }
}
