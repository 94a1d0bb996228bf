//! Diagnostic records and the streaming message builder.
//!
//! # Examples
//!
//! ```
//! use status_rail::log::{LogMessage, MemorySink, Severity};
//! use status_rail::here;
//!
//! let sink = MemorySink::new();
//! status_rail::log::with_sink(sink.clone(), || {
//!     if let Some(msg) = LogMessage::start(Severity::Error, here!()) {
//!         msg.push("opened ").push(3).push(" files").end();
//!     }
//! });
//!
//! assert_eq!(sink.records()[0].message, "opened 3 files");
//! ```
use core::fmt::{self, Write};
use smallvec::SmallVec;

use crate::log::{enabled, sink, Severity};

/// Bytes kept inline before a message spills to the heap.
const INLINE_MESSAGE: usize = 128;

/// Appended when a fragment's `Display` implementation fails.
pub const FMT_ERROR_MARKER: &str = "<fmt error>";

const HERE_MARKER: &str = "::__status_rail_here";
const CLOSURE_SEGMENT: &str = "::{{closure}}";

/// Where a diagnostic was raised: file, line and enclosing function path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    file: &'static str,
    line: u32,
    function: &'static str,
}

impl SourceLocation {
    #[inline]
    pub const fn new(file: &'static str, line: u32, function: &'static str) -> Self {
        Self { file, line, function }
    }

    #[inline]
    pub const fn file(&self) -> &'static str {
        self.file
    }

    #[inline]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Enclosing function path, with closure segments removed.
    #[inline]
    pub fn function(&self) -> &'static str {
        normalize_function_path(self.function)
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} in {}()", self.file, self.line, trim_function_signature(self.function()))
    }
}

/// Strips the probe item and closure segments that `function_path!` and
/// `here!` pick up from `type_name`.
#[doc(hidden)]
pub fn normalize_function_path(raw: &'static str) -> &'static str {
    let mut path = raw.strip_suffix(HERE_MARKER).unwrap_or(raw);
    while let Some(outer) = path.strip_suffix(CLOSURE_SEGMENT) {
        path = outer;
    }
    path
}

/// Reduces a full function signature to its qualified name.
///
/// The parameter list is the first `(` outside angle brackets; it and
/// everything after it are dropped, along with everything up to the last
/// whitespace before it (return type, qualifiers). Strings without such a
/// parameter list, including Rust paths like `<(u8, u8) as Tr>::m`, are
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use status_rail::log::trim_function_signature;
///
/// assert_eq!(trim_function_signature("int ns::table::insert(int, float)"), "ns::table::insert");
/// assert_eq!(trim_function_signature("crate::module::func"), "crate::module::func");
/// assert_eq!(trim_function_signature("<() as app::Reset>::reset"), "<() as app::Reset>::reset");
/// ```
pub fn trim_function_signature(signature: &str) -> &str {
    let mut depth = 0usize;
    let mut name_start = 0;
    for (i, c) in signature.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            '(' if depth == 0 => return &signature[name_start..i],
            c if depth == 0 && c.is_whitespace() => name_start = i + c.len_utf8(),
            _ => {},
        }
    }
    signature
}

/// A diagnostic as handed to a [`Sink`](crate::log::Sink).
///
/// Records are borrowed views: they live only for the duration of the sink
/// call. Use [`CapturedRecord`](crate::log::CapturedRecord) to keep one.
#[derive(Debug, Clone, Copy)]
pub struct DiagnosticRecord<'a> {
    severity: Severity,
    location: SourceLocation,
    message: &'a str,
}

impl<'a> DiagnosticRecord<'a> {
    #[inline]
    pub fn new(severity: Severity, location: SourceLocation, message: &'a str) -> Self {
        Self { severity, location, message }
    }

    #[inline]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[inline]
    pub fn location(&self) -> &SourceLocation {
        &self.location
    }

    #[inline]
    pub fn message(&self) -> &'a str {
        self.message
    }

    /// Function name as shown in log lines, e.g. `crate::io::load()`.
    pub fn function_name(&self) -> String {
        let function = self.location.function();
        if function.is_empty() {
            return String::new();
        }
        format!("{}()", trim_function_signature(function))
    }
}

impl fmt::Display for DiagnosticRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} log: {}: {}", self.severity, self.function_name(), self.message)
    }
}

#[derive(Default)]
struct MessageBuf {
    bytes: SmallVec<[u8; INLINE_MESSAGE]>,
}

impl MessageBuf {
    fn as_str(&self) -> &str {
        // Only whole `&str` fragments are ever appended.
        core::str::from_utf8(&self.bytes).unwrap_or_default()
    }
}

impl Write for MessageBuf {
    #[inline]
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.bytes.extend_from_slice(s.as_bytes());
        Ok(())
    }
}

/// Streaming builder for one diagnostic record.
///
/// Fragments are appended with [`push`](LogMessage::push),
/// [`append`](LogMessage::append) or `write!`. The record reaches the sink
/// when [`end`](LogMessage::end) is called, or when the builder is dropped
/// without having been flushed.
#[must_use = "a log message is flushed by `end()` or when dropped"]
pub struct LogMessage {
    severity: Severity,
    location: SourceLocation,
    buf: MessageBuf,
    flushed: bool,
}

impl LogMessage {
    /// Creates a builder without consulting the threshold.
    #[inline]
    pub fn new(severity: Severity, location: SourceLocation) -> Self {
        Self { severity, location, buf: MessageBuf::default(), flushed: false }
    }

    /// Creates a builder only if `severity` passes the threshold.
    #[inline]
    pub fn start(severity: Severity, location: SourceLocation) -> Option<Self> {
        enabled(severity).then(|| Self::new(severity, location))
    }

    /// Appends a fragment, builder style.
    #[inline]
    pub fn push<T: fmt::Display>(mut self, fragment: T) -> Self {
        self.append(fragment);
        self
    }

    /// Appends a fragment in place.
    ///
    /// A fragment whose `Display` fails keeps what it wrote so far and is
    /// followed by `<fmt error>`.
    #[inline]
    pub fn append<T: fmt::Display>(&mut self, fragment: T) -> &mut Self {
        if write!(self.buf, "{fragment}").is_err() {
            self.buf.bytes.extend_from_slice(FMT_ERROR_MARKER.as_bytes());
        }
        self
    }

    #[inline]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// The message accumulated so far.
    #[inline]
    pub fn message(&self) -> &str {
        self.buf.as_str()
    }

    /// End-of-message marker: flushes the record to the active sink.
    #[inline]
    pub fn end(mut self) {
        self.flush();
    }

    fn flush(&mut self) {
        if self.flushed {
            return;
        }
        self.flushed = true;
        let record = DiagnosticRecord::new(self.severity, self.location, self.buf.as_str());
        sink::dispatch(&record);
    }
}

impl Write for LogMessage {
    #[inline]
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.buf.write_str(s)
    }
}

impl fmt::Debug for LogMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogMessage")
            .field("severity", &self.severity)
            .field("location", &self.location)
            .field("message", &self.message())
            .finish_non_exhaustive()
    }
}

impl Drop for LogMessage {
    fn drop(&mut self) {
        self.flush();
    }
}
