//! Diagnostic trace capture for recorded errors
//!
//! Every call to [`add_error`](crate::ValidationContext::add_error) asks the
//! context's [`TraceCapture`] for a snapshot describing where the error was
//! recorded. The default captures nothing, which keeps contexts cheap and
//! output deterministic. Plug in [`BacktraceCapture`] or any closure returning
//! a `String` to get real traces.
//!
//! # Examples
//!
//! ```
//! use formcheck::ValidationContext;
//!
//! let mut ctx = ValidationContext::new().with_trace_capture(|| "handler::submit".to_string());
//! ctx.add_error("email", "is required");
//!
//! assert_eq!(ctx.errors()[0].trace(), "handler::submit");
//! ```

use std::backtrace::Backtrace;

/// Upper bound, in bytes, on a stored trace.
pub const TRACE_LIMIT: usize = 1024;

/// A source of diagnostic traces.
///
/// Implemented for every `Fn() -> String`, so closures can be passed
/// directly to [`with_trace_capture`](crate::ValidationContext::with_trace_capture).
pub trait TraceCapture: Send + Sync {
    /// Describe the current point of execution.
    ///
    /// Returning an empty string means "no trace available".
    fn capture(&self) -> String;
}

impl<F> TraceCapture for F
where
    F: Fn() -> String + Send + Sync,
{
    fn capture(&self) -> String {
        self()
    }
}

/// Captures nothing. The default for new contexts.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTrace;

impl TraceCapture for NoTrace {
    fn capture(&self) -> String {
        String::new()
    }
}

/// Captures the current thread's backtrace.
///
/// Capture happens regardless of `RUST_BACKTRACE`. The output is cut to
/// [`TRACE_LIMIT`] bytes when stored.
#[derive(Debug, Clone, Copy, Default)]
pub struct BacktraceCapture;

impl TraceCapture for BacktraceCapture {
    fn capture(&self) -> String {
        Backtrace::force_capture().to_string()
    }
}

/// Cut `trace` to at most `limit` bytes without splitting a character.
pub(crate) fn bounded(mut trace: String, limit: usize) -> String {
    if trace.len() > limit {
        let mut end = limit;
        while !trace.is_char_boundary(end) {
            end -= 1;
        }
        trace.truncate(end);
    }
    trace
}
