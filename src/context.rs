//! Error accumulation for a validation pass
//!
//! This module provides the `ValidationContext` type, which collects
//! field-keyed error messages while rule methods run, and the
//! `ValidationError` entries it records. Nothing here short-circuits: every
//! rule runs, every failure is kept, and the caller decides what to do at the
//! end.
//!
//! # Examples
//!
//! ## Basic usage
//!
//! ```
//! use formcheck::ValidationContext;
//!
//! let mut ctx = ValidationContext::new();
//! ctx.validate_min_length("ab", "username", 3, "");
//! ctx.validate_email("not-an-email", "email", "");
//!
//! assert!(ctx.has_errors());
//! assert_eq!(ctx.errors().len(), 2);
//! assert_eq!(ctx.errors()[0].field(), "username");
//! ```
//!
//! ## Propagating with `?`
//!
//! ```
//! use formcheck::{AggregateError, ValidationContext};
//!
//! fn register(name: &str) -> Result<(), AggregateError> {
//!     let mut ctx = ValidationContext::new();
//!     ctx.required(name, "name", "", false);
//!     ctx.into_result()
//! }
//!
//! assert!(register("alice").is_ok());
//! assert_eq!(register("").unwrap_err().len(), 1);
//! ```

use std::fmt;
use std::sync::Arc;

use crate::aggregate::AggregateError;
use crate::trace::{self, NoTrace, TraceCapture, TRACE_LIMIT};

/// One recorded failure: which field, and what was wrong with it.
///
/// Created only by [`ValidationContext::add_error`]; immutable afterwards.
/// Displays as `Field: <field>, Error: <message>`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValidationError {
    field: String,
    message: String,
    trace: String,
}

impl ValidationError {
    /// The field name the error is keyed by.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Diagnostic trace captured when the error was recorded.
    ///
    /// Empty unless the context was given a [`TraceCapture`].
    pub fn trace(&self) -> &str {
        &self.trace
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Field: {}, Error: {}", self.field, self.message)
    }
}

/// An append-only, ordered collection of validation errors.
///
/// Create one per validation pass, run rule methods against it, then inspect
/// it with [`has_errors`](Self::has_errors) / [`errors`](Self::errors) or turn
/// it into one [`AggregateError`].
///
/// A context is meant to be filled from a single thread. To validate in
/// parallel, give each unit its own context and [`merge`](Self::merge) them
/// afterwards.
#[derive(Clone)]
pub struct ValidationContext {
    errors: Vec<ValidationError>,
    capture: Arc<dyn TraceCapture>,
}

impl ValidationContext {
    /// Create an empty context that captures no traces.
    ///
    /// # Examples
    ///
    /// ```
    /// use formcheck::ValidationContext;
    ///
    /// let ctx = ValidationContext::new();
    /// assert!(!ctx.has_errors());
    /// ```
    pub fn new() -> Self {
        ValidationContext {
            errors: Vec::new(),
            capture: Arc::new(NoTrace),
        }
    }

    /// Create an empty context with room for `capacity` errors.
    pub fn with_capacity(capacity: usize) -> Self {
        ValidationContext {
            errors: Vec::with_capacity(capacity),
            capture: Arc::new(NoTrace),
        }
    }

    /// Use `capture` to produce a trace for every error recorded from now on.
    ///
    /// Traces longer than [`TRACE_LIMIT`] bytes are cut.
    ///
    /// # Examples
    ///
    /// ```
    /// use formcheck::{BacktraceCapture, ValidationContext};
    ///
    /// let mut ctx = ValidationContext::new().with_trace_capture(BacktraceCapture);
    /// ctx.add_error("field", "broken");
    /// assert!(!ctx.errors()[0].trace().is_empty());
    /// ```
    pub fn with_trace_capture<C>(mut self, capture: C) -> Self
    where
        C: TraceCapture + 'static,
    {
        self.capture = Arc::new(capture);
        self
    }

    /// Record an error for `field`.
    ///
    /// Always appends; duplicates are kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use formcheck::ValidationContext;
    ///
    /// let mut ctx = ValidationContext::new();
    /// ctx.add_error("age", "must be positive");
    /// ctx.add_error("age", "must be positive");
    /// assert_eq!(ctx.errors().len(), 2);
    /// ```
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        let error = ValidationError {
            field: field.into(),
            message: message.into(),
            trace: trace::bounded(self.capture.capture(), TRACE_LIMIT),
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            field = %error.field,
            message = %error.message,
            "validation error recorded"
        );

        self.errors.push(error);
    }

    /// The recorded errors, in recording order.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// True if at least one error has been recorded.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Number of recorded errors.
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Errors recorded for one field, in recording order.
    ///
    /// # Examples
    ///
    /// ```
    /// use formcheck::ValidationContext;
    ///
    /// let mut ctx = ValidationContext::new();
    /// ctx.add_error("password", "too short");
    /// ctx.add_error("email", "invalid");
    /// ctx.add_error("password", "needs a digit");
    ///
    /// let messages: Vec<_> = ctx.errors_for("password").map(|e| e.message()).collect();
    /// assert_eq!(messages, ["too short", "needs a digit"]);
    /// ```
    pub fn errors_for<'a>(
        &'a self,
        field: &'a str,
    ) -> impl Iterator<Item = &'a ValidationError> + 'a {
        self.errors.iter().filter(move |err| err.field == field)
    }

    /// Distinct field names with errors, in the order they first failed.
    pub fn fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = Vec::new();
        for err in &self.errors {
            if !fields.contains(&err.field.as_str()) {
                fields.push(&err.field);
            }
        }
        fields
    }

    /// Render every error as a multi-line block.
    ///
    /// # Examples
    ///
    /// ```
    /// use formcheck::ValidationContext;
    ///
    /// let mut ctx = ValidationContext::new();
    /// assert_eq!(ctx.format_errors(), "No validation errors");
    ///
    /// ctx.add_error("F1", "E1");
    /// ctx.add_error("F2", "E2");
    /// assert_eq!(
    ///     ctx.format_errors(),
    ///     "Validation errors:\nField: F1, Error: E1\nField: F2, Error: E2\n"
    /// );
    /// ```
    pub fn format_errors(&self) -> String {
        if !self.has_errors() {
            return "No validation errors".to_string();
        }

        let mut out = String::from("Validation errors:\n");
        for err in &self.errors {
            out.push_str(&err.to_string());
            out.push('\n');
        }
        out
    }

    /// Snapshot the recorded errors as one error value.
    ///
    /// Returns `None` when nothing has been recorded.
    pub fn aggregate_error(&self) -> Option<AggregateError> {
        let aggregate = AggregateError::from_errors(&self.errors);

        #[cfg(feature = "tracing")]
        {
            if let Some(ref err) = aggregate {
                tracing::trace!(count = err.len(), "aggregated validation errors");
            }
        }

        aggregate
    }

    /// `Ok(())` if nothing was recorded, otherwise the aggregate error.
    pub fn into_result(self) -> Result<(), AggregateError> {
        match self.aggregate_error() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Append every error from `other`, keeping its order after ours.
    ///
    /// # Examples
    ///
    /// ```
    /// use formcheck::ValidationContext;
    ///
    /// let mut billing = ValidationContext::new();
    /// billing.add_error("card", "expired");
    ///
    /// let mut shipping = ValidationContext::new();
    /// shipping.add_error("zip", "missing");
    ///
    /// let all = billing.merge(shipping);
    /// assert_eq!(all.fields(), ["card", "zip"]);
    /// ```
    pub fn merge(mut self, other: ValidationContext) -> Self {
        self.errors.extend(other.errors);
        self
    }

    /// Record `message` when `err_msg` is empty, else `err_msg`.
    pub(crate) fn reject(&mut self, field: &str, err_msg: &str, default: impl FnOnce() -> String) {
        if err_msg.is_empty() {
            self.add_error(field, default());
        } else {
            self.add_error(field, err_msg);
        }
    }
}

impl Default for ValidationContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ValidationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationContext")
            .field("errors", &self.errors)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for ValidationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_errors())
    }
}

impl Extend<ValidationError> for ValidationContext {
    fn extend<I: IntoIterator<Item = ValidationError>>(&mut self, iter: I) {
        self.errors.extend(iter);
    }
}

impl<'a> IntoIterator for &'a ValidationContext {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_errors(pairs: &[(&str, &str)]) -> ValidationContext {
        let mut ctx = ValidationContext::new();
        for (field, message) in pairs {
            ctx.add_error(*field, *message);
        }
        ctx
    }

    #[test]
    fn test_new_is_empty() {
        let ctx = ValidationContext::new();
        assert!(!ctx.has_errors());
        assert!(ctx.errors().is_empty());
        assert_eq!(ctx.error_count(), 0);
    }

    #[test]
    fn test_add_error() {
        let ctx = with_errors(&[("Field1", "Error1")]);
        assert_eq!(ctx.errors().len(), 1);
        assert_eq!(ctx.errors()[0].field(), "Field1");
        assert_eq!(ctx.errors()[0].message(), "Error1");
    }

    #[test]
    fn test_errors_keep_call_order() {
        let ctx = with_errors(&[("b", "1"), ("a", "2"), ("b", "3")]);
        let order: Vec<_> = ctx.errors().iter().map(|e| e.message()).collect();
        assert_eq!(order, ["1", "2", "3"]);
    }

    #[test]
    fn test_has_errors() {
        assert!(!with_errors(&[]).has_errors());
        assert!(with_errors(&[("Field1", "Error1")]).has_errors());
    }

    #[test]
    fn test_format_errors_empty() {
        assert_eq!(with_errors(&[]).format_errors(), "No validation errors");
    }

    #[test]
    fn test_format_errors() {
        let ctx = with_errors(&[("Field1", "Error1"), ("Field2", "Error2")]);
        assert_eq!(
            ctx.format_errors(),
            "Validation errors:\nField: Field1, Error: Error1\nField: Field2, Error: Error2\n"
        );
        assert_eq!(ctx.to_string(), ctx.format_errors());
    }

    #[test]
    fn test_aggregate_error_empty_is_none() {
        assert!(with_errors(&[]).aggregate_error().is_none());
    }

    #[test]
    fn test_aggregate_error() {
        let ctx = with_errors(&[("Field1", "Error1"), ("Field2", "Error2")]);
        let err = ctx.aggregate_error().unwrap();
        assert_eq!(err.messages().len(), 2);
        assert_eq!(
            err.to_string(),
            "Validation errors: Field: Field1, Error: Error1; Field: Field2, Error: Error2"
        );
    }

    #[test]
    fn test_aggregate_is_a_snapshot() {
        let mut ctx = with_errors(&[("a", "1")]);
        let err = ctx.aggregate_error().unwrap();
        ctx.add_error("b", "2");
        assert_eq!(err.len(), 1);
        assert_eq!(ctx.aggregate_error().unwrap().len(), 2);
    }

    #[test]
    fn test_reads_do_not_change_errors() {
        let ctx = with_errors(&[("a", "1"), ("b", "2")]);
        let before = ctx.errors().to_vec();
        let _ = ctx.format_errors();
        let _ = ctx.aggregate_error();
        assert_eq!(ctx.errors(), before.as_slice());
    }

    #[test]
    fn test_into_result() {
        assert_eq!(with_errors(&[]).into_result(), Ok(()));
        let err = with_errors(&[("a", "1")]).into_result().unwrap_err();
        assert_eq!(err.messages(), &["Field: a, Error: 1"]);
    }

    #[test]
    fn test_errors_for_and_fields() {
        let ctx = with_errors(&[("b", "1"), ("a", "2"), ("b", "3")]);
        assert_eq!(ctx.errors_for("b").count(), 2);
        assert_eq!(ctx.errors_for("c").count(), 0);
        assert_eq!(ctx.fields(), ["b", "a"]);
    }

    #[test]
    fn test_merge_preserves_each_order() {
        let left = with_errors(&[("a", "1"), ("b", "2")]);
        let right = with_errors(&[("c", "3"), ("d", "4")]);
        let merged = left.merge(right);
        let order: Vec<_> = merged.errors().iter().map(|e| e.message()).collect();
        assert_eq!(order, ["1", "2", "3", "4"]);
    }

    #[test]
    fn test_extend_and_iterate() {
        let mut ctx = with_errors(&[("a", "1")]);
        let other = with_errors(&[("b", "2")]);
        ctx.extend(other.errors().iter().cloned());

        let fields: Vec<_> = (&ctx).into_iter().map(ValidationError::field).collect();
        assert_eq!(fields, ["a", "b"]);
    }

    #[test]
    fn test_trace_capture() {
        let mut ctx = ValidationContext::new().with_trace_capture(|| "at submit".to_string());
        ctx.add_error("a", "1");
        assert_eq!(ctx.errors()[0].trace(), "at submit");
    }

    #[test]
    fn test_trace_is_bounded() {
        let mut ctx = ValidationContext::new().with_trace_capture(|| "t".repeat(5000));
        ctx.add_error("a", "1");
        assert_eq!(ctx.errors()[0].trace().len(), TRACE_LIMIT);
    }

    #[test]
    fn test_clone_shares_capture() {
        let ctx = ValidationContext::new().with_trace_capture(|| "shared".to_string());
        let mut copy = ctx.clone();
        copy.add_error("a", "1");
        assert_eq!(copy.errors()[0].trace(), "shared");
        assert!(!ctx.has_errors());
    }

    #[test]
    fn test_debug_lists_errors() {
        let ctx = with_errors(&[("name", "missing")]);
        let debug = format!("{:?}", ctx);
        assert!(debug.contains("ValidationContext"));
        assert!(debug.contains("missing"));
    }

    #[test]
    fn test_reject_prefers_custom_message() {
        let mut ctx = ValidationContext::new();
        ctx.reject("a", "custom", || "default".to_string());
        ctx.reject("b", "", || "default".to_string());
        assert_eq!(ctx.errors()[0].message(), "custom");
        assert_eq!(ctx.errors()[1].message(), "default");
    }

    #[cfg(feature = "tracing")]
    mod tracing_tests {
        use super::*;
        use tracing_test::traced_test;

        #[traced_test]
        #[test]
        fn test_add_error_logs_field() {
            let mut ctx = ValidationContext::new();
            ctx.add_error("email", "is required");
            assert!(logs_contain("validation error recorded"));
            assert!(logs_contain("email"));
        }

        #[traced_test]
        #[test]
        fn test_aggregate_logs_count() {
            let mut ctx = ValidationContext::new();
            ctx.add_error("a", "1");
            let _ = ctx.aggregate_error();
            assert!(logs_contain("aggregated validation errors"));
        }
    }
}
