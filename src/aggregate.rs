//! One error value for a whole validation pass
//!
//! This module provides the `AggregateError` type, a snapshot of every error a
//! [`ValidationContext`](crate::ValidationContext) recorded, suitable for
//! returning up a call chain with `?`.
//!
//! # Examples
//!
//! ```
//! use formcheck::ValidationContext;
//!
//! let mut ctx = ValidationContext::new();
//! ctx.add_error("name", "is required");
//! ctx.add_error("age", "must be positive");
//!
//! let err = ctx.aggregate_error().unwrap();
//! assert_eq!(
//!     err.to_string(),
//!     "Validation errors: Field: name, Error: is required; Field: age, Error: must be positive"
//! );
//! assert_eq!(
//!     err.messages_as_string(),
//!     "Field: name, Error: is required\nField: age, Error: must be positive"
//! );
//! ```

use std::error::Error as StdError;
use std::fmt;

use crate::context::ValidationError;

/// Every recorded error of a validation pass, flattened to display strings.
///
/// Each message has the form `Field: <field>, Error: <message>`. Traces are
/// kept in a parallel list, so `messages()[i]` and `stack_traces()[i]` describe
/// the same error.
///
/// An `AggregateError` is a copy: recording more errors on the context it
/// came from does not change it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AggregateError {
    messages: Vec<String>,
    stack_traces: Vec<String>,
}

impl AggregateError {
    /// Snapshot `errors`, or `None` if there are none.
    pub(crate) fn from_errors(errors: &[ValidationError]) -> Option<Self> {
        if errors.is_empty() {
            return None;
        }

        let (messages, stack_traces) = errors
            .iter()
            .map(|err| (err.to_string(), err.trace().to_string()))
            .unzip();

        Some(AggregateError {
            messages,
            stack_traces,
        })
    }

    /// The formatted messages, in recording order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// The captured traces, parallel to [`messages`](Self::messages).
    pub fn stack_traces(&self) -> &[String] {
        &self.stack_traces
    }

    /// All messages joined by newlines.
    pub fn messages_as_string(&self) -> String {
        self.messages.join("\n")
    }

    /// All traces joined by newlines.
    pub fn stack_traces_as_string(&self) -> String {
        self.stack_traces.join("\n")
    }

    /// Number of errors in the snapshot.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Always false for aggregates produced by a context.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl fmt::Display for AggregateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation errors: {}", self.messages.join("; "))
    }
}

impl StdError for AggregateError {}
