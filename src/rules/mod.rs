//! Rule methods on [`ValidationContext`](crate::ValidationContext)
//!
//! Every rule checks exactly one condition on one value and records at most
//! one error. All rules share the same shape:
//!
//! ```text
//! ctx.validate_<rule>(value, field, <rule arguments>, err_msg)
//! ```
//!
//! When the check fails, `err_msg` is recorded if it is non-empty; otherwise a
//! default English message naming the field is used. Rules never return
//! errors and never panic. Problems encountered while checking (an unreadable
//! file, a string that is not a number) are recorded on the same field with
//! a message describing the cause.
//!
//! # Example
//!
//! ```rust
//! use formcheck::ValidationContext;
//!
//! let mut ctx = ValidationContext::new();
//! ctx.required("", "name", "", false);
//! ctx.validate_min_length("Pass1", "password", 8, "");
//! ctx.validate_contains_special("Pass1", "password", "");
//! ctx.validate_date("2023-02-30", "birthday", "Please enter a real date.");
//!
//! let messages: Vec<_> = ctx.errors().iter().map(|e| e.message()).collect();
//! assert_eq!(
//!     messages,
//!     [
//!         "name is required.",
//!         "password must be at least 8 characters.",
//!         "password must contain a special character.",
//!         "Please enter a real date.",
//!     ]
//! );
//! ```

mod datetime;
mod file;
mod numeric;
mod required;
mod string;

pub use datetime::Layout;

use std::io;
use std::num::ParseFloatError;
use std::path::PathBuf;

use thiserror::Error;

use crate::ValidationContext;

/// Something that went wrong while checking, as opposed to a rule violation.
#[derive(Debug, Error)]
pub(crate) enum RuleError {
    #[error("invalid number {input:?}: {source}")]
    NotANumber {
        input: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("non-finite number {input:?}")]
    NotFinite { input: String },

    #[error("cannot stat {}: {}", .path.display(), .source)]
    Stat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ValidationContext {
    /// Record a diagnostic failure on `field`, worded by `describe`.
    pub(crate) fn report(
        &mut self,
        field: &str,
        err: RuleError,
        describe: impl FnOnce(&RuleError) -> String,
    ) {
        #[cfg(feature = "tracing")]
        tracing::warn!(field, error = %err, "validation rule could not run");

        self.add_error(field, describe(&err));
    }
}
