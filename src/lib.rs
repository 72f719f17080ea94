//! # formcheck
//!
//! Inline field validation: run every rule, keep every error, report them once.
//!
//! A [`ValidationContext`] is created per validation pass (typically per
//! request or form submission). Rule methods such as
//! [`required`](ValidationContext::required) or
//! [`validate_email`](ValidationContext::validate_email) each check one thing
//! and, on failure, record a message keyed by field name. Nothing stops
//! early; at the end the caller inspects the errors or turns them into a
//! single [`AggregateError`].
//!
//! ## Quick Example
//!
//! ```rust
//! use formcheck::{AggregateError, ValidationContext};
//!
//! struct SignUp<'a> {
//!     email: &'a str,
//!     password: &'a str,
//!     birthday: Option<&'a str>,
//! }
//!
//! fn validate(form: &SignUp<'_>) -> Result<(), AggregateError> {
//!     let mut ctx = ValidationContext::new();
//!
//!     ctx.required(form.email, "email", "", false);
//!     ctx.validate_email(form.email, "email", "");
//!
//!     ctx.validate_min_length(form.password, "password", 8, "");
//!     ctx.validate_contains_number(form.password, "password", "");
//!
//!     ctx.required(form.birthday, "birthday", "", true);
//!     if let Some(birthday) = form.birthday {
//!         ctx.validate_date(birthday, "birthday", "");
//!     }
//!
//!     ctx.into_result()
//! }
//!
//! let form = SignUp { email: "user@example", password: "short", birthday: None };
//! let err = validate(&form).unwrap_err();
//!
//! assert_eq!(
//!     err.messages_as_string(),
//!     "Field: email, Error: email must be a valid email address.\n\
//!      Field: password, Error: password must be at least 8 characters.\n\
//!      Field: password, Error: password must contain a number."
//! );
//! ```
//!
//! ## Features
//!
//! - `tracing`: log recorded errors and rule failures through `tracing`
//! - `serde`: `Serialize` for errors, `Serialize`/`Deserialize` for [`Value`]
//! - `proptest`: `Arbitrary` for [`Value`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod aggregate;
pub mod context;
pub mod rules;
pub mod testing;
pub mod trace;
pub mod value;

// Re-exports
pub use aggregate::AggregateError;
pub use context::{ValidationContext, ValidationError};
pub use rules::Layout;
pub use trace::{BacktraceCapture, NoTrace, TraceCapture};
pub use value::Value;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::aggregate::AggregateError;
    pub use crate::context::{ValidationContext, ValidationError};
    pub use crate::rules::Layout;
    pub use crate::value::Value;
}
