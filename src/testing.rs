//! Testing utilities for code that validates with formcheck
//!
//! Assertion macros that print the recorded errors when they fail, and (with
//! the `proptest` feature) an `Arbitrary` implementation for [`Value`].
//!
//! # Examples
//!
//! ```rust
//! use formcheck::{assert_field_errors, assert_invalid, assert_valid, ValidationContext};
//!
//! let mut ctx = ValidationContext::new();
//! ctx.validate_email("user@example.com", "email", "");
//! assert_valid!(ctx);
//!
//! ctx.validate_min_length("ab", "username", 3, "");
//! ctx.required("", "password", "", false);
//! assert_invalid!(ctx);
//! assert_field_errors!(ctx, ["username", "password"]);
//! ```

#[cfg(feature = "proptest")]
use crate::Value;

/// Assert that a context recorded no errors.
///
/// On failure the panic message lists every recorded error.
///
/// # Example
///
/// ```rust
/// use formcheck::{assert_valid, ValidationContext};
///
/// let ctx = ValidationContext::new();
/// assert_valid!(ctx);
/// ```
#[macro_export]
macro_rules! assert_valid {
    ($ctx:expr) => {{
        let ctx: &$crate::ValidationContext = &$ctx;
        if ctx.has_errors() {
            panic!("Expected no validation errors, got: {}", ctx.format_errors());
        }
    }};
}

/// Assert that a context recorded at least one error.
///
/// # Example
///
/// ```rust
/// use formcheck::{assert_invalid, ValidationContext};
///
/// let mut ctx = ValidationContext::new();
/// ctx.add_error("name", "missing");
/// assert_invalid!(ctx);
/// ```
#[macro_export]
macro_rules! assert_invalid {
    ($ctx:expr) => {{
        let ctx: &$crate::ValidationContext = &$ctx;
        if !ctx.has_errors() {
            panic!("Expected validation errors, got none");
        }
    }};
}

/// Assert the fields of the recorded errors, in recording order.
///
/// One entry per error, so a field that failed twice appears twice.
///
/// # Example
///
/// ```rust
/// use formcheck::{assert_field_errors, ValidationContext};
///
/// let mut ctx = ValidationContext::new();
/// ctx.validate_contains_number("abc", "password", "");
/// ctx.validate_contains_uppercase("abc", "password", "");
/// assert_field_errors!(ctx, ["password", "password"]);
/// ```
#[macro_export]
macro_rules! assert_field_errors {
    ($ctx:expr, $expected:expr) => {{
        let ctx: &$crate::ValidationContext = &$ctx;
        if !ctx.has_errors() {
            panic!("Expected errors on fields {:?}, got none", $expected);
        }
        let fields: ::std::vec::Vec<&str> = ctx.errors().iter().map(|e| e.field()).collect();
        assert_eq!(fields, $expected);
    }};
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl Arbitrary for Value {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        let leaf = prop_oneof![
            any::<String>().prop_map(Value::Str),
            any::<i64>().prop_map(Value::Int),
            any::<u64>().prop_map(Value::UInt),
            any::<f64>().prop_map(Value::Float),
            any::<bool>().prop_map(Value::Bool),
            Just(Value::Opaque),
            Just(Value::nil()),
        ];

        leaf.prop_recursive(4, 32, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Seq),
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Set),
                prop::collection::vec((inner.clone(), inner.clone()), 0..4).prop_map(Value::Map),
                inner.prop_map(Value::reference),
            ]
        })
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use crate::ValidationContext;

    fn failing() -> ValidationContext {
        let mut ctx = ValidationContext::new();
        ctx.add_error("name", "missing");
        ctx.add_error("age", "too low");
        ctx
    }

    #[test]
    fn assert_valid_macro() {
        assert_valid!(ValidationContext::new());
    }

    #[test]
    fn assert_invalid_macro() {
        assert_invalid!(failing());
    }

    #[test]
    fn assert_field_errors_macro() {
        assert_field_errors!(failing(), ["name", "age"]);
    }

    #[test]
    #[should_panic(expected = "Expected no validation errors")]
    fn assert_valid_panics_on_errors() {
        assert_valid!(failing());
    }

    #[test]
    #[should_panic(expected = "Expected validation errors, got none")]
    fn assert_invalid_panics_when_clean() {
        assert_invalid!(ValidationContext::new());
    }

    #[test]
    #[should_panic(expected = "Expected errors on fields")]
    fn assert_field_errors_panics_when_clean() {
        assert_field_errors!(ValidationContext::new(), ["name"]);
    }

    #[test]
    #[should_panic]
    fn assert_field_errors_panics_on_mismatch() {
        assert_field_errors!(failing(), ["age", "name"]);
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use crate::Value;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn nil_values_are_always_empty(value in any::<Value>()) {
                if value.is_nil() {
                    prop_assert!(value.is_empty());
                }
            }

            #[test]
            fn reference_layers_do_not_change_emptiness(value in any::<Value>()) {
                let wrapped = Value::reference(Value::reference(value.clone()));
                prop_assert_eq!(wrapped.is_empty(), value.is_empty());
                prop_assert_eq!(wrapped.is_nil(), value.is_nil());
            }
        }
    }
}
