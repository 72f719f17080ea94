//! Numeric bounds
//!
//! Two families: one for values that are already numbers, one for numbers
//! still in text form (as they arrive from a form post).

use std::fmt::Display;

use super::RuleError;
use crate::ValidationContext;

/// Parse trimmed text as a finite `f64`.
fn parse_number(value: &str) -> Result<f64, RuleError> {
    let input = value.trim();
    let number = input.parse::<f64>().map_err(|source| RuleError::NotANumber {
        input: input.to_string(),
        source,
    })?;
    if number.is_finite() {
        Ok(number)
    } else {
        Err(RuleError::NotFinite {
            input: input.to_string(),
        })
    }
}

impl ValidationContext {
    /// Require `value >= min`.
    ///
    /// Works for any ordered, displayable type: integers, floats, and also
    /// things like `chrono::NaiveDate`.
    ///
    /// Default message: `<field> must be at least <min>.`
    ///
    /// # Example
    ///
    /// ```rust
    /// use formcheck::ValidationContext;
    ///
    /// let mut ctx = ValidationContext::new();
    /// ctx.validate_min_value(5, "age", 18, "");
    /// assert_eq!(ctx.errors()[0].message(), "age must be at least 18.");
    /// ```
    pub fn validate_min_value<N>(&mut self, value: N, field: &str, min: N, err_msg: &str)
    where
        N: PartialOrd + Display,
    {
        if value < min {
            self.reject(field, err_msg, || format!("{field} must be at least {min}."));
        }
    }

    /// Require `value <= max`.
    ///
    /// Default message: `<field> must be at most <max>.`
    pub fn validate_max_value<N>(&mut self, value: N, field: &str, max: N, err_msg: &str)
    where
        N: PartialOrd + Display,
    {
        if value > max {
            self.reject(field, err_msg, || format!("{field} must be at most {max}."));
        }
    }

    /// Parse `value` as a number and require it to be at least `min`.
    ///
    /// Surrounding whitespace is ignored. Text that is not a finite number
    /// (including `NaN` and `inf`) is recorded as `<field> must be a number (<cause>)`, whatever `err_msg`
    /// says.
    ///
    /// Default message: `<field> must be at least <min>.`
    ///
    /// # Example
    ///
    /// ```rust
    /// use formcheck::ValidationContext;
    ///
    /// let mut ctx = ValidationContext::new();
    /// ctx.validate_min_value_str(" 21 ", "age", 18.0, "");
    /// ctx.validate_min_value_str("twenty", "age", 18.0, "");
    ///
    /// assert_eq!(ctx.errors().len(), 1);
    /// assert!(ctx.errors()[0].message().starts_with("age must be a number"));
    /// ```
    pub fn validate_min_value_str(&mut self, value: &str, field: &str, min: f64, err_msg: &str) {
        match parse_number(value) {
            Ok(number) if number < min => {
                self.reject(field, err_msg, || format!("{field} must be at least {min}."));
            }
            Ok(_) => {}
            Err(err) => self.report(field, err, |err| format!("{field} must be a number ({err})")),
        }
    }

    /// Parse `value` as a number and require it to be at most `max`.
    ///
    /// Default message: `<field> must be at most <max>.`
    pub fn validate_max_value_str(&mut self, value: &str, field: &str, max: f64, err_msg: &str) {
        match parse_number(value) {
            Ok(number) if number > max => {
                self.reject(field, err_msg, || format!("{field} must be at most {max}."));
            }
            Ok(_) => {}
            Err(err) => self.report(field, err, |err| format!("{field} must be a number ({err})")),
        }
    }
}
