//! Required-ness

use crate::value::Value;
use crate::ValidationContext;

impl ValidationContext {
    /// Require `value` to be present and non-empty.
    ///
    /// `value` is converted into a [`Value`]; every `Option`/`Box` layer is
    /// followed first. With `skip_nil`, a nil value passes, so optional
    /// fields are only checked when supplied. A non-nil empty value fails
    /// either way.
    ///
    /// | value | `skip_nil` | error? |
    /// |---|---|---|
    /// | nil | `true` | no |
    /// | nil | `false` | yes |
    /// | empty | any | yes |
    /// | non-empty | any | no |
    ///
    /// Default message: `<field> is required.`
    ///
    /// # Example
    ///
    /// ```rust
    /// use formcheck::ValidationContext;
    ///
    /// let mut ctx = ValidationContext::new();
    /// ctx.required(None::<String>, "nickname", "", true); // optional, absent
    /// ctx.required(Some(""), "nickname", "", true); // supplied but empty
    /// ctx.required(0, "quantity", "", false);
    ///
    /// assert_eq!(ctx.errors().len(), 2);
    /// assert_eq!(ctx.errors()[0].message(), "nickname is required.");
    /// ```
    pub fn required(&mut self, value: impl Into<Value>, field: &str, message: &str, skip_nil: bool) {
        let value = value.into();
        let is_nil = value.is_nil();

        if skip_nil && is_nil {
            return;
        }
        if is_nil || value.is_empty() {
            self.reject(field, message, || format!("{field} is required."));
        }
    }
}
