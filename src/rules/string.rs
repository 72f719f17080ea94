//! Text rules: length, format and character classes

use std::sync::LazyLock;

use regex::Regex;
use uuid::Uuid;

use crate::ValidationContext;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern")
});

static URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(https?|ftp)://[^\s/$.?#].[^\s]*$").expect("url pattern"));

static SPECIAL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{P}\p{S}]").expect("special pattern"));

static SPECIAL_ASCII_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[!@#~$%^&*(),.?":{}|<>]"#).expect("special ascii pattern"));

static NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{Nd}").expect("number pattern"));

static NUMBER_ASCII_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[0-9]").expect("number ascii pattern"));

static UPPERCASE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[A-Z]").expect("uppercase pattern"));

static LOWERCASE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[a-z]").expect("lowercase pattern"));

impl ValidationContext {
    /// Require at least `min` characters.
    ///
    /// Characters are Unicode scalar values, not bytes.
    ///
    /// Default message: `<field> must be at least <min> characters.`
    ///
    /// # Example
    ///
    /// ```rust
    /// use formcheck::ValidationContext;
    ///
    /// let mut ctx = ValidationContext::new();
    /// ctx.validate_min_length("日本語", "name", 3, "");
    /// assert!(!ctx.has_errors());
    /// ```
    pub fn validate_min_length(&mut self, value: &str, field: &str, min: usize, err_msg: &str) {
        if value.chars().count() < min {
            self.reject(field, err_msg, || {
                format!("{field} must be at least {min} characters.")
            });
        }
    }

    /// Require at most `max` characters.
    ///
    /// Default message: `<field> must be at most <max> characters.`
    pub fn validate_max_length(&mut self, value: &str, field: &str, max: usize, err_msg: &str) {
        if value.chars().count() > max {
            self.reject(field, err_msg, || {
                format!("{field} must be at most {max} characters.")
            });
        }
    }

    /// Require a `local@domain.tld` shaped address.
    ///
    /// Default message: `<field> must be a valid email address.`
    pub fn validate_email(&mut self, value: &str, field: &str, err_msg: &str) {
        if !EMAIL_REGEX.is_match(value) {
            self.reject(field, err_msg, || {
                format!("{field} must be a valid email address.")
            });
        }
    }

    /// Require an `http`, `https` or `ftp` URL with a host.
    ///
    /// Default message: `<field> must be a valid URL.`
    ///
    /// # Example
    ///
    /// ```rust
    /// use formcheck::ValidationContext;
    ///
    /// let mut ctx = ValidationContext::new();
    /// ctx.validate_url("https://www.example.com", "site", "");
    /// ctx.validate_url("www.example.com", "site", "");
    /// ctx.validate_url("https://", "site", "");
    /// assert_eq!(ctx.errors().len(), 2);
    /// ```
    pub fn validate_url(&mut self, value: &str, field: &str, err_msg: &str) {
        if !URL_REGEX.is_match(value) {
            self.reject(field, err_msg, || format!("{field} must be a valid URL."));
        }
    }

    /// Require a UUID in any RFC 4122 text form.
    ///
    /// Default message: `<field> must be a valid UUID.`
    pub fn validate_uuid(&mut self, value: &str, field: &str, err_msg: &str) {
        if Uuid::parse_str(value).is_err() {
            self.reject(field, err_msg, || format!("{field} must be a valid UUID."));
        }
    }

    /// Require at least one punctuation or symbol character.
    ///
    /// Any character in the Unicode general categories `P` or `S` counts.
    /// Invisible format characters and combining marks do not.
    ///
    /// Default message: `<field> must contain a special character.`
    pub fn validate_contains_special(&mut self, value: &str, field: &str, err_msg: &str) {
        if !SPECIAL_REGEX.is_match(value) {
            self.reject(field, err_msg, || {
                format!("{field} must contain a special character.")
            });
        }
    }

    /// Require at least one of ``!@#~$%^&*(),.?":{}|<>``.
    ///
    /// A stricter alternative to
    /// [`validate_contains_special`](Self::validate_contains_special) for
    /// systems that only accept this fixed set.
    ///
    /// Default message: `<field> must contain a special character.`
    pub fn validate_contains_special_ascii(&mut self, value: &str, field: &str, err_msg: &str) {
        if !SPECIAL_ASCII_REGEX.is_match(value) {
            self.reject(field, err_msg, || {
                format!("{field} must contain a special character.")
            });
        }
    }

    /// Require at least one decimal digit.
    ///
    /// Digits from any script count (`٣`, `３`); fractions, superscripts and
    /// roman numerals do not.
    ///
    /// Default message: `<field> must contain a number.`
    pub fn validate_contains_number(&mut self, value: &str, field: &str, err_msg: &str) {
        if !NUMBER_REGEX.is_match(value) {
            self.reject(field, err_msg, || format!("{field} must contain a number."));
        }
    }

    /// Require at least one ASCII digit `0-9`.
    ///
    /// Default message: `<field> must contain a number.`
    pub fn validate_contains_number_ascii(&mut self, value: &str, field: &str, err_msg: &str) {
        if !NUMBER_ASCII_REGEX.is_match(value) {
            self.reject(field, err_msg, || format!("{field} must contain a number."));
        }
    }

    /// Require at least one ASCII uppercase letter.
    ///
    /// Default message: `<field> must contain an uppercase letter.`
    pub fn validate_contains_uppercase(&mut self, value: &str, field: &str, err_msg: &str) {
        if !UPPERCASE_REGEX.is_match(value) {
            self.reject(field, err_msg, || {
                format!("{field} must contain an uppercase letter.")
            });
        }
    }

    /// Require at least one ASCII lowercase letter.
    ///
    /// Default message: `<field> must contain a lowercase letter.`
    pub fn validate_contains_lowercase(&mut self, value: &str, field: &str, err_msg: &str) {
        if !LOWERCASE_REGEX.is_match(value) {
            self.reject(field, err_msg, || {
                format!("{field} must contain a lowercase letter.")
            });
        }
    }
}
