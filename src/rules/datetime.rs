//! Date and time rules
//!
//! Every layout is exact: each digit slot has a fixed width, separators must
//! match, and the result must be a real calendar date or clock time.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::ValidationContext;

/// A fixed textual date/time layout.
///
/// # Example
///
/// ```rust
/// use formcheck::rules::Layout;
///
/// assert!(Layout::Date.accepts("2023-07-25"));
/// assert!(!Layout::Date.accepts("2023-7-25"));
/// assert!(!Layout::Date.accepts("2023-02-30"));
/// assert_eq!(Layout::DateTime.pattern(), "YYYY-MM-DD hh:mm:ss");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// `YYYY-MM-DD`
    Date,
    /// `YYYY-MM`
    YearMonth,
    /// `YYYY`
    Year,
    /// `MM`
    Month,
    /// `YYYY-MM-DD hh:mm:ss`
    DateTime,
    /// `hh:mm`
    Time,
}

impl Layout {
    /// The layout written out; letters are digit slots.
    pub const fn pattern(self) -> &'static str {
        match self {
            Layout::Date => "YYYY-MM-DD",
            Layout::YearMonth => "YYYY-MM",
            Layout::Year => "YYYY",
            Layout::Month => "MM",
            Layout::DateTime => "YYYY-MM-DD hh:mm:ss",
            Layout::Time => "hh:mm",
        }
    }

    /// What a value in this layout is called in messages.
    const fn noun(self) -> &'static str {
        match self {
            Layout::Date => "date",
            Layout::YearMonth => "year and month",
            Layout::Year => "year",
            Layout::Month => "month",
            Layout::DateTime => "date and time",
            Layout::Time => "time",
        }
    }

    fn has_shape(self, value: &str) -> bool {
        let pattern = self.pattern();
        value.len() == pattern.len()
            && value
                .bytes()
                .zip(pattern.bytes())
                .all(|(v, p)| if p.is_ascii_alphabetic() { v.is_ascii_digit() } else { v == p })
    }

    /// True if `value` is written in this layout and names a real date/time.
    pub fn accepts(self, value: &str) -> bool {
        if !self.has_shape(value) {
            return false;
        }
        match self {
            Layout::Date => NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok(),
            Layout::YearMonth => {
                NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d").is_ok()
            }
            Layout::Year => value
                .parse::<i32>()
                .is_ok_and(|year| NaiveDate::from_ymd_opt(year, 1, 1).is_some()),
            Layout::Month => value.parse::<u32>().is_ok_and(|month| (1..=12).contains(&month)),
            Layout::DateTime => NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
                .is_ok_and(|dt| dt.nanosecond() < 1_000_000_000), // no leap seconds
            Layout::Time => NaiveTime::parse_from_str(value, "%H:%M").is_ok(),
        }
    }
}

impl ValidationContext {
    /// Require `value` to be written in `layout`.
    ///
    /// The date rules below are shorthands for this.
    ///
    /// Default message: `<field> must be a valid <date|year and month|...>.`
    pub fn validate_layout(&mut self, value: &str, field: &str, layout: Layout, err_msg: &str) {
        if !layout.accepts(value) {
            self.reject(field, err_msg, || {
                format!("{field} must be a valid {}.", layout.noun())
            });
        }
    }

    /// Require a `YYYY-MM-DD` date.
    pub fn validate_date(&mut self, value: &str, field: &str, err_msg: &str) {
        self.validate_layout(value, field, Layout::Date, err_msg);
    }

    /// Require a `YYYY-MM` year and month.
    pub fn validate_year_month(&mut self, value: &str, field: &str, err_msg: &str) {
        self.validate_layout(value, field, Layout::YearMonth, err_msg);
    }

    /// Require a four-digit `YYYY` year.
    pub fn validate_year(&mut self, value: &str, field: &str, err_msg: &str) {
        self.validate_layout(value, field, Layout::Year, err_msg);
    }

    /// Require a two-digit `MM` month, `01` to `12`.
    pub fn validate_month(&mut self, value: &str, field: &str, err_msg: &str) {
        self.validate_layout(value, field, Layout::Month, err_msg);
    }

    /// Require a `YYYY-MM-DD hh:mm:ss` date and time.
    pub fn validate_date_time(&mut self, value: &str, field: &str, err_msg: &str) {
        self.validate_layout(value, field, Layout::DateTime, err_msg);
    }

    /// Require an `hh:mm` 24-hour time.
    pub fn validate_time(&mut self, value: &str, field: &str, err_msg: &str) {
        self.validate_layout(value, field, Layout::Time, err_msg);
    }
}
