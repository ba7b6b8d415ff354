//! Normalization and parsing of free-form clock times.
//!
//! Users type times the way their keyboard or habit suggests: `9.30`, `9;30`,
//! `0930`, `09:30`. This module folds all of those into a single canonical
//! [`TimeOfDay`].
//!
//! ## Pipeline
//!
//! The order of the steps matters:
//!
//! 1. Separator rules from [`NORMALIZATION_RULES`] are applied in table order
//! 2. Surrounding whitespace is trimmed
//! 3. A bare four-digit string gets a colon after its first two digits
//! 4. The result is parsed strictly as `H:M` on a 24-hour clock
//!
//! ## Examples
//!
//! ```rust
//! use timebill::libs::time_parser::{parse, TimeOfDay};
//!
//! let a = parse("9.30").unwrap();
//! let b = parse("0930").unwrap();
//! assert_eq!(a, b);
//! assert_eq!(a.to_string(), "09:30");
//! assert!(parse("2400").is_err());
//! ```

use crate::libs::error::BillingError;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use std::fmt;

/// Ordered separator rewrites applied before structural validation.
///
/// Each row maps any of its characters to the replacement string. Rows run
/// top to bottom, so a later row never sees characters an earlier row has
/// already rewritten into `:`.
pub const NORMALIZATION_RULES: &[(&[char], &str)] = &[
    // Alternate clock separators
    (&['.', ';'], ":"),
    // Decimal comma
    (&[','], "."),
];

/// A point on a 24-hour clock with no date attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// Builds a time of day, returning `None` for hour > 23 or minute > 59.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(TimeOfDay)
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Places this clock time on the fixed base date used for duration math.
    pub fn anchored(&self) -> NaiveDateTime {
        base_date().and_time(self.0)
    }
}

impl From<TimeOfDay> for NaiveTime {
    fn from(value: TimeOfDay) -> Self {
        value.0
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

/// The date every clock time is anchored to. Any fixed date works; this one
/// matches what a bare `%H:%M` parse yields in most time libraries.
fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Applies the separator rules and expands bare four-digit input.
pub fn normalize(raw: &str) -> String {
    let mut value = raw.to_string();
    for (from, to) in NORMALIZATION_RULES {
        value = value.replace(*from, to);
    }

    let value = value.trim();
    if value.len() == 4 && value.chars().all(|c| c.is_ascii_digit()) {
        format!("{}:{}", &value[..2], &value[2..])
    } else {
        value.to_string()
    }
}

/// Parses a raw clock string into a [`TimeOfDay`].
///
/// # Errors
///
/// Returns [`BillingError::InvalidTimeFormat`] carrying the normalized string
/// when the input is not a valid 24-hour `H:M` time.
pub fn parse(raw: &str) -> Result<TimeOfDay, BillingError> {
    let normalized = normalize(raw);
    parse_strict(&normalized).ok_or(BillingError::InvalidTimeFormat { input: normalized })
}

fn parse_strict(value: &str) -> Option<TimeOfDay> {
    let (hour, minute) = value.split_once(':')?;
    TimeOfDay::from_hm(clock_field(hour)?, clock_field(minute)?)
}

// One or two ASCII digits, nothing else.
fn clock_field(field: &str) -> Option<u32> {
    if field.is_empty() || field.len() > 2 || !field.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

/// Anchors both clock times and moves `end` to the next day when it is
/// earlier than `start`, representing an overnight session.
pub fn apply_day_wrap(start: TimeOfDay, end: TimeOfDay) -> (NaiveDateTime, NaiveDateTime) {
    let start_at = start.anchored();
    let mut end_at = end.anchored();
    if end_at < start_at {
        end_at += Duration::days(1);
    }
    (start_at, end_at)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(hour: u32, minute: u32) -> TimeOfDay {
        TimeOfDay::from_hm(hour, minute).unwrap()
    }

    #[test]
    fn alternate_separators_agree() {
        for raw in ["9.30", "9;30", "09:30", "0930", " 09.30 "] {
            assert_eq!(parse(raw).unwrap(), hm(9, 30), "input {raw:?}");
        }
    }

    #[test]
    fn four_digit_form() {
        assert_eq!(parse("2000").unwrap(), hm(20, 0));
        assert_eq!(parse("0000").unwrap(), hm(0, 0));
        assert_eq!(parse("2359").unwrap(), hm(23, 59));
    }

    #[test]
    fn single_digit_components() {
        assert_eq!(parse("8:5").unwrap(), hm(8, 5));
        assert_eq!(parse("0:0").unwrap(), hm(0, 0));
    }

    #[test]
    fn out_of_range_rejected() {
        assert!(matches!(
            parse("2400"),
            Err(BillingError::InvalidTimeFormat { input }) if input == "24:00"
        ));
        assert!(parse("12:60").is_err());
        assert!(parse("24:00").is_err());
    }

    #[test]
    fn malformed_rejected() {
        for raw in ["", "   ", "930", "9", "9:", ":30", "09:300", "ab:cd", "9:30:00", "+9:30", "9,30"] {
            assert!(parse(raw).is_err(), "input {raw:?} should fail");
        }
    }

    #[test]
    fn comma_rule_runs_after_colon_rule() {
        assert_eq!(normalize("9,30"), "9.30");
        assert_eq!(normalize("9.30"), "9:30");
    }

    #[test]
    fn day_wrap_only_when_end_precedes_start() {
        let (start, end) = apply_day_wrap(hm(23, 0), hm(1, 0));
        assert_eq!((end - start).num_minutes(), 120);

        let (start, end) = apply_day_wrap(hm(9, 0), hm(17, 0));
        assert_eq!((end - start).num_minutes(), 480);

        let (start, end) = apply_day_wrap(hm(9, 0), hm(9, 0));
        assert_eq!(end, start);
    }
}
