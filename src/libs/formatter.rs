//! Formatting utilities for costs, durations, and session table rows.
//!
//! Everything the console shows about a session goes through this module so
//! the table view, the one-shot `calc` output, and the shell's confirmation
//! lines all agree on how money and time look.
//!
//! ## Format Specifications
//!
//! - Costs: `$` prefix, two decimal places (`$330.00`)
//! - Durations: `<h>h <m>m` with no padding (`1h 30m`, `0h 0m`)
//! - Decimal hours: one decimal place (`1.5`)
//!
//! ## Examples
//!
//! ```rust
//! use timebill::libs::formatter::{format_cost, format_hours_minutes};
//!
//! assert_eq!(format_cost(330.0), "$330.00");
//! assert_eq!(format_hours_minutes(1, 30), "1h 30m");
//! ```

use crate::libs::billing::SessionRecord;
use serde::{Deserialize, Serialize};

/// A session pre-formatted for display.
///
/// Rows are built once and handed to the table renderer, which keeps the
/// rendering code free of formatting decisions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedSession {
    /// 1-based position in the collection
    pub number: usize,
    pub start: String,
    pub end: String,
    /// Unrounded duration, e.g. `1h 19m`
    pub original: String,
    /// Rounded duration, e.g. `1h 0m`
    pub rounded: String,
    pub decimal_hours: String,
    pub cost: String,
}

impl FormattedSession {
    pub fn new(number: usize, record: &SessionRecord) -> Self {
        FormattedSession {
            number,
            start: record.start_time.clone(),
            end: record.end_time.clone(),
            original: format_hours_minutes(record.original_hours, record.original_minutes),
            rounded: format_hours_minutes(record.rounded_hours, record.rounded_minutes),
            decimal_hours: format_decimal_hours(record.decimal_hours),
            cost: record.formatted_cost.clone(),
        }
    }
}

/// One-line summary of a session, e.g. `09:00 - 10:20 (1h 20m → 1h 30m, $330.00)`.
pub fn describe_session(record: &SessionRecord) -> String {
    format!(
        "{} - {} ({} → {}, {})",
        record.start_time,
        record.end_time,
        format_hours_minutes(record.original_hours, record.original_minutes),
        format_hours_minutes(record.rounded_hours, record.rounded_minutes),
        record.formatted_cost
    )
}

/// Formats a monetary amount as `$` followed by two decimal places.
pub fn format_cost(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Formats an hours/minutes pair as `<h>h <m>m`.
pub fn format_hours_minutes(hours: u32, minutes: u32) -> String {
    format!("{}h {}m", hours, minutes)
}

/// Formats decimal hours with exactly one decimal place.
pub fn format_decimal_hours(hours: f64) -> String {
    format!("{:.1}", hours)
}
