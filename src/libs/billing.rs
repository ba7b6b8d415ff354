//! Duration rounding and cost calculation for work sessions.
//!
//! This module turns a start/end pair into a billable [`SessionRecord`]. It
//! performs no console or file access.
//!
//! ## Rounding Policy
//!
//! Only the minutes remainder of the elapsed time is rounded; whole hours
//! carry over untouched except when the remainder rounds up:
//!
//! | Remainder | Rounded to          |
//! |-----------|---------------------|
//! | 0–19      | same hour, 0 min    |
//! | 20–49     | same hour, 30 min   |
//! | 50–59     | next hour, 0 min    |
//!
//! ## Rates
//!
//! Full hours bill at [`RATE_FULL_HOUR`], a trailing half hour at
//! [`RATE_HALF_HOUR`]. The two are independent constants.
//!
//! ## Examples
//!
//! ```rust
//! use timebill::libs::billing::session_from_inputs;
//!
//! let record = session_from_inputs("9.00", "10:20").unwrap();
//! assert_eq!((record.rounded_hours, record.rounded_minutes), (1, 30));
//! assert_eq!(record.formatted_cost, "$330.00");
//! ```

use crate::libs::error::BillingError;
use crate::libs::formatter::format_cost;
use crate::libs::time_parser::{self, apply_day_wrap};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Amount billed for each full rounded hour.
pub const RATE_FULL_HOUR: u32 = 220;

/// Amount billed for a trailing rounded half hour.
pub const RATE_HALF_HOUR: u32 = 110;

/// One computed, billable work interval.
///
/// Field order is the column order of the session file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Start clock time, `HH:MM`
    pub start_time: String,
    /// End clock time, `HH:MM` (hour of day, so overnight sessions show e.g. `01:00`)
    pub end_time: String,
    pub original_hours: u32,
    pub original_minutes: u32,
    pub rounded_hours: u32,
    /// Always 0 or 30
    pub rounded_minutes: u32,
    /// Rounded duration in hours, one decimal place
    pub decimal_hours: f64,
    /// Cost as shown to the user, e.g. `$330.00`
    pub formatted_cost: String,
    pub cost: f64,
}

/// Rounds a minutes remainder into the half-hour buckets.
///
/// Returns the rounded `(hours, minutes)` pair, where minutes is 0 or 30.
pub fn round_to_half_hour(hours: u32, minutes: u32) -> (u32, u32) {
    match minutes {
        0..=19 => (hours, 0),
        20..=49 => (hours, 30),
        _ => (hours + 1, 0),
    }
}

/// Cost of a rounded duration at the fixed rates.
pub fn cost_of(rounded_hours: u32, rounded_minutes: u32) -> u32 {
    let half_hour = if rounded_minutes == 30 { RATE_HALF_HOUR } else { 0 };
    rounded_hours * RATE_FULL_HOUR + half_hour
}

/// Computes the session record for an anchored start/end pair.
///
/// `end` must already carry the caller's day-wrap (see
/// [`time_parser::apply_day_wrap`]).
///
/// # Errors
///
/// Returns [`BillingError::NegativeDuration`] when `end` is before `start`.
pub fn compute(start: NaiveDateTime, end: NaiveDateTime) -> Result<SessionRecord, BillingError> {
    let total_minutes = (end - start).num_minutes();
    let total_minutes = u32::try_from(total_minutes).map_err(|_| BillingError::NegativeDuration)?;

    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    let (rounded_hours, rounded_minutes) = round_to_half_hour(hours, minutes);

    let decimal_hours = if rounded_minutes == 30 {
        rounded_hours as f64 + 0.5
    } else {
        rounded_hours as f64
    };
    let cost = cost_of(rounded_hours, rounded_minutes) as f64;

    tracing::debug!(hours, minutes, rounded_hours, rounded_minutes, "duration calculated");

    Ok(SessionRecord {
        start_time: start.format("%H:%M").to_string(),
        end_time: end.format("%H:%M").to_string(),
        original_hours: hours,
        original_minutes: minutes,
        rounded_hours,
        rounded_minutes,
        decimal_hours: (decimal_hours * 10.0).round() / 10.0,
        formatted_cost: format_cost(cost),
        cost,
    })
}

/// Parses two raw clock strings, applies the day-wrap, and computes the record.
///
/// This is the single pipeline both adding and editing a session go through.
pub fn session_from_inputs(start_raw: &str, end_raw: &str) -> Result<SessionRecord, BillingError> {
    let start = time_parser::parse(start_raw)?;
    let end = time_parser::parse(end_raw)?;
    let (start_at, end_at) = apply_day_wrap(start, end);
    compute(start_at, end_at)
}
