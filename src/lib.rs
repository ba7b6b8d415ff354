//! # timebill - Session Time Tracking and Billing
//!
//! A command-line utility that turns start/end clock times into billable work
//! sessions: durations are rounded to half-hour units, priced at fixed rates,
//! and kept in a CSV ledger between runs.
//!
//! ## Features
//!
//! - **Flexible Time Input**: `HH:MM`, `HH.MM`, `HH;MM`, and `HHMM`
//! - **Overnight Sessions**: an end before the start rolls to the next day
//! - **Half-Hour Billing**: fixed rounding policy and fixed hourly rates
//! - **Session Ledger**: add, edit, and remove sessions, saved as CSV
//!
//! ## Usage
//!
//! ```rust,no_run
//! use timebill::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
