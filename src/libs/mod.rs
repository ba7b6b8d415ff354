//! Core library modules for the timebill application.
//!
//! ## Features
//!
//! - **Computation**: Time-string parsing, half-hour rounding, and billing
//! - **Session Management**: Ordered collection with safe bulk removal
//! - **Persistence**: CSV session files and JSON configuration
//! - **User Interface**: Messages, console tables, and formatting
//!
//! ## Usage
//!
//! ```rust,no_run
//! use timebill::libs::billing::session_from_inputs;
//! use timebill::libs::session_file::SessionFile;
//! use timebill::libs::sessions::SessionCollection;
//!
//! let mut sessions = SessionCollection::new();
//! sessions.insert(session_from_inputs("9.00", "1130")?);
//! SessionFile::new("march.csv").save(&sessions)?;
//! # Ok::<(), timebill::libs::error::BillingError>(())
//! ```

pub mod billing;
pub mod config;
pub mod data_storage;
pub mod error;
pub mod formatter;
pub mod messages;
pub mod session_file;
pub mod sessions;
pub mod time_parser;
pub mod view;
