//! Error taxonomy for parsing, billing, and session persistence.
//!
//! Every variant is recoverable: the interactive shell reports it and carries
//! on with the next command. Only terminal I/O failures at the prompt layer
//! escape to `main` as `anyhow::Error`.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BillingError {
    /// The raw input did not normalize to a valid `HH:MM` clock time.
    ///
    /// `input` holds the string after normalization, which is what the user
    /// needs to see to understand why it was rejected.
    #[error("Invalid time format: {input}. Please use HH:MM, HH.MM, HH;MM, or HHMM format.")]
    InvalidTimeFormat { input: String },

    /// The end point lies before the start point after day-wrap handling.
    #[error("End time must be after start time.")]
    NegativeDuration,

    /// Reading or writing the session file failed.
    #[error("Session file {path} could not be accessed: {source}")]
    Persistence {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A session number was not numeric or did not refer to an existing session.
    #[error("Invalid session number: {input}")]
    InvalidIndexInput { input: String },
}

impl BillingError {
    pub(crate) fn persistence(path: impl Into<PathBuf>, source: impl Into<csv::Error>) -> Self {
        BillingError::Persistence {
            path: path.into(),
            source: source.into(),
        }
    }
}
