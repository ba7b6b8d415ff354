//! CSV persistence for session collections.
//!
//! The file has a header row followed by one row per session, columns in the
//! field order of [`SessionRecord`]:
//!
//! ```text
//! start_time,end_time,original_hours,original_minutes,rounded_hours,rounded_minutes,decimal_hours,formatted_cost,cost
//! 09:00,10:20,1,20,1,30,1.5,$330.00,330.0
//! ```
//!
//! A missing file and a header-only file both load as an empty collection.
//! Any other read or write failure is reported as
//! [`BillingError::Persistence`] with the path and the underlying cause.

use crate::libs::billing::SessionRecord;
use crate::libs::error::BillingError;
use crate::libs::sessions::SessionCollection;
use std::fs;
use std::path::{Path, PathBuf};

/// Column names written as the header row.
pub const HEADER: [&str; 9] = [
    "start_time",
    "end_time",
    "original_hours",
    "original_minutes",
    "rounded_hours",
    "rounded_minutes",
    "decimal_hours",
    "formatted_cost",
    "cost",
];

/// A session ledger on disk.
#[derive(Debug, Clone)]
pub struct SessionFile {
    path: PathBuf,
}

impl SessionFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Loads every session in the file, in file order.
    pub fn load(&self) -> Result<SessionCollection, BillingError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "session file not found, starting empty");
            return Ok(SessionCollection::new());
        }

        let mut reader = csv::Reader::from_path(&self.path).map_err(|e| BillingError::persistence(&self.path, e))?;

        let records = reader
            .deserialize::<SessionRecord>()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| BillingError::persistence(&self.path, e))?;

        tracing::info!(path = %self.path.display(), count = records.len(), "loaded sessions");
        Ok(SessionCollection::from(records))
    }

    /// Overwrites the file with the given sessions.
    ///
    /// The header row is always written, even for an empty collection.
    /// Missing parent directories are created.
    pub fn save(&self, sessions: &SessionCollection) -> Result<(), BillingError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| BillingError::persistence(&self.path, e))?;
        }

        self.write(sessions).map_err(|e| BillingError::persistence(&self.path, e))?;

        tracing::info!(path = %self.path.display(), count = sessions.len(), "saved sessions");
        Ok(())
    }

    fn write(&self, sessions: &SessionCollection) -> Result<(), csv::Error> {
        let mut wtr = csv::WriterBuilder::new().has_headers(false).from_path(&self.path)?;

        wtr.write_record(HEADER)?;
        for record in sessions {
            wtr.serialize(record)?;
        }

        wtr.flush()?;
        Ok(())
    }
}
