//! Display implementation for timebill messages.
//!
//! This is the single place where user-facing text is written. Messages with
//! dynamic content carry their parameters in the variant, so the wording and
//! the interpolation stay together:
//!
//! ```rust
//! use timebill::libs::messages::Message;
//!
//! assert_eq!(Message::SessionsLoaded(3).to_string(), "Loaded 3 existing session(s).");
//! assert_eq!(Message::TotalCost("$990.00".into()).to_string(), "Total Cost: $990.00");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === SHELL MESSAGES ===
            Message::AppTitle => "Time Tracking and Billing System".to_string(),
            Message::PromptSessionFile => "Enter filename to save/load sessions (without .csv)".to_string(),
            Message::MenuHeader => "Options:".to_string(),
            Message::MenuAddSessions => "Add Session(s)".to_string(),
            Message::MenuEditSession => "Edit Session".to_string(),
            Message::MenuRemoveSessions => "Remove Session".to_string(),
            Message::MenuFinish => "Finish and Save".to_string(),

            // === SESSION FILE MESSAGES ===
            Message::SessionsLoaded(count) => format!("Loaded {} existing session(s).", count),
            Message::SessionsLoadFailed(error) => format!("Error loading existing sessions: {}", error),
            Message::SessionsSaved(path) => format!("Sessions saved to {}", path),
            Message::SessionsSaveFailed(error) => format!("Error saving sessions: {}", error),
            Message::SessionsNotSaved(path) => format!("{} was left untouched.", path),
            Message::ConfirmOverwriteUnreadable(path) => {
                format!("{} could not be read. Overwrite it with the current sessions?", path)
            }
            Message::SessionFileNotFound(path) => format!("Session file {} does not exist.", path),
            Message::NoSessionFileGiven => "No session file given and none used before. Pass a file name.".to_string(),

            // === ADD MESSAGES ===
            Message::PromptStartTime => "Enter start time (or 'q' to quit adding)".to_string(),
            Message::PromptEndTime => "Enter end time".to_string(),
            Message::SessionAdded { start, end, cost } => format!("Session added: {} - {}, Cost: {}", start, end, cost),
            Message::SessionsAddedCount(count) => format!("Added {} new session(s).", count),
            Message::NoSessionsAdded => "No sessions added.".to_string(),

            // === EDIT MESSAGES ===
            Message::NoSessionsToEdit => "No sessions to edit.".to_string(),
            Message::PromptSessionNumberToEdit => "Enter the session number to edit".to_string(),
            Message::CurrentSession(session) => format!("Current Session: {}", session),
            Message::PromptNewStartTime => "Enter new start time".to_string(),
            Message::PromptNewEndTime => "Enter new end time".to_string(),
            Message::SessionUpdated(number) => format!("Session {} updated successfully.", number),
            Message::SessionNotUpdated => "Session left unchanged.".to_string(),

            // === REMOVE MESSAGES ===
            Message::NoSessionsToRemove => "No sessions to remove.".to_string(),
            Message::PromptSessionNumbersToRemove => "Enter session numbers to remove (comma-separated)".to_string(),
            Message::SessionRemoved(number) => format!("Removed session {}", number),
            Message::SessionsRemovedCount(count) => format!("Removed {} session(s).", count),

            // === SUMMARY MESSAGES ===
            Message::NoSessions => "No sessions recorded yet.".to_string(),
            Message::SessionsHeader => "Sessions:".to_string(),
            Message::SessionsTotal { count, hours, cost } => {
                format!("{} session(s), {} billable hours, {}", count, hours, cost)
            }
            Message::TotalCost(cost) => format!("Total Cost: {}", cost),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigModuleSessions => "Session files".to_string(),
            Message::PromptSessionsDir => "Directory for session files (empty for current directory)".to_string(),
            Message::PromptDefaultSessionFile => "Default session file name".to_string(),
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigReadFailed(error) => format!("Failed to read configuration, using defaults: {}", error),
            Message::ConfigSaveFailed(error) => format!("Failed to save configuration: {}", error),
        };
        write!(f, "{}", text)
    }
}
