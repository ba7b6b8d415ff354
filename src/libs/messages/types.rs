#[derive(Debug, Clone)]
pub enum Message {
    // === SHELL MESSAGES ===
    AppTitle,
    PromptSessionFile,
    MenuHeader,
    MenuAddSessions,
    MenuEditSession,
    MenuRemoveSessions,
    MenuFinish,

    // === SESSION FILE MESSAGES ===
    SessionsLoaded(usize),           // count
    SessionsLoadFailed(String),      // error
    SessionsSaved(String),           // path
    SessionsSaveFailed(String),      // error
    SessionsNotSaved(String),        // path
    ConfirmOverwriteUnreadable(String), // path
    SessionFileNotFound(String),     // path
    NoSessionFileGiven,

    // === ADD MESSAGES ===
    PromptStartTime,
    PromptEndTime,
    SessionAdded {
        start: String,
        end: String,
        cost: String,
    },
    SessionsAddedCount(usize),
    NoSessionsAdded,

    // === EDIT MESSAGES ===
    NoSessionsToEdit,
    PromptSessionNumberToEdit,
    CurrentSession(String), // formatted session
    PromptNewStartTime,
    PromptNewEndTime,
    SessionUpdated(usize), // 1-based number
    SessionNotUpdated,

    // === REMOVE MESSAGES ===
    NoSessionsToRemove,
    PromptSessionNumbersToRemove,
    SessionRemoved(usize),        // 1-based number
    SessionsRemovedCount(usize),

    // === SUMMARY MESSAGES ===
    NoSessions,
    SessionsHeader,
    SessionsTotal {
        count: usize,
        hours: String,
        cost: String,
    },
    TotalCost(String),

    // === CONFIGURATION MESSAGES ===
    ConfigModuleSessions,
    PromptSessionsDir,
    PromptDefaultSessionFile,
    ConfigSaved,
    ConfigDeleted,
    ConfigReadFailed(String), // error
    ConfigSaveFailed(String), // error
}
