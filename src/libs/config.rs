//! Configuration management for timebill.
//!
//! Billing rates are fixed and are not part of the configuration. What the
//! configuration does hold is the convenience state around session files:
//!
//! - **`last_file`**: the session file used last time, offered as the default
//!   answer when the shell asks which file to open
//! - **`sessions_dir`**: the directory bare session file names are resolved
//!   against (the current directory when unset)
//!
//! ## Storage
//!
//! The configuration lives in `config.json` inside the platform data
//! directory resolved by [`DataStorage`]:
//! - **Windows**: `%LOCALAPPDATA%\timebill\config.json`
//! - **macOS**: `~/Library/Application Support/timebill/config.json`
//! - **Linux**: `~/.local/share/timebill/config.json`
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use timebill::libs::config::Config;
//!
//! let mut config = Config::read()?;
//! config.last_file = Some("march".to_string());
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::{msg_print, msg_warning};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Extension appended to session file names given without one.
pub const SESSION_FILE_EXTENSION: &str = "csv";

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// Name of the session file opened most recently.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_file: Option<String>,

    /// Directory that relative session file names are resolved against.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sessions_dir: Option<PathBuf>,
}

impl Config {
    /// Reads the configuration, returning defaults when no file exists yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Like [`Config::read`], but a broken file only produces a warning and
    /// the defaults.
    pub fn read_or_default() -> Config {
        Self::read().unwrap_or_else(|e| {
            msg_warning!(Message::ConfigReadFailed(e.to_string()));
            Config::default()
        })
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file if it exists.
    pub fn delete() -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }

    /// Resolves a user-supplied session file name to a path.
    ///
    /// A missing extension becomes `.csv`. Relative names are joined onto
    /// `sessions_dir` when it is set; absolute paths are used as given.
    pub fn session_path(&self, name: &str) -> PathBuf {
        let mut path = PathBuf::from(name.trim());
        if path.extension().is_none() {
            path.set_extension(SESSION_FILE_EXTENSION);
        }

        match &self.sessions_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path,
        }
    }

    /// Interactive setup for the configuration fields.
    ///
    /// Existing values are offered as defaults. An empty answer clears the
    /// field.
    pub fn init() -> Result<Self> {
        let config = Self::read().unwrap_or_default();

        msg_print!(Message::ConfigModuleSessions);

        let sessions_dir: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSessionsDir.to_string())
            .default(
                config
                    .sessions_dir
                    .as_deref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            )
            .allow_empty(true)
            .interact_text()?;

        let last_file: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDefaultSessionFile.to_string())
            .default(config.last_file.clone().unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;

        Ok(Config {
            last_file: non_empty(&last_file),
            sessions_dir: non_empty(&sessions_dir).map(PathBuf::from),
        })
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
