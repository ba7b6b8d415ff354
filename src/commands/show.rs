//! Prints a saved session file.
//!
//! Loads the ledger named on the command line, or the one used last, and
//! renders it with the same table and totals line as the interactive shell.

use crate::{
    libs::{config::Config, messages::Message, session_file::SessionFile, view::View},
    msg_bail_anyhow, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Session file name; defaults to the file used last
    file: Option<String>,
}

pub fn cmd(args: ShowArgs) -> Result<()> {
    let config = Config::read_or_default();

    let name = match args.file.or_else(|| config.last_file.clone()) {
        Some(name) => name,
        None => msg_bail_anyhow!(Message::NoSessionFileGiven),
    };

    let file = SessionFile::new(config.session_path(&name));
    if !file.exists() {
        msg_bail_anyhow!(Message::SessionFileNotFound(file.path().display().to_string()));
    }

    let sessions = file.load()?;
    msg_print!(Message::SessionsHeader);
    View::sessions(&sessions);
    Ok(())
}
