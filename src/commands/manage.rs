//! Interactive session management shell.
//!
//! Opens a session file, lets the user add, edit, and remove sessions through
//! a menu, and writes the file back when the user finishes.
//!
//! ## Flow
//!
//! 1. **File Selection**: from the argument, or prompted with the last-used
//!    name as default
//! 2. **Load**: a missing file starts an empty ledger; a broken one is
//!    reported and also starts empty
//! 3. **Menu Loop**: table of current sessions, then Add / Edit / Remove /
//!    Finish
//! 4. **Save**: the whole collection is written and the total cost printed.
//!    A file that failed to load is only overwritten after confirmation, and
//!    never with an empty collection
//!
//! Every input problem (bad time, bad session number) is reported and the
//! menu comes back; nothing typed at a prompt ends the program.

use crate::{
    libs::{
        billing::session_from_inputs,
        config::Config,
        formatter::{describe_session, format_cost},
        messages::Message,
        session_file::SessionFile,
        sessions::{parse_session_number, parse_session_numbers, SessionCollection},
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

/// Inputs at the start-time prompt that end the add loop.
const QUIT_SENTINELS: [&str; 2] = ["q", "quit"];

#[derive(Debug, Default, Args)]
pub struct ManageArgs {
    /// Session file name; `.csv` is appended when no extension is given
    file: Option<String>,
}

/// What to do with the session file once the user finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SavePlan {
    Write,
    ConfirmOverwrite,
    Skip,
}

/// A file that could not be read still holds rows the shell never saw.
fn save_plan(load_failed: bool, sessions: &SessionCollection) -> SavePlan {
    match (load_failed, sessions.is_empty()) {
        (false, _) => SavePlan::Write,
        (true, true) => SavePlan::Skip,
        (true, false) => SavePlan::ConfirmOverwrite,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Add,
    Edit,
    Remove,
    Finish,
}

impl MenuChoice {
    const ALL: [MenuChoice; 4] = [MenuChoice::Add, MenuChoice::Edit, MenuChoice::Remove, MenuChoice::Finish];

    fn label(&self) -> String {
        let message = match self {
            MenuChoice::Add => Message::MenuAddSessions,
            MenuChoice::Edit => Message::MenuEditSession,
            MenuChoice::Remove => Message::MenuRemoveSessions,
            MenuChoice::Finish => Message::MenuFinish,
        };
        message.to_string()
    }
}

pub fn cmd(args: ManageArgs) -> Result<()> {
    msg_print!(Message::AppTitle);

    let mut config = Config::read_or_default();

    let name = match args.file {
        Some(name) => name,
        None => prompt_file_name(&config)?,
    };
    let file = SessionFile::new(config.session_path(&name));

    let (mut sessions, load_failed) = match file.load() {
        Ok(sessions) => {
            if file.exists() {
                msg_info!(Message::SessionsLoaded(sessions.len()));
            }
            (sessions, false)
        }
        Err(e) => {
            msg_error!(Message::SessionsLoadFailed(e.to_string()));
            (SessionCollection::new(), true)
        }
    };

    manage_sessions(&mut sessions)?;

    let path = file.path().display().to_string();
    let write = match save_plan(load_failed, &sessions) {
        SavePlan::Write => true,
        SavePlan::ConfirmOverwrite => Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmOverwriteUnreadable(path.clone()).to_string())
            .default(false)
            .interact()?,
        SavePlan::Skip => false,
    };

    if write {
        match file.save(&sessions) {
            Ok(()) => {
                msg_success!(Message::SessionsSaved(path));
                msg_print!(Message::TotalCost(format_cost(sessions.total_cost())));
            }
            Err(e) => msg_error!(Message::SessionsSaveFailed(e.to_string())),
        }
    } else {
        msg_warning!(Message::SessionsNotSaved(path));
    }

    config.last_file = Some(name);
    if let Err(e) = config.save() {
        msg_warning!(Message::ConfigSaveFailed(e.to_string()));
    }

    Ok(())
}

fn prompt_file_name(config: &Config) -> Result<String> {
    let theme = ColorfulTheme::default();
    let mut input = Input::<String>::with_theme(&theme).with_prompt(Message::PromptSessionFile.to_string());
    if let Some(last) = &config.last_file {
        input = input.default(last.clone());
    }
    Ok(input.interact_text()?)
}

fn manage_sessions(sessions: &mut SessionCollection) -> Result<()> {
    let labels: Vec<String> = MenuChoice::ALL.iter().map(MenuChoice::label).collect();

    loop {
        View::sessions(sessions);

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::MenuHeader.to_string())
            .items(&labels)
            .default(0)
            .interact()?;

        match MenuChoice::ALL[selection] {
            MenuChoice::Add => add_sessions(sessions)?,
            MenuChoice::Edit => edit_session(sessions)?,
            MenuChoice::Remove => remove_sessions(sessions)?,
            MenuChoice::Finish => break,
        }
    }

    Ok(())
}

fn add_sessions(sessions: &mut SessionCollection) -> Result<()> {
    let mut added = 0;

    loop {
        let start = prompt_text(Message::PromptStartTime)?;
        if is_quit(&start) {
            break;
        }
        let end = prompt_text(Message::PromptEndTime)?;

        match session_from_inputs(&start, &end) {
            Ok(record) => {
                msg_success!(Message::SessionAdded {
                    start: record.start_time.clone(),
                    end: record.end_time.clone(),
                    cost: record.formatted_cost.clone(),
                });
                sessions.insert(record);
                added += 1;
            }
            Err(e) => msg_error!(e),
        }
    }

    if added > 0 {
        msg_info!(Message::SessionsAddedCount(added));
    } else {
        msg_info!(Message::NoSessionsAdded);
    }
    Ok(())
}

fn edit_session(sessions: &mut SessionCollection) -> Result<()> {
    if sessions.is_empty() {
        msg_info!(Message::NoSessionsToEdit);
        return Ok(());
    }

    let input = prompt_text(Message::PromptSessionNumberToEdit)?;
    let index = match parse_session_number(&input, sessions.len()) {
        Ok(index) => index,
        Err(e) => {
            msg_error!(e);
            return Ok(());
        }
    };

    if let Some(current) = sessions.get(index) {
        msg_print!(Message::CurrentSession(describe_session(current)));
    }

    let start = prompt_text(Message::PromptNewStartTime)?;
    let end = prompt_text(Message::PromptNewEndTime)?;

    match session_from_inputs(&start, &end) {
        Ok(record) => {
            sessions.replace_at(index, record);
            msg_success!(Message::SessionUpdated(index + 1));
        }
        Err(e) => {
            msg_error!(e);
            msg_info!(Message::SessionNotUpdated);
        }
    }
    Ok(())
}

fn remove_sessions(sessions: &mut SessionCollection) -> Result<()> {
    if sessions.is_empty() {
        msg_info!(Message::NoSessionsToRemove);
        return Ok(());
    }

    let input = prompt_text(Message::PromptSessionNumbersToRemove)?;
    let indices = match parse_session_numbers(&input, sessions.len()) {
        Ok(indices) => indices,
        Err(e) => {
            msg_error!(e);
            return Ok(());
        }
    };

    let removed = sessions.remove_all(indices);
    for index in &removed {
        msg_info!(Message::SessionRemoved(index + 1));
    }
    msg_success!(Message::SessionsRemovedCount(removed.len()));
    Ok(())
}

fn prompt_text(prompt: Message) -> Result<String> {
    Ok(Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .allow_empty(true)
        .interact_text()?)
}

fn is_quit(input: &str) -> bool {
    let input = input.trim();
    QUIT_SENTINELS.iter().any(|s| input.eq_ignore_ascii_case(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_sentinels_case_insensitive() {
        assert!(is_quit("q"));
        assert!(is_quit("Q"));
        assert!(is_quit(" quit "));
        assert!(is_quit("QUIT"));
        assert!(!is_quit("09:00"));
        assert!(!is_quit(""));
        assert!(!is_quit("qq"));
    }

    #[test]
    fn unreadable_file_is_not_overwritten_blindly() {
        let mut sessions = SessionCollection::new();
        assert_eq!(save_plan(false, &sessions), SavePlan::Write);
        assert_eq!(save_plan(true, &sessions), SavePlan::Skip);

        sessions.insert(session_from_inputs("09:00", "10:00").unwrap());
        assert_eq!(save_plan(false, &sessions), SavePlan::Write);
        assert_eq!(save_plan(true, &sessions), SavePlan::ConfirmOverwrite);
    }

    #[test]
    fn menu_order_matches_labels() {
        let labels: Vec<String> = MenuChoice::ALL.iter().map(MenuChoice::label).collect();
        assert_eq!(labels, vec!["Add Session(s)", "Edit Session", "Remove Session", "Finish and Save"]);
    }
}
