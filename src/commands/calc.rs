//! One-shot session calculation.
//!
//! Runs the same parse, day-wrap, and rounding pipeline as the interactive
//! shell for a single start/end pair and prints the result as a one-row
//! table. Nothing is written to disk.

use crate::{
    libs::{billing::session_from_inputs, formatter::FormattedSession, view::View},
    msg_bail_anyhow,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct CalcArgs {
    /// Start time (HH:MM, HH.MM, HH;MM, or HHMM)
    start: String,

    /// End time; an end earlier than the start is taken as the next day
    end: String,
}

pub fn cmd(args: CalcArgs) -> Result<()> {
    let record = match session_from_inputs(&args.start, &args.end) {
        Ok(record) => record,
        Err(e) => msg_bail_anyhow!(e),
    };

    View::sessions_table(&[FormattedSession::new(1, &record)]).printstd();
    Ok(())
}
