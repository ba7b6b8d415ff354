pub mod calc;
pub mod init;
pub mod manage;
pub mod show;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Add, edit, and remove sessions interactively, then save them (default)")]
    Manage(manage::ManageArgs),
    #[command(about = "Compute the rounded duration and cost of a single session")]
    Calc(calc::CalcArgs),
    #[command(about = "Print the sessions stored in a session file")]
    Show(show::ShowArgs),
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Some(Commands::Manage(args)) => manage::cmd(args),
            Some(Commands::Calc(args)) => calc::cmd(args),
            Some(Commands::Show(args)) => show::cmd(args),
            Some(Commands::Init(args)) => init::cmd(args),
            None => manage::cmd(manage::ManageArgs::default()),
        }
    }
}
