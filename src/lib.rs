//! jot - pocket notes persisted in a single JSON slot

pub mod cli;
pub mod domain;
pub mod notebook;
pub mod store;

use anyhow::Result;
use clap::Parser;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_add, handle_completions, handle_edit, handle_list, handle_rm, handle_show,
    },
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let data_dir = config.data_dir(cli.dir.as_ref());

    match &cli.command {
        Command::Add(args) => handle_add(args, &data_dir),
        Command::List(args) => handle_list(args, &data_dir),
        Command::Show(args) => handle_show(args, &data_dir),
        Command::Edit(args) => handle_edit(args, &data_dir),
        Command::Rm(args) => handle_rm(args, &data_dir),
        Command::Completions(args) => handle_completions(args),
    }
}
