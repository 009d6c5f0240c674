//! Show command handler.

use anyhow::{Result, bail};
use std::path::Path;

use super::open_notebook;
use crate::cli::ShowArgs;
use crate::domain::NoteId;

pub fn handle_show(args: &ShowArgs, data_dir: &Path) -> Result<()> {
    let notebook = open_notebook(data_dir)?;

    let Some(note) = notebook.find(NoteId::from(args.id)) else {
        bail!("no note with id {}", args.id);
    };

    println!("{}", note);
    println!();
    println!("{}", note.content);

    Ok(())
}
