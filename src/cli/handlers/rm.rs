//! Delete command handler.

use anyhow::{Context, Result, bail};
use std::path::Path;

use super::open_notebook;
use crate::cli::RmArgs;
use crate::domain::NoteId;

pub fn handle_rm(args: &RmArgs, data_dir: &Path) -> Result<()> {
    let id = NoteId::from(args.id);
    let mut notebook = open_notebook(data_dir)?;

    let Some(note) = notebook.find(id) else {
        bail!("no note with id {}", args.id);
    };
    let title = note.title.clone();

    notebook
        .delete_note(id)
        .with_context(|| "failed to save notes")?;

    println!("Deleted: {} [{}]", title, id);

    Ok(())
}
