//! Edit command handler.

use anyhow::{Context, Result, bail};
use std::path::Path;

use super::open_notebook;
use crate::cli::EditArgs;
use crate::domain::NoteId;

/// Drives a full edit transition: begin the edit (copying the stored text
/// into the draft), overlay the fields given on the command line, and
/// confirm. The note is printed as stored after the commit — the commit
/// rewrites the record from its stored fields, so the printout reflects
/// what actually persisted rather than the submitted draft.
pub fn handle_edit(args: &EditArgs, data_dir: &Path) -> Result<()> {
    let id = NoteId::from(args.id);
    let mut notebook = open_notebook(data_dir)?;

    if !notebook.begin_edit(id) {
        bail!("no note with id {}", args.id);
    }

    let mut draft = notebook.draft().clone();
    if let Some(title) = &args.title {
        draft.title = title.clone();
    }
    if let Some(content) = &args.content {
        draft.content = content.clone();
    }
    // The library treats an invalid draft as a silent no-op; at the CLI
    // boundary that is a usage error instead.
    if draft.title.trim().is_empty() {
        bail!("title cannot be empty");
    }
    if draft.content.trim().is_empty() {
        bail!("content cannot be empty");
    }
    notebook.set_draft(draft.title, draft.content);

    notebook.commit().with_context(|| "failed to save note")?;

    let note = notebook.find(id).context("edited note not found")?;
    println!("Saved: {}", note);
    println!();
    println!("{}", note.content);

    Ok(())
}
