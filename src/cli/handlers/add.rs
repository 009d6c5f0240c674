//! Add note command handler.

use anyhow::{Context, Result, bail};
use std::path::Path;

use super::open_notebook;
use crate::cli::AddArgs;

pub fn handle_add(args: &AddArgs, data_dir: &Path) -> Result<()> {
    // The library treats an invalid draft as a silent no-op; at the CLI
    // boundary that is a usage error instead.
    if args.title.trim().is_empty() {
        bail!("title cannot be empty");
    }
    if args.content.trim().is_empty() {
        bail!("content cannot be empty");
    }

    let mut notebook = open_notebook(data_dir)?;
    notebook.set_draft(&args.title, &args.content);

    let id = notebook
        .commit()
        .with_context(|| "failed to save note")?
        .context("note was not added")?;

    let note = notebook.find(id).context("added note not found")?;
    println!("Added: {}", note);

    Ok(())
}
