//! List command handler.

use anyhow::Result;
use std::path::Path;

use super::{open_notebook, truncate_str};
use crate::cli::ListArgs;
use crate::cli::output::{NoteListing, Output, OutputFormat};

pub fn handle_list(args: &ListArgs, data_dir: &Path) -> Result<()> {
    let notebook = open_notebook(data_dir)?;
    let notes = notebook.notes();

    match args.format {
        OutputFormat::Human => {
            if notes.is_empty() {
                println!("No notes.");
            } else {
                println!("{:<15}  {:<30}  {}", "ID", "Title", "Content");
                println!(
                    "{:<15}  {:<30}  {}",
                    "---------------",
                    "------------------------------",
                    "----------------------------------------"
                );

                for note in notes {
                    println!(
                        "{:<15}  {:<30}  {}",
                        note.id,
                        truncate_str(&note.title, 30),
                        truncate_str(&note.content, 40)
                    );
                }

                println!();
                println!("{} note(s)", notes.len());
            }
        }
        OutputFormat::Json => {
            let listings: Vec<NoteListing> = notes
                .iter()
                .map(|note| NoteListing {
                    id: note.id.as_i64(),
                    title: note.title.clone(),
                    content: note.content.clone(),
                })
                .collect();
            let output = Output::new(listings);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
