//! Command handlers for the CLI.

mod add;
mod completions;
mod edit;
mod list;
mod rm;
mod show;

use anyhow::{Context, Result};
use std::path::Path;

use crate::notebook::Notebook;
use crate::store::{JsonFileStore, LoadOutcome};

// Re-export public items
pub use add::handle_add;
pub use completions::handle_completions;
pub use edit::handle_edit;
pub use list::handle_list;
pub use rm::handle_rm;
pub use show::handle_show;

// ===========================================
// Shared Utilities
// ===========================================

/// Opens the notebook over a file store rooted at `data_dir`.
///
/// An unreadable slot payload is a stderr warning, not an error: the
/// notebook starts from the default notes in that case.
pub(crate) fn open_notebook(data_dir: &Path) -> Result<Notebook<JsonFileStore>> {
    let store = JsonFileStore::open(data_dir)
        .with_context(|| format!("failed to open note store at {}", data_dir.display()))?;

    let notebook = Notebook::open(store)
        .with_context(|| format!("failed to load notes from {}", data_dir.display()))?;

    if let LoadOutcome::Unparsable(e) = notebook.load_outcome() {
        eprintln!("warning: stored notes are unreadable ({e}); showing the default notes");
    }

    Ok(notebook)
}

/// Truncates a string to a max display width, appending an ellipsis.
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
