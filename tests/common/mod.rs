//! Test harness for end-to-end CLI tests.

// Allow dead code since this is a shared test utility
#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary data directory.
///
/// The directory is cleaned up when the env is dropped. Every command built
/// through [`TestEnv::cmd`] is pinned to it via `--dir`, so tests never touch
/// the user's real notes or config-resolved paths.
pub struct TestEnv {
    _temp_dir: TempDir,
    data_dir: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("failed to create temp directory");
        let data_dir = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            data_dir,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the file backing the `"notes"` slot.
    pub fn slot_path(&self) -> PathBuf {
        self.data_dir.join("notes.json")
    }

    /// Builds a `jot` command pinned to this environment's data directory.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("jot").expect("failed to find jot binary");
        cmd.arg("--dir").arg(&self.data_dir);
        cmd
    }

    /// Writes a raw payload into the notes slot.
    pub fn write_slot(&self, payload: &str) {
        std::fs::write(self.slot_path(), payload).expect("failed to write slot");
    }

    /// Reads the persisted notes collection.
    ///
    /// # Panics
    ///
    /// Panics if the slot file is missing or not a JSON array.
    pub fn persisted_notes(&self) -> Vec<serde_json::Value> {
        let payload = std::fs::read_to_string(self.slot_path()).expect("slot file missing");
        serde_json::from_str(&payload).expect("slot payload is not a JSON array")
    }

    /// Returns the persisted note ids, in collection order.
    pub fn persisted_ids(&self) -> Vec<i64> {
        self.persisted_notes()
            .iter()
            .map(|note| note["id"].as_i64().expect("id is not an integer"))
            .collect()
    }

    /// Finds the persisted id of the note with the given title.
    pub fn id_of(&self, title: &str) -> i64 {
        self.persisted_notes()
            .iter()
            .find(|note| note["title"] == title)
            .and_then(|note| note["id"].as_i64())
            .unwrap_or_else(|| panic!("no persisted note titled '{title}'"))
    }
}
