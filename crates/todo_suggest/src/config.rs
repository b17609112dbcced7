// crates/todo_suggest/src/config.rs

use std::collections::BTreeSet;
use std::path::PathBuf;

use find_todo_files::{default_extensions, normalize_extensions, WalkError};
use todo_marker::DEFAULT_BEFORE_LINES;

/// What to scan and how much context to capture. Built once from the CLI and
/// read-only for the rest of the run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanConfig {
    pub root_directory: PathBuf,
    pub before_lines: usize,
    /// Extensions without the leading dot.
    pub allowed_extensions: BTreeSet<String>,
}

impl ScanConfig {
    pub fn new(root_directory: impl Into<PathBuf>) -> Self {
        Self {
            root_directory: root_directory.into(),
            before_lines: DEFAULT_BEFORE_LINES,
            allowed_extensions: default_extensions(),
        }
    }

    pub fn with_before_lines(mut self, before_lines: usize) -> Self {
        self.before_lines = before_lines;
        self
    }

    /// Replaces the allow-list. An empty override keeps the defaults.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let normalized = normalize_extensions(extensions);
        if !normalized.is_empty() {
            self.allowed_extensions = normalized;
        }
        self
    }

    /// Fails when the root is missing or is not a directory.
    pub fn validate(&self) -> Result<(), WalkError> {
        if self.root_directory.is_dir() {
            Ok(())
        } else {
            Err(WalkError::PathNotFound(self.root_directory.clone()))
        }
    }
}
