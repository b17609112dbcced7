// crates/find_todo_files/src/lib.rs

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Debug, Error)]
pub enum WalkError {
    #[error("project directory {} does not exist or is not a directory", .0.display())]
    PathNotFound(PathBuf),
}

/// Recursively enumerates the files under `root` whose extension is in
/// `allowed_extensions` (stored without the leading dot).
///
/// The root must be a directory and is checked up front; everything after that is lazy. Entries that
/// cannot be read are logged and skipped so one bad directory does not abort
/// the scan. Siblings are visited in file-name order.
pub fn walk_source_files(
    root: &Path,
    allowed_extensions: &BTreeSet<String>,
) -> Result<SourceFiles, WalkError> {
    if !root.is_dir() {
        return Err(WalkError::PathNotFound(root.to_path_buf()));
    }
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter();
    Ok(SourceFiles {
        walker,
        allowed_extensions: allowed_extensions.clone(),
    })
}

/// Lazy sequence of matching file paths produced by [`walk_source_files`].
pub struct SourceFiles {
    walker: walkdir::IntoIter,
    allowed_extensions: BTreeSet<String>,
}

impl Iterator for SourceFiles {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        loop {
            let entry = match self.walker.next()? {
                Ok(entry) => entry,
                Err(err) => {
                    log::warn!("Skipping unreadable entry: {}", err);
                    continue;
                }
            };
            // Follows symlinks to files; symlinked directories are not descended.
            if !entry.path().is_file() {
                continue;
            }
            if has_allowed_extension(entry.path(), &self.allowed_extensions) {
                return Some(entry.into_path());
            }
        }
    }
}

/// Checks the path's extension against the allow-list. Files without an
/// extension never match.
pub fn has_allowed_extension(path: &Path, allowed_extensions: &BTreeSet<String>) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| allowed_extensions.contains(ext))
        .unwrap_or(false)
}

/// Turns user supplied extensions (`".py"`, `"py"`, `" .h "`) into the stored
/// form without the leading dot. Empty entries are dropped.
pub fn normalize_extensions<I, S>(extensions: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    extensions
        .into_iter()
        .map(|ext| ext.as_ref().trim().trim_start_matches('.').to_string())
        .filter(|ext| !ext.is_empty())
        .collect()
}

/// The allow-list used when nothing is configured.
pub fn default_extensions() -> BTreeSet<String> {
    normalize_extensions(todo_marker::DEFAULT_EXTENSIONS)
}
