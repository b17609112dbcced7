// crates/todo_context_extractor/src/lib.rs

use std::collections::VecDeque;
use std::fs;
use std::io;
use std::iter::Enumerate;
use std::path::{Path, PathBuf};
use std::str::Lines;
use thiserror::Error;
use todo_marker::{is_endtodo_line, is_todo_line};

/// One TODO together with the lines captured around it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TodoFinding {
    pub file_path: PathBuf,
    /// 1-based line number of the TODO line.
    pub line_number: usize,
    /// The TODO line with surrounding whitespace trimmed.
    pub marker_text: String,
    /// Lookback lines, the TODO line, then everything through `ENDTODO` or end of file.
    pub context_lines: Vec<String>,
}

#[derive(Debug, Error)]
#[error("failed to read {}: {source}", .path.display())]
pub struct FileReadError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Scans `content` top to bottom and lazily yields one finding per TODO window.
///
/// A window holds up to `before_lines` preceding lines, the TODO line and
/// every following line up to and including the first `ENDTODO` line (or the
/// end of the content). A TODO met while a window is still open is merged
/// into that window rather than starting a new finding.
pub fn extract_todos<'a>(file_path: &Path, content: &'a str, before_lines: usize) -> TodoFindings<'a> {
    TodoFindings {
        file_path: file_path.to_path_buf(),
        lines: content.lines().enumerate(),
        before_lines,
        lookback: VecDeque::new(),
    }
}

/// Reads the file and collects its findings. Read failures (permissions,
/// non UTF-8 content) come back as [`FileReadError`].
pub fn scan_file(file_path: &Path, before_lines: usize) -> Result<Vec<TodoFinding>, FileReadError> {
    let content = fs::read_to_string(file_path).map_err(|source| FileReadError {
        path: file_path.to_path_buf(),
        source,
    })?;
    let findings: Vec<TodoFinding> = extract_todos(file_path, &content, before_lines).collect();
    log::debug!("{}: {} TODO(s)", file_path.display(), findings.len());
    Ok(findings)
}

/// Iterator returned by [`extract_todos`].
pub struct TodoFindings<'a> {
    file_path: PathBuf,
    lines: Enumerate<Lines<'a>>,
    before_lines: usize,
    lookback: VecDeque<&'a str>,
}

impl<'a> TodoFindings<'a> {
    fn remember(&mut self, line: &'a str) {
        if self.before_lines == 0 {
            return;
        }
        if self.lookback.len() == self.before_lines {
            self.lookback.pop_front();
        }
        self.lookback.push_back(line);
    }

    fn capture_window(&mut self, todo_line: &'a str) -> Vec<String> {
        let mut context: Vec<String> = self.lookback.iter().map(|l| l.to_string()).collect();
        context.push(todo_line.to_string());
        self.remember(todo_line);

        if is_endtodo_line(todo_line) {
            return context;
        }
        while let Some((_, line)) = self.lines.next() {
            context.push(line.to_string());
            self.remember(line);
            if is_endtodo_line(line) {
                break;
            }
        }
        context
    }
}

impl<'a> Iterator for TodoFindings<'a> {
    type Item = TodoFinding;

    fn next(&mut self) -> Option<TodoFinding> {
        while let Some((idx, line)) = self.lines.next() {
            if !is_todo_line(line) {
                self.remember(line);
                continue;
            }
            let context_lines = self.capture_window(line);
            return Some(TodoFinding {
                file_path: self.file_path.clone(),
                line_number: idx + 1,
                marker_text: line.trim().to_string(),
                context_lines,
            });
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn findings(content: &str, before_lines: usize) -> Vec<TodoFinding> {
        extract_todos(Path::new("main.py"), content, before_lines).collect()
    }

    #[test]
    fn test_no_todo_no_findings() {
        assert!(findings("def f():\n    return 1\n", 2).is_empty());
    }

    #[test]
    fn test_empty_content() {
        assert!(findings("", 2).is_empty());
    }

    #[test]
    fn test_window_ends_at_endtodo() {
        let content = "def f():\n    pass\n# TODO: fix\n# ENDTODO\n";
        let result = findings(content, 1);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].line_number, 3);
        assert_eq!(result[0].marker_text, "# TODO: fix");
        assert_eq!(
            result[0].context_lines,
            vec!["    pass", "# TODO: fix", "# ENDTODO"]
        );
    }

    #[test]
    fn test_window_runs_to_end_of_file() {
        let content = "a\nb\n// TODO: rest\nc\nd";
        let result = findings(content, 2);
        assert_eq!(result[0].context_lines, vec!["a", "b", "// TODO: rest", "c", "d"]);
    }

    #[test]
    fn test_before_lines_zero_starts_at_todo() {
        let content = "a\nb\n// TODO: here\n// ENDTODO";
        let result = findings(content, 0);
        assert_eq!(result[0].context_lines, vec!["// TODO: here", "// ENDTODO"]);
    }

    #[test]
    fn test_lookback_clamped_at_file_start() {
        let content = "first\n# TODO: early\n# ENDTODO";
        let result = findings(content, 5);
        assert_eq!(result[0].context_lines, vec!["first", "# TODO: early", "# ENDTODO"]);
    }

    #[test]
    fn test_nested_todo_merges_into_open_window() {
        let content = "x\n# TODO: outer\n# TODO: inner\ny\n# ENDTODO\nz";
        let result = findings(content, 1);
        assert_eq!(result.len(), 1);
        assert_eq!(
            result[0].context_lines,
            vec!["x", "# TODO: outer", "# TODO: inner", "y", "# ENDTODO"]
        );
    }

    #[test]
    fn test_consecutive_windows_share_lookback() {
        let content = "a\n# TODO: one\n# ENDTODO\n# TODO: two\nb\n# ENDTODO";
        let result = findings(content, 1);
        assert_eq!(result.len(), 2);
        assert_eq!(result[1].line_number, 4);
        assert_eq!(
            result[1].context_lines,
            vec!["# ENDTODO", "# TODO: two", "b", "# ENDTODO"]
        );
    }

    #[test]
    fn test_todo_and_endtodo_on_same_line() {
        let content = "a\n// TODO: tiny ENDTODO\nb";
        let result = findings(content, 1);
        assert_eq!(result[0].context_lines, vec!["a", "// TODO: tiny ENDTODO"]);
    }

    #[test]
    fn test_stray_endtodo_is_a_one_line_window() {
        let result = findings("x\n# ENDTODO stray\ny\n", 1);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].line_number, 2);
        assert_eq!(result[0].marker_text, "# ENDTODO stray");
        assert_eq!(result[0].context_lines, vec!["x", "# ENDTODO stray"]);
    }

    #[test]
    fn test_endtodo_inside_window_only_closes_it() {
        let result = findings("# TODO: a\nb\n# ENDTODO\nc\n", 0);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].context_lines, vec!["# TODO: a", "b", "# ENDTODO"]);
    }

    #[test]
    fn test_marker_text_is_trimmed() {
        let content = "    // TODO: indented   \n";
        let result = findings(content, 0);
        assert_eq!(result[0].marker_text, "// TODO: indented");
        assert_eq!(result[0].context_lines, vec!["    // TODO: indented   "]);
    }
}
