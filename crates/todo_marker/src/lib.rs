// crates/todo_marker/src/lib.rs

//! Marker strings and defaults shared by every step of the scanner.

/// Substring that opens a context window.
pub const TODO_MARKER: &str = "TODO";

/// Substring that closes the window opened by a [`TODO_MARKER`] line.
pub const ENDTODO_MARKER: &str = "ENDTODO";

/// Extensions scanned when the user does not pass `--extensions`.
pub const DEFAULT_EXTENSIONS: &[&str] = &["py", "cpp", "h", "java"];

/// Number of lines captured above a TODO by default.
pub const DEFAULT_BEFORE_LINES: usize = 2;

/// True when the line opens a context window. `ENDTODO` contains the marker,
/// so a stray closing line opens (and closes) a window of its own.
pub fn is_todo_line(line: &str) -> bool {
    line.contains(TODO_MARKER)
}

/// True when the line closes a context window.
pub fn is_endtodo_line(line: &str) -> bool {
    line.contains(ENDTODO_MARKER)
}
