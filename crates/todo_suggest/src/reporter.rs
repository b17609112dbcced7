// crates/todo_suggest/src/reporter.rs

use std::io::{self, Write};

use suggestion_generator::ApiError;

const SEPARATOR: &str = "------";

/// Writes one prompt and its suggestion (or the failure in its place).
pub fn report(
    out: &mut dyn Write,
    prompt: &str,
    suggestion: &Result<String, ApiError>,
) -> io::Result<()> {
    writeln!(out, "Prompt:\n {}\n", prompt)?;
    match suggestion {
        Ok(text) => writeln!(out, "Generated Snippet:\n {}", text)?,
        Err(err) => writeln!(out, "Generated Snippet:\n Error generating suggestion: {}", err)?,
    }
    writeln!(out, "{}\n", SEPARATOR)?;
    out.flush()
}
