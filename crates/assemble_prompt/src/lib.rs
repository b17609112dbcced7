use todo_context_extractor::TodoFinding;

/// Closing sentence appended after the captured context.
pub const FIXED_INSTRUCTION: &str = "Generate an implementation suggestion.";

/// Public API: builds the prompt for one finding.
///
/// Pure and deterministic; the same finding always yields the same bytes.
pub fn build_prompt(finding: &TodoFinding) -> String {
    format!(
        "For the TODO: '{}' in file {}, considering the context:\n{}\n{}",
        finding.marker_text,
        finding.file_path.display(),
        finding.context_lines.join("\n"),
        FIXED_INSTRUCTION
    )
}
