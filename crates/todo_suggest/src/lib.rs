// crates/todo_suggest/src/lib.rs

use std::io::{self, Write};
use thiserror::Error;

use assemble_prompt::build_prompt;
use find_todo_files::{walk_source_files, WalkError};
use suggestion_generator::{generate_suggestion, CompletionClient};
use todo_context_extractor::scan_file;

pub mod config;
pub mod reporter;

pub use config::ScanConfig;

/// Errors that end a run. Per-file and per-finding failures never get here.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Walk(#[from] WalkError),

    #[error("failed to write report: {0}")]
    Output(#[from] io::Error),
}

/// Counters for one run, logged once the scan completes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub files_scanned: usize,
    pub files_skipped: usize,
    pub findings: usize,
    pub failed_suggestions: usize,
}

/// Walks the project, and for every TODO window builds a prompt, asks the
/// client for a suggestion and reports both to `out`.
///
/// Findings are handled one at a time in traversal order, then line order.
/// Unreadable files are skipped and a failed completion is reported in place
/// of its suggestion; neither stops the scan.
pub fn run(
    config: &ScanConfig,
    client: &dyn CompletionClient,
    out: &mut dyn Write,
) -> Result<RunSummary, RunError> {
    let files = walk_source_files(&config.root_directory, &config.allowed_extensions)?;
    let mut summary = RunSummary::default();

    for path in files {
        let findings = match scan_file(&path, config.before_lines) {
            Ok(findings) => findings,
            Err(err) => {
                log::warn!("Skipping file: {}", err);
                summary.files_skipped += 1;
                continue;
            }
        };
        summary.files_scanned += 1;

        for finding in findings {
            summary.findings += 1;
            let prompt = build_prompt(&finding);
            let suggestion = generate_suggestion(client, &prompt);
            if let Err(err) = &suggestion {
                log::error!(
                    "Completion failed for {}:{}: {}",
                    finding.file_path.display(),
                    finding.line_number,
                    err
                );
                summary.failed_suggestions += 1;
            }
            reporter::report(out, &prompt, &suggestion)?;
        }
    }

    log::info!(
        "Scanned {} file(s), skipped {}, {} TODO(s), {} failed suggestion(s)",
        summary.files_scanned,
        summary.files_skipped,
        summary.findings,
        summary.failed_suggestions
    );
    Ok(summary)
}
