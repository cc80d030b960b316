//! Batch analysis over a set of input files.
//!
//! One report is produced per input. A missing or digit-free input is
//! logged and skipped; it never aborts the rest of the batch.

use super::{AnalysisError, SequenceAnalyzer};
use std::path::{Path, PathBuf};

/// Per-file outcomes of one batch run.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Inputs analyzed successfully, with their report paths.
    pub analyzed: Vec<(PathBuf, PathBuf)>,
    /// Inputs skipped, with the reason.
    pub skipped: Vec<(PathBuf, String)>,
}

impl BatchOutcome {
    /// Total number of inputs processed.
    pub fn total(&self) -> usize {
        self.analyzed.len() + self.skipped.len()
    }
}

/// Analyzes every input, writing `<stem>-report.txt` into `report_dir`.
///
/// Only a failure to create the report directory is fatal; per-file
/// failures are collected in the outcome.
pub fn run_batch(
    analyzer: &SequenceAnalyzer,
    inputs: &[PathBuf],
    report_dir: &Path,
) -> Result<BatchOutcome, AnalysisError> {
    std::fs::create_dir_all(report_dir).map_err(|e| AnalysisError::ReportWrite {
        path: report_dir.to_path_buf(),
        source: e,
    })?;

    let mut outcome = BatchOutcome::default();

    for input in inputs {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "input".to_string());
        let output = report_dir.join(format!("{stem}-report.txt"));

        match analyzer.analyze_to_file(input, &output) {
            Ok(analysis) => {
                tracing::info!(
                    input = %input.display(),
                    conclusion = %analysis.conclusion,
                    "batch item complete"
                );
                outcome.analyzed.push((input.clone(), output));
            }
            Err(e) => {
                tracing::warn!(input = %input.display(), error = %e, "batch item skipped");
                outcome.skipped.push((input.clone(), e.to_string()));
            }
        }
    }

    tracing::info!(
        analyzed = outcome.analyzed.len(),
        skipped = outcome.skipped.len(),
        "batch complete"
    );
    Ok(outcome)
}
