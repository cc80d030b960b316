//! Sequence analysis orchestration.
//!
//! The analyzer drives the two passes over an input file, runs the
//! four statistical tests, and assembles the final report. Within one
//! analysis the order is fixed: the frequency pass completes first,
//! then the incremental pass, and only then are the tests computed.

mod batch;

pub use batch::{run_batch, BatchOutcome};

use crate::accumulator::DigitAccumulator;
use crate::analysis::{DerivativeTest, EntropyTest, RunsTest, UniformityTest};
use crate::report;
use crate::stream::{ConfigError, DigitCounts, DigitStream, FileConfig};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that abort a single analysis.
///
/// Statistical degeneracies are not errors; only structural failures
/// (unreadable input, no digits at all) surface here.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Stream(#[from] crate::stream::StreamError),
    #[error("no valid digits found in {path}")]
    NoDigits { path: PathBuf },
    #[error("failed to write report to {path}: {source}")]
    ReportWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Overall verdict derived from the test tally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conclusion {
    /// All four tests passed.
    StrongRandomness,
    /// At least two tests passed.
    MinorAnomalies,
    /// Fewer than two tests passed.
    FailsRequirement,
}

impl Conclusion {
    /// Classifies a pass tally out of four.
    pub fn from_tally(tests_passed: u8) -> Self {
        match tests_passed {
            4 => Self::StrongRandomness,
            2..=3 => Self::MinorAnomalies,
            _ => Self::FailsRequirement,
        }
    }
}

impl std::fmt::Display for Conclusion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::StrongRandomness => "sequence exhibits strong randomness",
            Self::MinorAnomalies => "sequence exhibits randomness with minor anomalies",
            Self::FailsRequirement => "sequence fails the randomness requirement",
        };
        f.write_str(text)
    }
}

/// Completed analysis of one input file.
///
/// Assembled once per analysis and never mutated afterwards; the
/// report renderer consumes it read-only.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    /// Analyzed input path.
    pub input: PathBuf,
    /// SHA-256 digest of the raw input bytes.
    pub digest: String,
    /// Digit frequency table from the first pass.
    pub counts: DigitCounts,
    /// Total digits analyzed.
    pub length: u64,
    /// Mean digit value.
    pub mean: f64,
    /// Uncentered total variance from the incremental pass.
    pub total_variance: f64,
    /// Digit-uniformity chi-square test.
    pub uniformity: UniformityTest,
    /// Runs test.
    pub runs: RunsTest,
    /// Approximate-entropy test.
    pub entropy: EntropyTest,
    /// Binary-derivative test.
    pub derivative: DerivativeTest,
    /// How many of the four tests passed.
    pub tests_passed: u8,
    /// Overall verdict.
    pub conclusion: Conclusion,
    /// Significance level the verdicts were judged against.
    pub significance_level: f64,
}

/// Runs the full analysis pipeline over digit files.
pub struct SequenceAnalyzer {
    config: FileConfig,
}

impl SequenceAnalyzer {
    /// Creates an analyzer after validating the configuration.
    pub fn new(config: FileConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &FileConfig {
        &self.config
    }

    /// Analyzes one input file and returns the finished report.
    pub fn analyze(&self, input: &Path) -> Result<AnalysisReport, AnalysisError> {
        let stream = DigitStream::new(input, self.config.stream.chunk_size);

        tracing::info!(path = %input.display(), "starting frequency pass");
        let counts = DigitCounts::collect_from(stream.digits()?)?;
        if counts.total() == 0 {
            return Err(AnalysisError::NoDigits {
                path: input.to_path_buf(),
            });
        }
        tracing::info!(digits = counts.total(), "frequency pass complete");

        tracing::info!("starting incremental pass");
        let mut accumulator = DigitAccumulator::new(&self.config.tests);
        for digit in stream.digits()? {
            accumulator.update(digit?);
        }
        let summary = accumulator.finalize();

        let tests = &self.config.tests;
        let alpha = tests.significance_level;

        let uniformity = UniformityTest::evaluate(&counts, alpha);
        let runs = RunsTest::evaluate(&counts, summary.runs, alpha);
        let entropy = EntropyTest::evaluate(
            &summary.window,
            tests.pattern_length,
            tests.entropy_min_samples,
            alpha,
        );
        let derivative =
            DerivativeTest::evaluate(&summary.derivatives, tests.derivative_min_total, alpha);

        let tests_passed = [
            uniformity.result.passed,
            runs.result.passed,
            entropy.result.passed,
            derivative.combined.passed,
        ]
        .iter()
        .filter(|&&passed| passed)
        .count() as u8;
        let conclusion = Conclusion::from_tally(tests_passed);

        tracing::info!(tests_passed, %conclusion, "analysis complete");

        Ok(AnalysisReport {
            input: input.to_path_buf(),
            digest: stream.digest()?,
            counts,
            length: summary.count,
            mean: summary.mean,
            total_variance: summary.total_variance,
            uniformity,
            runs,
            entropy,
            derivative,
            tests_passed,
            conclusion,
            significance_level: alpha,
        })
    }

    /// Analyzes one input file and persists the rendered report.
    ///
    /// Nothing is written when the analysis itself fails.
    pub fn analyze_to_file(
        &self,
        input: &Path,
        output: &Path,
    ) -> Result<AnalysisReport, AnalysisError> {
        let analysis = self.analyze(input)?;
        std::fs::write(output, report::render(&analysis)).map_err(|e| {
            AnalysisError::ReportWrite {
                path: output.to_path_buf(),
                source: e,
            }
        })?;
        tracing::info!(path = %output.display(), "report written");
        Ok(analysis)
    }
}

impl Default for SequenceAnalyzer {
    fn default() -> Self {
        Self {
            config: FileConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_digits(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_missing_file_fails() {
        let analyzer = SequenceAnalyzer::default();
        let result = analyzer.analyze(Path::new("/nonexistent/key.txt"));
        assert!(matches!(result, Err(AnalysisError::Stream(_))));
    }

    #[test]
    fn test_no_digits_fails() {
        let analyzer = SequenceAnalyzer::default();
        let file = write_digits("only letters and spaces\n");
        let result = analyzer.analyze(file.path());
        assert!(matches!(result, Err(AnalysisError::NoDigits { .. })));
    }

    #[test]
    fn test_all_zeros_sequence() {
        let analyzer = SequenceAnalyzer::default();
        let file = write_digits(&"0".repeat(10_000));
        let analysis = analyzer.analyze(file.path()).unwrap();

        assert_eq!(analysis.length, 10_000);
        assert_eq!(analysis.runs.observed, 1);
        // Maximally non-uniform digits and a derivative table pinned
        // to a single symbol.
        assert!(analysis.uniformity.result.p_value < 1e-10);
        assert!(!analysis.derivative.combined.passed);
        // Runs and entropy degrade to their conservative defaults, so
        // the verdict lands on minor anomalies rather than strong.
        assert_ne!(analysis.conclusion, Conclusion::StrongRandomness);
        assert_eq!(analysis.conclusion, Conclusion::MinorAnomalies);
    }

    #[test]
    fn test_cyclic_sequence_flagged_as_patterned() {
        let analyzer = SequenceAnalyzer::default();
        let digits: String = (0..10_000).map(|i| char::from(b'0' + (i % 10) as u8)).collect();
        let file = write_digits(&digits);
        let analysis = analyzer.analyze(file.path()).unwrap();

        // Perfect uniformity, but every adjacent pair differs and the
        // derivatives repeat a short cycle.
        assert!(analysis.uniformity.result.passed);
        assert_eq!(analysis.runs.observed, 10_000);
        assert!(!analysis.runs.result.passed);
        assert!(!analysis.derivative.combined.passed);
    }

    #[test]
    fn test_short_input_degrades_without_crashing() {
        let analyzer = SequenceAnalyzer::default();
        let file = write_digits("0123456789");
        let analysis = analyzer.analyze(file.path()).unwrap();

        assert_eq!(analysis.length, 10);
        assert_eq!(analysis.entropy.value, 0.0);
        assert_eq!(analysis.entropy.result.p_value, 1.0);
        assert!(analysis.derivative.level_p_values.is_empty());
        assert_eq!(analysis.derivative.combined.p_value, 1.0);
    }

    #[test]
    fn test_conclusion_tally() {
        assert_eq!(Conclusion::from_tally(4), Conclusion::StrongRandomness);
        assert_eq!(Conclusion::from_tally(3), Conclusion::MinorAnomalies);
        assert_eq!(Conclusion::from_tally(2), Conclusion::MinorAnomalies);
        assert_eq!(Conclusion::from_tally(1), Conclusion::FailsRequirement);
        assert_eq!(Conclusion::from_tally(0), Conclusion::FailsRequirement);
    }

    #[test]
    fn test_analyze_to_file_writes_report() {
        let analyzer = SequenceAnalyzer::default();
        let file = write_digits(&"0123456789".repeat(100));
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("report.txt");

        analyzer.analyze_to_file(file.path(), &output).unwrap();

        let text = std::fs::read_to_string(&output).unwrap();
        assert!(text.contains("Digit Sequence Randomness Analysis"));
    }
}
