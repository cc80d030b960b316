//! Digit Sequence Randomness Analysis CLI
//!
//! Analyzes digit files for statistical randomness and writes one
//! text report per input.

use clap::{Parser, Subcommand};
use digit_randomness::analyzer::run_batch;
use digit_randomness::{report, FileConfig, SequenceAnalyzer};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "digit-randomness", version, about = "Statistical randomness analysis for digit sequences")]
struct Cli {
    /// Optional TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze a single digit file and write its report.
    Analyze {
        /// Input digit file.
        input: PathBuf,
        /// Report output path.
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Analyze a set of digit files, one report each.
    Batch {
        /// Input digit files.
        inputs: Vec<PathBuf>,
        /// Report directory; falls back to the configured default.
        #[arg(short, long)]
        report_dir: Option<PathBuf>,
    },
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Digit Randomness Analyzer v{}", digit_randomness::VERSION);

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match FileConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load config: {}", e);
                std::process::exit(1);
            }
        },
        None => FileConfig::default(),
    };

    let analyzer = match SequenceAnalyzer::new(config) {
        Ok(analyzer) => analyzer,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    match cli.command {
        Command::Analyze { input, output } => {
            match analyzer.analyze_to_file(&input, &output) {
                Ok(analysis) => {
                    println!("{}", report::render(&analysis));
                    info!(
                        tests_passed = analysis.tests_passed,
                        "report written to {}",
                        output.display()
                    );
                }
                Err(e) => {
                    eprintln!("Analysis failed: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Command::Batch { inputs, report_dir } => {
            if inputs.is_empty() {
                eprintln!("No input files given");
                std::process::exit(1);
            }

            let report_dir =
                report_dir.unwrap_or_else(|| analyzer.config().output.report_dir.clone());

            match run_batch(&analyzer, &inputs, &report_dir) {
                Ok(outcome) => {
                    info!(
                        "Batch finished: {} analyzed, {} skipped",
                        outcome.analyzed.len(),
                        outcome.skipped.len()
                    );
                    for (input, reason) in &outcome.skipped {
                        eprintln!("Skipped {}: {}", input.display(), reason);
                    }
                }
                Err(e) => {
                    eprintln!("Batch failed: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
}
