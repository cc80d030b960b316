//! Digit Sequence Randomness Analysis Library
//!
//! A streaming statistical testing engine for very long decimal digit
//! sequences (millions to billions of digits), such as pseudo-random
//! key material produced elsewhere. The engine decides whether a
//! sequence is statistically indistinguishable from uniform random
//! digits.
//!
//! # Architecture
//!
//! The analysis makes two bounded-memory passes over the input:
//!
//! ```text
//! stream ─┬─ frequency pass ──→ digit counts ──→ uniformity / runs tests
//!         └─ incremental pass → accumulator ──→ entropy / derivative tests
//!                                                      ↓
//!                                            report (verdict + text)
//! ```
//!
//! # Design Principles
//!
//! - **Bounded memory**: inputs are streamed in chunks; no component
//!   ever holds the whole sequence
//! - **Degrade, don't raise**: degenerate statistics produce
//!   conservative default outcomes; only I/O failures and digit-free
//!   input are errors
//! - **Deterministic output**: the same input always renders the same
//!   report, byte for byte
//! - **No cryptographic claims**: these are statistical sanity tests,
//!   not a certification suite
//!
//! # Example
//!
//! ```no_run
//! use digit_randomness::{SequenceAnalyzer, report};
//!
//! let analyzer = SequenceAnalyzer::default();
//! let analysis = analyzer.analyze("keys/key0.txt".as_ref()).unwrap();
//!
//! println!("{}", report::render(&analysis));
//! println!("verdict: {}", analysis.conclusion);
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod accumulator;
pub mod analysis;
pub mod analyzer;
pub mod report;
pub mod stream;

// Re-export commonly used types at crate root
pub use accumulator::{DigitAccumulator, StreamSummary};
pub use analysis::{DerivativeTest, EntropyTest, RunsTest, TestResult, UniformityTest};
pub use analyzer::{AnalysisError, AnalysisReport, Conclusion, SequenceAnalyzer};
pub use stream::{DigitCounts, DigitStream, FileConfig, StreamConfig, TestsConfig};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
