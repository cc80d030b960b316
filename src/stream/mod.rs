//! Digit input and analysis configuration.
//!
//! This module provides chunked, restartable access to digit files and
//! the configuration surface of the analyzer. Input files are treated
//! as opaque byte sequences from which only ASCII digits are taken.

mod config;
mod counts;
mod reader;

pub use config::{ConfigError, FileConfig, OutputConfig, StreamConfig, TestsConfig};
pub use counts::DigitCounts;
pub use reader::{DigitStream, Digits, StreamError};
