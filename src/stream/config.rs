//! Analysis configuration.
//!
//! All test parameters are explicit configuration rather than
//! buried constants. In particular the entropy window capacity and
//! the entropy sample-size threshold are independent settings, so
//! their relationship can be tuned without touching the algorithms.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for the digit stream reader.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamConfig {
    /// Bytes read from the input file per chunk.
    pub chunk_size: usize,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            chunk_size: 1_000_000, // 1MB per read
        }
    }
}

/// Configuration for the statistical tests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestsConfig {
    /// Capacity of the sliding window sampled for approximate entropy.
    pub window_capacity: usize,
    /// Pattern length m for the approximate-entropy estimator.
    pub pattern_length: usize,
    /// Minimum window length for a trustworthy entropy estimate.
    pub entropy_min_samples: usize,
    /// Number of binary-derivative levels tracked.
    pub derivative_levels: usize,
    /// Minimum per-level tally before a level enters the chi-square test.
    pub derivative_min_total: u64,
    /// Significance level: a test passes when its p-value exceeds this.
    pub significance_level: f64,
}

impl Default for TestsConfig {
    fn default() -> Self {
        Self {
            window_capacity: 5,
            pattern_length: 3,
            entropy_min_samples: 100,
            derivative_levels: 3,
            derivative_min_total: 100,
            significance_level: 0.05,
        }
    }
}

/// Output configuration for the batch driver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory that receives one report file per analyzed input.
    pub report_dir: std::path::PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            report_dir: "./reports".into(),
        }
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("chunk size must be at least 1 byte")]
    InvalidChunkSize,
    #[error("window capacity must be at least 1")]
    InvalidWindowCapacity,
    #[error("pattern length must be at least 1")]
    InvalidPatternLength,
    #[error("derivative level count must be at least 1")]
    InvalidLevelCount,
    #[error("significance level must lie strictly between 0 and 1")]
    InvalidSignificance,
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    #[error("failed to parse config file: {0}")]
    ParseError(String),
}

impl StreamConfig {
    /// Validates the stream parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chunk_size == 0 {
            return Err(ConfigError::InvalidChunkSize);
        }
        Ok(())
    }
}

impl TestsConfig {
    /// Validates the test parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_capacity == 0 {
            return Err(ConfigError::InvalidWindowCapacity);
        }
        if self.pattern_length == 0 {
            return Err(ConfigError::InvalidPatternLength);
        }
        if self.derivative_levels == 0 {
            return Err(ConfigError::InvalidLevelCount);
        }
        if !(self.significance_level > 0.0 && self.significance_level < 1.0) {
            return Err(ConfigError::InvalidSignificance);
        }
        Ok(())
    }
}

/// Full configuration file format.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub stream: StreamConfig,
    #[serde(default)]
    pub tests: TestsConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        let config: FileConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates all sections.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.stream.validate()?;
        self.tests.validate()?;
        Ok(())
    }
}
