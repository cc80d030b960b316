//! Single-pass incremental statistics over a digit stream.
//!
//! The accumulator consumes digits one at a time in file order and
//! maintains everything the downstream tests need in bounded memory:
//! running sums, a run counter, a sliding window for the entropy
//! estimator, and the leveled XOR-derivative table.

mod derivative;
mod window;

pub use derivative::DerivativeTable;
pub use window::SlidingWindow;

use crate::stream::TestsConfig;

/// Incremental statistics accumulator.
///
/// Call [`update`](DigitAccumulator::update) once per digit in stream
/// order, then [`finalize`](DigitAccumulator::finalize) to obtain the
/// summary consumed by the statistical tests.
#[derive(Debug, Clone)]
pub struct DigitAccumulator {
    count: u64,
    sum: u64,
    sum_sq: u64,
    prev: Option<u8>,
    runs: u64,
    window: SlidingWindow,
    derivatives: DerivativeTable,
}

/// Aggregated state of one full pass, produced by `finalize`.
///
/// Feeds the approximate-entropy estimator (window snapshot) and the
/// binary-derivative analyzer (derivative table).
#[derive(Debug, Clone)]
pub struct StreamSummary {
    /// Total digits consumed.
    pub count: u64,
    /// Mean digit value, 0 for an empty stream.
    pub mean: f64,
    /// Uncentered total variance: sum of squares minus n times mean squared.
    pub total_variance: f64,
    /// Number of runs (maximal subsequences of an unchanged digit).
    pub runs: u64,
    /// Final sliding-window contents, oldest digit first.
    pub window: Vec<u8>,
    /// Leveled XOR-derivative frequency table.
    pub derivatives: DerivativeTable,
}

impl DigitAccumulator {
    /// Creates an accumulator sized from the test configuration.
    pub fn new(config: &TestsConfig) -> Self {
        Self {
            count: 0,
            sum: 0,
            sum_sq: 0,
            prev: None,
            // The first digit trivially opens a run.
            runs: 1,
            window: SlidingWindow::new(config.window_capacity),
            derivatives: DerivativeTable::new(config.derivative_levels),
        }
    }

    /// Consumes one digit in stream order.
    pub fn update(&mut self, digit: u8) {
        debug_assert!(digit < 10);

        self.count += 1;
        self.sum += u64::from(digit);
        self.sum_sq += u64::from(digit) * u64::from(digit);

        if let Some(prev) = self.prev {
            if prev != digit {
                self.runs += 1;
            }
            // Second digit onward: derivative at position-derived level.
            self.derivatives.record(self.count - 2, prev ^ digit);
        }
        self.prev = Some(digit);

        self.window.push(digit);
    }

    /// Number of digits consumed so far.
    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Finishes the pass and returns the aggregated summary.
    pub fn finalize(self) -> StreamSummary {
        let n = self.count;
        let mean = if n > 0 { self.sum as f64 / n as f64 } else { 0.0 };
        let total_variance = self.sum_sq as f64 - n as f64 * mean * mean;

        tracing::debug!(digits = n, runs = self.runs, "accumulator finalized");

        StreamSummary {
            count: n,
            mean,
            total_variance,
            runs: self.runs,
            window: self.window.snapshot(),
            derivatives: self.derivatives,
        }
    }
}
