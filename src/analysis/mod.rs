//! Statistical randomness tests.
//!
//! Each test consumes aggregated state from the two stream passes and
//! produces a [`TestResult`]. Tests never fail hard: degenerate input
//! (zero variance, too few samples, empty levels) degrades to the
//! conservative "no significant finding" outcome so the report always
//! renders.

mod combine;
mod derivative;
mod distributions;
mod entropy;
mod result;
mod runs;
mod uniformity;

pub use combine::fisher_combine;
pub use derivative::DerivativeTest;
pub use entropy::EntropyTest;
pub use result::TestResult;
pub use runs::RunsTest;
pub use uniformity::UniformityTest;
