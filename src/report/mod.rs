//! Report rendering.
//!
//! Turns a finished [`AnalysisReport`](crate::analyzer::AnalysisReport)
//! into the persisted text artifact: frequency table with per-digit
//! deviations, one section per statistical test, and the overall
//! conclusion.

mod render;

pub use render::render;
