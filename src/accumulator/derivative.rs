//! Leveled frequency table of XOR derivatives.
//!
//! The derivative of two temporally adjacent digits is their bitwise
//! XOR, a proxy symbol for periodicity testing. Derivatives are
//! bucketed by level, where the level is derived from stream position
//! and capped at the last level, so the table stays bounded while the
//! final level keeps accumulating for the rest of the stream.

use std::collections::HashMap;

/// Per-level occurrence counts of XOR-derivative values.
///
/// A fixed maximum number of levels is allocated up front conceptually;
/// level maps are populated lazily as stream positions reach them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivativeTable {
    max_levels: usize,
    levels: Vec<HashMap<u8, u64>>,
}

impl DerivativeTable {
    /// Creates a table bounded to `max_levels` levels (minimum 1).
    pub fn new(max_levels: usize) -> Self {
        let max_levels = max_levels.max(1);
        Self {
            max_levels,
            levels: Vec::with_capacity(max_levels),
        }
    }

    /// Records one occurrence of a derivative value.
    ///
    /// `level` is the raw position-derived index; values past the last
    /// level are folded into it.
    pub fn record(&mut self, level: u64, value: u8) {
        let index = level.min(self.max_levels as u64 - 1) as usize;
        while self.levels.len() <= index {
            self.levels.push(HashMap::new());
        }
        *self.levels[index].entry(value).or_insert(0) += 1;
    }

    /// The populated level maps, in level order.
    #[inline]
    pub fn levels(&self) -> &[HashMap<u8, u64>] {
        &self.levels
    }

    /// The configured maximum level count.
    #[inline]
    pub fn max_levels(&self) -> usize {
        self.max_levels
    }

    /// Total tally of one level, zero if unpopulated.
    pub fn level_total(&self, level: usize) -> u64 {
        self.levels
            .get(level)
            .map(|m| m.values().sum())
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lazy_population() {
        let mut table = DerivativeTable::new(3);
        assert!(table.levels().is_empty());

        table.record(0, 5);
        assert_eq!(table.levels().len(), 1);

        table.record(2, 1);
        assert_eq!(table.levels().len(), 3);
        assert_eq!(table.level_total(1), 0);
    }

    #[test]
    fn test_deep_positions_fold_into_last_level() {
        let mut table = DerivativeTable::new(3);
        for level in 0..1000u64 {
            table.record(level, 4);
        }

        assert_eq!(table.levels().len(), 3);
        assert_eq!(table.level_total(0), 1);
        assert_eq!(table.level_total(1), 1);
        assert_eq!(table.level_total(2), 998);
    }

    #[test]
    fn test_value_counts() {
        let mut table = DerivativeTable::new(1);
        table.record(0, 9);
        table.record(0, 9);
        table.record(0, 15);

        assert_eq!(table.levels()[0].get(&9), Some(&2));
        assert_eq!(table.levels()[0].get(&15), Some(&1));
        assert_eq!(table.level_total(0), 3);
    }
}
