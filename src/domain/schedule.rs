// ============================================================================
// Period Schedule
// Named compounding periods and the calendar/protocol constants behind them
// ============================================================================

use crate::numeric::{DeriveError, DeriveResult};
use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Calendar / Protocol Constants
// ============================================================================

/// Seconds between consecutive blocks
pub const BLOCK_INTERVAL_SECS: u64 = 3;

/// Blocks per witness scheduling round
pub const BLOCKS_PER_ROUND: u64 = 21;

/// Days per (non-leap) year
pub const DAYS_PER_YEAR: u64 = 365;

/// Hours per year
pub const HOURS_PER_YEAR: u64 = 24 * DAYS_PER_YEAR;

/// Blocks per year at the protocol block interval
pub const BLOCKS_PER_YEAR: u64 = HOURS_PER_YEAR * 3600 / BLOCK_INTERVAL_SECS;

/// Rounds per year, truncated to a whole round count
pub const ROUNDS_PER_YEAR: u64 = BLOCKS_PER_YEAR / BLOCKS_PER_ROUND;

// ============================================================================
// Period Definition
// ============================================================================

/// A named compounding granularity: how many of these periods fit in a year.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PeriodDefinition {
    /// Label substituted into the emitted macro names (e.g. "DAY")
    pub label: String,
    /// Whole periods per year
    pub periods_per_year: u64,
}

impl PeriodDefinition {
    /// Create a period definition.
    pub fn new(label: impl Into<String>, periods_per_year: u64) -> Self {
        Self {
            label: label.into(),
            periods_per_year,
        }
    }
}

// ============================================================================
// Period Schedule
// ============================================================================

/// An ordered set of period definitions.
///
/// Insertion order is emission order: constants are printed in the order the
/// periods were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PeriodSchedule {
    periods: Vec<PeriodDefinition>,
}

impl PeriodSchedule {
    /// Create an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: append a period.
    pub fn with_period(mut self, label: impl Into<String>, periods_per_year: u64) -> Self {
        self.periods.push(PeriodDefinition::new(label, periods_per_year));
        self
    }

    /// Append a period.
    pub fn push(&mut self, period: PeriodDefinition) {
        self.periods.push(period);
    }

    /// Iterate over periods in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &PeriodDefinition> {
        self.periods.iter()
    }

    /// Number of periods in the schedule.
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    /// Check whether the schedule is empty.
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Validate the schedule.
    ///
    /// # Errors
    /// - `EmptyLabel` if any label is empty
    /// - `DuplicateLabel` if two periods share a label
    /// - `InvalidPeriods` if any period count is zero
    pub fn validate(&self) -> DeriveResult<()> {
        let mut seen = HashSet::new();
        for period in &self.periods {
            if period.label.is_empty() {
                return Err(DeriveError::EmptyLabel);
            }
            if !seen.insert(period.label.as_str()) {
                return Err(DeriveError::DuplicateLabel);
            }
            if period.periods_per_year == 0 {
                return Err(DeriveError::InvalidPeriods);
            }
        }
        Ok(())
    }

    /// The reference chain schedule: BLOCK, ROUND, HOUR, DAY.
    pub fn muse_default() -> Self {
        Self::new()
            .with_period("BLOCK", BLOCKS_PER_YEAR)
            .with_period("ROUND", ROUNDS_PER_YEAR)
            .with_period("HOUR", HOURS_PER_YEAR)
            .with_period("DAY", DAYS_PER_YEAR)
    }
}

impl<'a> IntoIterator for &'a PeriodSchedule {
    type Item = &'a PeriodDefinition;
    type IntoIter = std::slice::Iter<'a, PeriodDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.periods.iter()
    }
}
