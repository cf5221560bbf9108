// ============================================================================
// APR Constant Generator Library
// Fixed-point multiplier/shift constants for integer-only inflation math
// ============================================================================

//! # APR Constant Generator
//!
//! Derives fixed-point `(multiplier, shift)` constant pairs that let
//! consuming code approximate compound-interest inflation with integer-only
//! arithmetic:
//!
//! ```text
//! per_period_payout(V) ≈ (V * multiplier) >> shift
//! ```
//!
//! where the represented factor is `(1 + APR)^(1/periods_per_year) - 1`,
//! scaled down by the configured fixed-point base. The generator runs once,
//! prints C preprocessor definitions for each named period granularity
//! (block, round, hour, day) and exits.
//!
//! ## Example
//!
//! ```rust
//! use apr_constgen::prelude::*;
//!
//! let deriver = ConstantDeriver::new(RateConfig::muse_mainnet());
//! let schedule = PeriodSchedule::muse_default();
//!
//! let mut out = Vec::new();
//! HeaderEmitter::new()
//!     .emit_schedule(&mut out, &deriver, &schedule)
//!     .unwrap();
//!
//! let header = String::from_utf8(out).unwrap();
//! assert!(header.contains("#define MUSE_APR_PERCENT_SHIFT_PER_DAY 76"));
//! ```

pub mod codegen;
pub mod deriver;
pub mod domain;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::codegen::{EmitError, HeaderEmitter};
    pub use crate::deriver::ConstantDeriver;
    pub use crate::domain::{PeriodDefinition, PeriodSchedule, RateConfig};
    pub use crate::numeric::{ConstantPair, DeriveError, DeriveResult};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    #[test]
    fn test_end_to_end_generation() {
        let deriver = ConstantDeriver::new(RateConfig::muse_mainnet());
        let schedule = PeriodSchedule::muse_default();

        let mut out = Vec::new();
        HeaderEmitter::new()
            .emit_schedule(&mut out, &deriver, &schedule)
            .unwrap();

        let header = String::from_utf8(out).unwrap();
        // two lines per period, in schedule order
        assert_eq!(header.lines().count(), 2 * schedule.len());
        let day_pos = header.find("_PER_DAY").unwrap();
        let block_pos = header.find("_PER_BLOCK").unwrap();
        assert!(block_pos < day_pos);
    }

    #[test]
    fn test_generated_constants_pay_out() {
        // one day of inflation on a 1M-unit supply at 4.75% APR is ~130 units
        let deriver = ConstantDeriver::new(RateConfig::muse_mainnet());
        let pair = deriver.derive(365).unwrap();

        let supply_in_scale_units = 1_000_000u64 * 10_000;
        let payout = pair.checked_apply(supply_in_scale_units).unwrap();
        assert!((125..135).contains(&payout), "payout was {}", payout);
    }

    #[test]
    fn test_invalid_rate_rejected_before_any_output() {
        assert_eq!(RateConfig::new(-1.0, 10_000), Err(DeriveError::InvalidRate));
    }
}
