// ============================================================================
// Constant Deriver
// Turns an annual inflation rate into per-period multiplier/shift pairs
// ============================================================================

use crate::domain::{PeriodSchedule, RateConfig};
use crate::numeric::{ConstantPair, DeriveError, DeriveResult};

/// 2^64 as f64; the exclusive upper bound on a representable multiplier.
const TWO_POW_64: f64 = 18_446_744_073_709_551_616.0;

/// Derives fixed-point multiplier/shift constant pairs.
///
/// For a period count `n`, the per-period growth rate is
/// `(1 + rate)^(1/n) - 1`, computed as `exp_m1(ln_1p(rate) / n)` so small
/// rates do not suffer catastrophic cancellation. The deriver then finds the
/// largest power-of-two scaling of `growth / base_scale` that still fits a
/// u64 multiplier once consuming code multiplies it by a value carrying up
/// to `base_scale` worth of headroom.
///
/// # Example
/// ```
/// use apr_constgen::deriver::ConstantDeriver;
/// use apr_constgen::domain::RateConfig;
///
/// let deriver = ConstantDeriver::new(RateConfig::muse_mainnet());
/// let pair = deriver.derive(365).unwrap();
/// assert_eq!(pair.shift, 76);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ConstantDeriver {
    config: RateConfig,
}

impl ConstantDeriver {
    /// Create a deriver over a validated configuration.
    pub fn new(config: RateConfig) -> Self {
        Self { config }
    }

    /// The configuration this deriver was built from.
    #[inline]
    pub fn config(&self) -> &RateConfig {
        &self.config
    }

    /// Derive the constant pair for one period count.
    ///
    /// # Errors
    /// - `InvalidPeriods` if `periods` is zero
    /// - `MultiplierOverflow` if the rounded multiplier would not fit in
    ///   64 bits, or the base multiplier already exceeds the cap
    pub fn derive(&self, periods: u64) -> DeriveResult<ConstantPair> {
        if periods == 0 {
            return Err(DeriveError::InvalidPeriods);
        }

        let growth = f64::exp_m1(self.config.annual_rate().ln_1p() / periods as f64);
        let scale = self.config.base_scale() as f64;

        // Non-positive growth (zero or deflationary rate) has no power-of-two
        // scaling; the doubling search below would never terminate on it.
        let mut multiplier = growth / scale;
        if multiplier <= 0.0 {
            return Ok(ConstantPair::ZERO);
        }

        let max_multiplier = TWO_POW_64 / scale;
        let mut shift: u32 = 0;

        while multiplier < max_multiplier {
            shift += 1;
            multiplier *= 2.0;
        }

        // The search exits one doubling past the cap; step back.
        if shift == 0 {
            return Err(DeriveError::MultiplierOverflow);
        }
        shift -= 1;
        multiplier /= 2.0;

        // Add 0.5 then round to nearest, biasing the constant upward so the
        // shifted product never understates the payout. Multiplier is
        // positive here.
        let rounded = (multiplier + 0.5).round();
        if rounded >= TWO_POW_64 {
            return Err(DeriveError::MultiplierOverflow);
        }

        Ok(ConstantPair::new(rounded as u64, shift))
    }

    /// Derive constant pairs for every period in a schedule, in order.
    ///
    /// The schedule is validated first and derivation fails fast: either all
    /// pairs are returned or none are, so emission never produces partial
    /// output.
    ///
    /// # Errors
    /// Schedule validation errors, plus any error from [`derive`] for the
    /// first offending period.
    ///
    /// [`derive`]: ConstantDeriver::derive
    pub fn derive_schedule(
        &self,
        schedule: &PeriodSchedule,
    ) -> DeriveResult<Vec<(String, ConstantPair)>> {
        schedule.validate()?;

        let mut pairs = Vec::with_capacity(schedule.len());
        for period in schedule {
            let pair = self.derive(period.periods_per_year).inspect_err(|e| {
                tracing::error!(
                    "derivation failed for period {} ({} per year): {}",
                    period.label,
                    period.periods_per_year,
                    e
                );
            })?;

            tracing::debug!(
                "derived {} for period {} ({} per year)",
                pair,
                period.label,
                period.periods_per_year
            );
            pairs.push((period.label.clone(), pair));
        }

        Ok(pairs)
    }
}
