// ============================================================================
// Rate Configuration
// Immutable annual inflation rate and fixed-point base scale
// ============================================================================

use crate::numeric::{DeriveError, DeriveResult};
use rust_decimal::Decimal;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Annual inflation rate and the fixed-point scale constants derive against.
///
/// Constructed once at start-up and passed by reference into the deriver;
/// there is no mutable global configuration.
///
/// # Example
/// ```
/// use apr_constgen::domain::RateConfig;
///
/// let config = RateConfig::new(0.0475, 10_000).unwrap();
/// assert_eq!(config.annual_rate(), 0.0475);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RateConfig {
    /// Fractional total annual inflation (0.0475 == 4.75% APR)
    annual_rate: f64,
    /// Fixed-point base scale (10_000 == basis-point granularity)
    base_scale: u64,
}

impl RateConfig {
    /// Create a validated configuration.
    ///
    /// # Errors
    /// - `InvalidRate` if the rate is non-finite or at/below -100%
    ///   (outside the `ln_1p` domain)
    /// - `InvalidScale` if the base scale is zero
    pub fn new(annual_rate: f64, base_scale: u64) -> DeriveResult<Self> {
        if !annual_rate.is_finite() || annual_rate <= -1.0 {
            return Err(DeriveError::InvalidRate);
        }
        if base_scale == 0 {
            return Err(DeriveError::InvalidScale);
        }

        Ok(Self {
            annual_rate,
            base_scale,
        })
    }

    /// Create from an exact decimal rate.
    ///
    /// This is intended for API boundaries only (parsing user input such as
    /// `"0.0475"`); the derivation itself runs on f64.
    ///
    /// # Errors
    /// Same domain checks as [`RateConfig::new`].
    pub fn from_decimal(annual_rate: Decimal, base_scale: u64) -> DeriveResult<Self> {
        use rust_decimal::prelude::ToPrimitive;

        let rate = annual_rate.to_f64().ok_or(DeriveError::InvalidRate)?;
        Self::new(rate, base_scale)
    }

    /// The fractional annual inflation rate.
    #[inline]
    pub const fn annual_rate(&self) -> f64 {
        self.annual_rate
    }

    /// The fixed-point base scale.
    #[inline]
    pub const fn base_scale(&self) -> u64 {
        self.base_scale
    }

    /// Reference chain parameters: 4.75% APR at basis-point scale.
    pub fn muse_mainnet() -> Self {
        Self {
            annual_rate: 0.0475,
            base_scale: 10_000,
        }
    }
}

impl fmt::Display for RateConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}% APR at scale {}",
            self.annual_rate * 100.0,
            self.base_scale
        )
    }
}
